use crate::config::FetchConfig;
use crate::errors::FetchError;
use crate::net::Response;
use url::Url;

/// Async HTTP client that loads a URL into a fully buffered [`Response`].
///
/// The request timeout from [`FetchConfig`] covers connecting, sending and reading the body.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        if config.timeout().is_zero() {
            return Err(FetchError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| FetchError::InvalidConfig(e.to_string()))?;

        Ok(Self { client })
    }

    // Loads an URL and returns the response in a result if any. An empty body is not an error.
    pub async fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        let url = Url::parse(url)?;
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_send)?;

        // Fetch results
        let final_url = res.url().clone();
        let status = res.status().as_u16();
        let status_text = res
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();
        let headers = res.headers().clone();

        // Body is returned as-is, whatever the status code
        if !res.status().is_success() {
            log::warn!("Fetch[{}]: server answered {} {}", final_url, status, status_text);
        }

        let body = res
            .bytes()
            .await
            .map_err(FetchError::from_body)?
            .to_vec();
        log::debug!("Fetch[{}]: received {} bytes", final_url, body.len());

        Ok(Response {
            url: final_url,
            status,
            status_text,
            headers,
            body,
        })
    }

    /// Loads an URL and returns only its body.
    ///
    /// An empty body is reported as [`FetchError::EmptyBody`].
    pub async fn fetch_body(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self.fetch(url).await?;
        if resp.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(resp.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(timeout: Duration) -> Fetcher {
        Fetcher::new(&FetchConfig::new(timeout)).unwrap()
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let res = Fetcher::new(&FetchConfig::new(Duration::ZERO));
        assert!(matches!(res, Err(FetchError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn fetch_returns_exact_body() {
        let server = MockServer::start().await;
        let payload: Vec<u8> = (0..1024u32).map(|i| (i % 251) as u8).collect();

        Mock::given(method("GET"))
            .and(path("/data.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
            .mount(&server)
            .await;

        let resp = fetcher(Duration::from_secs(5))
            .fetch(&format!("{}/data.bin", server.uri()))
            .await
            .unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(resp.status_text, "OK");
        assert_eq!(resp.body.len(), 1024);
        assert_eq!(resp.body, payload);
        assert_eq!(resp.url.path(), "/data.bin");
    }

    #[tokio::test]
    async fn fetch_sends_configured_user_agent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("user-agent", "HydraTest/0.1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let cfg = FetchConfig::new(Duration::from_secs(5)).with_user_agent("HydraTest/0.1");
        let body = Fetcher::new(&cfg)
            .unwrap()
            .fetch_body(&server.uri())
            .await
            .unwrap();
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn empty_body_is_ok_for_fetch_but_error_for_fetch_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let f = fetcher(Duration::from_secs(5));

        let resp = f.fetch(&server.uri()).await.unwrap();
        assert!(resp.is_empty());

        let res = f.fetch_body(&server.uri()).await;
        assert!(matches!(res, Err(FetchError::EmptyBody)));
    }

    #[tokio::test]
    async fn error_status_still_returns_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_bytes(b"not here".to_vec()))
            .mount(&server)
            .await;

        let resp = fetcher(Duration::from_secs(5))
            .fetch(&server.uri())
            .await
            .unwrap();
        assert_eq!(resp.status, 404);
        assert!(!resp.is_success());
        assert_eq!(resp.body, b"not here");
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(b"late".to_vec())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let res = fetcher(Duration::from_millis(200))
            .fetch_body(&server.uri())
            .await;
        match res {
            Err(e) => assert!(e.is_timeout(), "expected timeout, got {:?}", e),
            Ok(body) => panic!("expected timeout, got {} bytes", body.len()),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Nothing listens on port 1
        let res = fetcher(Duration::from_secs(5))
            .fetch("http://127.0.0.1:1/")
            .await;
        assert!(matches!(res, Err(FetchError::Network(_))), "got {:?}", res);
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_sending() {
        let res = fetcher(Duration::from_secs(5)).fetch("not a url").await;
        assert!(matches!(res, Err(FetchError::InvalidUrl(_))));
    }
}
