use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "HydraDownloader/1.0";

/// Request timeout used by the exported `hydra_download` function.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for a [`Fetcher`](crate::net::Fetcher).
///
/// There is no `Default` impl: the request timeout must always be chosen by the caller.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Upper bound for the whole request, from connect until the body is read
    timeout: Duration,
    /// User agent string for HTTP requests
    user_agent: String,
}

impl FetchConfig {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
