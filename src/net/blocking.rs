use std::future::Future;
use std::io;
use std::sync::mpsc;
use crate::config::FetchConfig;
use crate::errors::FetchError;
use crate::net::{Fetcher, Response};
use tokio::runtime::Runtime;

/// Name of the runtime worker threads that run the requests.
pub(crate) const WORKER_THREAD_NAME: &str = "hydra-downloader";

/// Blocking front for [`Fetcher`].
///
/// Owns the tokio runtime that drives the requests. Each call spawns its request on that runtime
/// and parks the calling thread on a channel until the result arrives, so it works from plain
/// foreign threads as well as from threads already inside another tokio runtime. Calls take
/// `&self` and may run concurrently from several threads.
///
/// Dropping a `BlockingFetcher` shuts its runtime down, which must not happen inside an async
/// context.
pub struct BlockingFetcher {
    runtime: Runtime,
    fetcher: Fetcher,
    config: FetchConfig,
}

impl BlockingFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let fetcher = Fetcher::new(&config)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name(WORKER_THREAD_NAME)
            .build()?;

        Ok(Self {
            runtime,
            fetcher,
            config,
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        let fetcher = self.fetcher.clone();
        let url = url.to_string();
        self.run(async move { fetcher.fetch(&url).await })
    }

    pub fn fetch_body(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let fetcher = self.fetcher.clone();
        let url = url.to_string();
        self.run(async move { fetcher.fetch_body(&url).await })
    }

    // Runs `task` on the owned runtime and waits for it on the calling thread.
    fn run<T, F>(&self, task: F) -> Result<T, FetchError>
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        self.runtime.spawn(async move {
            let _ = tx.send(task.await);
        });

        // Sender dropped without a value: the task panicked or the runtime shut down
        rx.recv().unwrap_or_else(|_| {
            Err(FetchError::Runtime(io::Error::other("fetch task ended without a result")))
        })
    }
}
