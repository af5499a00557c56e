pub mod buffer;
pub mod config;
pub mod errors;
pub mod ffi;
pub mod logging;
pub mod net;

pub use buffer::HydraBuffer;
pub use config::{FetchConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use errors::FetchError;
pub use net::{BlockingFetcher, Fetcher, Response};
