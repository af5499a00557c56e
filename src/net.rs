pub mod blocking;
pub mod fetch;
pub mod response;

pub use blocking::BlockingFetcher;
pub use fetch::Fetcher;
pub use response::Response;
