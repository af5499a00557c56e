use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::AssertUnwindSafe;
use lazy_static::lazy_static;
use crate::buffer::HydraBuffer;
use crate::config::{FetchConfig, DEFAULT_TIMEOUT};
use crate::errors::FetchError;
use crate::logging;
use crate::net::BlockingFetcher;

lazy_static! {
    // Shared by every call; the fetcher holds no mutable state.
    static ref FETCHER: Result<BlockingFetcher, FetchError> =
        BlockingFetcher::new(FetchConfig::new(DEFAULT_TIMEOUT));
}

/// Downloads `url` and returns its body in a malloc'ed buffer the caller must `free()`.
///
/// Every failure (null or non-UTF-8 url, invalid URL, network error, timeout, empty body) returns
/// the empty buffer `{ NULL, 0 }`. The reason is only logged.
///
/// # Safety
/// `url` must be null or point to a NUL-terminated string that stays valid for the call.
#[no_mangle]
pub unsafe extern "C" fn hydra_download(url: *const c_char) -> HydraBuffer {
    logging::init();

    match FETCHER.as_ref() {
        Ok(fetcher) => download_with(fetcher, url),
        Err(e) => {
            log::error!("hydra_download: fetcher unavailable: {}", e);
            HydraBuffer::empty()
        }
    }
}

/// Boundary adapter: runs the fetch and collapses every outcome into a [`HydraBuffer`].
pub(crate) unsafe fn download_with(fetcher: &BlockingFetcher, url: *const c_char) -> HydraBuffer {
    let result = logging::catch_unwind_logged(AssertUnwindSafe(|| download(fetcher, url)));

    match result {
        Ok(Ok(buffer)) => buffer,
        Ok(Err(e)) => {
            log::warn!("hydra_download: {}", e);
            HydraBuffer::empty()
        }
        Err(_) => {
            log::error!("hydra_download: panic while downloading");
            HydraBuffer::empty()
        }
    }
}

unsafe fn download(
    fetcher: &BlockingFetcher,
    url: *const c_char,
) -> Result<HydraBuffer, FetchError> {
    if url.is_null() {
        return Err(FetchError::InvalidArgument("url is null"));
    }

    let url_str = CStr::from_ptr(url)
        .to_str()
        .map_err(|_| FetchError::InvalidArgument("url is not valid UTF-8"))?;

    let body = fetcher.fetch_body(url_str)?;

    // Sized from the body actually read, never from Content-Length
    Ok(HydraBuffer::from_bytes(&body))
}
