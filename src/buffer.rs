//! Byte buffer handed across the C boundary.
//!
//! The memory behind a non-empty [`HydraBuffer`] comes from the C allocator and belongs to the
//! receiver once returned, who releases it with `free()`. Nothing in Rust keeps a reference to it.
use libc::c_void;

/// `hydra_buffer_t` in `include/hydra_downloader.h`.
///
/// `size == 0` always comes with a null `data` pointer and signals failure. Otherwise `data`
/// points to exactly `size` initialized bytes.
#[repr(C)]
#[derive(Debug)]
pub struct HydraBuffer {
    pub data: *mut c_void,
    pub size: u64,
}

impl HydraBuffer {
    /// The sentinel buffer: no data, no pointer.
    pub const fn empty() -> Self {
        Self {
            data: std::ptr::null_mut(),
            size: 0,
        }
    }

    /// Copies `bytes` into a freshly malloc'ed region. Returns the empty buffer for empty input or
    /// when the allocation fails.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }

        let data = unsafe { libc::malloc(bytes.len()) };
        if data.is_null() {
            log::warn!("Buffer: cannot allocate {} bytes", bytes.len());
            return Self::empty();
        }

        // SAFETY: `data` is a fresh allocation of `bytes.len()` bytes and cannot overlap `bytes`.
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), data as *mut u8, bytes.len());
        }

        Self {
            data,
            size: bytes.len() as u64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_null() || self.size == 0
    }

    /// Views the buffer contents.
    ///
    /// # Safety
    /// The buffer must not have been freed yet.
    pub unsafe fn as_slice(&self) -> &[u8] {
        if self.is_empty() {
            return &[];
        }
        std::slice::from_raw_parts(self.data as *const u8, self.size as usize)
    }

    /// Releases the memory the same way a C caller would.
    ///
    /// # Safety
    /// The buffer must have been produced by [`HydraBuffer::from_bytes`] and not freed before.
    pub unsafe fn free(self) {
        if !self.data.is_null() {
            libc::free(self.data);
        }
    }
}
