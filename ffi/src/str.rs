//! Pointer/length string views for the boundary.

use crate::IntoFFI;

/// A borrowed UTF-8 string crossing the boundary as pointer and length.
///
/// The bytes are owned by whichever Rust object produced the view (a node,
/// usually) and stay valid until that object is dropped. The host copies
/// out what it wants to keep; it never frees a `FuiStr`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FuiStr {
    /// Pointer to the first byte, or null for the empty view.
    pub data: *const u8,
    /// Length in bytes.
    pub len: usize,
}

impl FuiStr {
    /// The empty view.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: core::ptr::null(),
            len: 0,
        }
    }

    pub(crate) const fn borrowed(s: &str) -> Self {
        Self {
            data: s.as_ptr(),
            len: s.len(),
        }
    }

    /// Reborrows the viewed bytes as a `str`.
    ///
    /// A null pointer reads as the empty string; non-UTF-8 bytes return
    /// `None`.
    ///
    /// # Safety
    /// The caller chooses the lifetime; the bytes must stay valid and
    /// unmodified for all of it.
    pub(crate) unsafe fn as_str<'a>(self) -> Option<&'a str> {
        if self.data.is_null() {
            return Some("");
        }
        let bytes = unsafe { core::slice::from_raw_parts(self.data, self.len) };
        core::str::from_utf8(bytes).ok()
    }
}

impl IntoFFI for &'static str {
    type FFI = FuiStr;
    fn into_ffi(self) -> Self::FFI {
        FuiStr::borrowed(self)
    }
}
