//! UTF-8 validation utilities.

/// Validate and convert bytes to UTF-8 string.
///
/// Uses simdutf8 for fast validation when available.
#[inline]
pub fn from_utf8(bytes: &[u8]) -> Option<&str> {
    #[cfg(not(miri))]
    {
        simdutf8::basic::from_utf8(bytes).ok()
    }

    #[cfg(miri)]
    {
        // simdutf8 intrinsics are not supported by miri
        core::str::from_utf8(bytes).ok()
    }
}
