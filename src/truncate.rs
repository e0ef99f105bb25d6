//! Truncation helpers built on [`find`](crate::find).

use crate::error::{Result, U8pError};
use crate::find::find;
use crate::utf8::from_utf8;

/// Truncate `buf` at the last character boundary before `offset`.
#[inline]
pub fn truncate(buf: &[u8], offset: usize) -> Result<&[u8]> {
    let index = find(buf, offset)?;
    Ok(&buf[..index])
}

/// Truncate `s` at the last character boundary before `offset`.
#[inline]
pub fn truncate_str(s: &str, offset: usize) -> Result<&str> {
    let index = find(s.as_bytes(), offset)?;
    s.get(..index).ok_or(U8pError::InvalidEncoding)
}

/// Truncate `buf` and validate the kept prefix as UTF-8.
///
/// Unlike [`truncate`], the whole prefix is checked, so malformed bytes
/// anywhere before the boundary are reported as
/// [`U8pError::InvalidEncoding`].
pub fn truncate_utf8(buf: &[u8], offset: usize) -> Result<&str> {
    let prefix = truncate(buf, offset)?;
    from_utf8(prefix).ok_or(U8pError::InvalidEncoding)
}
