//! Character boundary search.

use crate::constants::{CONTINUATION, LEAD_PATTERNS, MAX_CHAR_LEN};
use crate::error::{Result, U8pError};
use crate::policy::FindPolicy;

/// Returns true if `byte` starts a UTF-8 encoded character.
///
/// Matches ASCII bytes and the leads of 2, 3 and 4 byte sequences.
/// Continuation bytes and `0xF8..=0xFF` are rejected.
#[inline]
pub const fn is_lead_byte(byte: u8) -> bool {
    let mut i = 0;
    while i < LEAD_PATTERNS.len() {
        if LEAD_PATTERNS[i].matches(byte) {
            return true;
        }
        i += 1;
    }
    false
}

/// Returns true if `byte` is a continuation byte (`10xxxxxx`).
#[inline]
pub const fn is_continuation_byte(byte: u8) -> bool {
    CONTINUATION.matches(byte)
}

/// Find the last character boundary before `offset`.
///
/// Scans `offset - 1` down to `offset - 4` and returns the highest index
/// holding a lead byte, so `&buf[..index]` never ends inside a character.
/// Uses [`FindPolicy::Permissive`]: an empty buffer yields `Ok(0)`.
///
/// # Errors
/// * [`U8pError::InvalidOffset`] if `offset <= 3` or `buf.len() <= offset`.
/// * [`U8pError::InvalidEncoding`] if none of the four scanned bytes is a lead byte.
#[inline]
pub fn find(buf: &[u8], offset: usize) -> Result<usize> {
    find_with(buf, offset, FindPolicy::Permissive)
}

/// Find the last character boundary before `offset` in a string slice.
#[inline]
pub fn find_str(s: &str, offset: usize) -> Result<usize> {
    find(s.as_bytes(), offset)
}

/// Find the last character boundary before `offset` under `policy`.
pub fn find_with(buf: &[u8], offset: usize, policy: FindPolicy) -> Result<usize> {
    let Some(offset) = policy.check(buf.len(), offset)? else {
        return Ok(0);
    };

    // Policy guarantees offset >= MAX_CHAR_LEN.
    let start = offset - MAX_CHAR_LEN;
    buf[start..offset]
        .iter()
        .rposition(|&b| is_lead_byte(b))
        .map(|i| start + i)
        .ok_or(U8pError::InvalidEncoding)
}
