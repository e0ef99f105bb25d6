//! Validation policy for boundary search.

use crate::error::{Result, U8pError};

/// How `find_with` validates its input before scanning.
///
/// The two variants differ in how an empty buffer is treated and in the
/// smallest accepted offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindPolicy {
    /// Empty buffers succeed with index 0; offsets `<= 3` are rejected.
    #[default]
    Permissive,
    /// Empty or too-short buffers are `InvalidLength`; offsets `<= 4` are rejected.
    Strict,
}

impl FindPolicy {
    /// Largest offset that is still rejected as too small.
    #[inline]
    pub const fn min_rejected_offset(self) -> usize {
        match self {
            Self::Permissive => 3,
            Self::Strict => 4,
        }
    }

    /// Check `len` and `offset` against this policy.
    ///
    /// Returns `Ok(None)` when the buffer is empty and that counts as
    /// success, `Ok(Some(offset))` when the scan should proceed.
    #[inline]
    pub(crate) const fn check(self, len: usize, offset: usize) -> Result<Option<usize>> {
        match self {
            Self::Permissive => {
                if len == 0 {
                    return Ok(None);
                }
                if offset <= self.min_rejected_offset() || len <= offset {
                    return Err(U8pError::InvalidOffset);
                }
            }
            Self::Strict => {
                if len == 0 || len <= offset {
                    return Err(U8pError::InvalidLength);
                }
                if offset <= self.min_rejected_offset() {
                    return Err(U8pError::InvalidOffset);
                }
            }
        }
        Ok(Some(offset))
    }
}
