//! # u8p
//!
//! A `no_std` compatible crate for truncating UTF-8 text to a byte budget
//! without splitting a multi-byte character.
//!
//! Given a buffer and a byte offset, [`find`] looks at most four bytes back
//! for the lead byte of a character and returns its index. Slicing the buffer
//! at that index always leaves complete characters.
//!
//! ## Features
//!
//! - `no_std` compatible by default
//! - No heap allocations
//! - Constant-time search, independent of buffer size
//! - Optional prefix validation via simdutf8 ([`truncate_utf8`])
//!
//! ## Example
//!
//! ```
//! let text = "こんにちは世界";
//! let index = u8p::find(text.as_bytes(), 10)?;
//! assert_eq!(&text[..index], "こんに");
//!
//! let text = "Hello, 🌍. Hi!";
//! assert_eq!(u8p::truncate_str(text, 13)?, "Hello, 🌍.");
//! # Ok::<(), u8p::U8pError>(())
//! ```

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

mod constants;
mod error;
mod find;
mod policy;
mod truncate;
mod utf8;

pub use constants::*;
pub use error::{Result, U8pError};
pub use find::{find, find_str, find_with, is_continuation_byte, is_lead_byte};
pub use policy::FindPolicy;
pub use truncate::{truncate, truncate_str, truncate_utf8};
pub use utf8::from_utf8;
