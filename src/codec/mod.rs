//! Codec module - length-prefixed byte slices and string sequences.
//!
//! - [`SliceCodec`] - one byte block: `u16 LE length || bytes`
//! - [`StringSliceCodec`] - `u16 LE count || block*`, built on `SliceCodec`
//!
//! # Design
//!
//! Codecs are marker structs with static methods. They hold no state; the
//! read/write position lives in the `bytes::Buf` / `bytes::BufMut` the
//! caller passes in. Writers take `Vec<u8>`, `BytesMut` or a fixed
//! `&mut [u8]`; readers take `&[u8]`, `Bytes` or `std::io::Cursor`.
//!
//! The free functions below are thin aliases for callers who prefer them.
//!
//! # Example
//!
//! ```
//! use byteslice::codec::{SliceCodec, StringSliceCodec};
//! use bytes::BytesMut;
//!
//! let mut buf = BytesMut::new();
//! SliceCodec::write_slice(&mut buf, &[0xDE, 0xAD]).unwrap();
//! StringSliceCodec::write_strings(&mut buf, &["peer-a", "peer-b"]).unwrap();
//!
//! let mut src = buf.freeze();
//! assert_eq!(SliceCodec::read_slice(&mut src).unwrap(), vec![0xDE, 0xAD]);
//! assert_eq!(
//!     StringSliceCodec::read_strings(&mut src).unwrap(),
//!     vec!["peer-a", "peer-b"]
//! );
//! ```

mod slice;
mod strings;

pub use slice::SliceCodec;
pub(crate) use slice::TextMode;
pub use strings::StringSliceCodec;
pub(crate) use strings::StringCollector;

use bytes::{Buf, BufMut};

use crate::error::Result;

/// Write a length-prefixed byte slice (standalone function).
///
/// # Errors
///
/// See [`SliceCodec::write_slice`].
#[inline]
pub fn write_slice<B: BufMut>(buf: &mut B, data: &[u8]) -> Result<()> {
    SliceCodec::write_slice(buf, data)
}

/// Read a length-prefixed byte slice (standalone function).
///
/// # Errors
///
/// See [`SliceCodec::read_slice`].
#[inline]
pub fn read_slice<B: Buf>(buf: &mut B) -> Result<Vec<u8>> {
    SliceCodec::read_slice(buf)
}

/// Read a length-prefixed byte slice as text (standalone function).
///
/// # Errors
///
/// See [`SliceCodec::read_string`].
#[inline]
pub fn read_string<B: Buf>(buf: &mut B) -> Result<String> {
    SliceCodec::read_string(buf)
}

/// Write a string sequence (standalone function).
///
/// # Errors
///
/// See [`StringSliceCodec::write_strings`].
#[inline]
pub fn write_string_slice<B: BufMut, S: AsRef<str>>(buf: &mut B, strings: &[S]) -> Result<()> {
    StringSliceCodec::write_strings(buf, strings)
}

/// Read a string sequence (standalone function).
///
/// # Errors
///
/// See [`StringSliceCodec::read_strings`].
#[inline]
pub fn read_string_slice<B: Buf>(buf: &mut B) -> Result<Vec<String>> {
    StringSliceCodec::read_strings(buf)
}
