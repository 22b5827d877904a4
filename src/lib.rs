//! # byteslice
//!
//! Binary encoding of small byte slices and string lists.
//!
//! Every variable-length value is written as a 2-byte little-endian prefix
//! followed by its payload:
//!
//! ```text
//! ByteBlock      ::= u16(length) || byte{length}
//! StringSequence ::= u16(count)  || ByteBlock{count}
//! ```
//!
//! Lengths and counts are capped at 65535; larger inputs are rejected, never
//! truncated. Decoding never reads past the end of the input.
//!
//! ## Layout
//!
//! - [`codec`]: `SliceCodec` / `StringSliceCodec` over `bytes::Buf` and `BufMut`
//! - [`protocol`]: prefix wire format, size helpers, `DecodeLimits`
//! - [`stream`]: the same codecs over `std::io` and tokio streams
//!
//! ## Example
//!
//! ```
//! use byteslice::{read_slice, read_string_slice, write_slice, write_string_slice};
//!
//! let mut buf = Vec::new();
//! write_slice(&mut buf, b"\x01\x02\x03").unwrap();
//! write_string_slice(&mut buf, &["ab", "cde"]).unwrap();
//!
//! let mut src = &buf[..];
//! assert_eq!(read_slice(&mut src).unwrap(), vec![1, 2, 3]);
//! assert_eq!(read_string_slice(&mut src).unwrap(), vec!["ab", "cde"]);
//! ```

pub mod codec;
pub mod error;
pub mod protocol;
pub mod stream;

pub use codec::{
    read_slice, read_string, read_string_slice, write_slice, write_string_slice, SliceCodec,
    StringSliceCodec,
};
pub use error::ByteSliceError;
pub use protocol::DecodeLimits;
