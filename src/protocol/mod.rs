//! Protocol module - length prefix wire format and decode limits.
//!
//! This module holds the pieces shared by both codecs:
//! - 2-byte little-endian prefix encoding/decoding
//! - Exact encoded-size helpers
//! - Caller-configurable decode limits

mod limits;
mod wire_format;

pub use limits::DecodeLimits;
pub use wire_format::{
    decode_prefix, encode_prefix, encoded_len, encoded_strings_len, LengthPrefix,
    LEN_PREFIX_SIZE, MAX_SLICE_LEN, MAX_STRING_COUNT,
};

pub(crate) use wire_format::{ensure_readable, ensure_writable, SLICE_LEN, STRING_COUNT};
