//! Wire format encoding and decoding of the length prefix.
//!
//! Every variable-length region starts with a 2-byte prefix:
//! ```text
//! ByteBlock      ::= u16(length) || byte{length}
//! StringSequence ::= u16(count)  || ByteBlock{count}
//! ```
//!
//! All integers are unsigned Little Endian.

use bytes::{Buf, BufMut};

use crate::error::{ByteSliceError, Result};

/// Prefix size in bytes (fixed, exactly 2).
pub const LEN_PREFIX_SIZE: usize = 2;

/// Largest payload a single block can carry.
pub const MAX_SLICE_LEN: usize = u16::MAX as usize;

/// Largest number of strings in one string sequence.
pub const MAX_STRING_COUNT: usize = u16::MAX as usize;

/// Label used in errors about a block's payload length.
pub(crate) const SLICE_LEN: &str = "slice length";

/// Label used in errors about a string sequence's element count.
pub(crate) const STRING_COUNT: &str = "string count";

/// A length or count as it appears on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LengthPrefix(u16);

impl LengthPrefix {
    /// Wrap a raw prefix value.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Build a prefix from a collection size, rejecting anything above 65535.
    ///
    /// `what` names the field in the resulting error.
    ///
    /// # Example
    ///
    /// ```
    /// use byteslice::protocol::LengthPrefix;
    ///
    /// assert_eq!(LengthPrefix::checked(65535, "slice length").unwrap().len(), 65535);
    /// assert!(LengthPrefix::checked(65536, "slice length").is_err());
    /// ```
    pub fn checked(len: usize, what: &'static str) -> Result<Self> {
        match u16::try_from(len) {
            Ok(value) => Ok(Self(value)),
            Err(_) => {
                tracing::trace!(what, len, "rejecting oversized prefix");
                Err(ByteSliceError::OutOfRange {
                    what,
                    len,
                    max: u16::MAX as usize,
                })
            }
        }
    }

    /// Raw prefix value.
    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Prefix value as a length.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        self.0 as usize
    }

    /// Encode to bytes (Little Endian).
    #[inline]
    pub fn encode(self) -> [u8; LEN_PREFIX_SIZE] {
        self.0.to_le_bytes()
    }

    /// Decode from exactly two bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; LEN_PREFIX_SIZE]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Decode from the front of a byte slice.
    ///
    /// Returns `None` if buffer is too short.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < LEN_PREFIX_SIZE {
            return None;
        }
        Some(Self::from_bytes([buf[0], buf[1]]))
    }

    /// Write the prefix at the buffer's cursor.
    ///
    /// Callers check capacity first; see [`ensure_writable`].
    #[inline]
    pub(crate) fn put<B: BufMut>(self, buf: &mut B) {
        buf.put_u16_le(self.0);
    }

    /// Read a prefix from the buffer's cursor.
    ///
    /// Consumes nothing when fewer than two bytes are left.
    pub(crate) fn get<B: Buf>(buf: &mut B) -> Result<Self> {
        ensure_readable(buf, LEN_PREFIX_SIZE)?;
        Ok(Self(buf.get_u16_le()))
    }
}

impl From<u16> for LengthPrefix {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Exact encoded size of a block carrying `payload_len` bytes.
///
/// Saturates at `usize::MAX`.
#[inline]
pub fn encoded_len(payload_len: usize) -> usize {
    payload_len.saturating_add(LEN_PREFIX_SIZE)
}

/// Exact encoded size of a string sequence.
///
/// Only meaningful for input that passes the 65535 count and length checks;
/// for anything larger the result saturates at `usize::MAX` instead of
/// overflowing.
///
/// # Example
///
/// ```
/// use byteslice::protocol::encoded_strings_len;
///
/// // count + ("ab" block) + ("cde" block)
/// assert_eq!(encoded_strings_len(&["ab", "cde"]), 2 + 4 + 5);
/// ```
pub fn encoded_strings_len<S: AsRef<str>>(strings: &[S]) -> usize {
    strings
        .iter()
        .fold(LEN_PREFIX_SIZE, |acc: usize, s| {
            acc.saturating_add(encoded_len(s.as_ref().len()))
        })
}

/// Encode a raw prefix value (standalone function).
#[inline]
pub fn encode_prefix(value: u16) -> [u8; LEN_PREFIX_SIZE] {
    LengthPrefix::new(value).encode()
}

/// Decode a prefix value from bytes (standalone function).
#[inline]
pub fn decode_prefix(buf: &[u8]) -> Option<u16> {
    LengthPrefix::decode(buf).map(LengthPrefix::value)
}

/// Fail with `Truncated` unless `needed` bytes remain in `buf`.
pub(crate) fn ensure_readable<B: Buf>(buf: &B, needed: usize) -> Result<()> {
    let available = buf.remaining();
    if available < needed {
        tracing::trace!(needed, available, "input truncated");
        return Err(ByteSliceError::Truncated { needed, available });
    }
    Ok(())
}

/// Fail with `WriteFailure` unless `needed` bytes fit in `buf`.
pub(crate) fn ensure_writable<B: BufMut>(buf: &B, needed: usize) -> Result<()> {
    let available = buf.remaining_mut();
    if available < needed {
        tracing::trace!(needed, available, "destination buffer full");
        return Err(ByteSliceError::WriteFailure { needed, available });
    }
    Ok(())
}
