//! String-sequence codec - an ordered list of strings.
//!
//! A count prefix followed by one byte block per string, built on
//! [`SliceCodec`]:
//! ```text
//! ┌────────────┬───────────┬───────────┬─────┐
//! │ Count      │ Block 0   │ Block 1   │ ... │
//! │ uint16 LE  │ u16 + raw │ u16 + raw │     │
//! └────────────┴───────────┴───────────┴─────┘
//! ```
//!
//! # Example
//!
//! ```
//! use byteslice::codec::StringSliceCodec;
//!
//! let encoded = StringSliceCodec::encode(&["ab", "cde"]).unwrap();
//! assert_eq!(
//!     &encoded[..],
//!     &[0x02, 0x00, 0x02, 0x00, b'a', b'b', 0x03, 0x00, b'c', b'd', b'e']
//! );
//!
//! let mut src = &encoded[..];
//! assert_eq!(StringSliceCodec::read_strings(&mut src).unwrap(), vec!["ab", "cde"]);
//! ```

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::{SliceCodec, TextMode};
use crate::error::Result;
use crate::protocol::{
    encoded_strings_len, ensure_writable, DecodeLimits, LengthPrefix, LEN_PREFIX_SIZE, SLICE_LEN,
    STRING_COUNT,
};

/// Codec for a count-prefixed sequence of strings.
pub struct StringSliceCodec;

impl StringSliceCodec {
    /// Write `strings` as a string sequence.
    ///
    /// The count, every element length and the total size are checked
    /// before the first byte is written, so a failed call leaves `buf`
    /// untouched.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if there are more than 65535 strings or any string is
    ///   longer than 65535 bytes.
    /// - `WriteFailure` if `buf` cannot hold the whole sequence.
    pub fn write_strings<B, S>(buf: &mut B, strings: &[S]) -> Result<()>
    where
        B: BufMut,
        S: AsRef<str>,
    {
        let count = LengthPrefix::checked(strings.len(), STRING_COUNT)?;
        ensure_writable(buf, Self::validate(strings)?)?;

        count.put(buf);
        for s in strings {
            SliceCodec::write_slice(buf, s.as_ref().as_bytes())?;
        }
        Ok(())
    }

    /// Check that `strings` can be encoded and return the exact encoded size.
    ///
    /// The count is checked before any element is looked at, so the size
    /// computation never runs over more than 65535 elements of at most
    /// 65535 bytes each.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for the count or the first oversized element.
    pub fn validate<S: AsRef<str>>(strings: &[S]) -> Result<usize> {
        LengthPrefix::checked(strings.len(), STRING_COUNT)?;
        for s in strings {
            LengthPrefix::checked(s.as_ref().len(), SLICE_LEN)?;
        }
        Ok(encoded_strings_len(strings))
    }

    /// Encode `strings` into a freshly allocated, exactly sized buffer.
    ///
    /// # Errors
    ///
    /// `OutOfRange` as for [`write_strings`](Self::write_strings), returned
    /// before anything is allocated.
    pub fn encode<S: AsRef<str>>(strings: &[S]) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(Self::validate(strings)?);
        Self::write_strings(&mut buf, strings)?;
        Ok(buf.freeze())
    }

    /// Read a string sequence.
    ///
    /// On failure the strings decoded so far are dropped; only the error
    /// is returned.
    ///
    /// # Errors
    ///
    /// `Truncated` if the count or any block runs past the end of `buf`,
    /// `InvalidUtf8` if an element is not valid UTF-8.
    pub fn read_strings<B: Buf>(buf: &mut B) -> Result<Vec<String>> {
        Self::read_strings_with(buf, &DecodeLimits::WIRE_MAX)
    }

    /// Read a string sequence under `limits`.
    ///
    /// # Errors
    ///
    /// As for [`read_strings`](Self::read_strings), plus `LimitExceeded`
    /// for a count or element length above the configured bounds.
    pub fn read_strings_with<B: Buf>(buf: &mut B, limits: &DecodeLimits) -> Result<Vec<String>> {
        Self::read_strings_as(buf, limits, TextMode::Strict)
    }

    /// Read a string sequence, replacing invalid UTF-8 in any element
    /// with U+FFFD.
    ///
    /// # Errors
    ///
    /// `Truncated` if the count or any block runs past the end of `buf`.
    pub fn read_strings_lossy<B: Buf>(buf: &mut B) -> Result<Vec<String>> {
        Self::read_strings_as(buf, &DecodeLimits::WIRE_MAX, TextMode::Lossy)
    }

    fn read_strings_as<B: Buf>(
        buf: &mut B,
        limits: &DecodeLimits,
        mode: TextMode,
    ) -> Result<Vec<String>> {
        let count = LengthPrefix::get(buf)?;
        // Each element needs at least its own prefix; don't trust `count` for sizing.
        let mut collector =
            StringCollector::new(count, limits, mode, buf.remaining() / LEN_PREFIX_SIZE)?;
        while !collector.is_complete() {
            collector.push(SliceCodec::read_slice_with(buf, limits)?)?;
        }
        Ok(collector.finish())
    }
}

/// Decoding state for one string sequence, shared by the buffer codec and
/// the stream adapters.
///
/// The caller reads the count prefix, then feeds element payloads until
/// [`is_complete`](Self::is_complete).
#[derive(Debug)]
pub(crate) struct StringCollector {
    expected: usize,
    mode: TextMode,
    strings: Vec<String>,
}

impl StringCollector {
    /// Check `count` against `limits` and reserve at most `capacity_hint` slots.
    pub(crate) fn new(
        count: LengthPrefix,
        limits: &DecodeLimits,
        mode: TextMode,
        capacity_hint: usize,
    ) -> Result<Self> {
        let expected = count.len();
        limits.check_string_count(expected)?;
        Ok(Self {
            expected,
            mode,
            strings: Vec::with_capacity(expected.min(capacity_hint)),
        })
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.strings.len() == self.expected
    }

    /// Convert one element payload to text and append it.
    pub(crate) fn push(&mut self, data: Vec<u8>) -> Result<()> {
        debug_assert!(!self.is_complete());
        self.strings.push(self.mode.decode(data)?);
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.strings
    }
}
