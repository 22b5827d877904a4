//! Byte-block codec - one length-prefixed byte slice.
//!
//! ```text
//! ┌────────────┬──────────────────┐
//! │ Length     │ Payload          │
//! │ 2 bytes    │ `length` bytes   │
//! │ uint16 LE  │ raw, unpadded    │
//! └────────────┴──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use byteslice::codec::SliceCodec;
//!
//! let mut buf = Vec::new();
//! SliceCodec::write_slice(&mut buf, b"hello").unwrap();
//! assert_eq!(&buf[..2], &[5, 0]);
//!
//! let mut src = &buf[..];
//! assert_eq!(SliceCodec::read_slice(&mut src).unwrap(), b"hello");
//! assert!(src.is_empty());
//! ```

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::Result;
use crate::protocol::{
    encoded_len, ensure_readable, ensure_writable, DecodeLimits, LengthPrefix, SLICE_LEN,
};

/// How decoded payload bytes become a `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextMode {
    /// Reject invalid UTF-8 with `InvalidUtf8`.
    Strict,
    /// Replace invalid sequences with U+FFFD.
    Lossy,
}

impl TextMode {
    pub(crate) fn decode(self, data: Vec<u8>) -> Result<String> {
        match (self, String::from_utf8(data)) {
            (_, Ok(s)) => Ok(s),
            (Self::Strict, Err(e)) => Err(e.into()),
            (Self::Lossy, Err(e)) => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }
}

/// Codec for a single length-prefixed byte slice.
///
/// Stateless: all position tracking lives in the `Buf`/`BufMut` passed in.
pub struct SliceCodec;

impl SliceCodec {
    /// Write `data` as a length-prefixed block.
    ///
    /// Nothing is written on failure.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `data` is longer than 65535 bytes.
    /// - `WriteFailure` if `buf` cannot hold the prefix plus payload.
    pub fn write_slice<B: BufMut>(buf: &mut B, data: &[u8]) -> Result<()> {
        let prefix = LengthPrefix::checked(data.len(), SLICE_LEN)?;
        ensure_writable(buf, encoded_len(data.len()))?;
        prefix.put(buf);
        buf.put_slice(data);
        Ok(())
    }

    /// Encode `data` into a freshly allocated, exactly sized buffer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `data` is longer than 65535 bytes.
    pub fn encode(data: &[u8]) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(encoded_len(data.len()));
        Self::write_slice(&mut buf, data)?;
        Ok(buf.freeze())
    }

    /// Read one block and return a copy of its payload.
    ///
    /// # Errors
    ///
    /// Returns `Truncated` if the prefix or the declared payload runs past
    /// the end of `buf`. The cursor is then left after the prefix.
    pub fn read_slice<B: Buf>(buf: &mut B) -> Result<Vec<u8>> {
        Self::read_slice_with(buf, &DecodeLimits::WIRE_MAX)
    }

    /// Read one block, rejecting payloads above `limits.max_slice_len`.
    ///
    /// # Errors
    ///
    /// `Truncated` as for [`read_slice`](Self::read_slice), or
    /// `LimitExceeded` before any payload byte is consumed.
    pub fn read_slice_with<B: Buf>(buf: &mut B, limits: &DecodeLimits) -> Result<Vec<u8>> {
        let len = Self::take_payload_len(buf, limits)?;
        let mut data = vec![0u8; len];
        buf.copy_to_slice(&mut data);
        Ok(data)
    }

    /// Read one block as `Bytes`.
    ///
    /// Zero-copy when `buf` is itself `Bytes`.
    ///
    /// # Errors
    ///
    /// Same as [`read_slice`](Self::read_slice).
    pub fn read_bytes<B: Buf>(buf: &mut B) -> Result<Bytes> {
        let len = Self::take_payload_len(buf, &DecodeLimits::WIRE_MAX)?;
        Ok(buf.copy_to_bytes(len))
    }

    /// Read one block as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Any error from [`read_slice`](Self::read_slice), or `InvalidUtf8`.
    pub fn read_string<B: Buf>(buf: &mut B) -> Result<String> {
        Self::read_string_with(buf, &DecodeLimits::WIRE_MAX)
    }

    /// Read one block as UTF-8 text under `limits`.
    ///
    /// # Errors
    ///
    /// Any error from [`read_slice_with`](Self::read_slice_with), or `InvalidUtf8`.
    pub fn read_string_with<B: Buf>(buf: &mut B, limits: &DecodeLimits) -> Result<String> {
        TextMode::Strict.decode(Self::read_slice_with(buf, limits)?)
    }

    /// Read one block as text, replacing invalid UTF-8 with U+FFFD.
    ///
    /// # Errors
    ///
    /// Same as [`read_slice`](Self::read_slice).
    pub fn read_string_lossy<B: Buf>(buf: &mut B) -> Result<String> {
        TextMode::Lossy.decode(Self::read_slice(buf)?)
    }

    /// Consume the prefix and check the payload is present and allowed.
    fn take_payload_len<B: Buf>(buf: &mut B, limits: &DecodeLimits) -> Result<usize> {
        let len = LengthPrefix::get(buf)?.len();
        limits.check_slice_len(len)?;
        ensure_readable(buf, len)?;
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ByteSliceError;
    use crate::protocol::MAX_SLICE_LEN;

    #[test]
    fn test_write_read_round_trip() {
        let mut buf = Vec::new();
        SliceCodec::write_slice(&mut buf, b"hello world").unwrap();

        let mut src = &buf[..];
        assert_eq!(SliceCodec::read_slice(&mut src).unwrap(), b"hello world");
        assert!(src.is_empty());
    }

    #[test]
    fn test_empty_slice_is_two_zero_bytes() {
        let encoded = SliceCodec::encode(b"").unwrap();
        assert_eq!(&encoded[..], &[0x00, 0x00]);

        let mut src = &encoded[..];
        assert!(SliceCodec::read_slice(&mut src).unwrap().is_empty());
    }

    #[test]
    fn test_max_length_accepted() {
        let data = vec![0x5A; MAX_SLICE_LEN];
        let encoded = SliceCodec::encode(&data).unwrap();
        assert_eq!(encoded.len(), MAX_SLICE_LEN + 2);
        assert_eq!(&encoded[..2], &[0xFF, 0xFF]);

        let mut src = &encoded[..];
        assert_eq!(SliceCodec::read_slice(&mut src).unwrap(), data);
    }

    #[test]
    fn test_oversized_rejected_without_writing() {
        let data = vec![0u8; MAX_SLICE_LEN + 1];
        let mut buf = Vec::new();

        let err = SliceCodec::write_slice(&mut buf, &data).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_fixed_capacity_write_failure() {
        let mut storage = [0u8; 4];
        let mut dst: &mut [u8] = &mut storage;

        let err = SliceCodec::write_slice(&mut dst, b"abc").unwrap_err();
        assert!(matches!(
            err,
            ByteSliceError::WriteFailure {
                needed: 5,
                available: 4
            }
        ));
        assert_eq!(dst.len(), 4);
        assert_eq!(storage, [0u8; 4]);
    }

    #[test]
    fn test_fixed_capacity_exact_fit() {
        let mut storage = [0u8; 5];
        let mut dst: &mut [u8] = &mut storage;

        SliceCodec::write_slice(&mut dst, b"abc").unwrap();
        assert!(dst.is_empty());
        assert_eq!(storage, [0x03, 0x00, b'a', b'b', b'c']);
    }

    #[test]
    fn test_single_byte_is_truncated() {
        let mut src: &[u8] = &[0x01];
        let err = SliceCodec::read_slice(&mut src).unwrap_err();
        assert!(matches!(
            err,
            ByteSliceError::Truncated {
                needed: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn test_declared_length_past_end_is_truncated() {
        let mut src: &[u8] = &[0x05, 0x00, b'a', b'b'];
        let err = SliceCodec::read_slice(&mut src).unwrap_err();
        assert!(matches!(
            err,
            ByteSliceError::Truncated {
                needed: 5,
                available: 2
            }
        ));
        // Prefix consumed, payload left in place.
        assert_eq!(src, b"ab");
    }

    #[test]
    fn test_huge_declared_length_with_no_payload() {
        let mut src: &[u8] = &[0xFF, 0xFF];
        assert!(SliceCodec::read_slice(&mut src).unwrap_err().is_truncated());
    }

    #[test]
    fn test_consecutive_blocks() {
        let mut buf = BytesMut::new();
        SliceCodec::write_slice(&mut buf, b"first").unwrap();
        SliceCodec::write_slice(&mut buf, b"").unwrap();
        SliceCodec::write_slice(&mut buf, b"third").unwrap();

        let mut src = buf.freeze();
        assert_eq!(SliceCodec::read_slice(&mut src).unwrap(), b"first");
        assert!(SliceCodec::read_slice(&mut src).unwrap().is_empty());
        assert_eq!(SliceCodec::read_slice(&mut src).unwrap(), b"third");
        assert!(!src.has_remaining());
    }

    #[test]
    fn test_binary_data_preserved() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let encoded = SliceCodec::encode(&all_bytes).unwrap();

        let mut src = &encoded[..];
        assert_eq!(SliceCodec::read_slice(&mut src).unwrap(), all_bytes);
    }

    #[test]
    fn test_read_bytes_zero_copy() {
        let encoded = SliceCodec::encode(b"shared payload").unwrap();
        let mut src = encoded.clone();

        let payload = SliceCodec::read_bytes(&mut src).unwrap();
        assert_eq!(&payload[..], b"shared payload");
        assert_eq!(payload.as_ptr(), encoded[2..].as_ptr());
    }

    #[test]
    fn test_read_string() {
        let encoded = SliceCodec::encode("héllo".as_bytes()).unwrap();
        let mut src = &encoded[..];
        assert_eq!(SliceCodec::read_string(&mut src).unwrap(), "héllo");
    }

    #[test]
    fn test_read_string_invalid_utf8() {
        let encoded = SliceCodec::encode(&[0x61, 0xFF, 0x62]).unwrap();

        let mut src = &encoded[..];
        let err = SliceCodec::read_string(&mut src).unwrap_err();
        assert!(matches!(err, ByteSliceError::InvalidUtf8(_)));

        let mut src = &encoded[..];
        assert_eq!(SliceCodec::read_string_lossy(&mut src).unwrap(), "a\u{FFFD}b");
    }

    #[test]
    fn test_read_string_propagates_truncation() {
        let mut src: &[u8] = &[0x03, 0x00, b'x'];
        assert!(SliceCodec::read_string(&mut src).unwrap_err().is_truncated());
    }

    #[test]
    fn test_limit_rejects_before_payload() {
        let encoded = SliceCodec::encode(b"0123456789").unwrap();
        let limits = DecodeLimits::new().with_max_slice_len(4);

        let mut src = &encoded[..];
        let err = SliceCodec::read_slice_with(&mut src, &limits).unwrap_err();
        assert!(matches!(err, ByteSliceError::LimitExceeded { len: 10, max: 4, .. }));
        assert_eq!(src, b"0123456789");
    }
}
