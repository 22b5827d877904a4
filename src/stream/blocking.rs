//! Blocking adapters over `std::io::Read` / `std::io::Write`.

use std::io::{Read, Write};

use crate::codec::{StringCollector, StringSliceCodec, TextMode};
use crate::error::{ByteSliceError, Result};
use crate::protocol::{DecodeLimits, LengthPrefix, LEN_PREFIX_SIZE, SLICE_LEN};

/// Write one length-prefixed block to `w`.
///
/// # Errors
///
/// `OutOfRange` before anything is written, or `Io` from the writer.
pub fn write_slice_to<W: Write + ?Sized>(w: &mut W, data: &[u8]) -> Result<()> {
    let prefix = LengthPrefix::checked(data.len(), SLICE_LEN)?;
    w.write_all(&prefix.encode())?;
    w.write_all(data)?;
    Ok(())
}

/// Read one length-prefixed block from `r`.
///
/// # Errors
///
/// `Truncated` if the stream ends early, `Io` for any other read failure.
pub fn read_slice_from<R: Read + ?Sized>(r: &mut R) -> Result<Vec<u8>> {
    read_slice_from_with(r, &DecodeLimits::WIRE_MAX)
}

/// Read one block from `r` under `limits`.
///
/// # Errors
///
/// As for [`read_slice_from`], plus `LimitExceeded`.
pub fn read_slice_from_with<R: Read + ?Sized>(r: &mut R, limits: &DecodeLimits) -> Result<Vec<u8>> {
    let len = read_prefix(r)?.len();
    limits.check_slice_len(len)?;
    read_exactly(r, len)
}

/// Write a string sequence to `w` with a single `write_all`.
///
/// # Errors
///
/// `OutOfRange` before anything is written, or `Io` from the writer.
pub fn write_strings_to<W, S>(w: &mut W, strings: &[S]) -> Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    let encoded = StringSliceCodec::encode(strings)?;
    w.write_all(&encoded)?;
    Ok(())
}

/// Read a string sequence from `r`.
///
/// # Errors
///
/// `Truncated`, `InvalidUtf8` or `Io`.
pub fn read_strings_from<R: Read + ?Sized>(r: &mut R) -> Result<Vec<String>> {
    read_strings_from_with(r, &DecodeLimits::WIRE_MAX)
}

/// Read a string sequence from `r` under `limits`.
///
/// # Errors
///
/// As for [`read_strings_from`], plus `LimitExceeded`.
pub fn read_strings_from_with<R: Read + ?Sized>(
    r: &mut R,
    limits: &DecodeLimits,
) -> Result<Vec<String>> {
    read_strings_as(r, limits, TextMode::Strict)
}

/// Read a string sequence from `r`, replacing invalid UTF-8 with U+FFFD.
///
/// # Errors
///
/// `Truncated` or `Io`.
pub fn read_strings_from_lossy<R: Read + ?Sized>(r: &mut R) -> Result<Vec<String>> {
    read_strings_as(r, &DecodeLimits::WIRE_MAX, TextMode::Lossy)
}

fn read_strings_as<R: Read + ?Sized>(
    r: &mut R,
    limits: &DecodeLimits,
    mode: TextMode,
) -> Result<Vec<String>> {
    let mut collector = StringCollector::new(read_prefix(r)?, limits, mode, 0)?;
    while !collector.is_complete() {
        collector.push(read_slice_from_with(r, limits)?)?;
    }
    Ok(collector.finish())
}

fn read_prefix<R: Read + ?Sized>(r: &mut R) -> Result<LengthPrefix> {
    let bytes = read_exactly(r, LEN_PREFIX_SIZE)?;
    Ok(LengthPrefix::from_bytes([bytes[0], bytes[1]]))
}

/// Read exactly `n` bytes, reporting how many arrived if the stream ends first.
fn read_exactly<R: Read + ?Sized>(r: &mut R, n: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(n);
    (&mut *r).take(n as u64).read_to_end(&mut out)?;
    if out.len() < n {
        tracing::trace!(needed = n, available = out.len(), "stream ended early");
        return Err(ByteSliceError::Truncated {
            needed: n,
            available: out.len(),
        });
    }
    Ok(out)
}
