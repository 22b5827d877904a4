//! Async adapters over tokio `AsyncRead` / `AsyncWrite`.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::codec::{StringCollector, StringSliceCodec, TextMode};
use crate::error::{ByteSliceError, Result};
use crate::protocol::{DecodeLimits, LengthPrefix, LEN_PREFIX_SIZE, SLICE_LEN};

/// Write one length-prefixed block to `w`.
///
/// # Errors
///
/// `OutOfRange` before anything is written, or `Io` from the writer.
pub async fn write_slice_async<W: AsyncWrite + Unpin>(w: &mut W, data: &[u8]) -> Result<()> {
    let prefix = LengthPrefix::checked(data.len(), SLICE_LEN)?;
    w.write_all(&prefix.encode()).await?;
    w.write_all(data).await?;
    Ok(())
}

/// Read one length-prefixed block from `r`.
///
/// # Errors
///
/// `Truncated` if the stream ends early, `Io` for any other read failure.
pub async fn read_slice_async<R: AsyncRead + Unpin>(r: &mut R) -> Result<Vec<u8>> {
    read_slice_async_with(r, &DecodeLimits::WIRE_MAX).await
}

/// Read one block from `r` under `limits`.
///
/// # Errors
///
/// As for [`read_slice_async`], plus `LimitExceeded`.
pub async fn read_slice_async_with<R: AsyncRead + Unpin>(
    r: &mut R,
    limits: &DecodeLimits,
) -> Result<Vec<u8>> {
    let len = read_prefix(r).await?.len();
    limits.check_slice_len(len)?;
    read_exactly(r, len).await
}

/// Write a string sequence to `w` with a single `write_all`.
///
/// # Errors
///
/// `OutOfRange` before anything is written, or `Io` from the writer.
pub async fn write_strings_async<W, S>(w: &mut W, strings: &[S]) -> Result<()>
where
    W: AsyncWrite + Unpin,
    S: AsRef<str>,
{
    let encoded = StringSliceCodec::encode(strings)?;
    w.write_all(&encoded).await?;
    Ok(())
}

/// Read a string sequence from `r`.
///
/// # Errors
///
/// `Truncated`, `InvalidUtf8` or `Io`.
pub async fn read_strings_async<R: AsyncRead + Unpin>(r: &mut R) -> Result<Vec<String>> {
    read_strings_async_with(r, &DecodeLimits::WIRE_MAX).await
}

/// Read a string sequence from `r` under `limits`.
///
/// # Errors
///
/// As for [`read_strings_async`], plus `LimitExceeded`.
pub async fn read_strings_async_with<R: AsyncRead + Unpin>(
    r: &mut R,
    limits: &DecodeLimits,
) -> Result<Vec<String>> {
    read_strings_as(r, limits, TextMode::Strict).await
}

/// Read a string sequence from `r`, replacing invalid UTF-8 with U+FFFD.
///
/// # Errors
///
/// `Truncated` or `Io`.
pub async fn read_strings_async_lossy<R: AsyncRead + Unpin>(r: &mut R) -> Result<Vec<String>> {
    read_strings_as(r, &DecodeLimits::WIRE_MAX, TextMode::Lossy).await
}

async fn read_strings_as<R: AsyncRead + Unpin>(
    r: &mut R,
    limits: &DecodeLimits,
    mode: TextMode,
) -> Result<Vec<String>> {
    let mut collector = StringCollector::new(read_prefix(r).await?, limits, mode, 0)?;
    while !collector.is_complete() {
        collector.push(read_slice_async_with(r, limits).await?)?;
    }
    Ok(collector.finish())
}

async fn read_prefix<R: AsyncRead + Unpin>(r: &mut R) -> Result<LengthPrefix> {
    let bytes = read_exactly(r, LEN_PREFIX_SIZE).await?;
    Ok(LengthPrefix::from_bytes([bytes[0], bytes[1]]))
}

async fn read_exactly<R: AsyncRead + Unpin>(r: &mut R, n: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(n);
    (&mut *r).take(n as u64).read_to_end(&mut out).await?;
    if out.len() < n {
        tracing::trace!(needed = n, available = out.len(), "stream ended early");
        return Err(ByteSliceError::Truncated {
            needed: n,
            available: out.len(),
        });
    }
    Ok(out)
}
