//! Decode limits.
//!
//! The wire format allows up to 65535 bytes per block and 65535 strings per
//! sequence. Callers parsing untrusted input can tighten both bounds; the
//! check runs on the prefix, before any payload is allocated or consumed.
//!
//! # Example
//!
//! ```
//! use byteslice::protocol::DecodeLimits;
//!
//! let limits: DecodeLimits = serde_json::from_str(r#"{"max_slice_len": 1024}"#).unwrap();
//! assert_eq!(limits.max_slice_len, 1024);
//! assert_eq!(limits.max_string_count, u16::MAX);
//! ```

use serde::{Deserialize, Serialize};

use super::wire_format::{SLICE_LEN, STRING_COUNT};
use crate::error::{ByteSliceError, Result};

/// Upper bounds enforced while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Largest accepted block payload, in bytes.
    pub max_slice_len: u16,
    /// Largest accepted string count.
    pub max_string_count: u16,
}

impl DecodeLimits {
    /// Limits equal to what the wire format can express.
    pub const WIRE_MAX: Self = Self {
        max_slice_len: u16::MAX,
        max_string_count: u16::MAX,
    };

    /// Create limits allowing the full wire range.
    pub fn new() -> Self {
        Self::WIRE_MAX
    }

    /// Set the largest accepted block payload.
    #[must_use]
    pub fn with_max_slice_len(mut self, max: u16) -> Self {
        self.max_slice_len = max;
        self
    }

    /// Set the largest accepted string count.
    #[must_use]
    pub fn with_max_string_count(mut self, max: u16) -> Self {
        self.max_string_count = max;
        self
    }

    pub(crate) fn check_slice_len(&self, len: usize) -> Result<()> {
        check(SLICE_LEN, len, self.max_slice_len)
    }

    pub(crate) fn check_string_count(&self, count: usize) -> Result<()> {
        check(STRING_COUNT, count, self.max_string_count)
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::new()
    }
}

fn check(what: &'static str, len: usize, max: u16) -> Result<()> {
    let max = max as usize;
    if len > max {
        tracing::trace!(what, len, max, "prefix above configured limit");
        return Err(ByteSliceError::LimitExceeded { what, len, max });
    }
    Ok(())
}
