//! Error types for byteslice.

use thiserror::Error;

/// Main error type for all byteslice operations.
#[derive(Debug, Error)]
pub enum ByteSliceError {
    /// A length or count does not fit the 16-bit prefix.
    #[error("Out of range: {what} {len} exceeds maximum {max}")]
    OutOfRange {
        /// Which prefix overflowed ("slice length" or "string count").
        what: &'static str,
        /// Requested length or count.
        len: usize,
        /// Largest representable value.
        max: usize,
    },

    /// Not enough bytes left in the source for a prefix or payload.
    #[error("Truncated input: need {needed} bytes, {available} available")]
    Truncated {
        /// Bytes required to finish the current read.
        needed: usize,
        /// Bytes that were actually left.
        available: usize,
    },

    /// Destination buffer cannot hold the encoded block.
    #[error("Write failure: need {needed} bytes, {available} available")]
    WriteFailure {
        /// Encoded size of the block.
        needed: usize,
        /// Writable space left in the destination.
        available: usize,
    },

    /// A decoded prefix is above the caller's configured limit.
    #[error("Limit exceeded: {what} {len} exceeds configured limit {max}")]
    LimitExceeded {
        /// Which prefix was rejected.
        what: &'static str,
        /// Value read from the wire.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// Decoded bytes are not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// I/O error from a stream adapter.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ByteSliceError {
    /// True for [`ByteSliceError::Truncated`].
    #[inline]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }

    /// True for [`ByteSliceError::OutOfRange`].
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Result type alias using ByteSliceError.
pub type Result<T> = std::result::Result<T, ByteSliceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ByteSliceError::OutOfRange {
            what: "slice length",
            len: 65536,
            max: 65535,
        };
        assert_eq!(
            err.to_string(),
            "Out of range: slice length 65536 exceeds maximum 65535"
        );

        let err = ByteSliceError::LimitExceeded {
            what: "string count",
            len: 9,
            max: 8,
        };
        assert_eq!(
            err.to_string(),
            "Limit exceeded: string count 9 exceeds configured limit 8"
        );

        let err = ByteSliceError::Truncated {
            needed: 2,
            available: 1,
        };
        assert_eq!(err.to_string(), "Truncated input: need 2 bytes, 1 available");
    }

    #[test]
    fn test_kind_predicates() {
        let truncated = ByteSliceError::Truncated {
            needed: 5,
            available: 0,
        };
        assert!(truncated.is_truncated());
        assert!(!truncated.is_out_of_range());

        let range = ByteSliceError::OutOfRange {
            what: "string count",
            len: 70000,
            max: 65535,
        };
        assert!(range.is_out_of_range());
        assert!(!range.is_truncated());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: ByteSliceError = io.into();
        assert!(matches!(err, ByteSliceError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
