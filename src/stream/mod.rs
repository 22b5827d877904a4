//! Stream adapters - one block per call over `Read`/`Write` or tokio I/O.
//!
//! These read or write exactly one complete block or string sequence per
//! call; there is no buffering across calls. A stream that ends before the
//! declared length maps to `Truncated`, every other I/O failure to `Io`.
//!
//! # Example
//!
//! ```
//! use byteslice::stream::{read_strings_from, write_strings_to};
//!
//! let mut wire = Vec::new();
//! write_strings_to(&mut wire, &["alpha", "beta"]).unwrap();
//!
//! let mut reader = &wire[..];
//! assert_eq!(read_strings_from(&mut reader).unwrap(), vec!["alpha", "beta"]);
//! ```

mod async_io;
mod blocking;

pub use async_io::{
    read_slice_async, read_slice_async_with, read_strings_async, read_strings_async_lossy,
    read_strings_async_with, write_slice_async, write_strings_async,
};
pub use blocking::{
    read_slice_from, read_slice_from_with, read_strings_from, read_strings_from_lossy,
    read_strings_from_with, write_slice_to, write_strings_to,
};
