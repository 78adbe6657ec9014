//! Error types returned by the sort engine, the dispatcher and the verifier.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// An integer item was negative; only non-negative integers have decimal digits here.
    #[error("negative item {value} cannot be digitized")]
    NegativeItem { value: i128 },

    /// A text item contained a byte outside the 7-bit ASCII range.
    #[error("non-ASCII byte 0x{byte:02x} at position {position}")]
    NonAscii { byte: u8, position: usize },

    /// The strategy reported zero buckets.
    #[error("strategy must provide at least one bucket")]
    NoBuckets,

    /// The strategy produced a digit that does not address one of its buckets.
    #[error("digit {digit} out of range for {bucket_count} buckets at pass {pass}")]
    DigitOutOfRange {
        digit: usize,
        bucket_count: usize,
        pass: usize,
    },

    #[error("type mismatch: {message}")]
    TypeMismatch { message: String },

    /// Two adjacent items are out of order.
    #[error("mismatch at index {index}: {left} > {right}")]
    Unsorted {
        index: usize,
        left: String,
        right: String,
    },
}

pub type Result<T> = std::result::Result<T, RadixError>;
