//! # lsdsort
//!
//! `lsdsort` is a stable, non-comparison sorting library built around a pluggable
//! digitization strategy.
//!
//! It implements a least-significant-digit (LSD) **Radix Sort**: items are repeatedly
//! distributed into buckets keyed by successive digit or character positions and collected
//! back in bucket order. The [`TypeStrategy`] trait tells the engine how many buckets to use,
//! how many passes are needed and how to extract the digit of an item for a given pass.
//!
//! ## Key Features
//!
//! - **Stable**: Items with equal keys keep their input order.
//! - **Pluggable strategies**: [`IntegerStrategy`] sorts non-negative integers by decimal digit,
//!   [`TextStrategy`] sorts ASCII text by character. Implement [`TypeStrategy`] for anything else.
//! - **Checked digits**: Invalid items (negative integers, non-ASCII bytes) and misbehaving
//!   strategies surface as a [`RadixError`] instead of a silently wrong order.
//! - **Explicit dispatch**: The [`dispatch`] module sorts untyped collections by selecting a
//!   strategy at the call boundary.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use lsdsort::prelude::*;
//!
//! let data = vec![170u32, 45, 75, 90, 802, 24, 2, 66];
//! let sorted = radix_sort(data, IntegerStrategy::new()).unwrap();
//!
//! assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//!
//! let mut words = vec!["b", "ab", "a"];
//! radix_sort_mut(&mut words, TextStrategy::new()).unwrap();
//!
//! assert_eq!(words, vec!["a", "ab", "b"]);
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use lsdsort::prelude::*;
//!
//! let err = radix_sort(vec![-1i64, 2, 3], IntegerStrategy::new()).unwrap_err();
//! assert_eq!(err, RadixError::NegativeItem { value: -1 });
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(p * (n + b)) for `n` items, `p` passes and `b` buckets. `p` is the digit length
//!   of the largest integer, or the length of the longest string.
//! - **Memory Overhead**: One digit (`usize`) per item plus the buckets, which together hold
//!   exactly `n` items after each distribute step. Buckets are reused across passes.

pub mod algo;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod strategy;
pub mod verify;

pub use crate::algo::{RadixSort, radix_sort, radix_sort_mut};
pub use crate::core::{Pass, TypeStrategy};
pub use crate::error::RadixError;
pub use crate::strategy::{IntegerStrategy, TextStrategy};

pub mod prelude {
    pub use crate::algo::{RadixSort, radix_sort, radix_sort_mut};
    pub use crate::core::{Pass, TypeStrategy};
    pub use crate::dispatch::{Column, StrategyKind, Value, sort_values};
    pub use crate::error::RadixError;
    pub use crate::strategy::{IntegerStrategy, TextStrategy};
    pub use crate::verify::check_sorted;
}
