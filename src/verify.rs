//! Post-sort verification.

use crate::error::{RadixError, Result};
use std::fmt::Debug;

/// Checks that `items` is in non-decreasing order.
///
/// Returns [`RadixError::Unsorted`] for the first adjacent pair that is out of order.
///
/// ```
/// use lsdsort::verify::check_sorted;
///
/// assert!(check_sorted(&[1, 2, 2, 5]).is_ok());
/// assert!(check_sorted(&["b", "a"]).is_err());
/// ```
pub fn check_sorted<T: PartialOrd + Debug>(items: &[T]) -> Result<()> {
    match items.windows(2).position(|w| w[0] > w[1]) {
        None => Ok(()),
        Some(index) => Err(RadixError::Unsorted {
            index,
            left: format!("{:?}", items[index]),
            right: format!("{:?}", items[index + 1]),
        }),
    }
}

pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}
