//! The radix sort engine (LSD distribute/collect loop).
//!
//! The engine is generic over a [`TypeStrategy`] and never inspects item types itself.
//! Each pass:
//! 1. **Distribute**: Computes one digit per item and appends the item to that digit's bucket,
//!    keeping the relative order of items that share a bucket.
//! 2. **Collect**: Rebuilds the working sequence by draining the buckets in index order.
//!
//! The main entry points are [`RadixSort`], [`radix_sort`] and [`radix_sort_mut`].

use crate::core::{Pass, TypeStrategy};
use crate::error::{RadixError, Result};
use tracing::{debug, trace};

/// A stable LSD radix sorter bound to one strategy.
///
/// # Examples
///
/// ```
/// use lsdsort::prelude::*;
///
/// let sorter = RadixSort::new(TextStrategy::new());
/// let sorted = sorter.sort(vec!["banana", "apple", "cherry"]).unwrap();
///
/// assert_eq!(sorted, vec!["apple", "banana", "cherry"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RadixSort<S> {
    strategy: S,
}

impl<S: TypeStrategy> RadixSort<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Sorts `items` and returns them in non-decreasing order.
    ///
    /// Equal items keep their input order.
    ///
    /// # Errors
    ///
    /// * [`RadixError::NoBuckets`] if the strategy reports zero buckets.
    /// * [`RadixError::DigitOutOfRange`] if the strategy yields a digit outside its buckets.
    /// * Whatever [`TypeStrategy::digit_value`] returns for an item it cannot digitize,
    ///   e.g. [`RadixError::NegativeItem`].
    pub fn sort(&self, mut items: Vec<S::Item>) -> Result<Vec<S::Item>> {
        self.sort_in_place(&mut items)?;
        Ok(items)
    }

    /// Collects `items` and sorts them. See [`RadixSort::sort`].
    pub fn sorted<I>(&self, items: I) -> Result<Vec<S::Item>>
    where
        I: IntoIterator<Item = S::Item>,
    {
        self.sort(items.into_iter().collect())
    }

    /// Returns a sorted copy of `items`, leaving the input untouched.
    pub fn sort_slice(&self, items: &[S::Item]) -> Result<Vec<S::Item>>
    where
        S::Item: Clone,
    {
        self.sort(items.to_vec())
    }

    /// Sorts `items` in place, reusing its allocation as the working sequence.
    ///
    /// Digits of a pass are all extracted before any item moves, so on error `items`
    /// holds the result of the last completed pass (a permutation of the input).
    pub fn sort_in_place(&self, items: &mut Vec<S::Item>) -> Result<()> {
        let bucket_count = self.strategy.bucket_count();
        if bucket_count == 0 {
            return Err(RadixError::NoBuckets);
        }

        if items.is_empty() {
            return Ok(());
        }

        let passes = self.strategy.max_passes(items);
        debug!(items = items.len(), buckets = bucket_count, passes, "radix sort");

        if passes == 0 {
            return Ok(());
        }

        // Buckets are reused across passes and are empty at every pass boundary.
        let mut buckets: Vec<Vec<S::Item>> = (0..bucket_count).map(|_| Vec::new()).collect();
        let mut digits: Vec<usize> = Vec::with_capacity(items.len());

        for index in 0..passes {
            let pass = Pass::new(index, passes);
            compute_digits(&self.strategy, items, pass, bucket_count, &mut digits)?;
            distribute(items, &digits, &mut buckets);
            collect(items, &mut buckets);
            trace!(pass = index, "pass complete");
        }

        Ok(())
    }
}

/// Extracts the digit of every item for `pass` into `digits`.
///
/// Fails on the first item the strategy rejects or whose digit does not address a bucket.
fn compute_digits<S: TypeStrategy>(
    strategy: &S,
    items: &[S::Item],
    pass: Pass,
    bucket_count: usize,
    digits: &mut Vec<usize>,
) -> Result<()> {
    digits.clear();
    for item in items {
        let digit = strategy.digit_value(item, pass)?;
        if digit >= bucket_count {
            return Err(RadixError::DigitOutOfRange {
                digit,
                bucket_count,
                pass: pass.index,
            });
        }
        digits.push(digit);
    }
    Ok(())
}

/// Moves every item into the bucket named by its digit, preserving order within a bucket.
fn distribute<T>(items: &mut Vec<T>, digits: &[usize], buckets: &mut [Vec<T>]) {
    debug_assert_eq!(items.len(), digits.len());
    items
        .drain(..)
        .zip(digits)
        .for_each(|(item, &digit)| buckets[digit].push(item));
}

/// Drains the buckets back into `items` in bucket-index order.
fn collect<T>(items: &mut Vec<T>, buckets: &mut [Vec<T>]) {
    debug_assert!(items.is_empty());
    buckets.iter_mut().for_each(|bucket| items.append(bucket));
}

/// Sorts `items` with `strategy` and returns the sorted sequence.
///
/// # Examples
///
/// ```
/// use lsdsort::{radix_sort, IntegerStrategy};
///
/// let sorted = radix_sort(vec![3u32, 1, 2], IntegerStrategy::new()).unwrap();
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
pub fn radix_sort<S: TypeStrategy>(items: Vec<S::Item>, strategy: S) -> Result<Vec<S::Item>> {
    RadixSort::new(strategy).sort(items)
}

/// Sorts a vector in place with `strategy`.
///
/// # Examples
///
/// ```
/// use lsdsort::{radix_sort_mut, TextStrategy};
///
/// let mut data = vec!["banana".to_string(), "apple".to_string()];
/// radix_sort_mut(&mut data, TextStrategy::new()).unwrap();
///
/// assert_eq!(data, vec!["apple", "banana"]);
/// ```
pub fn radix_sort_mut<S: TypeStrategy>(items: &mut Vec<S::Item>, strategy: S) -> Result<()> {
    RadixSort::new(strategy).sort_in_place(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::IntegerStrategy;

    struct Broken;

    impl TypeStrategy for Broken {
        type Item = u8;

        fn bucket_count(&self) -> usize {
            4
        }

        fn max_passes(&self, _items: &[u8]) -> usize {
            1
        }

        fn digit_value(&self, item: &u8, _pass: Pass) -> Result<usize> {
            Ok(*item as usize)
        }
    }

    struct Bucketless;

    impl TypeStrategy for Bucketless {
        type Item = u8;

        fn bucket_count(&self) -> usize {
            0
        }

        fn max_passes(&self, _items: &[u8]) -> usize {
            1
        }

        fn digit_value(&self, _item: &u8, _pass: Pass) -> Result<usize> {
            Ok(0)
        }
    }

    #[test]
    fn digit_out_of_range_is_not_folded() {
        let err = radix_sort(vec![1, 7, 2], Broken).unwrap_err();
        assert_eq!(
            err,
            RadixError::DigitOutOfRange {
                digit: 7,
                bucket_count: 4,
                pass: 0
            }
        );
    }

    #[test]
    fn zero_buckets_is_a_configuration_error() {
        assert_eq!(radix_sort(vec![1], Bucketless), Err(RadixError::NoBuckets));
        assert_eq!(radix_sort(vec![], Bucketless), Err(RadixError::NoBuckets));
    }

    #[test]
    fn failed_pass_leaves_items_intact() {
        let mut items = vec![5i32, 10, -3, 1];
        let err = radix_sort_mut(&mut items, IntegerStrategy::new()).unwrap_err();
        assert_eq!(err, RadixError::NegativeItem { value: -3 });
        assert_eq!(items, vec![5, 10, -3, 1]);
    }

    #[test]
    fn buckets_are_drained_between_passes() {
        let mut items: Vec<u32> = vec![31, 12, 23, 11];
        let mut buckets: Vec<Vec<u32>> = (0..10).map(|_| Vec::new()).collect();
        let mut digits = Vec::new();
        let strategy = IntegerStrategy::<u32>::new();

        compute_digits(&strategy, &items, Pass::new(0, 2), 10, &mut digits).unwrap();
        assert_eq!(digits, vec![1, 2, 3, 1]);

        distribute(&mut items, &digits, &mut buckets);
        assert!(items.is_empty());
        assert_eq!(buckets[1], vec![31, 11]);

        collect(&mut items, &mut buckets);
        assert_eq!(items, vec![31, 11, 12, 23]);
        assert!(buckets.iter().all(Vec::is_empty));
    }
}
