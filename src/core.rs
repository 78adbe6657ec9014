//! Core traits and types for lsdsort.
//!
//! This module defines:
//! - [`TypeStrategy`]: The trait that tells the engine how to digitize one kind of item.
//! - [`Pass`]: Position descriptor handed to digit extraction.

use crate::error::Result;

/// Describes one distribute/collect pass of a sort.
///
/// `index` counts from the least significant position (0 is the first pass).
/// `count` is the total number of passes the sort will run, as reported by
/// [`TypeStrategy::max_passes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pass {
    pub index: usize,
    pub count: usize,
}

impl Pass {
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }

    /// Position of the examined column counted from the left, for keys that are
    /// left-aligned across the collection (text). `None` once `index >= count`.
    #[inline]
    pub fn column(&self) -> Option<usize> {
        self.count.checked_sub(self.index)?.checked_sub(1)
    }
}

/// A trait describing how to split items of one data kind into radix digits.
///
/// Implementations are stateless configuration objects: every method is a pure
/// function of its inputs. The engine calls [`max_passes`](TypeStrategy::max_passes)
/// once per sort, then [`digit_value`](TypeStrategy::digit_value) once per item per pass.
///
/// # Examples
///
/// A strategy ordering booleans, `false` first:
///
/// ```
/// use lsdsort::core::{Pass, TypeStrategy};
/// use lsdsort::error::Result;
///
/// struct Flags;
///
/// impl TypeStrategy for Flags {
///     type Item = bool;
///
///     fn bucket_count(&self) -> usize {
///         2
///     }
///
///     fn max_passes(&self, items: &[bool]) -> usize {
///         usize::from(!items.is_empty())
///     }
///
///     fn digit_value(&self, item: &bool, _pass: Pass) -> Result<usize> {
///         Ok(usize::from(*item))
///     }
/// }
///
/// let sorted = lsdsort::radix_sort(vec![true, false, true], Flags).unwrap();
/// assert_eq!(sorted, vec![false, true, true]);
/// ```
pub trait TypeStrategy {
    /// The item type this strategy digitizes.
    type Item;

    /// Number of distinct digit values at any single pass. Must be at least 1.
    fn bucket_count(&self) -> usize;

    /// Number of passes needed to fully discriminate `items`.
    ///
    /// Must be computable with a single scan over `items`.
    fn max_passes(&self, items: &[Self::Item]) -> usize;

    /// The digit of `item` at `pass`, in `0..bucket_count()`.
    ///
    /// Fails when `item` is outside the domain this strategy can digitize.
    fn digit_value(&self, item: &Self::Item, pass: Pass) -> Result<usize>;
}

// Strategies are stateless, so borrowing one is as good as owning it.
impl<S: TypeStrategy + ?Sized> TypeStrategy for &S {
    type Item = S::Item;

    #[inline]
    fn bucket_count(&self) -> usize {
        (**self).bucket_count()
    }

    #[inline]
    fn max_passes(&self, items: &[Self::Item]) -> usize {
        (**self).max_passes(items)
    }

    #[inline]
    fn digit_value(&self, item: &Self::Item, pass: Pass) -> Result<usize> {
        (**self).digit_value(item, pass)
    }
}
