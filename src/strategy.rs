//! Built-in strategies: decimal digits of integers and ASCII characters of text.

use crate::core::{Pass, TypeStrategy};
use crate::error::{RadixError, Result};
use std::fmt;
use std::marker::PhantomData;

/// Buckets used by [`IntegerStrategy`], one per decimal digit.
pub const DECIMAL_BUCKETS: usize = 10;

/// Buckets used by [`TextStrategy`]: the absent-character bucket plus 128 ASCII code points.
pub const ASCII_BUCKETS: usize = 129;

/// Digit reported by [`TextStrategy`] when an item has no character at the examined position.
pub const ABSENT: usize = 0;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers that [`IntegerStrategy`] can digitize.
pub trait DecimalItem: sealed::Sealed + Copy {
    /// The value as an unsigned magnitude, or the value itself if it is negative.
    fn to_unsigned(self) -> std::result::Result<u128, i128>;
}

macro_rules! impl_decimal_unsigned {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl DecimalItem for $t {
                #[inline(always)]
                fn to_unsigned(self) -> std::result::Result<u128, i128> {
                    Ok(self as u128)
                }
            }
        )*
    };
}

macro_rules! impl_decimal_signed {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl DecimalItem for $t {
                #[inline(always)]
                fn to_unsigned(self) -> std::result::Result<u128, i128> {
                    if self < 0 {
                        Err(self as i128)
                    } else {
                        Ok(self as u128)
                    }
                }
            }
        )*
    };
}

impl_decimal_unsigned!(u8, u16, u32, u64, u128, usize);
impl_decimal_signed!(i8, i16, i32, i64, i128, isize);

/// Number of decimal digits of `value`; zero has none.
fn decimal_len(mut value: u128) -> usize {
    let mut len = 0;
    while value > 0 {
        len += 1;
        value /= 10;
    }
    len
}

/// Sorts non-negative integers by their base-10 digits, least significant first.
///
/// Negative items are rejected with [`RadixError::NegativeItem`] when their digit
/// is first extracted.
///
/// ```
/// use lsdsort::prelude::*;
///
/// let sorted = radix_sort(vec![170, 45, 75, 90, 802, 24, 2, 66], IntegerStrategy::new()).unwrap();
/// assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub struct IntegerStrategy<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> IntegerStrategy<T> {
    pub const fn new() -> Self {
        Self { _item: PhantomData }
    }
}

// Manual impls: deriving would demand the same traits of `T`.
impl<T> Clone for IntegerStrategy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IntegerStrategy<T> {}

impl<T> Default for IntegerStrategy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IntegerStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegerStrategy")
            .field("item", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DecimalItem> TypeStrategy for IntegerStrategy<T> {
    type Item = T;

    fn bucket_count(&self) -> usize {
        DECIMAL_BUCKETS
    }

    /// Digit length of the largest item.
    ///
    /// A negative item forces at least one pass so that its digit extraction
    /// rejects it.
    fn max_passes(&self, items: &[T]) -> usize {
        let (largest, negative) = items.iter().fold((0u128, false), |(largest, negative), item| {
            match item.to_unsigned() {
                Ok(value) => (largest.max(value), negative),
                Err(_) => (largest, true),
            }
        });
        let passes = decimal_len(largest);
        if negative { passes.max(1) } else { passes }
    }

    #[inline]
    fn digit_value(&self, item: &T, pass: Pass) -> Result<usize> {
        let value = item
            .to_unsigned()
            .map_err(|value| RadixError::NegativeItem { value })?;

        // Past the widest representable power of ten every digit is zero.
        let divisor = u32::try_from(pass.index)
            .ok()
            .and_then(|exp| 10u128.checked_pow(exp));

        Ok(match divisor {
            Some(divisor) => ((value / divisor) % 10) as usize,
            None => 0,
        })
    }
}

/// Sorts ASCII text by character, least significant column first.
///
/// Keys are left-aligned across the collection: pass `i` of `n` examines column
/// `n - 1 - i`, and a key shorter than that column lands in the [`ABSENT`] bucket.
/// A key therefore sorts before every key it is a proper prefix of.
///
/// Works for any `AsRef<[u8]>` item (`String`, `&str`, `Vec<u8>`, ...). A byte
/// `>= 128` is rejected with [`RadixError::NonAscii`].
///
/// ```
/// use lsdsort::prelude::*;
///
/// let sorted = radix_sort(vec!["b", "ab", "a"], TextStrategy::new()).unwrap();
/// assert_eq!(sorted, vec!["a", "ab", "b"]);
/// ```
pub struct TextStrategy<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> TextStrategy<T> {
    pub const fn new() -> Self {
        Self { _item: PhantomData }
    }
}

impl<T> Clone for TextStrategy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TextStrategy<T> {}

impl<T> Default for TextStrategy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TextStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextStrategy")
            .field("item", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: AsRef<[u8]>> TypeStrategy for TextStrategy<T> {
    type Item = T;

    fn bucket_count(&self) -> usize {
        ASCII_BUCKETS
    }

    /// Length of the longest item.
    fn max_passes(&self, items: &[T]) -> usize {
        items
            .iter()
            .map(|item| item.as_ref().len())
            .max()
            .unwrap_or(0)
    }

    #[inline]
    fn digit_value(&self, item: &T, pass: Pass) -> Result<usize> {
        let key = item.as_ref();
        let Some(position) = pass.column() else {
            return Ok(ABSENT);
        };

        match key.get(position) {
            None => Ok(ABSENT),
            Some(&byte) if byte.is_ascii() => Ok(byte as usize + 1),
            Some(&byte) => Err(RadixError::NonAscii { byte, position }),
        }
    }
}
