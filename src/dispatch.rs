//! Strategy selection for untyped collections.
//!
//! The engine is generic over a strategy chosen at compile time. This module is the
//! boundary for data whose kind is only known at runtime: a homogeneous list of
//! [`Value`]s is turned into a typed [`Column`], either by inspecting the elements or
//! by an explicit [`StrategyKind`], and then sorted with the matching strategy.

use crate::algo::radix_sort;
use crate::error::{RadixError, Result};
use crate::strategy::{IntegerStrategy, TextStrategy};
use std::fmt;

/// Explicit choice of the built-in strategy to sort with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Integer,
    Text,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Integer => f.write_str("integer"),
            StrategyKind::Text => f.write_str("text"),
        }
    }
}

/// One element of an untyped collection.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Value::Int(_) => StrategyKind::Integer,
            Value::Text(_) => StrategyKind::Text,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

/// A homogeneous, typed collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Column {
    Integers(Vec<i64>),
    Text(Vec<String>),
}

impl Column {
    /// Builds a column from untyped values.
    ///
    /// With `kind == None` the kind is taken from the elements; an empty collection
    /// becomes an empty integer column.
    ///
    /// # Errors
    ///
    /// [`RadixError::TypeMismatch`] if the values mix kinds or disagree with `kind`.
    pub fn from_values(values: Vec<Value>, kind: Option<StrategyKind>) -> Result<Self> {
        let kind = match kind {
            Some(kind) => kind,
            None => values.first().map_or(StrategyKind::Integer, Value::kind),
        };

        if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| v.kind() != kind) {
            return Err(RadixError::TypeMismatch {
                message: format!(
                    "element {index} is {} ({value:?}), expected {kind}",
                    value.kind()
                ),
            });
        }

        let column = match kind {
            StrategyKind::Integer => Column::Integers(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::Int(i) => Some(i),
                        Value::Text(_) => None,
                    })
                    .collect(),
            ),
            StrategyKind::Text => Column::Text(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::Text(s) => Some(s),
                        Value::Int(_) => None,
                    })
                    .collect(),
            ),
        };
        Ok(column)
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Column::Integers(_) => StrategyKind::Integer,
            Column::Text(_) => StrategyKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Integers(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorts the column with the strategy matching its kind.
    pub fn radix_sort(self) -> Result<Self> {
        match self {
            Column::Integers(v) => radix_sort(v, IntegerStrategy::new()).map(Column::Integers),
            Column::Text(v) => radix_sort(v, TextStrategy::new()).map(Column::Text),
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        match self {
            Column::Integers(v) => v.into_iter().map(Value::Int).collect(),
            Column::Text(v) => v.into_iter().map(Value::Text).collect(),
        }
    }
}

/// Sorts an untyped homogeneous collection.
///
/// # Examples
///
/// ```
/// use lsdsort::dispatch::{sort_values, Value};
///
/// let values = vec![Value::from(3), Value::from(1), Value::from(2)];
/// let sorted = sort_values(values, None).unwrap();
///
/// assert_eq!(sorted, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
/// ```
pub fn sort_values(values: Vec<Value>, kind: Option<StrategyKind>) -> Result<Vec<Value>> {
    Ok(Column::from_values(values, kind)?.radix_sort()?.into_values())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_kind_from_elements() {
        let column = Column::from_values(vec!["b".into(), "a".into()], None).unwrap();
        assert_eq!(column.kind(), StrategyKind::Text);
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn empty_defaults_to_integers() {
        let column = Column::from_values(vec![], None).unwrap();
        assert_eq!(column, Column::Integers(vec![]));
        assert!(column.is_empty());
    }

    #[test]
    fn mixed_values_are_rejected() {
        let err = Column::from_values(vec![Value::Int(1), "a".into()], None).unwrap_err();
        assert!(matches!(err, RadixError::TypeMismatch { .. }));
    }

    #[test]
    fn explicit_kind_must_match() {
        let err = Column::from_values(vec![Value::Int(1)], Some(StrategyKind::Text)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch: element 0 is integer (Int(1)), expected text"
        );
    }

    #[test]
    fn sorts_text_values() {
        let values = vec!["b".into(), "ab".into(), "a".into()];
        let sorted = sort_values(values, Some(StrategyKind::Text)).unwrap();
        assert_eq!(sorted, vec!["a".into(), "ab".into(), Value::from("b")]);
    }

    #[test]
    fn negative_values_surface_from_the_engine() {
        let values = vec![Value::Int(-1), Value::Int(2), Value::Int(3)];
        assert_eq!(
            sort_values(values, None),
            Err(RadixError::NegativeItem { value: -1 })
        );
    }
}
