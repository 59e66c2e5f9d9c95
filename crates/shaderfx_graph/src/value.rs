// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dynamically typed values exchanged with the host.
//!
//! The host answers every query with a single value and accepts property
//! edits as a flat list of positional arguments. [`Value`] covers both.

use serde::{Deserialize, Serialize};

/// A reply or property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// String
    Text(String),
    /// Ordered sequence (vectors, colors, name lists)
    List(Vec<Value>),
}

impl Value {
    /// Empty text, the reply of commands with no result
    pub fn none() -> Self {
        Self::Text(String::new())
    }

    /// Interpret as a boolean. Integers are true when non-zero.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(i) => Some(*i != 0),
            _ => None,
        }
    }

    /// Interpret as an integer. Floats qualify only when integral.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Interpret as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Borrow the text payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the list payload
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Python-style truthiness: zero, false, empty text and empty lists are false
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Interpret as a list of names.
    ///
    /// A single text is a one-element list and empty text is an empty list;
    /// hosts collapse one-element and empty string arrays that way.
    pub fn into_names(self) -> Option<Vec<String>> {
        match self {
            Self::Text(s) if s.is_empty() => Some(Vec::new()),
            Self::Text(s) => Some(vec![s]),
            Self::List(items) => items
                .into_iter()
                .map(|item| match item {
                    Self::Text(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// Positional arguments for an edit command: a list is spread into its
    /// elements, anything else is passed as a single argument.
    pub fn spread(self) -> Vec<Value> {
        match self {
            Self::List(items) => items,
            scalar => vec![scalar],
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
