//! Dynamically typed set elements [`Value`].
//!
//! A `Set<Value>` can mix integers, reals, booleans, text, pairs and nested sets. Values of
//! different kinds are always distinct: there is no coercion between `1`, `1.0` and `"1"`.

use crate::prelude::*;
use derive_more::{Display, From};
use ordered_float::OrderedFloat;

/// A set element of any of the supported kinds.
#[derive(Clone, Debug, Display, From, PartialEq, Eq, Hash)]
pub enum Value {
    /// An integer such as `-4` or `42`.
    #[display(fmt = "{}", _0)]
    Int(i64),
    /// A real number such as `3.5`. Reals are totally ordered so that they can be hashed.
    #[display(fmt = "{}", _0)]
    Real(OrderedFloat<f64>),
    /// A boolean.
    #[display(fmt = "{}", _0)]
    Bool(bool),
    /// A string of text.
    #[display(fmt = "{}", _0)]
    Text(String),
    /// An ordered pair.
    #[display(fmt = "{}", _0)]
    Tuple(Box<Tuple<Value, Value>>),
    /// A nested set.
    #[display(fmt = "{}", _0)]
    Set(Set<Value>),
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Real(OrderedFloat(x))
    }
}

impl From<&str> for Value {
    fn from(str: &str) -> Self {
        Self::Text(str.to_owned())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<Tuple<A, B>> for Value {
    fn from(Tuple(fst, snd): Tuple<A, B>) -> Self {
        Self::Tuple(Box::new(Tuple(fst.into(), snd.into())))
    }
}

impl Value {
    /// A name for the kind of value, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "text",
            Self::Tuple(_) => "tuple",
            Self::Set(_) => "set",
        }
    }

    /// The error for a value that isn't of the `expected` kind.
    fn mismatch(&self, expected: &'static str) -> SetError {
        SetError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// The integer stored in the value.
    ///
    /// ## Errors
    ///
    /// Returns [`SetError::TypeMismatch`] if the value is of some other kind.
    pub fn as_int(&self) -> Result<i64, SetError> {
        match self {
            Self::Int(n) => Ok(*n),
            _ => Err(self.mismatch("integer")),
        }
    }

    /// The real number stored in the value. Integers are not converted.
    ///
    /// ## Errors
    ///
    /// Returns [`SetError::TypeMismatch`] if the value is of some other kind.
    pub fn as_real(&self) -> Result<f64, SetError> {
        match self {
            Self::Real(x) => Ok(x.into_inner()),
            _ => Err(self.mismatch("real")),
        }
    }

    /// The boolean stored in the value.
    ///
    /// ## Errors
    ///
    /// Returns [`SetError::TypeMismatch`] if the value is of some other kind.
    pub fn as_bool(&self) -> Result<bool, SetError> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.mismatch("boolean")),
        }
    }

    /// The text stored in the value.
    ///
    /// ## Errors
    ///
    /// Returns [`SetError::TypeMismatch`] if the value is of some other kind.
    pub fn as_text(&self) -> Result<&str, SetError> {
        match self {
            Self::Text(str) => Ok(str.as_str()),
            _ => Err(self.mismatch("text")),
        }
    }

    /// The pair stored in the value.
    ///
    /// ## Errors
    ///
    /// Returns [`SetError::TypeMismatch`] if the value is of some other kind.
    pub fn as_tuple(&self) -> Result<&Tuple<Value, Value>, SetError> {
        match self {
            Self::Tuple(pair) => Ok(&**pair),
            _ => Err(self.mismatch("tuple")),
        }
    }

    /// The set stored in the value.
    ///
    /// ## Errors
    ///
    /// Returns [`SetError::TypeMismatch`] if the value is of some other kind.
    pub fn as_set(&self) -> Result<&Set<Value>, SetError> {
        match self {
            Self::Set(set) => Ok(set),
            _ => Err(self.mismatch("set")),
        }
    }
}
