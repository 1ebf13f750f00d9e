// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Native parameter values.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The native, decoded value of a parameter.
///
/// Which variant a parameter accepts depends on its
/// [`ParameterType`](super::ParameterType). `Null` stands for a value the
/// hub did not deliver and is rejected by every validator.
///
/// # Examples
///
/// ```
/// use ccu_params::Value;
///
/// assert_eq!(Value::from(true), Value::Bool(true));
/// assert_eq!(Value::from(21.5), Value::Float(21.5));
/// assert_eq!(Value::from(None::<i64>), Value::Null);
/// assert_eq!(Value::from("auto").as_str(), Some("auto"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// Boolean state (BOOL and ACTION parameters).
    Bool(bool),
    /// Integer value (INTEGER parameters and ENUM ordinals).
    Integer(i64),
    /// Floating point value (FLOAT parameters).
    Float(f64),
    /// Text (STRING parameters).
    String(String),
}

impl Value {
    /// Returns a short name of the value's kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }

    /// Returns `true` if this is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is an `Integer`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers are widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the text, if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    fn wrong_type(&self, expected: &'static str) -> ValidationError {
        if self.is_null() {
            ValidationError::Missing
        } else {
            ValidationError::WrongType {
                expected,
                actual: self.kind_name(),
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<Value> for bool {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| value.wrong_type("a boolean"))
    }
}

impl TryFrom<Value> for i64 {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_i64().ok_or_else(|| value.wrong_type("an integer"))
    }
}

impl TryFrom<Value> for f64 {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or_else(|| value.wrong_type("a number"))
    }
}

impl TryFrom<Value> for String {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other.wrong_type("a string")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_primitives() {
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from(-3i32), Value::Integer(-3));
        assert_eq!(Value::from(7i64), Value::Integer(7));
        assert_eq!(Value::from(String::from("x")), Value::String("x".into()));
        assert_eq!(Value::from(Some(1.5)), Value::Float(1.5));
    }

    #[test]
    fn float_accessor_widens_integers() {
        assert_eq!(Value::Integer(4).as_f64(), Some(4.0));
        assert_eq!(Value::Bool(true).as_f64(), None);
    }

    #[test]
    fn try_into_native() {
        assert!(bool::try_from(Value::Bool(true)).unwrap());
        assert_eq!(i64::try_from(Value::Integer(12)).unwrap(), 12);
        assert_eq!(
            i64::try_from(Value::Float(1.0)).unwrap_err(),
            ValidationError::WrongType {
                expected: "an integer",
                actual: "float",
            }
        );
        assert_eq!(
            String::try_from(Value::Null).unwrap_err(),
            ValidationError::Missing
        );
    }

    #[test]
    fn deserialize_untagged() {
        let values: Vec<Value> = serde_json::from_str(r#"[null, true, 3, 2.5, "on"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Integer(3),
                Value::Float(2.5),
                Value::String("on".into()),
            ]
        );
    }
}
