// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type and range checks for native values.

use std::fmt::Display;

use crate::error::ValidationError;
use crate::parameter::codec::expected_kind;
use crate::types::{ParameterType, Value};

/// Checks that `value` is acceptable for a parameter of type `ty`.
///
/// Numeric types must lie within the inclusive `[min, max]` range; a
/// `Null` bound leaves that side open. STRING bounds are not checked.
pub(crate) fn validate(
    ty: ParameterType,
    value: &Value,
    min: &Value,
    max: &Value,
) -> Result<(), ValidationError> {
    match (ty, value) {
        (_, Value::Null) => Err(ValidationError::Missing),
        (ParameterType::Bool | ParameterType::Action, Value::Bool(_))
        | (ParameterType::String, Value::String(_)) => Ok(()),
        (ParameterType::Integer | ParameterType::Enum, Value::Integer(i)) => {
            check_bounds(*i, min.as_i64(), max.as_i64())
        }
        (ParameterType::Float, Value::Float(_) | Value::Integer(_)) => {
            let f = value.as_f64().ok_or(ValidationError::NotANumber)?;
            if f.is_nan() {
                return Err(ValidationError::NotANumber);
            }
            check_bounds(f, min.as_f64(), max.as_f64())
        }
        (ty, other) => Err(ValidationError::WrongType {
            expected: expected_kind(ty),
            actual: other.kind_name(),
        }),
    }
}

fn check_bounds<T>(actual: T, min: Option<T>, max: Option<T>) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    if let Some(min) = min.filter(|min| actual < *min) {
        return Err(ValidationError::BelowMinimum {
            min: min.to_string(),
            actual: actual.to_string(),
        });
    }
    if let Some(max) = max.filter(|max| actual > *max) {
        return Err(ValidationError::AboveMaximum {
            max: max.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_accepts_only_booleans() {
        let (min, max) = (Value::Bool(false), Value::Bool(true));
        assert!(validate(ParameterType::Bool, &Value::Bool(true), &min, &max).is_ok());
        assert!(validate(ParameterType::Action, &Value::Bool(false), &min, &max).is_ok());
        assert_eq!(
            validate(ParameterType::Bool, &Value::Null, &min, &max).unwrap_err(),
            ValidationError::Missing
        );
        assert!(validate(ParameterType::Action, &Value::from("1"), &min, &max).is_err());
        assert!(validate(ParameterType::Bool, &Value::Integer(1), &min, &max).is_err());
    }

    #[test]
    fn integer_bounds_inclusive() {
        let (min, max) = (Value::Integer(0), Value::Integer(99));
        for ok in [0, 1, 50, 99] {
            assert!(validate(ParameterType::Integer, &Value::Integer(ok), &min, &max).is_ok());
        }
        assert_eq!(
            validate(ParameterType::Integer, &Value::Integer(-1), &min, &max).unwrap_err(),
            ValidationError::BelowMinimum {
                min: "0".into(),
                actual: "-1".into(),
            }
        );
        assert_eq!(
            validate(ParameterType::Enum, &Value::Integer(100), &min, &max).unwrap_err(),
            ValidationError::AboveMaximum {
                max: "99".into(),
                actual: "100".into(),
            }
        );
    }

    #[test]
    fn integer_rejects_integral_float() {
        let err = validate(
            ParameterType::Integer,
            &Value::Float(1.0),
            &Value::Integer(0),
            &Value::Integer(10),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                expected: "an integer",
                actual: "float",
            }
        );
    }

    #[test]
    fn float_accepts_integers_and_checks_bounds() {
        let (min, max) = (Value::Float(4.5), Value::Float(30.5));
        assert!(validate(ParameterType::Float, &Value::Float(10.0), &min, &max).is_ok());
        assert!(validate(ParameterType::Float, &Value::Integer(10), &min, &max).is_ok());
        assert!(validate(ParameterType::Float, &Value::Float(4.5), &min, &max).is_ok());
        assert!(validate(ParameterType::Float, &Value::Float(30.5), &min, &max).is_ok());
        assert!(validate(ParameterType::Float, &Value::Float(3.5), &min, &max).is_err());
        assert!(validate(ParameterType::Float, &Value::Float(31.5), &min, &max).is_err());
        assert!(validate(ParameterType::Float, &Value::Bool(true), &min, &max).is_err());
        assert_eq!(
            validate(ParameterType::Float, &Value::Float(f64::NAN), &min, &max).unwrap_err(),
            ValidationError::NotANumber
        );
    }

    #[test]
    fn open_bounds() {
        assert!(
            validate(ParameterType::Integer, &Value::Integer(i64::MIN), &Value::Null, &Value::Null)
                .is_ok()
        );
    }

    #[test]
    fn string_ignores_bounds() {
        let (min, max) = (Value::from(""), Value::from("zzz"));
        assert!(validate(ParameterType::String, &Value::from("anything"), &min, &max).is_ok());
        assert!(validate(ParameterType::String, &Value::Integer(1), &min, &max).is_err());
        assert!(validate(ParameterType::String, &Value::Null, &min, &max).is_err());
    }
}
