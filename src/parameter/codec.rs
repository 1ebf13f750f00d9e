// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion between CCU wire strings and native values.
//!
//! The CCU protocol is asymmetric for booleans: values are reported as
//! `"0"`/`"1"` but written as `"true"`/`"false"`. Floats are written with
//! exactly two decimals.

use crate::error::{DecodeError, ValidationError};
use crate::types::{ParameterType, Value};

/// Decodes a wire string into the native value of `ty`.
pub(crate) fn decode(ty: ParameterType, raw: &str) -> Result<Value, DecodeError> {
    match ty {
        ParameterType::Bool | ParameterType::Action => match raw {
            "0" => Ok(Value::Bool(false)),
            "1" => Ok(Value::Bool(true)),
            _ => Err(DecodeError::new(raw, "boolean")),
        },
        ParameterType::Integer | ParameterType::Enum => raw
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| DecodeError::new(raw, "integer")),
        ParameterType::Float => match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Float(f)),
            _ => Err(DecodeError::new(raw, "float")),
        },
        ParameterType::String => Ok(Value::String(raw.to_string())),
    }
}

/// Encodes a native value into the wire string of `ty`.
pub(crate) fn encode(ty: ParameterType, value: &Value) -> Result<String, ValidationError> {
    match (ty, value) {
        (_, Value::Null) => Err(ValidationError::Missing),
        (ParameterType::Bool | ParameterType::Action, Value::Bool(b)) => {
            Ok(if *b { "true" } else { "false" }.to_string())
        }
        (ParameterType::Integer | ParameterType::Enum, Value::Integer(i)) => Ok(i.to_string()),
        (ParameterType::Integer | ParameterType::Enum, Value::Float(f)) => {
            truncate(*f).map(|i| i.to_string())
        }
        (ParameterType::Float, Value::Float(_) | Value::Integer(_)) => {
            let f = value.as_f64().ok_or(ValidationError::NotANumber)?;
            if f.is_finite() {
                Ok(fixed2(f))
            } else {
                Err(ValidationError::NotANumber)
            }
        }
        (ParameterType::String, Value::String(s)) => Ok(s.clone()),
        (ty, other) => Err(ValidationError::WrongType {
            expected: expected_kind(ty),
            actual: other.kind_name(),
        }),
    }
}

/// Brings a validated value into the canonical native form of `ty`.
///
/// FLOAT parameters accept integers; they are stored as floats.
pub(crate) fn normalize(ty: ParameterType, value: Value) -> Value {
    match (ty, value) {
        (ParameterType::Float, Value::Integer(i)) => Value::Float(widen(i)),
        (_, value) => value,
    }
}

/// Coerces a raw descriptor field into the native value of `ty`.
///
/// The hub delivers description fields either as wire strings or as JSON
/// primitives. Strings take the wire codec, primitives are checked
/// against the type directly. Boolean fields additionally accept the
/// `"true"`/`"false"` spelling the hub uses when writing.
pub(crate) fn coerce_field(
    ty: ParameterType,
    field: &serde_json::Value,
) -> Result<Value, DecodeError> {
    use serde_json::Value as Json;

    let mismatch = || DecodeError::new(field.to_string(), expected_kind(ty));
    match (ty, field) {
        (_, Json::Null) => Ok(Value::Null),
        (ParameterType::Bool | ParameterType::Action, Json::String(s)) => match s.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            raw => decode(ty, raw),
        },
        (_, Json::String(s)) => decode(ty, s),
        (ParameterType::Bool | ParameterType::Action, Json::Bool(b)) => Ok(Value::Bool(*b)),
        (ParameterType::Bool | ParameterType::Action, Json::Number(n)) => match n.as_i64() {
            Some(0) => Ok(Value::Bool(false)),
            Some(1) => Ok(Value::Bool(true)),
            _ => Err(mismatch()),
        },
        (ParameterType::Integer | ParameterType::Enum, Json::Number(n)) => {
            n.as_i64().map(Value::Integer).ok_or_else(mismatch)
        }
        (ParameterType::Float, Json::Number(n)) => n.as_f64().map(Value::Float).ok_or_else(mismatch),
        (ParameterType::String, Json::Bool(b)) => Ok(Value::String(b.to_string())),
        (ParameterType::String, Json::Number(n)) => Ok(Value::String(n.to_string())),
        _ => Err(mismatch()),
    }
}

/// Rounds half away from zero to two decimals and renders fixed-point.
pub(crate) fn fixed2(f: f64) -> String {
    let scaled = f * 100.0;
    // values this large have no fractional part left to round
    let rounded = if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        f
    };
    // avoid "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.2}")
}

pub(crate) const fn expected_kind(ty: ParameterType) -> &'static str {
    match ty {
        ParameterType::Bool | ParameterType::Action => "a boolean",
        ParameterType::Integer | ParameterType::Enum => "an integer",
        ParameterType::Float => "a number",
        ParameterType::String => "a string",
    }
}

#[allow(clippy::cast_precision_loss)]
fn widen(i: i64) -> f64 {
    i as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate(f: f64) -> Result<i64, ValidationError> {
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Ok(f.trunc() as i64)
    } else {
        Err(ValidationError::NotANumber)
    }
}
