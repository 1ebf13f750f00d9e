// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw parameter descriptions as delivered by the CCU.

use serde::Deserialize;
use serde::de::{Deserializer, Error as _};

use crate::error::DescriptorError;

/// The raw description a [`Parameter`](super::Parameter) is built from.
///
/// Field names follow the CCU API. Integer attributes are accepted as JSON
/// numbers or numeric strings, `value_list` as an array or a space
/// separated string. `min`, `max`, `default` and `_value` stay raw until
/// the parameter type is known.
///
/// # Examples
///
/// ```
/// use ccu_params::ParameterDescriptor;
///
/// let descriptor = ParameterDescriptor::from_json(r#"{
///     "id": "LEVEL", "name": "LEVEL", "type": "FLOAT",
///     "operations": "7", "unit": "100%", "min": "0.0", "max": "1.0"
/// }"#).unwrap();
///
/// assert_eq!(descriptor.operations, 7);
/// assert_eq!(descriptor.parameter_type, "FLOAT");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter id, unique within its channel.
    pub id: String,

    /// Parameter name. Falls back to the id when absent.
    #[serde(default)]
    pub name: Option<String>,

    /// Classification key, e.g. `SWITCH.STATE`.
    #[serde(default)]
    pub control: String,

    /// Read/write/event bitmask.
    #[serde(default, deserialize_with = "int_or_string")]
    pub operations: u8,

    /// Flag bitmask.
    #[serde(default, deserialize_with = "int_or_string")]
    pub flags: u16,

    /// Position in user interfaces.
    #[serde(default, deserialize_with = "int_or_string")]
    pub tab_order: i32,

    /// Unit appended when formatting, may be empty.
    #[serde(default)]
    pub unit: String,

    /// Type name, e.g. `BOOL` or `ENUM`.
    #[serde(rename = "type")]
    pub parameter_type: String,

    /// Lower bound in wire or JSON form.
    #[serde(default)]
    pub min: serde_json::Value,

    /// Upper bound in wire or JSON form.
    #[serde(default)]
    pub max: serde_json::Value,

    /// Default value in wire or JSON form.
    #[serde(default)]
    pub default: serde_json::Value,

    /// Current value in wire or JSON form.
    #[serde(rename = "_value", alias = "value", default)]
    pub value: serde_json::Value,

    /// Labels of an ENUM, indexed by ordinal.
    #[serde(default, deserialize_with = "value_list")]
    pub value_list: Vec<String>,
}

impl ParameterDescriptor {
    /// Parses a descriptor from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError::Json` if the document is not a valid
    /// descriptor.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts an already parsed JSON value into a descriptor.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError::Json` if the value is not a valid
    /// descriptor.
    pub fn from_json_value(json: serde_json::Value) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_value(json)?)
    }

    /// Returns the name, or the id if no name was given.
    #[must_use]
    pub fn name_or_id(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn int_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let n = match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => n,
        IntOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}")))?,
    };
    T::try_from(n).map_err(|_| D::Error::custom(format!("integer {n} out of range")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrString {
    List(Vec<String>),
    Joined(String),
}

fn value_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ListOrString>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(ListOrString::List(list)) => list,
        Some(ListOrString::Joined(s)) if s.is_empty() => Vec::new(),
        Some(ListOrString::Joined(s)) => s.split(' ').map(str::to_string).collect(),
    })
}
