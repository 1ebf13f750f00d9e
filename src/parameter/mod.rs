// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed device parameters.
//!
//! A [`Parameter`] combines the attributes every CCU parameter shares with
//! a [`ParameterKind`] that selects the type-specific rules:
//!
//! | Type      | Wire → native      | Native → wire        | Accepts              |
//! |-----------|--------------------|----------------------|----------------------|
//! | `BOOL`    | `"0"`/`"1"`        | `"false"`/`"true"`   | booleans             |
//! | `INTEGER` | decimal integer    | decimal, truncated   | integers in range    |
//! | `FLOAT`   | decimal number     | two decimals         | numbers in range     |
//! | `ENUM`    | ordinal            | ordinal              | ordinals in range    |
//! | `STRING`  | identity           | identity             | any string           |
//! | `ACTION`  | like `BOOL`        | like `BOOL`          | booleans, write-only |
//!
//! # Examples
//!
//! ```
//! use ccu_params::{ChannelAddress, Parameter, ParameterDescriptor, Value};
//!
//! let channel: ChannelAddress = "LEQ0000001:4".parse().unwrap();
//! let descriptor = ParameterDescriptor::from_json(r#"{
//!     "id": "SET_TEMPERATURE", "name": "SET_TEMPERATURE", "type": "FLOAT",
//!     "operations": 7, "unit": "°C", "min": "4.5", "max": "30.5",
//!     "default": "20.0", "_value": "21.0"
//! }"#).unwrap();
//! let mut setpoint = Parameter::from_descriptor(channel, descriptor).unwrap();
//!
//! assert_eq!(setpoint.title(), "Set Temperature");
//! assert_eq!(setpoint.formatted().unwrap(), "21.00 °C");
//!
//! setpoint.set_value(22.5).unwrap();
//! assert_eq!(setpoint.value().unwrap(), &Value::Float(22.5));
//! assert!(setpoint.set_value(35.0).is_err());
//! ```

mod codec;
mod descriptor;
mod format;
mod validate;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{DecodeError, Error, ReadError, Result, ValidationError, WriteError};
use crate::types::{ChannelAddress, Operations, ParameterFlags, ParameterType, Value};

pub use descriptor::ParameterDescriptor;

/// Type-specific part of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    /// See [`ParameterType::Bool`].
    Bool,
    /// See [`ParameterType::Integer`].
    Integer,
    /// See [`ParameterType::Float`].
    Float,
    /// See [`ParameterType::Enum`].
    Enum {
        /// Labels indexed by ordinal.
        value_list: Vec<String>,
    },
    /// See [`ParameterType::String`].
    String,
    /// See [`ParameterType::Action`].
    Action,
}

impl ParameterKind {
    /// Returns the type discriminator of this kind.
    #[must_use]
    pub const fn parameter_type(&self) -> ParameterType {
        match self {
            Self::Bool => ParameterType::Bool,
            Self::Integer => ParameterType::Integer,
            Self::Float => ParameterType::Float,
            Self::Enum { .. } => ParameterType::Enum,
            Self::String => ParameterType::String,
            Self::Action => ParameterType::Action,
        }
    }

    fn new(ty: ParameterType, value_list: Vec<String>) -> Self {
        match ty {
            ParameterType::Bool => Self::Bool,
            ParameterType::Integer => Self::Integer,
            ParameterType::Float => Self::Float,
            ParameterType::Enum => Self::Enum { value_list },
            ParameterType::String => Self::String,
            ParameterType::Action => Self::Action,
        }
    }
}

/// A typed value of a device channel.
///
/// Parameters are created from a [`ParameterDescriptor`] and are usually
/// owned by a [`Channel`](crate::Channel). The current value is cached in
/// native form; reading and writing it is gated by the operations bitmask.
#[derive(Debug, Clone)]
pub struct Parameter {
    channel: ChannelAddress,
    id: String,
    name: String,
    control: String,
    operations: Operations,
    flags: ParameterFlags,
    tab_order: i32,
    unit: String,
    kind: ParameterKind,
    min: Value,
    max: Value,
    default: Value,
    value: Value,
    pending: Option<String>,
    last_updated: Option<DateTime<Utc>>,
    last_changed: Option<DateTime<Utc>>,
}

impl Parameter {
    /// Builds a parameter of `channel` from its raw description.
    ///
    /// `min`, `max`, `default` and the current value are converted to the
    /// native type right away.
    ///
    /// # Errors
    ///
    /// Returns `Error::Descriptor` for an unknown type and `Error::Decode`
    /// if one of the value fields does not fit the type.
    pub fn from_descriptor(channel: ChannelAddress, descriptor: ParameterDescriptor) -> Result<Self> {
        let ty: ParameterType = descriptor.parameter_type.parse()?;
        let min = codec::coerce_field(ty, &descriptor.min)?;
        let max = codec::coerce_field(ty, &descriptor.max)?;
        let default = codec::coerce_field(ty, &descriptor.default)?;
        let value = codec::coerce_field(ty, &descriptor.value)?;
        let value = codec::normalize(ty, value);

        tracing::trace!(
            channel = %channel,
            parameter = %descriptor.id,
            r#type = %ty,
            "Created parameter"
        );

        Ok(Self {
            name: descriptor.name_or_id().to_string(),
            channel,
            id: descriptor.id,
            control: descriptor.control,
            operations: Operations::new(descriptor.operations),
            flags: ParameterFlags::new(descriptor.flags),
            tab_order: descriptor.tab_order,
            unit: descriptor.unit,
            kind: ParameterKind::new(ty, descriptor.value_list),
            min,
            max,
            default,
            value,
            pending: None,
            last_updated: None,
            last_changed: None,
        })
    }

    /// Returns the address of the owning channel.
    #[must_use]
    pub fn channel(&self) -> &ChannelAddress {
        &self.channel
    }

    /// Returns the parameter id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the control classification key.
    #[must_use]
    pub fn control(&self) -> &str {
        &self.control
    }

    /// Returns the operations bitmask.
    #[must_use]
    pub const fn operations(&self) -> Operations {
        self.operations
    }

    /// Returns the flags bitmask.
    #[must_use]
    pub const fn flags(&self) -> ParameterFlags {
        self.flags
    }

    /// Returns the position in user interfaces.
    #[must_use]
    pub const fn tab_order(&self) -> i32 {
        self.tab_order
    }

    /// Returns the unit, possibly empty.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the type-specific part.
    #[must_use]
    pub const fn kind(&self) -> &ParameterKind {
        &self.kind
    }

    /// Returns the type discriminator.
    #[must_use]
    pub const fn parameter_type(&self) -> ParameterType {
        self.kind.parameter_type()
    }

    /// Returns the lower bound, `Null` if unbounded.
    #[must_use]
    pub const fn min(&self) -> &Value {
        &self.min
    }

    /// Returns the upper bound, `Null` if unbounded.
    #[must_use]
    pub const fn max(&self) -> &Value {
        &self.max
    }

    /// Returns the default value.
    #[must_use]
    pub const fn default(&self) -> &Value {
        &self.default
    }

    /// Returns the labels of an ENUM, `None` for other types.
    #[must_use]
    pub fn value_list(&self) -> Option<&[String]> {
        match &self.kind {
            ParameterKind::Enum { value_list } => Some(value_list),
            _ => None,
        }
    }

    /// Returns every value an ENUM can be formatted as.
    #[must_use]
    pub fn possible_values(&self) -> Option<Vec<String>> {
        self.value_list().map(<[String]>::to_vec)
    }

    /// Returns whether the value can be read. Actions never can.
    #[must_use]
    pub const fn readable(&self) -> bool {
        !matches!(self.kind, ParameterKind::Action) && self.operations.is_readable()
    }

    /// Returns whether the value can be written.
    #[must_use]
    pub const fn writable(&self) -> bool {
        self.operations.is_writable()
    }

    /// Returns the display title derived from the name.
    ///
    /// ```
    /// # use ccu_params::{Parameter, ParameterDescriptor};
    /// let descriptor = ParameterDescriptor::from_json(
    ///     r#"{"id": "X_XABC", "type": "STRING"}"#).unwrap();
    /// let p = Parameter::from_descriptor("A:0".parse().unwrap(), descriptor).unwrap();
    /// assert_eq!(p.title(), "X Xabc");
    /// ```
    #[must_use]
    pub fn title(&self) -> String {
        format::title(&self.name)
    }

    /// Returns the cached value.
    ///
    /// # Errors
    ///
    /// Returns `Error::Read` if the parameter is not readable.
    pub fn value(&self) -> Result<&Value> {
        if matches!(self.kind, ParameterKind::Action) {
            return Err(ReadError::WriteOnly(self.id.clone()).into());
        }
        if !self.operations.is_readable() {
            return Err(ReadError::NotReadable(self.id.clone()).into());
        }
        Ok(&self.value)
    }

    /// Validates and stores a new value.
    ///
    /// The wire form of the new value is kept until it is taken with
    /// [`take_pending`](Self::take_pending); values later reported by the
    /// hub do not replace it.
    ///
    /// # Errors
    ///
    /// Returns `Error::Write` if the parameter is not writable and
    /// `Error::Validation` if the value has the wrong type or is out of
    /// range. Nothing is stored in either case.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if !self.writable() {
            return Err(WriteError {
                parameter: self.id.clone(),
            }
            .into());
        }
        if let Err(e) = self.validate(&value) {
            tracing::debug!(
                channel = %self.channel,
                parameter = %self.id,
                error = %e,
                "Rejected value"
            );
            return Err(e.into());
        }

        let value = codec::normalize(self.parameter_type(), value);
        let wire = self.to_api_value(&value)?;
        tracing::trace!(channel = %self.channel, parameter = %self.id, ?value, "Setting value");
        self.store(value);
        self.pending = Some(wire);
        Ok(())
    }

    /// Like [`set_value`](Self::set_value), but a non-writable parameter
    /// is reported as `Ok(false)` instead of an error.
    ///
    /// Batch updates use this to skip read-only parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the value has the wrong type or is
    /// out of range.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<bool> {
        match self.set_value(value) {
            Ok(()) => Ok(true),
            Err(Error::Write(e)) => {
                tracing::debug!(channel = %self.channel, error = %e, "Skipping write");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Sets the value to the parameter default.
    ///
    /// # Errors
    ///
    /// Same as [`set_value`](Self::set_value); a missing default fails
    /// validation.
    pub fn set_to_default(&mut self) -> Result<()> {
        self.set_value(self.default.clone())
    }

    /// Renders the value with its unit for display.
    ///
    /// ENUM values are rendered as their label, floats with two decimals.
    ///
    /// # Errors
    ///
    /// Returns `Error::Read` if the parameter is not readable.
    pub fn formatted(&self) -> Result<String> {
        let value = self.value()?;
        let text = match &self.kind {
            ParameterKind::Enum { value_list } => format::enum_label(value, value_list),
            _ => format::canonical(value),
        };
        Ok(format::with_unit(text, &self.unit))
    }

    /// Decodes a wire string into this parameter's native type.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the string does not represent a value of
    /// this type, e.g. `"1.0"` for an INTEGER.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_api_value(&self, raw: &str) -> std::result::Result<Value, DecodeError> {
        codec::decode(self.parameter_type(), raw)
    }

    /// Encodes a native value into this parameter's wire string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value has the wrong type.
    pub fn to_api_value(&self, value: &Value) -> std::result::Result<String, ValidationError> {
        codec::encode(self.parameter_type(), value)
    }

    /// Checks a value against this parameter's type and bounds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the violated constraint.
    pub fn validate(&self, value: &Value) -> std::result::Result<(), ValidationError> {
        validate::validate(self.parameter_type(), value, &self.min, &self.max)
    }

    /// Stores a wire value reported by the hub.
    ///
    /// Bounds are not checked and the parameter is not marked dirty.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decode` if the string does not decode.
    pub fn update_from_api(&mut self, raw: &str) -> Result<()> {
        let value = self.from_api_value(raw)?;
        self.apply_api_value(value);
        Ok(())
    }

    pub(crate) fn apply_api_value(&mut self, value: Value) {
        tracing::trace!(channel = %self.channel, parameter = %self.id, ?value, "Value from hub");
        self.store(value);
    }

    /// Returns whether a locally set value has not been taken yet.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the wire form of the last locally set value.
    ///
    /// Returns `None` if nothing was set since the last call.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Returns when a value was last stored.
    #[must_use]
    pub const fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Returns when a stored value last differed from the previous one.
    #[must_use]
    pub const fn last_changed(&self) -> Option<DateTime<Utc>> {
        self.last_changed
    }

    /// Returns the UTF-8 bytes of the [`Display`](fmt::Display) text.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    fn store(&mut self, value: Value) {
        let now = Utc::now();
        if self.value != value {
            self.last_changed = Some(now);
        }
        self.value = value;
        self.last_updated = Some(now);
    }
}

/// Canonical text of the cached value, without unit.
///
/// Booleans render as `"0"`/`"1"` and ENUMs as their ordinal; use
/// [`Parameter::formatted`] for display.
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::canonical(&self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parameter(descriptor: serde_json::Value) -> Parameter {
        let descriptor = ParameterDescriptor::from_json_value(descriptor).unwrap();
        Parameter::from_descriptor("KEQ0970393:1".parse().unwrap(), descriptor).unwrap()
    }

    fn state(operations: u8) -> Parameter {
        parameter(json!({
            "control": "SWITCH.STATE",
            "operations": operations,
            "name": "STATE",
            "min": "0",
            "default": "0",
            "max": "1",
            "_value": "0",
            "tab_order": 0,
            "flags": 1,
            "unit": "",
            "type": "BOOL",
            "id": "STATE",
        }))
    }

    #[test]
    fn attributes() {
        let p = state(7);
        assert_eq!(p.control(), "SWITCH.STATE");
        assert_eq!(p.operations().bits(), 7);
        assert_eq!(p.name(), "STATE");
        assert_eq!(p.id(), "STATE");
        assert_eq!(p.tab_order(), 0);
        assert!(p.flags().is_visible());
        assert_eq!(p.unit(), "");
        assert_eq!(p.parameter_type(), ParameterType::Bool);
        assert_eq!(p.kind(), &ParameterKind::Bool);
        assert_eq!(p.min(), &Value::Bool(false));
        assert_eq!(p.max(), &Value::Bool(true));
        assert_eq!(p.default(), &Value::Bool(false));
        assert_eq!(p.channel().to_string(), "KEQ0970393:1");
        assert!(p.value_list().is_none());
        assert!(p.possible_values().is_none());
    }

    #[test]
    fn readable_follows_read_bit() {
        for (ops, readable) in [(7, true), (4, false), (0, false), (3, true), (1, true)] {
            assert_eq!(state(ops).readable(), readable, "operations {ops}");
        }
    }

    #[test]
    fn writable_follows_write_bit() {
        for (ops, writable) in [(7, true), (4, false), (2, true), (5, false)] {
            assert_eq!(state(ops).writable(), writable, "operations {ops}");
        }
    }

    #[test]
    fn value_not_readable() {
        let p = state(4);
        let err = p.value().unwrap_err();
        assert!(matches!(err, Error::Read(ReadError::NotReadable(_))));
        assert!(err.to_string().contains("can not be read."));
        assert!(p.formatted().is_err());
    }

    #[test]
    fn title_from_name() {
        assert_eq!(state(7).title(), "State");
    }

    #[test]
    fn set_value_not_writable() {
        let mut p = state(5);
        let err = p.set_value(true).unwrap_err();
        assert!(err.to_string().contains("can not be changed"));
        assert!(!p.set(true).unwrap());
        assert_eq!(p.value().unwrap(), &Value::Bool(false));
        assert!(!p.is_dirty());
    }

    #[test]
    fn set_not_writable_wins_over_validation() {
        let mut p = state(5);
        assert!(!p.set("YYY").unwrap());
    }

    #[test]
    fn set_validation_is_hard_failure() {
        let mut p = state(7);
        let err = p.set("false").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        let err = p.set(Value::Null).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::Missing)));
        assert_eq!(p.value().unwrap(), &Value::Bool(false));
    }

    #[test]
    fn set_value_stores_and_marks_dirty() {
        let mut p = state(7);
        assert!(p.last_updated().is_none());
        p.set_value(true).unwrap();
        assert_eq!(p.value().unwrap(), &Value::Bool(true));
        assert!(p.is_dirty());
        assert!(p.last_updated().is_some());
        assert!(p.last_changed().is_some());

        assert_eq!(p.take_pending().as_deref(), Some("true"));
        assert!(!p.is_dirty());
        assert_eq!(p.take_pending(), None);
    }

    #[test]
    fn hub_update_keeps_pending_write() {
        let mut p = parameter(json!({
            "id": "SET_TEMPERATURE", "type": "FLOAT", "operations": 7,
            "min": "4.5", "max": "30.5", "_value": "20.0"
        }));
        p.set_value(22.5).unwrap();
        p.update_from_api("21.0").unwrap();

        assert_eq!(p.value().unwrap(), &Value::Float(21.0));
        assert!(p.is_dirty());
        assert_eq!(p.take_pending().as_deref(), Some("22.50"));
        assert_eq!(p.take_pending(), None);
    }

    #[test]
    fn same_value_does_not_touch_last_changed() {
        let mut p = state(7);
        p.set_value(true).unwrap();
        let changed = p.last_changed();
        p.set_value(true).unwrap();
        assert_eq!(p.last_changed(), changed);
        assert!(p.last_updated() >= changed);
    }

    #[test]
    fn set_to_default() {
        let mut p = state(7);
        p.set_value(true).unwrap();
        p.set_to_default().unwrap();
        assert_eq!(p.value().unwrap(), p.default());
    }

    #[test]
    fn formatted_unit_rules() {
        let mut descriptor = json!({
            "id": "STATE", "type": "BOOL", "operations": 7, "_value": "0"
        });
        assert_eq!(parameter(descriptor.clone()).formatted().unwrap(), "0");
        descriptor["unit"] = json!("X");
        assert_eq!(parameter(descriptor.clone()).formatted().unwrap(), "0 X");
        descriptor["unit"] = json!("%");
        assert_eq!(parameter(descriptor).formatted().unwrap(), "0%");
    }

    #[test]
    fn display_and_bytes() {
        let p = state(7);
        assert_eq!(p.to_string(), "0");
        assert_eq!(p.to_bytes(), b"0".to_vec());
    }

    #[test]
    fn update_from_api_is_not_dirty() {
        let mut p = state(5);
        p.update_from_api("1").unwrap();
        assert_eq!(p.value().unwrap(), &Value::Bool(true));
        assert!(!p.is_dirty());
        assert!(matches!(p.update_from_api("on"), Err(Error::Decode(_))));
        assert_eq!(p.value().unwrap(), &Value::Bool(true));
    }

    #[test]
    fn unknown_type() {
        let descriptor =
            ParameterDescriptor::from_json(r#"{"id": "X", "type": "DOUBLE"}"#).unwrap();
        let err = Parameter::from_descriptor("A:1".parse().unwrap(), descriptor).unwrap_err();
        assert!(matches!(err, Error::Descriptor(_)));
    }

    #[test]
    fn undecodable_field() {
        let descriptor = ParameterDescriptor::from_json(
            r#"{"id": "VALVE_STATE", "type": "INTEGER", "max": "99.5"}"#,
        )
        .unwrap();
        let err = Parameter::from_descriptor("A:1".parse().unwrap(), descriptor).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
