// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ccu_params` library.
//!
//! Reading, writing, validating and decoding parameter values each have
//! their own error type. They all convert into the top-level [`enum@Error`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The parameter value can not be read.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The parameter value can not be changed.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// A value was rejected by the parameter's validator.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A wire string could not be decoded into a native value.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A parameter descriptor is malformed.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    /// No parameter with this name exists on the channel.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
}

impl Error {
    /// Returns `true` for errors that a batch update may skip over.
    ///
    /// Only writes to non-writable parameters qualify; everything else
    /// points at a bad value and must reach the caller.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}

/// Reading a parameter that is not readable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The READ operation bit is not set.
    #[error("The value of the parameter \"{0}\" can not be read.")]
    NotReadable(String),

    /// Actions are triggers without a stored state.
    #[error("The action \"{0}\" is write-only and can not be read.")]
    WriteOnly(String),
}

/// Writing a parameter that is not writable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The value of the parameter \"{parameter}\" can not be changed.")]
pub struct WriteError {
    /// Id of the parameter.
    pub parameter: String,
}

/// A native value that does not satisfy a parameter's type or bounds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The value is absent.
    #[error("a value is required, got null")]
    Missing,

    /// The value has the wrong native type.
    #[error("expected {expected}, got {actual}")]
    WrongType {
        /// Description of the accepted type.
        expected: &'static str,
        /// Kind of the rejected value.
        actual: &'static str,
    },

    /// The value lies below the parameter minimum.
    #[error("value {actual} is below the minimum of {min}")]
    BelowMinimum {
        /// Inclusive lower bound.
        min: String,
        /// The rejected value.
        actual: String,
    },

    /// The value lies above the parameter maximum.
    #[error("value {actual} is above the maximum of {max}")]
    AboveMaximum {
        /// Inclusive upper bound.
        max: String,
        /// The rejected value.
        actual: String,
    },

    /// The value is not a number.
    #[error("value is not a number")]
    NotANumber,
}

/// A wire string that can not be converted to the parameter's native type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("can not decode {raw:?} as {expected}")]
pub struct DecodeError {
    /// The raw wire string (or JSON rendering of a descriptor field).
    pub raw: String,
    /// Name of the target type.
    pub expected: &'static str,
}

impl DecodeError {
    pub(crate) fn new(raw: impl Into<String>, expected: &'static str) -> Self {
        Self {
            raw: raw.into(),
            expected,
        }
    }
}

/// Errors in the raw descriptor mapping a parameter is built from.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The descriptor could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The `type` field names no known parameter type.
    #[error("unknown parameter type: {0}")]
    UnknownType(String),

    /// A channel address is not of the form `DEVICE:INDEX`.
    #[error("invalid channel address: {0}")]
    InvalidChannelAddress(String),

    /// A descriptor field holds a value of an unexpected kind.
    #[error("invalid field {field}: {message}")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// Description of the problem.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
