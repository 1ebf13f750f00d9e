// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parameter type discriminator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// The type of a parameter as named by the CCU.
///
/// The type decides how wire strings are decoded and encoded, which native
/// values pass validation and how values are rendered.
///
/// # Examples
///
/// ```
/// use ccu_params::ParameterType;
///
/// let ty: ParameterType = "FLOAT".parse().unwrap();
/// assert_eq!(ty, ParameterType::Float);
/// assert_eq!(ty.as_str(), "FLOAT");
/// assert!("DOUBLE".parse::<ParameterType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParameterType {
    /// On/off state.
    Bool,
    /// Whole number within `[min, max]`.
    Integer,
    /// Decimal number within `[min, max]`.
    Float,
    /// Ordinal into a list of labels.
    Enum,
    /// Free text.
    String,
    /// Write-only trigger, e.g. a key press.
    Action,
}

impl ParameterType {
    /// Returns the name used by the CCU.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Enum => "ENUM",
            Self::String => "STRING",
            Self::Action => "ACTION",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOOL" => Ok(Self::Bool),
            "INTEGER" => Ok(Self::Integer),
            "FLOAT" => Ok(Self::Float),
            "ENUM" => Ok(Self::Enum),
            "STRING" => Ok(Self::String),
            "ACTION" => Ok(Self::Action),
            _ => Err(DescriptorError::UnknownType(s.to_string())),
        }
    }
}
