// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bitmask attributes of a parameter description.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operations supported by a parameter.
///
/// The CCU reports these as a bitmask: 1 = read, 2 = write, 4 = event.
///
/// # Examples
///
/// ```
/// use ccu_params::Operations;
///
/// let ops = Operations::new(5);
/// assert!(ops.is_readable());
/// assert!(!ops.is_writable());
/// assert!(ops.emits_events());
/// assert_eq!(ops.to_string(), "r-e");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operations(u8);

impl Operations {
    /// The value can be read.
    pub const READ: u8 = 0x01;

    /// The value can be written.
    pub const WRITE: u8 = 0x02;

    /// The device sends events when the value changes.
    pub const EVENT: u8 = 0x04;

    /// Creates operations from the raw bitmask.
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Returns whether the read bit is set.
    #[must_use]
    pub const fn is_readable(&self) -> bool {
        self.0 & Self::READ != 0
    }

    /// Returns whether the write bit is set.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        self.0 & Self::WRITE != 0
    }

    /// Returns whether the event bit is set.
    #[must_use]
    pub const fn emits_events(&self) -> bool {
        self.0 & Self::EVENT != 0
    }
}

impl From<u8> for Operations {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Operations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = if self.is_readable() { 'r' } else { '-' };
        let w = if self.is_writable() { 'w' } else { '-' };
        let e = if self.emits_events() { 'e' } else { '-' };
        write!(f, "{r}{w}{e}")
    }
}

/// Flags of a parameter description.
///
/// Only the bits the CCU documents get a predicate; unknown bits are kept
/// as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterFlags(u16);

impl ParameterFlags {
    /// Shown in user interfaces.
    pub const VISIBLE: u16 = 0x01;

    /// Used internally by the CCU only.
    pub const INTERNAL: u16 = 0x02;

    /// Changing the value affects device behaviour in a way that is not
    /// reflected by the value itself.
    pub const TRANSFORM: u16 = 0x04;

    /// Service message (e.g. low battery, unreachable).
    pub const SERVICE: u16 = 0x08;

    /// Service message that stays set until acknowledged.
    pub const STICKY: u16 = 0x10;

    /// Creates flags from the raw bitmask.
    #[must_use]
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Returns whether the visible flag is set.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.0 & Self::VISIBLE != 0
    }

    /// Returns whether the internal flag is set.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        self.0 & Self::INTERNAL != 0
    }

    /// Returns whether the transform flag is set.
    #[must_use]
    pub const fn is_transform(&self) -> bool {
        self.0 & Self::TRANSFORM != 0
    }

    /// Returns whether the service flag is set.
    #[must_use]
    pub const fn is_service(&self) -> bool {
        self.0 & Self::SERVICE != 0
    }

    /// Returns whether the sticky flag is set.
    #[must_use]
    pub const fn is_sticky(&self) -> bool {
        self.0 & Self::STICKY != 0
    }
}

impl From<u16> for ParameterFlags {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_bits() {
        for bits in 0..8u8 {
            let ops = Operations::new(bits);
            assert_eq!(ops.is_readable(), bits & 1 != 0);
            assert_eq!(ops.is_writable(), bits & 2 != 0);
            assert_eq!(ops.emits_events(), bits & 4 != 0);
        }
    }

    #[test]
    fn operations_display() {
        assert_eq!(Operations::new(7).to_string(), "rwe");
        assert_eq!(Operations::new(2).to_string(), "-w-");
        assert_eq!(Operations::default().to_string(), "---");
    }

    #[test]
    fn flags_predicates() {
        let flags = ParameterFlags::new(ParameterFlags::VISIBLE | ParameterFlags::SERVICE);
        assert!(flags.is_visible());
        assert!(flags.is_service());
        assert!(!flags.is_internal());
        assert!(!flags.is_sticky());
        assert!(!flags.is_transform());
        assert_eq!(flags.bits(), 0x09);
    }
}
