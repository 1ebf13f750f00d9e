// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel address type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// Address of a device channel, e.g. `KEQ0970393:1`.
///
/// Parameters keep this address as their link back to the owning
/// [`Channel`](crate::Channel) instead of a reference to it.
///
/// # Examples
///
/// ```
/// use ccu_params::ChannelAddress;
///
/// let address: ChannelAddress = "KEQ0970393:1".parse().unwrap();
/// assert_eq!(address.device_address(), "KEQ0970393");
/// assert_eq!(address.index(), 1);
///
/// assert!("KEQ0970393".parse::<ChannelAddress>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelAddress {
    address: String,
    index: u32,
}

impl ChannelAddress {
    /// Creates an address from a device address and a channel index.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError::InvalidChannelAddress` if the device
    /// address is empty or contains a `:`.
    pub fn new(device_address: &str, index: u32) -> Result<Self, DescriptorError> {
        if device_address.is_empty() || device_address.contains(':') {
            return Err(DescriptorError::InvalidChannelAddress(format!(
                "{device_address}:{index}"
            )));
        }
        Ok(Self {
            address: format!("{device_address}:{index}"),
            index,
        })
    }

    /// Returns the address of the device the channel belongs to.
    #[must_use]
    pub fn device_address(&self) -> &str {
        self.address
            .rsplit_once(':')
            .map_or(self.address.as_str(), |(device, _)| device)
    }

    /// Returns the channel index on the device.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the full address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl FromStr for ChannelAddress {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DescriptorError::InvalidChannelAddress(s.to_string());
        let (device, index) = s.split_once(':').ok_or_else(invalid)?;
        let index = index.parse::<u32>().map_err(|_| invalid())?;
        Self::new(device, index).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ChannelAddress {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChannelAddress> for String {
    fn from(address: ChannelAddress) -> Self {
        address.address
    }
}

impl fmt::Display for ChannelAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let address: ChannelAddress = "KEQ0970393:12".parse().unwrap();
        assert_eq!(address.device_address(), "KEQ0970393");
        assert_eq!(address.index(), 12);
        assert_eq!(address.to_string(), "KEQ0970393:12");
    }

    #[test]
    fn parse_invalid() {
        for bad in ["", "KEQ0970393", ":1", "KEQ0970393:", "KEQ0970393:x", "A:B:1"] {
            assert!(bad.parse::<ChannelAddress>().is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn new_matches_parse() {
        let built = ChannelAddress::new("KEQ0714972", 0).unwrap();
        let parsed: ChannelAddress = "KEQ0714972:0".parse().unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn serde_as_string() {
        let address: ChannelAddress = serde_json::from_str("\"LEQ0000001:3\"").unwrap();
        assert_eq!(address.index(), 3);
        assert_eq!(serde_json::to_string(&address).unwrap(), "\"LEQ0000001:3\"");
        assert!(serde_json::from_str::<ChannelAddress>("\"nope\"").is_err());
    }
}
