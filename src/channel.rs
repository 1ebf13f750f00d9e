// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channels owning their parameters.
//!
//! A [`Channel`] owns the parameters of one device channel and offers the
//! batch operations a hub client needs: writing several values at once,
//! applying values reported by the hub, and collecting the locally
//! changed values that still have to be pushed.
//!
//! Channels do no locking of their own. Wrap them in a [`SharedChannel`]
//! to use one from several threads.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::parameter::{Parameter, ParameterDescriptor};
use crate::types::{ChannelAddress, Value};

/// A channel behind one read/write lock.
pub type SharedChannel = Arc<RwLock<Channel>>;

/// A locally set value waiting to be written to the hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    /// Address of the channel.
    pub channel: ChannelAddress,
    /// Id of the parameter.
    pub parameter: String,
    /// Wire form of the new value.
    pub api_value: String,
}

/// The parameters of one device channel.
///
/// Parameters are looked up by name and iterated in the order they were
/// added.
///
/// # Examples
///
/// ```
/// use ccu_params::{Channel, ParameterDescriptor, Value};
///
/// let mut channel = Channel::new("KEQ0970393:1".parse().unwrap(), "SWITCH");
/// channel.add_parameter(ParameterDescriptor::from_json(
///     r#"{"id": "STATE", "type": "BOOL", "operations": 7, "_value": "0"}"#,
/// ).unwrap()).unwrap();
/// channel.add_parameter(ParameterDescriptor::from_json(
///     r#"{"id": "WORKING", "type": "BOOL", "operations": 5, "_value": "0"}"#,
/// ).unwrap()).unwrap();
///
/// let skipped = channel.set_values([("STATE", true), ("WORKING", true)]).unwrap();
/// assert_eq!(skipped, vec!["WORKING".to_string()]);
///
/// let pending = channel.take_pending_writes();
/// assert_eq!(pending.len(), 1);
/// assert_eq!(pending[0].api_value, "true");
/// ```
#[derive(Debug, Clone)]
pub struct Channel {
    /// Channel address, shared with every parameter.
    address: ChannelAddress,
    /// Channel type as reported by the CCU, e.g. `CLIMATECONTROL_REGULATOR`.
    channel_type: String,
    /// Parameters in insertion order.
    parameters: Vec<Parameter>,
    /// Position in `parameters`, keyed by parameter name.
    index: HashMap<String, usize>,
}

impl Channel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new(address: ChannelAddress, channel_type: impl Into<String>) -> Self {
        Self {
            address,
            channel_type: channel_type.into(),
            parameters: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a channel with parameters built from `descriptors`.
    ///
    /// # Errors
    ///
    /// Returns the first error of [`Parameter::from_descriptor`].
    pub fn from_descriptors<I>(
        address: ChannelAddress,
        channel_type: impl Into<String>,
        descriptors: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = ParameterDescriptor>,
    {
        let mut channel = Self::new(address, channel_type);
        for descriptor in descriptors {
            channel.add_parameter(descriptor)?;
        }
        Ok(channel)
    }

    /// Moves the channel behind a lock for shared use.
    #[must_use]
    pub fn into_shared(self) -> SharedChannel {
        Arc::new(RwLock::new(self))
    }

    /// Returns the channel address.
    #[must_use]
    pub fn address(&self) -> &ChannelAddress {
        &self.address
    }

    /// Returns the channel type.
    #[must_use]
    pub fn channel_type(&self) -> &str {
        &self.channel_type
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Builds a parameter of this channel and adds it.
    ///
    /// A parameter with the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Parameter::from_descriptor`].
    pub fn add_parameter(&mut self, descriptor: ParameterDescriptor) -> Result<&mut Parameter> {
        let parameter = Parameter::from_descriptor(self.address.clone(), descriptor)?;
        let name = parameter.name().to_string();

        let position = if let Some(&position) = self.index.get(&name) {
            tracing::debug!(channel = %self.address, parameter = %name, "Replacing parameter");
            self.parameters[position] = parameter;
            position
        } else {
            self.parameters.push(parameter);
            self.index.insert(name, self.parameters.len() - 1);
            self.parameters.len() - 1
        };
        Ok(&mut self.parameters[position])
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&i| &self.parameters[i])
    }

    /// Returns the parameter with the given name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.index.get(name).map(|&i| &mut self.parameters[i])
    }

    /// Iterates over all parameters in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns whether the channel has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    // =========================================================================
    // Batch Updates
    // =========================================================================

    /// Writes several values at once.
    ///
    /// Every value is validated before the first one is stored, so a
    /// rejected value leaves the channel unchanged. Parameters that are not
    /// writable are skipped; their names are returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownParameter` for a name without parameter and
    /// `Error::Validation` for a value a writable parameter rejects.
    pub fn set_values<I, K, V>(&mut self, updates: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let updates = self.resolve(updates, |_, value| Ok(value.into()))?;

        for (position, value) in &updates {
            let parameter = &self.parameters[*position];
            if parameter.writable() {
                parameter.validate(value)?;
            }
        }

        let mut skipped = Vec::new();
        for (position, value) in updates {
            let parameter = &mut self.parameters[position];
            if !parameter.set(value)? {
                skipped.push(parameter.name().to_string());
            }
        }
        if !skipped.is_empty() {
            tracing::debug!(
                channel = %self.address,
                skipped = skipped.len(),
                "Skipped parameters that are not writable"
            );
        }
        Ok(skipped)
    }

    /// Applies wire values reported by the hub.
    ///
    /// All values are decoded before any is stored.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownParameter` for a name without parameter and
    /// `Error::Decode` for a value that does not decode.
    pub fn apply_api_values<I, K, S>(&mut self, updates: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: AsRef<str>,
    {
        let updates = self.resolve(updates, |parameter, raw| {
            Ok(parameter.from_api_value(raw.as_ref())?)
        })?;
        for (position, value) in updates {
            self.parameters[position].apply_api_value(value);
        }
        Ok(())
    }

    /// Collects the locally set values that have not been pushed yet.
    pub fn take_pending_writes(&mut self) -> Vec<PendingWrite> {
        let mut pending = Vec::new();
        for parameter in &mut self.parameters {
            if let Some(api_value) = parameter.take_pending() {
                pending.push(PendingWrite {
                    channel: self.address.clone(),
                    parameter: parameter.id().to_string(),
                    api_value,
                });
            }
        }
        pending
    }

    fn resolve<I, K, T, F>(&self, updates: I, mut convert: F) -> Result<Vec<(usize, Value)>>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        F: FnMut(&Parameter, T) -> Result<Value>,
    {
        updates
            .into_iter()
            .map(|(name, input)| {
                let name = name.as_ref();
                let position = *self
                    .index
                    .get(name)
                    .ok_or_else(|| Error::UnknownParameter(name.to_string()))?;
                Ok((position, convert(&self.parameters[position], input)?))
            })
            .collect()
    }
}
