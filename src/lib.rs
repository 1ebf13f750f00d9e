// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ccu_params` - Typed parameters of Homematic CCU devices.
//!
//! Devices connected to a CCU expose their state as parameters: switch
//! states, set-point temperatures, valve positions, error codes, key
//! presses. The CCU API transports all of them as strings. This library
//! turns those descriptions and strings into typed values, validates new
//! values before they are sent, and renders values for display.
//!
//! # Supported Parameter Types
//!
//! - **BOOL**: On/off states, reported as `"0"`/`"1"`, written as `"true"`/`"false"`
//! - **INTEGER**: Whole numbers within `[min, max]`
//! - **FLOAT**: Decimal numbers within `[min, max]`, written with two decimals
//! - **ENUM**: Ordinals into a list of labels
//! - **STRING**: Free text
//! - **ACTION**: Write-only triggers such as key presses
//!
//! Talking to the CCU itself (transport, sessions, device discovery) is
//! left to the caller.
//!
//! # Quick Start
//!
//! ```
//! use ccu_params::{Channel, ParameterDescriptor, Value};
//!
//! fn main() -> ccu_params::Result<()> {
//!     let mut channel = Channel::new("LEQ0000001:0".parse()?, "CLIMATECONTROL_VENT_DRIVE");
//!
//!     // Descriptions as delivered by the CCU API
//!     channel.add_parameter(ParameterDescriptor::from_json(r#"{
//!         "id": "VALVE_STATE", "name": "VALVE_STATE", "type": "INTEGER",
//!         "operations": 5, "unit": "%", "min": "0", "max": "99", "_value": "42"
//!     }"#)?)?;
//!     channel.add_parameter(ParameterDescriptor::from_json(r#"{
//!         "id": "ERROR", "name": "ERROR", "type": "ENUM", "operations": 5,
//!         "min": "0", "max": "2", "_value": "0",
//!         "value_list": ["NO_ERROR", "VALVE_DRIVE_BLOCKED", "VALVE_DRIVE_LOOSE"]
//!     }"#)?)?;
//!
//!     let valve = channel.get("VALVE_STATE").expect("described above");
//!     assert_eq!(valve.title(), "Valve State");
//!     assert_eq!(valve.formatted()?, "42%");
//!     assert_eq!(valve.value()?, &Value::Integer(42));
//!
//!     // Events reported by the CCU
//!     channel.apply_api_values([("ERROR", "1")])?;
//!     assert_eq!(channel.get("ERROR").expect("described above").formatted()?, "VALVE_DRIVE_BLOCKED");
//!
//!     // Read-only parameters refuse writes
//!     let valve = channel.get_mut("VALVE_STATE").expect("described above");
//!     assert!(valve.set_value(50).is_err());
//!     assert!(!valve.set(50)?);
//!
//!     Ok(())
//! }
//! ```

mod channel;
pub mod error;
pub mod parameter;
pub mod types;

pub use channel::{Channel, PendingWrite, SharedChannel};
pub use error::{
    DecodeError, DescriptorError, Error, ReadError, Result, ValidationError, WriteError,
};
pub use parameter::{Parameter, ParameterDescriptor, ParameterKind};
pub use types::{ChannelAddress, Operations, ParameterFlags, ParameterType, Value};
