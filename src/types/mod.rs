// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value and attribute types for CCU parameters.
//!
//! # Types
//!
//! - [`Value`] - Native value of a parameter (bool, integer, float, string)
//! - [`ParameterType`] - The `type` discriminator of a parameter description
//! - [`Operations`] - Read/write/event bitmask
//! - [`ParameterFlags`] - Visibility and behaviour flags
//! - [`ChannelAddress`] - Address of the channel owning a parameter

mod channel_address;
mod flags;
mod parameter_type;
mod value;

pub use channel_address::ChannelAddress;
pub use flags::{Operations, ParameterFlags};
pub use parameter_type::ParameterType;
pub use value::Value;
