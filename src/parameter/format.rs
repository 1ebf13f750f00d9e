// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human readable rendering of parameter values and names.

use crate::parameter::codec::fixed2;
use crate::types::Value;

/// Renders a value as its canonical text.
///
/// Booleans become `"0"`/`"1"`, floats get two decimals.
pub(crate) fn canonical(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => fixed2(*f),
        Value::String(s) => s.clone(),
    }
}

/// Renders an ENUM ordinal as its label.
///
/// Ordinals outside the list fall back to the decimal text.
pub(crate) fn enum_label(value: &Value, value_list: &[String]) -> String {
    value
        .as_i64()
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| value_list.get(i))
        .cloned()
        .unwrap_or_else(|| canonical(value))
}

/// Appends the unit to a rendered value.
///
/// Percent signs attach directly, other units are separated by a space.
pub(crate) fn with_unit(text: String, unit: &str) -> String {
    match unit {
        "" => text,
        "%" => text + unit,
        _ => format!("{text} {unit}"),
    }
}

/// Turns an upper-case parameter name into a display title.
///
/// Underscores become spaces and every letter run is title-cased:
/// the first letter after a non-letter is upper case, the rest lower case.
pub(crate) fn title(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_values() {
        assert_eq!(canonical(&Value::Bool(false)), "0");
        assert_eq!(canonical(&Value::Bool(true)), "1");
        assert_eq!(canonical(&Value::Integer(-100)), "-100");
        assert_eq!(canonical(&Value::Float(1.0)), "1.00");
        assert_eq!(canonical(&Value::from("x")), "x");
        assert_eq!(canonical(&Value::Null), "");
    }

    #[test]
    fn enum_labels() {
        let list = vec!["NO_ERROR".to_string(), "VALVE_DRIVE_BLOCKED".to_string()];
        assert_eq!(enum_label(&Value::Integer(1), &list), "VALVE_DRIVE_BLOCKED");
        assert_eq!(enum_label(&Value::Integer(5), &list), "5");
        assert_eq!(enum_label(&Value::Integer(-1), &list), "-1");
    }

    #[test]
    fn unit_suffix() {
        assert_eq!(with_unit("0".into(), ""), "0");
        assert_eq!(with_unit("0".into(), "X"), "0 X");
        assert_eq!(with_unit("0".into(), "%"), "0%");
        assert_eq!(with_unit("1.00".into(), "°C"), "1.00 °C");
    }

    #[test]
    fn titles() {
        assert_eq!(title("STATE"), "State");
        assert_eq!(title("X_XABC"), "X Xabc");
        assert_eq!(title("PARTY_MODE_SUBMIT"), "Party Mode Submit");
        assert_eq!(title("LEVEL_2ND"), "Level 2Nd");
        assert_eq!(title("ÜBER_TEMP"), "Über Temp");
        assert_eq!(title(""), "");
    }
}
