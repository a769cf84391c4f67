// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Name/value pair flattening.

use crate::action::FieldValue;
use crate::entry_list::Entry;

/// Expands entries into flat `(name, value)` string pairs.
///
/// A list entry yields one pair per element, all sharing the entry's name.
/// Order is entry order, then element order. Identical pairs are not merged.
pub fn to_name_value_pairs(entries: &[Entry]) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry.value() {
            FieldValue::List(values) => {
                pairs.extend(
                    values
                        .iter()
                        .map(|value| (entry.name().to_string(), value.to_string())),
                );
            }
            FieldValue::Scalar(value) => {
                pairs.push((entry.name().to_string(), value.to_string()));
            }
        }
    }

    pairs
}
