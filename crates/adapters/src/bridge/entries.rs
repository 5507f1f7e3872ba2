// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry-by-entry decoding of list payloads
//!
//! A missing or `null` list reads as empty. An entry that fails to decode
//! is logged and dropped so the rest of the list survives.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Decode each raw entry on its own, keeping the ones that parse
pub(crate) fn decode_entries<T: DeserializeOwned>(source: &str, raw: Option<Vec<Value>>) -> Vec<T> {
    raw.unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(source, index, error = %e, "dropping malformed entry");
                None
            }
        })
        .collect()
}

/// `deserialize_with` form of [`decode_entries`] for world file fields
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(decode_entries("world file", raw))
}

#[cfg(test)]
#[path = "entries_tests.rs"]
mod tests;
