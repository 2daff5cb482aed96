// ABOUTME: Wire-format deserialization helpers for backend quirks
// ABOUTME: Accepts DRF decimal strings as numbers and mixed integer/UUID ids as strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

use serde::{Deserialize, Deserializer};

/// Decimal field that may arrive as a JSON number or a DRF decimal string
#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

/// Deserialize a decimal field from either a number or a string like `"150.00"`
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Decimal::deserialize(deserializer)? {
        Decimal::Number(value) => Ok(value),
        Decimal::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Id that may arrive as a JSON integer or a string (UUID or otherwise)
#[derive(Deserialize)]
#[serde(untagged)]
enum Id {
    Number(i64),
    Text(String),
}

/// Deserialize an id from either an integer or a string key
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Id::deserialize(deserializer)? {
        Id::Number(value) => Ok(value.to_string()),
        Id::Text(text) => Ok(text),
    }
}

/// Deserialize an optional id, mapping JSON `null` to `None`
pub fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<Id>::deserialize(deserializer)?;
    Ok(id.map(|id| match id {
        Id::Number(value) => value.to_string(),
        Id::Text(text) => text,
    }))
}
