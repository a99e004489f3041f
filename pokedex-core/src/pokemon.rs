//! The catalogue record for a single Pokemon species.
//!
//! On disk (the JSON catalogue) a record is flat: `id`, `name`, and one key
//! per regional dex column holding either an entry number or `null`. In memory
//! the per-dex numbers live in a map so callers never enumerate columns.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::dex::RegionalDex;

/// Present regional dex numbers, keyed by dex. Absent dexes have no entry.
pub type DexNumbers = BTreeMap<RegionalDex, u32>;

/// Errors from converting a raw JSON object into a [`Pokemon`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokemonError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' has invalid value {value}")]
    InvalidField { field: String, value: String },
    #[error("Pokemon #{0} has an empty name")]
    EmptyName(u32),
}

/// A national-dex Pokemon with its regional dex entry numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub dex_numbers: DexNumbers,
}

impl Pokemon {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dex_numbers: DexNumbers::new(),
        }
    }

    /// Builder-style setter for a dex number.
    pub fn with_dex(mut self, dex: RegionalDex, number: u32) -> Self {
        self.dex_numbers.insert(dex, number);
        self
    }

    /// Entry number within `dex`, or `None` if this Pokemon is not in it.
    pub fn dex_number(&self, dex: RegionalDex) -> Option<u32> {
        self.dex_numbers.get(&dex).copied()
    }

    pub fn set_dex_number(&mut self, dex: RegionalDex, number: Option<u32>) {
        match number {
            Some(n) => {
                self.dex_numbers.insert(dex, n);
            }
            None => {
                self.dex_numbers.remove(&dex);
            }
        }
    }

    /// True if this Pokemon has an entry in at least one of `dexes`.
    pub fn appears_in_any(&self, dexes: &[RegionalDex]) -> bool {
        dexes.iter().any(|d| self.dex_numbers.contains_key(d))
    }

    /// Convert one flat JSON object into a validated record.
    ///
    /// Keys that are not `id`, `name`, or a dex column are ignored. A dex
    /// value must be `null` or a positive integer.
    pub fn from_json_object(obj: &Map<String, Value>) -> Result<Self, PokemonError> {
        let id_value = obj.get("id").ok_or(PokemonError::MissingField("id"))?;
        let id = positive_u32(id_value).ok_or_else(|| PokemonError::InvalidField {
            field: "id".to_string(),
            value: id_value.to_string(),
        })?;

        let name = match obj.get("name") {
            None | Some(Value::Null) => return Err(PokemonError::MissingField("name")),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(PokemonError::InvalidField {
                    field: "name".to_string(),
                    value: other.to_string(),
                });
            }
        };
        if name.trim().is_empty() {
            return Err(PokemonError::EmptyName(id));
        }

        let mut dex_numbers = DexNumbers::new();
        for &dex in RegionalDex::all() {
            match obj.get(dex.column()) {
                None | Some(Value::Null) => {}
                Some(v) => {
                    let n = positive_u32(v).ok_or_else(|| PokemonError::InvalidField {
                        field: dex.column().to_string(),
                        value: v.to_string(),
                    })?;
                    dex_numbers.insert(dex, n);
                }
            }
        }

        Ok(Self {
            id,
            name,
            dex_numbers,
        })
    }
}

fn positive_u32(v: &Value) -> Option<u32> {
    v.as_u64()
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok())
}

impl Serialize for Pokemon {
    /// Writes the flat catalogue shape with every dex column present.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let all = RegionalDex::all();
        let mut map = serializer.serialize_map(Some(2 + all.len()))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", &self.name)?;
        for dex in all {
            map.serialize_entry(dex.column(), &self.dex_number(*dex))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Pokemon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let obj = value
            .as_object()
            .ok_or_else(|| de::Error::custom(PokemonError::NotAnObject))?;
        Pokemon::from_json_object(obj).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "tests/pokemon_tests.rs"]
mod tests;
