/*
record.rs

Copyright 2025 Hervé Quatremain

This file is part of Codiac.

Codiac is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Codiac is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Codiac. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Encode puzzles into flat records, and decode storage records back into puzzles.
//!
//! A [`Record`] is a flat map of string keys to string values, with a mandatory `type` key that
//! names the puzzle variant. Lists and nested structures are stored as their JSON text.
//!
//! There are two record shapes, selected by [`EncodeMode`]:
//!
//! * [`EncodeMode::Storage`] is the archival shape. It carries every field of the puzzle, the
//!   `used` flag, and the `length` of the text, but not the cipher map and the hints: they are
//!   generated again when the record is decoded.
//!
//! * [`EncodeMode::PlayerFacing`] is what a player receives: the category, the text, the cipher
//!   map, one hint per distinct letter, and the variant fields grouped under `other_info` with
//!   human-readable labels. It has no `used` flag, and so it cannot be decoded.
//!
//! Values that are empty or absent are not written to the record.

use clap::ValueEnum;
use log::debug;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::errors::PuzzleError;
use crate::generator::context::CipherContext;
use crate::puzzle::Puzzle;
use crate::registry::{self, RegistryEntry};

/// Key of the variant discriminator.
pub const TYPE_KEY: &str = "type";

/// Kind name used in errors for records that have no `type`.
const UNTYPED: &str = "untyped";

/// Record shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum EncodeMode {
    /// Archival shape, which [`decode`] accepts.
    #[default]
    Storage,

    /// One-way shape for the players.
    PlayerFacing,
}

/// Flat record of string values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Create an empty [`Record`] object.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Create a [`Record`] object from (key, value) pairs. Empty values are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record: Record = Self::new();
        for (k, v) in pairs {
            record.insert(k, v);
        }
        record
    }

    /// Set a value. An empty value removes the key instead.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key: String = key.into();
        let value: String = value.into();
        if value.is_empty() {
            self.fields.remove(&key);
        } else {
            self.fields.insert(key, value);
        }
    }

    /// Return the value of a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Whether the record has the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Return the number of keys, including `type`.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no key.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the keys and values, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return the variant discriminator.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::MalformedRecord`] if the record has no `type`.
    pub fn type_name(&self) -> Result<&str, PuzzleError> {
        self.get(TYPE_KEY)
            .ok_or_else(|| PuzzleError::malformed(UNTYPED, TYPE_KEY))
    }

    /// Return the value of a key that the decoder needs.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::MalformedRecord`] if the key is missing.
    pub fn require(&self, key: &str) -> Result<&str, PuzzleError> {
        self.get(key).ok_or_else(|| {
            PuzzleError::malformed(self.get(TYPE_KEY).unwrap_or(UNTYPED), key)
        })
    }

    /// Return the `used` flag.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::MalformedRecord`] if the flag is missing, which is the
    /// case of the player-facing records, and [`PuzzleError::InvalidFieldValue`] if it is not a
    /// boolean.
    pub fn used(&self) -> Result<bool, PuzzleError> {
        registry::parse_bool("used", self.require("used")?)
    }
}

/// Serialize a [`Record`] object as a JSON object, with the `type` key first.
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        if let Some(t) = self.fields.get(TYPE_KEY) {
            map.serialize_entry(TYPE_KEY, t)?;
        }
        for (k, v) in self.fields.iter().filter(|(k, _)| k.as_str() != TYPE_KEY) {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Value of a record being deserialized, converted to text.
///
/// Records written by other tools sometimes carry booleans, numbers, or nulls instead of
/// strings. Scalars are converted to their text, nested values to their JSON text, and nulls are
/// dropped.
struct TextValue(Option<String>);

impl<'de> Deserialize<'de> for TextValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextValueVisitor;

        impl<'de> Visitor<'de> for TextValueVisitor {
            type Value = TextValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, a number, a boolean, or null")
            }

            fn visit_str<E>(self, value: &str) -> Result<TextValue, E>
            where
                E: de::Error,
            {
                Ok(TextValue(Some(value.to_string())))
            }

            fn visit_string<E>(self, value: String) -> Result<TextValue, E>
            where
                E: de::Error,
            {
                Ok(TextValue(Some(value)))
            }

            fn visit_bool<E>(self, value: bool) -> Result<TextValue, E>
            where
                E: de::Error,
            {
                Ok(TextValue(Some(value.to_string())))
            }

            fn visit_i64<E>(self, value: i64) -> Result<TextValue, E>
            where
                E: de::Error,
            {
                Ok(TextValue(Some(value.to_string())))
            }

            fn visit_u64<E>(self, value: u64) -> Result<TextValue, E>
            where
                E: de::Error,
            {
                Ok(TextValue(Some(value.to_string())))
            }

            fn visit_f64<E>(self, value: f64) -> Result<TextValue, E>
            where
                E: de::Error,
            {
                Ok(TextValue(Some(value.to_string())))
            }

            fn visit_unit<E>(self) -> Result<TextValue, E>
            where
                E: de::Error,
            {
                Ok(TextValue(None))
            }

            fn visit_none<E>(self) -> Result<TextValue, E>
            where
                E: de::Error,
            {
                Ok(TextValue(None))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<TextValue, D::Error>
            where
                D: Deserializer<'de>,
            {
                TextValue::deserialize(deserializer)
            }

            fn visit_seq<V>(self, seq: V) -> Result<TextValue, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let value: Value = Value::deserialize(SeqAccessDeserializer::new(seq))?;
                Ok(TextValue(Some(value.to_string())))
            }

            fn visit_map<V>(self, map: V) -> Result<TextValue, V::Error>
            where
                V: MapAccess<'de>,
            {
                let value: Value = Value::deserialize(MapAccessDeserializer::new(map))?;
                Ok(TextValue(Some(value.to_string())))
            }
        }

        deserializer.deserialize_any(TextValueVisitor)
    }
}

/// Deserialize a [`Record`] object from a JSON object.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a puzzle record")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Record, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut record: Record = Record::new();
                let mut seen: HashSet<String> = HashSet::new();
                while let Some(key) = map.next_key::<String>()? {
                    if !seen.insert(key.clone()) {
                        return Err(de::Error::custom(format!("duplicate field `{key}`")));
                    }
                    let value: TextValue = map.next_value()?;
                    if let Some(v) = value.0 {
                        record.insert(key, v);
                    }
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Turn a field name into a label: `release_date` becomes `Release Date`.
pub fn label(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Encode a puzzle into a record of the given shape.
pub fn encode(puzzle: &Puzzle, mode: EncodeMode) -> Record {
    let mut record: Record = Record::new();
    record.insert(TYPE_KEY, puzzle.kind().name());
    record.insert("category", puzzle.category());
    record.insert("text_to_encrypt", puzzle.text_to_encrypt());

    match mode {
        EncodeMode::Storage => {
            record.insert("length", puzzle.length().to_string());
            record.insert("used", puzzle.used().to_string());
            for (name, value) in puzzle.details().fields() {
                if let Some(v) = value {
                    record.insert(name, v);
                }
            }
        }
        EncodeMode::PlayerFacing => {
            record.insert("cipher_map", json!(puzzle.cipher_map()).to_string());
            let hints: Vec<Value> = puzzle.distinct_hints().iter().map(|h| json!(h)).collect();
            record.insert("hints", Value::Array(hints).to_string());

            let mut other_info: Map<String, Value> = Map::new();
            for (name, value) in puzzle.details().fields() {
                if let Some(v) = value.filter(|v| !v.is_empty()) {
                    other_info.insert(label(name), Value::String(v.to_string()));
                }
            }
            if !other_info.is_empty() {
                record.insert("other_info", Value::Object(other_info).to_string());
            }
        }
    }
    record
}

/// Encode a puzzle in the storage shape, plus its cipher map and all its hints.
///
/// Used to freeze a puzzle for a given day, so that the puzzle published that day is exactly the
/// one that was reviewed.
pub fn encode_frozen(puzzle: &Puzzle) -> Record {
    let mut record: Record = encode(puzzle, EncodeMode::Storage);
    record.insert("cipher_map", json!(puzzle.cipher_map()).to_string());
    let hints: Vec<Value> = puzzle.hints().iter().map(|h| json!(h)).collect();
    record.insert("hints", Value::Array(hints).to_string());
    record
}

/// Rebuild a puzzle from a storage record.
///
/// The cipher map and the hints are generated again, so they differ from the ones of the puzzle
/// that was encoded.
///
/// # Errors
///
/// The function returns [`PuzzleError::UnknownPuzzleType`] if the `type` is not registered, and
/// [`PuzzleError::MalformedRecord`] if the record misses a field, such as `type` or `used`.
pub fn decode(record: &Record, ctx: &mut CipherContext<'_>) -> Result<Puzzle, PuzzleError> {
    let entry: &RegistryEntry = registry::lookup(record.type_name()?)?;
    let puzzle: Puzzle = (entry.decode)(record, ctx)?;
    debug!(
        "Decoded a {} puzzle ({} characters)",
        entry.kind,
        puzzle.length()
    );
    Ok(puzzle)
}
