/*
registry.rs

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

//! Registry of the puzzle variants.
//!
//! The set of puzzle variants is closed: [`PuzzleKind`] lists them all, and the static
//! [`REGISTRY`] table associates each variant name with the description of its input fields,
//! a constructor that accepts raw field values (as collected by a form), and a decoder that
//! rebuilds the puzzle from a storage record.
//!
//! Form builders use [`list_variant_names`] and [`required_fields`] to discover what to ask the
//! user without knowing the variants in advance.

use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use strum_macros::{Display, FromRepr, IntoStaticStr};

use crate::errors::PuzzleError;
use crate::generator::context::CipherContext;
use crate::puzzle::Puzzle;
use crate::record::Record;

/// Puzzle variant.
///
/// The variant name is the discriminator stored in the `type` field of the records.
/// The declaration order is the alphabetical order of the names.
#[derive(
    Serialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
#[value(rename_all = "verbatim")]
pub enum PuzzleKind {
    CharacterQuote,
    DirectQuote,
    FamousDocumentQuote,
    GeneralPhrase,
    ListPuzzle,
    Riddle,
    RiddleSolvedInReverse,
    SongLyrics,
}

impl PuzzleKind {
    /// All the variants, in alphabetical order.
    pub const ALL: [PuzzleKind; 8] = [
        PuzzleKind::CharacterQuote,
        PuzzleKind::DirectQuote,
        PuzzleKind::FamousDocumentQuote,
        PuzzleKind::GeneralPhrase,
        PuzzleKind::ListPuzzle,
        PuzzleKind::Riddle,
        PuzzleKind::RiddleSolvedInReverse,
        PuzzleKind::SongLyrics,
    ];

    /// Return the variant for the given discriminator.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::UnknownPuzzleType`] if no variant has that name.
    pub fn from_name(name: &str) -> Result<Self, PuzzleError> {
        Self::ALL
            .iter()
            .find(|k| k.name() == name)
            .copied()
            .ok_or_else(|| PuzzleError::UnknownPuzzleType(name.to_string()))
    }

    /// Return the variant name, which is also the record discriminator.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Return the registry entry of the variant.
    pub fn entry(self) -> &'static RegistryEntry {
        // REGISTRY follows the declaration order of the enum
        &REGISTRY[self as usize]
    }
}

/// Declared type of an input field.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single line of text.
    Text,

    /// Multi-line text, such as a quote or lyrics.
    LongText,

    /// Comma-separated list of items.
    List,

    /// `true` or `false`.
    Bool,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "str"),
            FieldType::LongText => write!(f, "text"),
            FieldType::List => write!(f, "list[str]"),
            FieldType::Bool => write!(f, "bool"),
        }
    }
}

/// Description of an input field of a variant constructor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, as used in the raw field map.
    pub name: &'static str,

    /// Declared type.
    pub field_type: FieldType,

    /// Default value, for the fields that have one.
    pub default: Option<&'static str>,

    /// Whether the field can be left out (nullable).
    pub optional: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            default: None,
            optional: false,
        }
    }

    const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            default: None,
            optional: true,
        }
    }
}

/// The `used` flag that every variant accepts.
const USED: FieldSpec = FieldSpec {
    name: "used",
    field_type: FieldType::Bool,
    default: Some("false"),
    optional: false,
};

const CHARACTER_QUOTE_FIELDS: [FieldSpec; 6] = [
    FieldSpec::required("quote", FieldType::LongText),
    FieldSpec::required("source_type", FieldType::Text),
    FieldSpec::required("character_name", FieldType::Text),
    FieldSpec::required("source", FieldType::Text),
    FieldSpec::required("release_date", FieldType::Text),
    USED,
];

const DIRECT_QUOTE_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("quote", FieldType::LongText),
    FieldSpec::required("author", FieldType::Text),
    FieldSpec::optional("release_date", FieldType::Text),
    USED,
];

const FAMOUS_DOCUMENT_QUOTE_FIELDS: [FieldSpec; 5] = [
    FieldSpec::required("quote", FieldType::LongText),
    FieldSpec::required("source", FieldType::Text),
    FieldSpec::required("author", FieldType::Text),
    FieldSpec::required("release_date", FieldType::Text),
    USED,
];

const GENERAL_PHRASE_FIELDS: [FieldSpec; 2] =
    [FieldSpec::required("phrase", FieldType::LongText), USED];

const LIST_PUZZLE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("setup", FieldType::Text),
    FieldSpec::required("elements", FieldType::List),
    USED,
];

const RIDDLE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("question", FieldType::LongText),
    FieldSpec::required("answer", FieldType::Text),
    USED,
];

const SONG_LYRICS_FIELDS: [FieldSpec; 5] = [
    FieldSpec::required("lyrics", FieldType::LongText),
    FieldSpec::required("artist", FieldType::Text),
    FieldSpec::required("title", FieldType::Text),
    FieldSpec::required("release_date", FieldType::Text),
    USED,
];

/// Raw field values, keyed by field name, as collected by a form.
pub type RawFields = HashMap<String, String>;

/// Build a puzzle from raw field values.
pub type ConstructFn = fn(&RawFields, &mut CipherContext<'_>) -> Result<Puzzle, PuzzleError>;

/// Rebuild a puzzle from a storage record.
pub type DecodeFn = fn(&Record, &mut CipherContext<'_>) -> Result<Puzzle, PuzzleError>;

/// Registry entry for a variant.
pub struct RegistryEntry {
    /// Variant.
    pub kind: PuzzleKind,

    /// Input fields of the constructor, in declaration order.
    pub fields: &'static [FieldSpec],

    /// Fields that a storage record must carry for the decoder.
    pub record_fields: &'static [&'static str],

    /// Constructor entry point.
    pub construct: ConstructFn,

    /// Decoder entry point.
    pub decode: DecodeFn,
}

/// Table of the variants, in the declaration order of [`PuzzleKind`].
pub static REGISTRY: [RegistryEntry; 8] = [
    RegistryEntry {
        kind: PuzzleKind::CharacterQuote,
        fields: &CHARACTER_QUOTE_FIELDS,
        record_fields: &[
            "text_to_encrypt",
            "category",
            "character_name",
            "source",
            "release_date",
            "used",
        ],
        construct: construct_character_quote,
        decode: decode_character_quote,
    },
    RegistryEntry {
        kind: PuzzleKind::DirectQuote,
        fields: &DIRECT_QUOTE_FIELDS,
        record_fields: &["text_to_encrypt", "author", "used"],
        construct: construct_direct_quote,
        decode: decode_direct_quote,
    },
    RegistryEntry {
        kind: PuzzleKind::FamousDocumentQuote,
        fields: &FAMOUS_DOCUMENT_QUOTE_FIELDS,
        record_fields: &["text_to_encrypt", "source", "author", "release_date", "used"],
        construct: construct_famous_document_quote,
        decode: decode_famous_document_quote,
    },
    RegistryEntry {
        kind: PuzzleKind::GeneralPhrase,
        fields: &GENERAL_PHRASE_FIELDS,
        record_fields: &["text_to_encrypt", "used"],
        construct: construct_general_phrase,
        decode: decode_general_phrase,
    },
    RegistryEntry {
        kind: PuzzleKind::ListPuzzle,
        fields: &LIST_PUZZLE_FIELDS,
        record_fields: &["text_to_encrypt", "setup", "used"],
        construct: construct_list_puzzle,
        decode: decode_list_puzzle,
    },
    RegistryEntry {
        kind: PuzzleKind::Riddle,
        fields: &RIDDLE_FIELDS,
        record_fields: &["text_to_encrypt", "question", "used"],
        construct: construct_riddle,
        decode: decode_riddle,
    },
    RegistryEntry {
        kind: PuzzleKind::RiddleSolvedInReverse,
        fields: &RIDDLE_FIELDS,
        record_fields: &["text_to_encrypt", "answer", "used"],
        construct: construct_riddle_solved_in_reverse,
        decode: decode_riddle_solved_in_reverse,
    },
    RegistryEntry {
        kind: PuzzleKind::SongLyrics,
        fields: &SONG_LYRICS_FIELDS,
        record_fields: &["text_to_encrypt", "artist", "title", "release_date", "used"],
        construct: construct_song_lyrics,
        decode: decode_song_lyrics,
    },
];

/// Return the registry entry for the given discriminator.
///
/// # Errors
///
/// The function returns [`PuzzleError::UnknownPuzzleType`] for an unregistered name.
pub fn lookup(name: &str) -> Result<&'static RegistryEntry, PuzzleError> {
    PuzzleKind::from_name(name).map(PuzzleKind::entry)
}

/// Return the names of the variants, in alphabetical order.
pub fn list_variant_names() -> Vec<&'static str> {
    PuzzleKind::ALL.iter().map(|k| k.name()).collect()
}

/// Return the description of all the input fields of a variant.
pub fn field_specs(name: &str) -> Result<&'static [FieldSpec], PuzzleError> {
    Ok(lookup(name)?.fields)
}

/// Field that a form must ask for, as returned by [`required_fields`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field name.
    pub name: &'static str,

    /// Declared type.
    pub declared_type: FieldType,

    /// Whether the field can be left empty because it has a default value.
    pub has_default: bool,

    /// Default value.
    pub default_value: Option<&'static str>,
}

/// Return the fields that a form must ask for to build a puzzle of the given variant.
///
/// Optional (nullable) fields are not part of the result: they can always be skipped.
///
/// # Errors
///
/// The function returns [`PuzzleError::UnknownPuzzleType`] for an unregistered name.
pub fn required_fields(name: &str) -> Result<Vec<FieldInfo>, PuzzleError> {
    Ok(lookup(name)?
        .fields
        .iter()
        .filter(|f| !f.optional)
        .map(|f| FieldInfo {
            name: f.name,
            declared_type: f.field_type,
            has_default: f.default.is_some(),
            default_value: f.default,
        })
        .collect())
}

/// Build a puzzle of the given variant from raw field values.
///
/// # Errors
///
/// The function returns [`PuzzleError::UnknownPuzzleType`] for an unregistered name, and the
/// errors of the variant constructor otherwise.
pub fn construct(
    name: &str,
    raw: &RawFields,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let entry: &RegistryEntry = lookup(name)?;
    debug!("Constructing a {name} puzzle from {} raw fields", raw.len());
    (entry.construct)(raw, ctx)
}

/// Return the fields that the decoder needs and that the record lacks.
///
/// Used to find the legacy records that must be completed before they can be decoded.
///
/// # Errors
///
/// The function returns [`PuzzleError::MalformedRecord`] if the record has no `type`, and
/// [`PuzzleError::UnknownPuzzleType`] if the type is not registered.
pub fn missing_fields(record: &Record) -> Result<Vec<&'static str>, PuzzleError> {
    let entry: &RegistryEntry = lookup(record.type_name()?)?;
    Ok(entry
        .record_fields
        .iter()
        .filter(|f| record.get(f).is_none())
        .copied()
        .collect())
}

/// Reader over the raw field values of one variant.
struct Fields<'a> {
    kind: PuzzleKind,
    raw: &'a RawFields,
}

impl<'a> Fields<'a> {
    fn new(kind: PuzzleKind, raw: &'a RawFields) -> Self {
        Self { kind, raw }
    }

    /// Return the value of an optional field. Blank values count as absent.
    fn optional(&self, name: &str) -> Option<&'a str> {
        self.raw
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Return the value of a required field.
    fn text(&self, name: &str) -> Result<&'a str, PuzzleError> {
        self.optional(name)
            .ok_or_else(|| PuzzleError::missing(self.kind.name(), name))
    }

    /// Split a comma-separated field into trimmed, non-empty items.
    fn list(&self, name: &str) -> Result<Vec<&'a str>, PuzzleError> {
        let value: &str = self.text(name)?;
        let items: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if items.is_empty() {
            return Err(PuzzleError::invalid(name, value, "the list has no item"));
        }
        Ok(items)
    }

    /// Return the `used` flag, which defaults to `false`.
    fn used(&self) -> Result<bool, PuzzleError> {
        match self.optional("used") {
            Some(v) => parse_bool("used", v),
            None => Ok(false),
        }
    }
}

/// Parse a boolean. Records written by older tools use `True` and `False`.
pub(crate) fn parse_bool(field: &str, value: &str) -> Result<bool, PuzzleError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(PuzzleError::invalid(field, value, "expected true or false")),
    }
}

fn construct_character_quote(
    raw: &RawFields,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let f: Fields = Fields::new(PuzzleKind::CharacterQuote, raw);
    Ok(Puzzle::character_quote(
        f.text("quote")?,
        f.text("source_type")?,
        f.text("character_name")?,
        f.text("source")?,
        f.text("release_date")?,
        ctx,
    )?
    .with_used(f.used()?))
}

fn construct_direct_quote(
    raw: &RawFields,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let f: Fields = Fields::new(PuzzleKind::DirectQuote, raw);
    Ok(Puzzle::direct_quote(
        f.text("quote")?,
        f.text("author")?,
        f.optional("release_date"),
        ctx,
    )?
    .with_used(f.used()?))
}

fn construct_famous_document_quote(
    raw: &RawFields,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let f: Fields = Fields::new(PuzzleKind::FamousDocumentQuote, raw);
    Ok(Puzzle::famous_document_quote(
        f.text("quote")?,
        f.text("source")?,
        f.text("author")?,
        f.text("release_date")?,
        ctx,
    )?
    .with_used(f.used()?))
}

fn construct_general_phrase(
    raw: &RawFields,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let f: Fields = Fields::new(PuzzleKind::GeneralPhrase, raw);
    Ok(Puzzle::general_phrase(f.text("phrase")?, ctx)?.with_used(f.used()?))
}

fn construct_list_puzzle(
    raw: &RawFields,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let f: Fields = Fields::new(PuzzleKind::ListPuzzle, raw);
    Ok(Puzzle::list_puzzle(f.text("setup")?, f.list("elements")?, ctx)?.with_used(f.used()?))
}

fn construct_riddle(raw: &RawFields, ctx: &mut CipherContext<'_>) -> Result<Puzzle, PuzzleError> {
    let f: Fields = Fields::new(PuzzleKind::Riddle, raw);
    Ok(Puzzle::riddle(f.text("question")?, f.text("answer")?, ctx)?.with_used(f.used()?))
}

fn construct_riddle_solved_in_reverse(
    raw: &RawFields,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let f: Fields = Fields::new(PuzzleKind::RiddleSolvedInReverse, raw);
    Ok(
        Puzzle::riddle_solved_in_reverse(f.text("question")?, f.text("answer")?, ctx)?
            .with_used(f.used()?),
    )
}

fn construct_song_lyrics(
    raw: &RawFields,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let f: Fields = Fields::new(PuzzleKind::SongLyrics, raw);
    Ok(Puzzle::song_lyrics(
        f.text("lyrics")?,
        f.text("artist")?,
        f.text("title")?,
        f.text("release_date")?,
        ctx,
    )?
    .with_used(f.used()?))
}

fn decode_character_quote(
    record: &Record,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    let category: &str = record.require("category")?;
    // The category is built from the source type: "<source_type> Quote"
    let source_type: &str = category.strip_suffix(" Quote").unwrap_or(category);
    Ok(Puzzle::character_quote(
        record.require("text_to_encrypt")?,
        source_type,
        record.require("character_name")?,
        record.require("source")?,
        record.require("release_date")?,
        ctx,
    )?
    .with_used(record.used()?))
}

fn decode_direct_quote(
    record: &Record,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    Ok(Puzzle::direct_quote(
        record.require("text_to_encrypt")?,
        record.require("author")?,
        record.get("release_date"),
        ctx,
    )?
    .with_used(record.used()?))
}

fn decode_famous_document_quote(
    record: &Record,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    Ok(Puzzle::famous_document_quote(
        record.require("text_to_encrypt")?,
        record.require("source")?,
        record.require("author")?,
        record.require("release_date")?,
        ctx,
    )?
    .with_used(record.used()?))
}

fn decode_general_phrase(
    record: &Record,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    Ok(Puzzle::general_phrase(record.require("text_to_encrypt")?, ctx)?.with_used(record.used()?))
}

fn decode_list_puzzle(
    record: &Record,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    // The elements were joined into the text. Keep the text as a single element so that it is
    // restored unchanged.
    Ok(Puzzle::list_puzzle(
        record.require("setup")?,
        [record.require("text_to_encrypt")?],
        ctx,
    )?
    .with_used(record.used()?))
}

fn decode_riddle(record: &Record, ctx: &mut CipherContext<'_>) -> Result<Puzzle, PuzzleError> {
    Ok(Puzzle::riddle(
        record.require("question")?,
        record.require("text_to_encrypt")?,
        ctx,
    )?
    .with_used(record.used()?))
}

fn decode_riddle_solved_in_reverse(
    record: &Record,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    Ok(Puzzle::riddle_solved_in_reverse(
        record.require("text_to_encrypt")?,
        record.require("answer")?,
        ctx,
    )?
    .with_used(record.used()?))
}

fn decode_song_lyrics(
    record: &Record,
    ctx: &mut CipherContext<'_>,
) -> Result<Puzzle, PuzzleError> {
    Ok(Puzzle::song_lyrics(
        record.require("text_to_encrypt")?,
        record.require("artist")?,
        record.require("title")?,
        record.require("release_date")?,
        ctx,
    )?
    .with_used(record.used()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::symbol_pool::SymbolPool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn raw(pairs: &[(&str, &str)]) -> RawFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn registry_follows_declaration_order() {
        for (i, entry) in REGISTRY.iter().enumerate() {
            assert_eq!(entry.kind as usize, i);
            assert_eq!(PuzzleKind::from_repr(i as u8), Some(entry.kind));
        }
    }

    #[test]
    fn names_are_sorted() {
        let names: Vec<&str> = list_variant_names();
        let mut sorted: Vec<&str> = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"RiddleSolvedInReverse"));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            PuzzleKind::from_name("Unicorn").unwrap_err(),
            PuzzleError::UnknownPuzzleType("Unicorn".to_string())
        );
        assert!(required_fields("Unicorn").is_err());
    }

    #[test]
    fn required_fields_skip_optional_ones() {
        let fields: Vec<FieldInfo> = required_fields("DirectQuote").unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["quote", "author", "used"]);

        let used: &FieldInfo = fields.last().unwrap();
        assert!(used.has_default);
        assert_eq!(used.default_value, Some("false"));
        assert_eq!(used.declared_type, FieldType::Bool);
        assert!(!fields[0].has_default);
    }

    #[test]
    fn required_fields_of_a_list_puzzle() {
        let fields: Vec<FieldInfo> = required_fields("ListPuzzle").unwrap();
        assert_eq!(fields[1].name, "elements");
        assert_eq!(fields[1].declared_type, FieldType::List);
    }

    #[test]
    fn construct_from_raw_fields() {
        let pool: SymbolPool = SymbolPool::builtin();
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

        let p: Puzzle = construct(
            "ListPuzzle",
            &raw(&[
                ("setup", "Planets"),
                ("elements", " Mercury, Venus ,, Earth "),
                ("used", "True"),
            ]),
            &mut ctx,
        )
        .unwrap();
        assert_eq!(p.text_to_encrypt(), "Mercury Venus Earth");
        assert!(p.used());
    }

    #[test]
    fn construct_errors() {
        let pool: SymbolPool = SymbolPool::builtin();
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

        let err: PuzzleError =
            construct("Riddle", &raw(&[("question", "Why?")]), &mut ctx).unwrap_err();
        assert_eq!(err, PuzzleError::missing("Riddle", "answer"));

        let err: PuzzleError = construct(
            "Riddle",
            &raw(&[("question", "Why?"), ("answer", "  ")]),
            &mut ctx,
        )
        .unwrap_err();
        assert_eq!(err, PuzzleError::missing("Riddle", "answer"));

        let err: PuzzleError = construct(
            "GeneralPhrase",
            &raw(&[("phrase", "hi"), ("used", "maybe")]),
            &mut ctx,
        )
        .unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidFieldValue { .. }));

        let err: PuzzleError = construct(
            "ListPuzzle",
            &raw(&[("setup", "Empty"), ("elements", " , ,")]),
            &mut ctx,
        )
        .unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidFieldValue { ref field, .. } if field == "elements"));

        let err: PuzzleError = construct("Unicorn", &raw(&[]), &mut ctx).unwrap_err();
        assert!(matches!(err, PuzzleError::UnknownPuzzleType(_)));
    }

    #[test]
    fn missing_fields_of_a_legacy_record() {
        let record: Record = Record::from_pairs([
            ("type", "SongLyrics"),
            ("text_to_encrypt", "la la la"),
            ("artist", "Somebody"),
        ]);
        assert_eq!(
            missing_fields(&record).unwrap(),
            vec!["title", "release_date", "used"]
        );
    }
}
