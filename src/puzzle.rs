/*
puzzle.rs

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

//! Puzzle internal representation.
//!
//! A [`Puzzle`] wraps the text to encrypt, a category label, the random cipher map and hints
//! derived from the text, the `used` flag, and the fields that are specific to its variant
//! ([`Details`]).
//!
//! Puzzles are built by one of the variant constructors, such as [`Puzzle::riddle`].
//! The constructors generate a new cipher map and a new list of hints every time, including when
//! a puzzle is rebuilt from a storage record (see [`crate::record::decode`]).

use formatx::formatx;
use log::debug;

use crate::errors::PuzzleError;
use crate::generator::cipher_map::CipherMap;
use crate::generator::context::CipherContext;
use crate::generator::hints::{self, Hint};
use crate::registry::PuzzleKind;

/// Category of the character quotes. `source_type` is a book, a movie, a game...
const CHARACTER_QUOTE_CATEGORY: &str = "{source_type} Quote";

/// Fields that are specific to each variant.
///
/// The field that provides the text to encrypt (the quote, the lyrics...) is not stored here but
/// in [`Puzzle::text_to_encrypt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Details {
    /// The player must find the elements of a list.
    ListPuzzle { setup: String },

    /// Quote of a fictional character.
    CharacterQuote {
        character_name: String,
        source: String,
        release_date: String,
    },

    /// Quote from a famous document, such as a declaration or a treaty.
    FamousDocumentQuote {
        source: String,
        author: String,
        release_date: String,
    },

    /// Quote of a real person.
    DirectQuote {
        author: String,
        release_date: Option<String>,
    },

    /// Phrase or proverb.
    GeneralPhrase,

    /// Song lyrics.
    SongLyrics {
        artist: String,
        title: String,
        release_date: String,
    },

    /// The player is given the question and must find the (encrypted) answer.
    Riddle { question: String },

    /// The player is given the answer and must find the (encrypted) question.
    RiddleSolvedInReverse { answer: String },
}

impl Details {
    /// Return the variant.
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Details::ListPuzzle { .. } => PuzzleKind::ListPuzzle,
            Details::CharacterQuote { .. } => PuzzleKind::CharacterQuote,
            Details::FamousDocumentQuote { .. } => PuzzleKind::FamousDocumentQuote,
            Details::DirectQuote { .. } => PuzzleKind::DirectQuote,
            Details::GeneralPhrase => PuzzleKind::GeneralPhrase,
            Details::SongLyrics { .. } => PuzzleKind::SongLyrics,
            Details::Riddle { .. } => PuzzleKind::Riddle,
            Details::RiddleSolvedInReverse { .. } => PuzzleKind::RiddleSolvedInReverse,
        }
    }

    /// Return the variant fields as (name, value) pairs, in declaration order.
    ///
    /// Fields without a value are returned with `None`.
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        match self {
            Details::ListPuzzle { setup } => vec![("setup", Some(setup))],
            Details::CharacterQuote {
                character_name,
                source,
                release_date,
            } => vec![
                ("character_name", Some(character_name)),
                ("source", Some(source)),
                ("release_date", Some(release_date)),
            ],
            Details::FamousDocumentQuote {
                source,
                author,
                release_date,
            } => vec![
                ("source", Some(source)),
                ("author", Some(author)),
                ("release_date", Some(release_date)),
            ],
            Details::DirectQuote {
                author,
                release_date,
            } => vec![
                ("author", Some(author)),
                ("release_date", release_date.as_ref()),
            ],
            Details::GeneralPhrase => Vec::new(),
            Details::SongLyrics {
                artist,
                title,
                release_date,
            } => vec![
                ("artist", Some(artist)),
                ("title", Some(title)),
                ("release_date", Some(release_date)),
            ],
            Details::Riddle { question } => vec![("question", Some(question))],
            Details::RiddleSolvedInReverse { answer } => vec![("answer", Some(answer))],
        }
        .into_iter()
        .map(|(name, value)| (name, value.map(String::as_str)))
        .collect()
    }
}

/// Cryptogram puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Text from which the cipher map and the hints are derived.
    text_to_encrypt: String,

    /// Classification label, set by the constructor.
    category: String,

    /// Letter substitution table.
    cipher_map: CipherMap,

    /// One hint per letter occurrence, in random order.
    hints: Vec<Hint>,

    /// Whether the puzzle has already been published.
    used: bool,

    /// Variant fields.
    details: Details,
}

impl Puzzle {
    /// Build the cipher map and the hints for the text, and return the puzzle.
    ///
    /// The text and the variant fields that have a value must not be blank: the storage records
    /// drop empty values, and the puzzle could not be decoded back.
    fn build(
        text_to_encrypt: String,
        category: String,
        details: Details,
        ctx: &mut CipherContext<'_>,
    ) -> Result<Self, PuzzleError> {
        let kind: PuzzleKind = details.kind();
        if text_to_encrypt.trim().is_empty() {
            return Err(PuzzleError::missing(kind.name(), "text_to_encrypt"));
        }
        if let Some((name, _)) = details
            .fields()
            .into_iter()
            .find(|(_, v)| v.is_some_and(|v| v.trim().is_empty()))
        {
            return Err(PuzzleError::missing(kind.name(), name));
        }

        let cipher_map: CipherMap = ctx.cipher_map(&text_to_encrypt)?;
        let hints: Vec<Hint> = ctx.hints(&text_to_encrypt);
        debug!(
            "New {kind} puzzle: {} letters, {} hints",
            cipher_map.len(),
            hints.len()
        );
        Ok(Self {
            text_to_encrypt,
            category,
            cipher_map,
            hints,
            used: false,
            details,
        })
    }

    /// Create a [`Details::ListPuzzle`] puzzle.
    ///
    /// The text to encrypt is the elements joined with spaces.
    pub fn list_puzzle<I, S>(
        setup: &str,
        elements: I,
        ctx: &mut CipherContext<'_>,
    ) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text: String = elements
            .into_iter()
            .map(|e| e.as_ref().to_string())
            .collect::<Vec<String>>()
            .join(" ");
        Self::build(
            text,
            "list".to_string(),
            Details::ListPuzzle {
                setup: setup.to_string(),
            },
            ctx,
        )
    }

    /// Create a [`Details::CharacterQuote`] puzzle.
    ///
    /// The category is "`<source_type>` Quote", "Movie Quote" for example.
    pub fn character_quote(
        quote: &str,
        source_type: &str,
        character_name: &str,
        source: &str,
        release_date: &str,
        ctx: &mut CipherContext<'_>,
    ) -> Result<Self, PuzzleError> {
        if source_type.trim().is_empty() {
            return Err(PuzzleError::missing(
                PuzzleKind::CharacterQuote.name(),
                "source_type",
            ));
        }
        let category: String = formatx!(CHARACTER_QUOTE_CATEGORY, source_type = source_type)
            .map_err(|e| PuzzleError::invalid("source_type", source_type, e.to_string()))?;
        Self::build(
            quote.to_string(),
            category,
            Details::CharacterQuote {
                character_name: character_name.to_string(),
                source: source.to_string(),
                release_date: release_date.to_string(),
            },
            ctx,
        )
    }

    /// Create a [`Details::FamousDocumentQuote`] puzzle.
    pub fn famous_document_quote(
        quote: &str,
        source: &str,
        author: &str,
        release_date: &str,
        ctx: &mut CipherContext<'_>,
    ) -> Result<Self, PuzzleError> {
        Self::build(
            quote.to_string(),
            "Famous Document".to_string(),
            Details::FamousDocumentQuote {
                source: source.to_string(),
                author: author.to_string(),
                release_date: release_date.to_string(),
            },
            ctx,
        )
    }

    /// Create a [`Details::DirectQuote`] puzzle. The release date is optional, and a blank date
    /// counts as no date.
    pub fn direct_quote(
        quote: &str,
        author: &str,
        release_date: Option<&str>,
        ctx: &mut CipherContext<'_>,
    ) -> Result<Self, PuzzleError> {
        Self::build(
            quote.to_string(),
            "Direct Quote".to_string(),
            Details::DirectQuote {
                author: author.to_string(),
                release_date: release_date
                    .filter(|d| !d.trim().is_empty())
                    .map(str::to_string),
            },
            ctx,
        )
    }

    /// Create a [`Details::GeneralPhrase`] puzzle.
    pub fn general_phrase(phrase: &str, ctx: &mut CipherContext<'_>) -> Result<Self, PuzzleError> {
        Self::build(
            phrase.to_string(),
            "General Quote".to_string(),
            Details::GeneralPhrase,
            ctx,
        )
    }

    /// Create a [`Details::SongLyrics`] puzzle.
    pub fn song_lyrics(
        lyrics: &str,
        artist: &str,
        title: &str,
        release_date: &str,
        ctx: &mut CipherContext<'_>,
    ) -> Result<Self, PuzzleError> {
        Self::build(
            lyrics.to_string(),
            "Song lyrics".to_string(),
            Details::SongLyrics {
                artist: artist.to_string(),
                title: title.to_string(),
                release_date: release_date.to_string(),
            },
            ctx,
        )
    }

    /// Create a [`Details::Riddle`] puzzle. The answer is encrypted.
    pub fn riddle(
        question: &str,
        answer: &str,
        ctx: &mut CipherContext<'_>,
    ) -> Result<Self, PuzzleError> {
        Self::build(
            answer.to_string(),
            "Riddle".to_string(),
            Details::Riddle {
                question: question.to_string(),
            },
            ctx,
        )
    }

    /// Create a [`Details::RiddleSolvedInReverse`] puzzle. The question is encrypted.
    pub fn riddle_solved_in_reverse(
        question: &str,
        answer: &str,
        ctx: &mut CipherContext<'_>,
    ) -> Result<Self, PuzzleError> {
        Self::build(
            question.to_string(),
            "Reverse Riddle".to_string(),
            Details::RiddleSolvedInReverse {
                answer: answer.to_string(),
            },
            ctx,
        )
    }

    /// Return the puzzle with the given `used` flag.
    pub fn with_used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }

    /// Set the `used` flag.
    pub fn set_used(&mut self, used: bool) {
        self.used = used;
    }

    /// Return the variant.
    pub fn kind(&self) -> PuzzleKind {
        self.details.kind()
    }

    /// Return the text to encrypt.
    pub fn text_to_encrypt(&self) -> &str {
        &self.text_to_encrypt
    }

    /// Return the number of characters of the text to encrypt.
    pub fn length(&self) -> usize {
        self.text_to_encrypt.chars().count()
    }

    /// Return the category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Return the cipher map.
    pub fn cipher_map(&self) -> &CipherMap {
        &self.cipher_map
    }

    /// Return the hints, one per letter occurrence.
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    /// Return the hints, one per distinct letter, in the same random order.
    pub fn distinct_hints(&self) -> Vec<Hint> {
        hints::dedup_hints(&self.hints)
    }

    /// Return whether the puzzle has been used.
    pub fn used(&self) -> bool {
        self.used
    }

    /// Return the variant fields.
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Return the encrypted text, as the player sees it.
    pub fn encipher(&self) -> String {
        self.cipher_map.encipher(&self.text_to_encrypt)
    }
}
