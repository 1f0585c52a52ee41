/*
errors.rs

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

//! Errors raised when building, encoding, or decoding puzzles.
//!
//! Every failure is deterministic for a given input and is returned to the caller. No puzzle
//! object is ever partially built: a constructor either returns a complete [`crate::puzzle::Puzzle`]
//! or one of these errors.

use thiserror::Error;

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A field without a default value was not supplied (or was blank).
    #[error("{kind}: missing required field `{field}`")]
    MissingRequiredField { kind: String, field: String },

    /// A typed field (list or boolean) could not be parsed from its raw text.
    #[error("invalid value {value:?} for field `{field}`: {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    /// The symbol pool does not have enough distinct tokens for the letters of the text.
    #[error("symbol pool too small: {needed} distinct letters but only {available} tokens")]
    InsufficientSymbolPool { needed: usize, available: usize },

    /// The discriminator does not name any registered puzzle variant.
    #[error("unknown puzzle type {0:?}")]
    UnknownPuzzleType(String),

    /// A record lacks a field that the decoder of its variant needs.
    #[error("malformed {kind} record: missing field `{field}`")]
    MalformedRecord { kind: String, field: String },
}

impl PuzzleError {
    pub(crate) fn missing(kind: impl Into<String>, field: &str) -> Self {
        PuzzleError::MissingRequiredField {
            kind: kind.into(),
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, value: &str, reason: impl Into<String>) -> Self {
        PuzzleError::InvalidFieldValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(kind: impl Into<String>, field: &str) -> Self {
        PuzzleError::MalformedRecord {
            kind: kind.into(),
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let e = PuzzleError::missing("Riddle", "answer");
        assert_eq!(e.to_string(), "Riddle: missing required field `answer`");

        let e = PuzzleError::InsufficientSymbolPool {
            needed: 8,
            available: 3,
        };
        assert!(e.to_string().contains("8 distinct letters"));

        let e = PuzzleError::UnknownPuzzleType("Unicorn".to_string());
        assert_eq!(e.to_string(), "unknown puzzle type \"Unicorn\"");
    }
}
