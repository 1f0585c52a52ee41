/*
hints.rs

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

//! Hints that help the player solve a cryptogram.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::letters;

/// Player assistance.
///
/// Serialized as a tagged record, such as `{"type": "RevealLetter", "letter": "k"}`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "type")]
pub enum Hint {
    /// Reveal which token hides the given letter.
    RevealLetter { letter: char },
}

impl Hint {
    /// Return the letter that the hint is about.
    pub fn letter(&self) -> char {
        match self {
            Hint::RevealLetter { letter } => *letter,
        }
    }
}

/// Build the list of hints for the given text.
///
/// The list has one [`Hint::RevealLetter`] per letter occurrence in the text, so a letter that
/// appears three times gets three hints. The list is shuffled. Use [`dedup_hints`] to keep one
/// hint per letter.
pub fn build_reveal_hints<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<Hint> {
    let mut occurrences: Vec<char> = letters(text).collect();
    occurrences.shuffle(rng);
    occurrences
        .into_iter()
        .map(|letter| Hint::RevealLetter { letter })
        .collect()
}

/// Return the hints without the duplicated letters, keeping the first occurrence.
pub fn dedup_hints(hints: &[Hint]) -> Vec<Hint> {
    let mut seen: HashSet<char> = HashSet::new();
    hints
        .iter()
        .filter(|h| seen.insert(h.letter()))
        .copied()
        .collect()
}
