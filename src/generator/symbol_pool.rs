/*
symbol_pool.rs

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

//! Pool of tokens that replace the letters of a cryptogram.
//!
//! The pool is usually supplied by the application (a list of icon names for example).
//! See [`crate::saver::symbols`] for loading a pool from a JSON file.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Icon names used when the application does not provide its own pool.
const BUILTIN_TOKENS: [&str; 40] = [
    "anchor", "apple", "bell", "bicycle", "bird", "bolt", "book", "bug", "cactus", "camera",
    "carrot", "cat", "cloud", "coffee", "compass", "crown", "diamond", "dog", "drum", "feather",
    "fish", "flag", "flower", "gear", "ghost", "gift", "globe", "guitar", "hammer", "heart",
    "key", "leaf", "lemon", "moon", "mountain", "rocket", "shell", "snowflake", "star", "sun",
];

/// Ordered list of distinct tokens.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SymbolPool {
    tokens: Vec<String>,
}

impl From<Vec<String>> for SymbolPool {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}

impl From<SymbolPool> for Vec<String> {
    fn from(pool: SymbolPool) -> Self {
        pool.tokens
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SymbolPool {
    /// Create a [`SymbolPool`] object.
    ///
    /// Duplicated tokens are removed (the first occurrence is kept) so that two letters can never
    /// share a token.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique: Vec<String> = Vec::new();
        for t in tokens {
            let t: String = t.into();
            if seen.insert(t.clone()) {
                unique.push(t);
            } else {
                debug!("Duplicated token {t:?} ignored");
            }
        }
        Self { tokens: unique }
    }

    /// Create a [`SymbolPool`] object from the built-in list of icon names.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TOKENS)
    }

    /// Return the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the pool has no token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Return the token at the given position.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.tokens.get(i).map(String::as_str)
    }

    /// Return the tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
