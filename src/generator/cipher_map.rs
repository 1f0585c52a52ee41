/*
cipher_map.rs

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

//! Substitution cipher of a cryptogram.

use log::debug;
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::letters;
use super::symbol_pool::SymbolPool;
use crate::errors::PuzzleError;

/// Map each letter of a text to a token.
///
/// The keys are exactly the distinct letters of the text (case folded), and no two letters share
/// the same token.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct CipherMap {
    map: BTreeMap<char, String>,
}

impl CipherMap {
    /// Generate a random cipher map for the given text.
    ///
    /// The tokens are drawn from `pool` without replacement, in random order, and are assigned
    /// to the letters of the text.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::InsufficientSymbolPool`] if the pool has fewer tokens
    /// than the text has distinct letters.
    pub fn generate<R: Rng + ?Sized>(
        text: &str,
        pool: &SymbolPool,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let distinct: BTreeSet<char> = letters(text).collect();
        if distinct.len() > pool.len() {
            return Err(PuzzleError::InsufficientSymbolPool {
                needed: distinct.len(),
                available: pool.len(),
            });
        }

        let picks: index::IndexVec = index::sample(rng, pool.len(), distinct.len());
        let map: BTreeMap<char, String> = distinct
            .into_iter()
            .zip(picks.iter())
            .filter_map(|(letter, i)| pool.get(i).map(|t| (letter, t.to_string())))
            .collect();
        debug!("Cipher map with {} letters: {map:?}", map.len());
        Ok(Self { map })
    }

    /// Return the token for the given letter. The letter is case folded first.
    pub fn get(&self, letter: char) -> Option<&str> {
        self.map
            .get(&letter.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Return the number of letters in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map is empty (the text has no letter).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Return the letters of the map, in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.map.keys().copied()
    }

    /// Iterate over the letters and their tokens, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.map.iter().map(|(c, t)| (*c, t.as_str()))
    }

    /// Return the text with every letter replaced by its token between brackets.
    ///
    /// Characters that are not in the map are kept as is.
    pub fn encipher(&self, text: &str) -> String {
        let mut out: String = String::with_capacity(text.len() * 4);
        for c in text.chars() {
            match self.get(c) {
                Some(token) => {
                    out.push('[');
                    out.push_str(token);
                    out.push(']');
                }
                None => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn keys_are_the_distinct_letters() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let m: CipherMap =
            CipherMap::generate("Hello, World!", &SymbolPool::builtin(), &mut rng).unwrap();
        let keys: String = m.letters().collect();
        assert_eq!(keys, "dehlorw");
    }

    #[test]
    fn tokens_are_never_shared() {
        let pool: SymbolPool = SymbolPool::new((0..26).map(|i| format!("t{i}")));
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let m: CipherMap =
            CipherMap::generate("the quick brown fox jumps over the lazy dog", &pool, &mut rng)
                .unwrap();
        assert_eq!(m.len(), 26);
        let tokens: HashSet<&str> = m.iter().map(|(_, t)| t).collect();
        assert_eq!(tokens.len(), 26);
    }

    #[test]
    fn small_pool_is_rejected() {
        let pool: SymbolPool = SymbolPool::new(["a", "b", "c"]);
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let err: PuzzleError = CipherMap::generate("keyboard", &pool, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InsufficientSymbolPool {
                needed: 8,
                available: 3
            }
        );
    }

    #[test]
    fn text_without_letters_gives_empty_map() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let m: CipherMap = CipherMap::generate("1984 !", &SymbolPool::new(["a"]), &mut rng).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn encipher_keeps_non_letters() {
        let mut rng: StdRng = StdRng::seed_from_u64(9);
        let pool: SymbolPool = SymbolPool::new(["x", "y"]);
        let m: CipherMap = CipherMap::generate("Go", &pool, &mut rng).unwrap();
        let g: &str = m.get('g').unwrap();
        let o: &str = m.get('O').unwrap();
        assert_eq!(m.encipher("go, go!"), format!("[{g}][{o}], [{g}][{o}]!"));
    }
}
