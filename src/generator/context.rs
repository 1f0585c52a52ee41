/*
context.rs

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

//! Sources used when enciphering a puzzle.

use rand::RngCore;

use super::cipher_map::CipherMap;
use super::hints::{self, Hint};
use super::symbol_pool::SymbolPool;
use crate::errors::PuzzleError;

/// Group the symbol pool and the random generator that the puzzle constructors use.
///
/// The object borrows the random generator mutably, so it cannot be shared between threads.
/// When building puzzles in parallel, give each thread its own generator and its own
/// [`CipherContext`].
pub struct CipherContext<'a> {
    /// Tokens to draw from when building cipher maps.
    pool: &'a SymbolPool,

    /// Random source for the cipher maps and the hint order.
    rng: &'a mut dyn RngCore,
}

impl<'a> CipherContext<'a> {
    /// Create a [`CipherContext`] object.
    pub fn new(pool: &'a SymbolPool, rng: &'a mut dyn RngCore) -> Self {
        Self { pool, rng }
    }

    /// Return the random generator.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Generate a cipher map for the given text.
    pub fn cipher_map(&mut self, text: &str) -> Result<CipherMap, PuzzleError> {
        CipherMap::generate(text, self.pool, &mut *self.rng)
    }

    /// Build the shuffled list of hints for the given text.
    pub fn hints(&mut self, text: &str) -> Vec<Hint> {
        hints::build_reveal_hints(text, &mut *self.rng)
    }
}
