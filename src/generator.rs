/*
generator.rs

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

//! Generate the random parts of a cryptogram.
//!
//! A cryptogram hides its text behind a substitution cipher and helps the player with hints.
//! Both parts are random, and both are derived from the text to encrypt:
//!
//! * A [`cipher_map::CipherMap`] maps each letter of the text to a token that is drawn, without
//!   replacement, from a [`symbol_pool::SymbolPool`].
//!   You create this object with the [`cipher_map::CipherMap::generate`] method.
//!   If the pool does not have enough tokens for the letters of the text, then the method returns
//!   an error.
//!
//! * A list of [`hints::Hint`] objects, built by [`hints::build_reveal_hints`].
//!   Each hint reveals a letter of the text. The list is shuffled.
//!
//! The puzzle constructors do not take the pool and the random generator separately, but receive
//! a [`context::CipherContext`] object that groups both.

pub mod cipher_map;
pub mod context;
pub mod hints;
pub mod symbol_pool;

/// Return the letters of the text, case folded, in the order they appear.
///
/// Only the ASCII letters `a` to `z` are part of a cryptogram. Digits, punctuation, and accented
/// letters stay in clear.
pub fn letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
}
