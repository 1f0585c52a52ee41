/*
lib.rs

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

//! Cryptogram puzzles.
//!
//! A puzzle hides a short text behind a cipher map that assigns a symbol to every letter. The
//! crate builds the puzzles of each variant, generates their cipher maps and hints, and converts
//! them to and from the flat records that the puzzle collection and the daily files hold.
//!
//! * [`generator`] builds cipher maps and hints from a symbol pool and a random source.
//! * [`puzzle`] defines the puzzle variants.
//! * [`registry`] describes the variants and builds them from raw field values.
//! * [`record`] encodes puzzles into records and decodes them back.
//! * [`saver`] loads and saves the collection, the symbol pool, and the daily files.

pub mod errors;
pub mod generator;
pub mod puzzle;
pub mod record;
pub mod registry;
pub mod saver;
