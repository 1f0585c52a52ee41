/*
saver.rs

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

//! Read and write the files of the puzzle application.
//!
//! The core of the crate only produces and consumes individual [`crate::record::Record`]
//! objects. These modules are the thin layer that the command-line tool uses to keep them in
//! files:
//!
//! * [`collection`] loads and saves the flat list of storage records (the puzzle collection).
//! * [`symbols`] loads the symbol pool from a JSON file.
//! * [`daily`] picks the puzzle of the day and freezes puzzles for a given date.

pub mod collection;
pub mod daily;
pub mod symbols;
