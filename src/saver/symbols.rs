/*
symbols.rs

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

//! Load the symbol pool.
//!
//! The pool file is a JSON array of token names, such as `["anchor", "apple", ...]`.

use log::{debug, info};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::generator::symbol_pool::SymbolPool;

/// Read the symbol pool from the given file.
pub fn load_pool(path: &Path) -> Result<SymbolPool, Box<dyn Error>> {
    let file: File = File::open(path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let pool: SymbolPool = serde_json::from_reader(reader)?;
    debug!("{} tokens loaded from {path:?}", pool.len());
    Ok(pool)
}

/// Read the symbol pool from the given file, or return the built-in pool if the file does not
/// exist.
pub fn load_pool_or_builtin(path: &Path) -> Result<SymbolPool, Box<dyn Error>> {
    match File::open(path) {
        Ok(_) => load_pool(path),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            info!("No symbol file {path:?}: using the built-in icons");
            Ok(SymbolPool::builtin())
        }
        Err(error) => Err(Box::new(error)),
    }
}
