/*
daily.rs

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

//! Publish puzzles by date.
//!
//! Every day, the application publishes one puzzle in the player-facing shape, in a file named
//! after the date (`YYYYMMDD.json`). The puzzle is picked at random among the unused puzzles of
//! the collection.
//!
//! Editors can also freeze a puzzle for a given date. The frozen file keeps the storage record
//! together with its cipher map and hints, so that the published puzzle is exactly the one that
//! was reviewed.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use log::{debug, info, warn};
use rand::Rng;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::generator::context::CipherContext;
use crate::puzzle::Puzzle;
use crate::record::{self, EncodeMode, Record};

/// Return the date of tomorrow, in the local time zone.
pub fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + Days::new(1)
}

/// Return the name of the file for the given date: `YYYYMMDD.json`.
pub fn daily_file_name(date: NaiveDate) -> String {
    date.format("%Y%m%d.json").to_string()
}

/// Pick an unused record at random, decode it, and return its position in the collection
/// together with its player-facing encoding.
///
/// Only the records with `used` set to `false` are candidates. A candidate that cannot be decoded
/// is skipped, with a warning, and another one is drawn.
///
/// Return `None` when no unused record can be decoded.
pub fn pick_random(records: &[Record], ctx: &mut CipherContext<'_>) -> Option<(usize, Record)> {
    let mut unused: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches!(r.used(), Ok(false)))
        .map(|(i, _)| i)
        .collect();
    debug!("{} unused records out of {}", unused.len(), records.len());

    while !unused.is_empty() {
        let i: usize = unused.swap_remove(ctx.rng().random_range(0..unused.len()));
        match record::decode(&records[i], ctx) {
            Ok(puzzle) => {
                info!("Picked record {i}: {} puzzle", puzzle.kind());
                return Some((i, record::encode(&puzzle, EncodeMode::PlayerFacing)));
            }
            Err(e) => warn!("Record {i} skipped: {e}"),
        }
    }
    None
}

/// Write the record in the file for the given date, in the given directory.
///
/// Return the path to the file.
pub fn write_for_date(
    record: &Record,
    date: NaiveDate,
    dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let path: PathBuf = dir.join(daily_file_name(date));
    let file: File = File::create(&path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;
    debug!("Record written to {path:?}");
    Ok(path)
}

/// Freeze the puzzle for the given date.
///
/// # Errors
///
/// The function returns an error if `date` is before `today`, or if the file cannot be written.
pub fn schedule(
    puzzle: &Puzzle,
    date: NaiveDate,
    today: NaiveDate,
    dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    if date < today {
        return Err(format!("Cannot schedule a puzzle in the past ({date})").into());
    }
    if date.weekday() == Weekday::Sun {
        warn!("{date} is a Sunday");
    }
    write_for_date(&record::encode_frozen(puzzle), date, dir)
}
