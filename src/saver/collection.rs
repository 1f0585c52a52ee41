/*
collection.rs

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

//! Load and save the puzzle collection.
//!
//! The collection is a JSON array of storage records, kept in a single file.
//! New puzzles are appended to the end of the array.

use log::{debug, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::record::Record;

/// Object to load and save a puzzle collection.
pub struct SaverCollection {
    /// Path to the collection file.
    save_file: PathBuf,
}

impl SaverCollection {
    /// Create a [`SaverCollection`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Collection file: {save_file:?}");
        Self { save_file }
    }

    /// Return the path to the collection file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the records of the collection.
    ///
    /// Return an empty list if the collection file does not exist yet.
    pub fn get_records(&self) -> Result<Vec<Record>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(Vec::new()),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        debug!("{} records loaded", records.len());
        Ok(records)
    }

    /// Save the provided records, replacing the collection.
    pub fn save_records(&self, records: &[Record]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }

    /// Add a record to the end of the collection and return the new number of records.
    pub fn append(&self, record: Record) -> Result<usize, Box<dyn Error>> {
        let mut records: Vec<Record> = self.get_records()?;
        records.push(record);
        self.save_records(&records)?;
        Ok(records.len())
    }
}

/// Group the records by variant name, in alphabetical order.
///
/// Each record comes with its position in the collection. Records without a `type` are skipped.
pub fn group_by_type(records: &[Record]) -> BTreeMap<&str, Vec<(usize, &Record)>> {
    let mut groups: BTreeMap<&str, Vec<(usize, &Record)>> = BTreeMap::new();
    for (i, record) in records.iter().enumerate() {
        match record.type_name() {
            Ok(t) => groups.entry(t).or_default().push((i, record)),
            Err(_) => warn!("Record {i} has no type"),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let saver: SaverCollection = SaverCollection::new(dir.path().join("none.json"));
        assert!(saver.get_records().unwrap().is_empty());
    }

    #[test]
    fn append_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let saver: SaverCollection = SaverCollection::new(dir.path().join("puzzles.json"));

        let r1: Record = Record::from_pairs([("type", "GeneralPhrase"), ("text_to_encrypt", "a")]);
        let r2: Record = Record::from_pairs([("type", "Riddle"), ("question", "?")]);
        assert_eq!(saver.append(r1.clone()).unwrap(), 1);
        assert_eq!(saver.append(r2.clone()).unwrap(), 2);
        assert_eq!(saver.get_records().unwrap(), vec![r1, r2]);
    }

    #[test]
    fn reads_legacy_files() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("legacy.json");
        std::fs::write(
            &path,
            r#"[{"type": "Riddle", "puzzle_type": "Riddle", "length": 8, "used": "False",
                 "string_to_encrypt": "keyboard", "question": "?", "hints": null}]"#,
        )
        .unwrap();
        let records: Vec<Record> = SaverCollection::new(path).get_records().unwrap();
        assert_eq!(records[0].get("length"), Some("8"));
        assert!(!records[0].contains_key("hints"));
    }

    #[test]
    fn groups_are_sorted() {
        let records: Vec<Record> = vec![
            Record::from_pairs([("type", "Riddle")]),
            Record::from_pairs([("type", "DirectQuote")]),
            Record::from_pairs([("text_to_encrypt", "orphan")]),
            Record::from_pairs([("type", "Riddle")]),
        ];
        let groups = group_by_type(&records);
        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["DirectQuote", "Riddle"]);
        let positions: Vec<usize> = groups["Riddle"].iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, vec![0, 3]);
    }
}
