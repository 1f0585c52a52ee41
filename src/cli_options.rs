/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command-line tool manages the puzzle collection: it creates puzzles from field values,
//! lists and checks the stored records, and publishes the puzzle of the day.
//!
//! # Examples
//!
//! List the puzzle types:
//!
//! ```text
//! $ codiac --ls
//! CharacterQuote
//! DirectQuote
//! ...
//! ```
//!
//! Show what a riddle needs, and then create one:
//!
//! ```text
//! $ codiac --fields Riddle
//! question    text
//! answer      str
//! used        bool (default: false)
//! $ codiac --new Riddle -s "question=What has keys but no locks?" -s answer=keyboard
//! ```
//!
//! Publish tomorrow's puzzle:
//!
//! ```text
//! $ codiac --daily resources/auto-generated
//! ```

use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{LevelFilter, debug, error, info};
use std::error::Error;
use std::path::{Path, PathBuf};

use codiac::generator::context::CipherContext;
use codiac::generator::symbol_pool::SymbolPool;
use codiac::puzzle::Puzzle;
use codiac::record::{self, EncodeMode, Record};
use codiac::registry::{self, FieldInfo, PuzzleKind, RawFields};
use codiac::saver::collection::{self, SaverCollection};
use codiac::saver::{daily, symbols};

use crate::config::{BY_DATE_DIR, COLLECTION_FILE, COPYRIGHT_NOTICE, DAILY_DIR, SYMBOLS_FILE};

/// Manage the cryptogram puzzle collection.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the puzzle types
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Print the fields to provide for a puzzle type
    #[arg(short, long, value_name = "TYPE")]
    fields: Option<PuzzleKind>,

    /// Create a puzzle of the given type and add it to the collection
    #[arg(short, long, value_name = "TYPE")]
    new: Option<PuzzleKind>,

    /// Field value for the new puzzle, as NAME=VALUE (repeat for each field)
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_key_val, requires = "new")]
    set: Vec<(String, String)>,

    /// Print the new puzzle as the player would receive it, without saving it
    #[arg(long, default_value_t = false, requires = "new")]
    preview: bool,

    /// Print the records of the collection, grouped by type
    #[arg(long, default_value_t = false)]
    show: bool,

    /// Report the records that miss fields
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Publish tomorrow's puzzle, picked at random among the unused ones
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = DAILY_DIR)]
    daily: Option<PathBuf>,

    /// Freeze the record at the given position of the collection for a date
    #[arg(long, value_name = "POSITION", requires = "date")]
    schedule: Option<usize>,

    /// Date for --schedule (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Directory of the frozen puzzles
    #[arg(long, value_name = "DIR", default_value = BY_DATE_DIR)]
    by_date_dir: PathBuf,

    /// Puzzle collection file
    #[arg(short, long, value_name = "FILE", default_value = COLLECTION_FILE)]
    collection: PathBuf,

    /// Symbol pool file (JSON array of tokens)
    #[arg(long, value_name = "FILE", default_value = SYMBOLS_FILE)]
    symbols: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse a NAME=VALUE option.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.to_string())),
        _ => Err(format!("expected NAME=VALUE, got {s:?}")),
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Run the requested actions in order.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.ls {
        for name in registry::list_variant_names() {
            println!("{name}");
        }
    }

    if let Some(kind) = args.fields {
        print_fields(kind)?;
    }

    let saver: SaverCollection = SaverCollection::new(args.collection.clone());
    let pool: SymbolPool = symbols::load_pool_or_builtin(&args.symbols)?;
    let mut rng = rand::rng();
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    if let Some(kind) = args.new {
        let raw: RawFields = args.set.iter().cloned().collect();
        let puzzle: Puzzle = registry::construct(kind.name(), &raw, &mut ctx)?;
        println!("{}", puzzle.encipher());
        if args.preview {
            let r: Record = record::encode(&puzzle, EncodeMode::PlayerFacing);
            println!("{}", serde_json::to_string_pretty(&r)?);
        } else {
            let count: usize = saver.append(record::encode(&puzzle, EncodeMode::Storage))?;
            info!("{kind} puzzle added to {:?} ({count} records)", saver.path());
        }
    }

    if args.show {
        show(&saver)?;
    }

    if args.check {
        check(&saver)?;
    }

    if let Some(dir) = &args.daily {
        publish_daily(&saver, dir, &mut ctx)?;
    }

    if let Some(position) = args.schedule {
        let records: Vec<Record> = saver.get_records()?;
        let r: &Record = records
            .get(position)
            .ok_or_else(|| format!("No record at position {position}"))?;
        let puzzle: Puzzle = record::decode(r, &mut ctx)?;
        let date: NaiveDate = args.date.ok_or("Missing --date")?;
        let path: PathBuf = daily::schedule(
            &puzzle,
            date,
            Local::now().date_naive(),
            &args.by_date_dir,
        )?;
        println!("{}", path.display());
    }
    Ok(())
}

/// Print the fields that a puzzle type needs.
fn print_fields(kind: PuzzleKind) -> Result<(), Box<dyn Error>> {
    let fields: Vec<FieldInfo> = registry::required_fields(kind.name())?;
    for f in fields {
        match f.default_value {
            Some(d) => println!("{:<16}{} (default: {d})", f.name, f.declared_type),
            None => println!("{:<16}{}", f.name, f.declared_type),
        }
    }
    Ok(())
}

/// Print the records of the collection, grouped by type.
fn show(saver: &SaverCollection) -> Result<(), Box<dyn Error>> {
    let records: Vec<Record> = saver.get_records()?;
    for (kind, group) in collection::group_by_type(&records) {
        println!("== {kind} ({})", group.len());
        for (i, r) in group {
            let used: &str = if matches!(r.used(), Ok(true)) { "*" } else { " " };
            println!("{i:>5} {used} {}", r.get("text_to_encrypt").unwrap_or("?"));
        }
    }
    Ok(())
}

/// Report the records that cannot be decoded because they miss fields.
fn check(saver: &SaverCollection) -> Result<(), Box<dyn Error>> {
    let records: Vec<Record> = saver.get_records()?;
    let mut bad: usize = 0;
    for (i, r) in records.iter().enumerate() {
        match registry::missing_fields(r) {
            Ok(missing) if missing.is_empty() => (),
            Ok(missing) => {
                bad += 1;
                println!("{i:>5} {}: missing {}", r.type_name()?, missing.join(", "));
            }
            Err(e) => {
                bad += 1;
                println!("{i:>5} {e}");
            }
        }
    }
    debug!("{bad} records out of {} need attention", records.len());
    if bad > 0 {
        return Err(format!("{bad} records need attention").into());
    }
    Ok(())
}

/// Write tomorrow's puzzle and mark its record as used.
fn publish_daily(
    saver: &SaverCollection,
    dir: &Path,
    ctx: &mut CipherContext<'_>,
) -> Result<(), Box<dyn Error>> {
    let mut records: Vec<Record> = saver.get_records()?;
    let (i, r) = daily::pick_random(&records, ctx).ok_or("No unused puzzle left to publish")?;
    let path: PathBuf = daily::write_for_date(&r, daily::tomorrow(), dir)?;
    records[i].insert("used", true.to_string());
    saver.save_records(&records)?;
    println!("{}", path.display());
    Ok(())
}
