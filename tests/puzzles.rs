/*
puzzles.rs

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

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};

use codiac::errors::PuzzleError;
use codiac::generator::context::CipherContext;
use codiac::generator::letters;
use codiac::generator::symbol_pool::SymbolPool;
use codiac::puzzle::Puzzle;
use codiac::record::{self, EncodeMode, Record};
use codiac::registry::{self, RawFields};

fn raw(pairs: &[(&str, &str)]) -> RawFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// One puzzle of each variant, built from raw field values.
fn one_of_each(ctx: &mut CipherContext<'_>) -> Vec<Puzzle> {
    let inputs: Vec<(&str, RawFields)> = vec![
        (
            "CharacterQuote",
            raw(&[
                ("quote", "May the Force be with you"),
                ("source_type", "Movie"),
                ("character_name", "Han Solo"),
                ("source", "Star Wars"),
                ("release_date", "1977"),
            ]),
        ),
        (
            "DirectQuote",
            raw(&[
                ("quote", "Stay hungry, stay foolish"),
                ("author", "Stewart Brand"),
                ("release_date", "1974"),
                ("used", "true"),
            ]),
        ),
        (
            "FamousDocumentQuote",
            raw(&[
                ("quote", "We the People"),
                ("source", "Constitution"),
                ("author", "Gouverneur Morris"),
                ("release_date", "1787"),
            ]),
        ),
        ("GeneralPhrase", raw(&[("phrase", "Better late than never")])),
        (
            "ListPuzzle",
            raw(&[
                ("setup", "Planets"),
                ("elements", "Mercury, Venus , Earth,Mars"),
            ]),
        ),
        (
            "Riddle",
            raw(&[("question", "What has keys but no locks?"), ("answer", "keyboard")]),
        ),
        (
            "RiddleSolvedInReverse",
            raw(&[("question", "What gets wetter as it dries?"), ("answer", "towel")]),
        ),
        (
            "SongLyrics",
            raw(&[
                ("lyrics", "Here comes the sun"),
                ("artist", "The Beatles"),
                ("title", "Here Comes the Sun"),
                ("release_date", "1969"),
            ]),
        ),
    ];
    inputs
        .iter()
        .map(|(name, fields)| registry::construct(name, fields, ctx).unwrap())
        .collect()
}

#[test]
fn scenario_riddle() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(1);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    let p: Puzzle = Puzzle::riddle("What has keys but no locks?", "keyboard", &mut ctx).unwrap();
    assert_eq!(p.category(), "Riddle");
    assert_eq!(p.text_to_encrypt(), "keyboard");
    assert_eq!(p.cipher_map().len(), 8);
    assert_eq!(p.hints().len(), 8);
    assert!(!p.used());
}

#[test]
fn scenario_general_phrase_storage() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(2);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    let p: Puzzle = Puzzle::general_phrase("go now", &mut ctx).unwrap();
    let r: Record = record::encode(&p, EncodeMode::Storage);
    assert_eq!(r.get("type"), Some("GeneralPhrase"));
    assert_eq!(r.get("text_to_encrypt"), Some("go now"));
    assert_eq!(r.get("length"), Some("6"));
    assert_eq!(r.get("used"), Some("false"));
    assert!(!r.contains_key("hints"));
    assert!(!r.contains_key("cipher_map"));
}

#[test]
fn scenario_direct_quote_without_date() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(3);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    let p: Puzzle =
        Puzzle::direct_quote("To be or not to be", "Shakespeare", None, &mut ctx).unwrap();

    let stored: Record = record::encode(&p, EncodeMode::Storage);
    assert!(!stored.contains_key("release_date"));

    let player: Record = record::encode(&p, EncodeMode::PlayerFacing);
    assert!(!player.contains_key("used"));
    assert!(!player.contains_key("length"));
    let other_info: Value = serde_json::from_str(player.get("other_info").unwrap()).unwrap();
    assert_eq!(other_info["Author"], "Shakespeare");
    assert!(other_info.get("Release Date").is_none());

    let hints: Vec<Value> = serde_json::from_str(player.get("hints").unwrap()).unwrap();
    let distinct: BTreeSet<char> = letters(p.text_to_encrypt()).collect();
    assert_eq!(hints.len(), distinct.len());
    assert!(hints.iter().all(|h| h["type"] == "RevealLetter"));
}

#[test]
fn scenario_unknown_type() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(4);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    let r: Record = serde_json::from_str(
        r#"{"type": "Unicorn", "text_to_encrypt": "sparkle", "used": "false"}"#,
    )
    .unwrap();
    assert_eq!(
        record::decode(&r, &mut ctx).unwrap_err(),
        PuzzleError::UnknownPuzzleType("Unicorn".to_string())
    );
    assert!(matches!(
        registry::construct("Unicorn", &RawFields::new(), &mut ctx),
        Err(PuzzleError::UnknownPuzzleType(_))
    ));
}

#[test]
fn cipher_covers_exactly_the_letters() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(5);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    for p in one_of_each(&mut ctx) {
        let expected: BTreeSet<char> = letters(p.text_to_encrypt()).collect();
        let keys: BTreeSet<char> = p.cipher_map().letters().collect();
        assert_eq!(keys, expected, "{} cipher domain", p.kind());

        let tokens: HashSet<&str> = p.cipher_map().iter().map(|(_, t)| t).collect();
        assert_eq!(tokens.len(), p.cipher_map().len(), "{} injectivity", p.kind());
        assert!(tokens.iter().all(|t| pool.tokens().iter().any(|s| s == t)));

        assert_eq!(p.hints().len(), letters(p.text_to_encrypt()).count());
    }
}

#[test]
fn storage_round_trip_for_every_variant() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(6);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    let puzzles: Vec<Puzzle> = one_of_each(&mut ctx);
    let names: Vec<&str> = puzzles.iter().map(|p| p.kind().name()).collect();
    assert_eq!(names, registry::list_variant_names());

    for p in puzzles {
        let r: Record = record::encode(&p, EncodeMode::Storage);
        let json: String = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);

        let q: Puzzle = record::decode(&back, &mut ctx).unwrap();
        assert_eq!(q.kind(), p.kind());
        assert_eq!(q.text_to_encrypt(), p.text_to_encrypt());
        assert_eq!(q.category(), p.category());
        assert_eq!(q.used(), p.used());
        assert_eq!(q.details(), p.details());
        assert_eq!(q.cipher_map().len(), p.cipher_map().len());
        assert!(registry::missing_fields(&back).unwrap().is_empty());
    }
}

#[test]
fn list_puzzle_joins_trimmed_elements() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(7);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    let fields: RawFields = raw(&[("setup", "Planets"), ("elements", "Mercury, Venus , Earth")]);
    let p: Puzzle = registry::construct("ListPuzzle", &fields, &mut ctx).unwrap();
    assert_eq!(p.text_to_encrypt(), "Mercury Venus Earth");
    assert_eq!(p.category(), "list");

    let fields: RawFields = raw(&[("setup", "Planets"), ("elements", " , ")]);
    assert!(matches!(
        registry::construct("ListPuzzle", &fields, &mut ctx),
        Err(PuzzleError::InvalidFieldValue { .. })
    ));
}

#[test]
fn construction_reports_the_missing_field() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(8);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    let fields: RawFields = raw(&[("lyrics", "Let it be"), ("artist", "The Beatles")]);
    assert_eq!(
        registry::construct("SongLyrics", &fields, &mut ctx).unwrap_err(),
        PuzzleError::MissingRequiredField {
            kind: "SongLyrics".to_string(),
            field: "title".to_string(),
        }
    );
}

#[test]
fn small_pool_is_rejected() {
    let pool: SymbolPool = SymbolPool::new(["sun", "moon", "star"]);
    let mut rng: StdRng = StdRng::seed_from_u64(9);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    assert_eq!(
        Puzzle::general_phrase("abcd", &mut ctx).unwrap_err(),
        PuzzleError::InsufficientSymbolPool {
            needed: 4,
            available: 3
        }
    );
    assert!(Puzzle::general_phrase("a b c, a!", &mut ctx).is_ok());
}

#[test]
fn every_built_puzzle_can_be_decoded() {
    let pool: SymbolPool = SymbolPool::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(10);
    let mut ctx: CipherContext = CipherContext::new(&pool, &mut rng);

    assert!(matches!(
        Puzzle::song_lyrics("la la", "Someone", "Song", "", &mut ctx),
        Err(PuzzleError::MissingRequiredField { .. })
    ));
    assert!(matches!(
        Puzzle::list_puzzle("Empty", Vec::<String>::new(), &mut ctx),
        Err(PuzzleError::MissingRequiredField { .. })
    ));

    let p: Puzzle = Puzzle::direct_quote("Veni vidi vici", "Caesar", Some(""), &mut ctx).unwrap();
    let r: Record = record::encode(&p, EncodeMode::Storage);
    let q: Puzzle = record::decode(&r, &mut ctx).unwrap();
    assert_eq!(q.details(), p.details());
}
