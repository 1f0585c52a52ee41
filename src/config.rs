/*
config.rs

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

//! Default paths and messages of the command-line tool.

/// Long version message.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>"
);

/// Puzzle collection (JSON array of storage records).
pub const COLLECTION_FILE: &str = "resources/master-puzzle-list.json";

/// Symbol pool (JSON array of icon names).
pub const SYMBOLS_FILE: &str = "resources/icon-list.json";

/// Directory of the daily player-facing puzzles.
pub const DAILY_DIR: &str = "resources/auto-generated";

/// Directory of the puzzles frozen for a date.
pub const BY_DATE_DIR: &str = "resources/by_date";
