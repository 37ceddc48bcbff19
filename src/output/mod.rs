// BinaryTools - Binary file utilities for 8-bit home computer development
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Output writers.
//!
//! This module produces the files the tools hand to other toolchains:
//! - Screen address tables (raw little-endian words)
//! - ZX Spectrum TAP images
//! - BASIC `DATA` listings

pub mod basic_data;
pub mod table;
pub mod tap;

pub use basic_data::{format_data, write_data, DataOptions, LineNumbering};
pub use table::{decode_table, write_table, write_table_file, TableWriteError};
pub use tap::{build_tap, write_tap};
