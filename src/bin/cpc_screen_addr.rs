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

//! Amstrad CPC screen address table generator.
//!
//! Writes `cpc-screen-addr.bin` to the current directory: 200 little-endian
//! words, the start address of each display line.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use binarytools::error::format_error;
use binarytools::output::write_table_file;
use binarytools::Platform;

fn main() -> ExitCode {
    let platform = Platform::Cpc;
    let path = Path::new(platform.default_file_name());

    match write_table_file(platform, path, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", format_error(&e));
            ExitCode::from(1)
        }
    }
}
