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

//! Screen address table writer.
//!
//! A table file is nothing but the line addresses in order, two bytes each,
//! little-endian. There is no header, so entry `i` sits at offset `2 * i`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::error::{ErrorCode, Result, ToolError};
use crate::screen::Platform;

/// Which writer [`write_table`] failed on.
#[derive(Debug, Error)]
pub enum TableWriteError {
    /// The table itself could not be written.
    #[error("cannot write table: {0}")]
    Output(#[source] io::Error),
    /// A progress line could not be written. The table was still written
    /// in full.
    #[error("cannot write progress output: {0}")]
    Log(#[source] io::Error),
}

/// Write the address table of `platform` to `out`.
///
/// Every entry is also reported as one progress line on `log`. Once `log`
/// fails no further lines are sent to it, but the table is completed before
/// the failure is returned. Returns the number of bytes written to `out`.
pub fn write_table<W: Write, L: Write>(
    platform: Platform,
    out: &mut W,
    log: &mut L,
) -> std::result::Result<usize, TableWriteError> {
    let table = platform.table();
    let mut log_error = None;

    for (index, &address) in table.iter().enumerate() {
        if log_error.is_none() {
            log_error = writeln!(log, "output #{}: y = {}, address = {:#x}", index, index, address)
                .err();
        }
        out.write_all(&address.to_le_bytes()).map_err(TableWriteError::Output)?;
    }

    out.flush().map_err(TableWriteError::Output)?;

    match log_error {
        Some(e) => Err(TableWriteError::Log(e)),
        None => Ok(table.len() * 2),
    }
}

/// Create (or truncate) `path` and write the address table of `platform` into it.
pub fn write_table_file<L: Write>(platform: Platform, path: &Path, log: &mut L) -> Result<usize> {
    let file =
        File::create(path).map_err(|e| ToolError::io(ErrorCode::CannotOpenOutput, path, e))?;
    let mut out = BufWriter::new(file);

    write_table(platform, &mut out, log).map_err(|e| match e {
        TableWriteError::Output(e) => ToolError::io(ErrorCode::WriteFailed, path, e),
        TableWriteError::Log(e) => {
            ToolError::new(ErrorCode::LogFailed, "Cannot write progress output")
                .with_source(e)
                .with_hint(format!("\"{}\" was written in full", path.display()))
        }
    })
}

/// Decode a table file back into addresses.
///
/// A trailing odd byte is ignored.
pub fn decode_table(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
