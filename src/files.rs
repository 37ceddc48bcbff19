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

//! Whole-file operations: joining and padding.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{ErrorCode, Result, ToolError};

/// Concatenate `inputs`, in order, into `output`.
///
/// The output is created or overwritten. Returns the number of bytes written.
pub fn join_files(inputs: &[PathBuf], output: &Path) -> Result<u64> {
    let file =
        File::create(output).map_err(|e| ToolError::io(ErrorCode::CannotOpenOutput, output, e))?;
    let mut writer = BufWriter::new(file);
    let mut total = 0;

    for input in inputs {
        let mut reader =
            File::open(input).map_err(|e| ToolError::io(ErrorCode::CannotOpenInput, input, e))?;
        total += io::copy(&mut reader, &mut writer)
            .map_err(|e| ToolError::io(ErrorCode::WriteFailed, output, e))?;
    }

    writer
        .flush()
        .map_err(|e| ToolError::io(ErrorCode::WriteFailed, output, e))?;

    Ok(total)
}

/// What [`pad_file`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadOutcome {
    /// The file did not exist and was created.
    Created,
    /// Fill bytes were appended.
    Padded,
    /// The file already had the requested size.
    Unchanged,
}

/// Result of padding a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadReport {
    /// Whether the file was created, padded or left alone.
    pub outcome: PadOutcome,
    /// Size before padding (0 for a new file).
    pub old_size: u64,
    /// Size after padding.
    pub new_size: u64,
}

/// Append `fill` bytes to `path` until it is `size` bytes long.
///
/// A missing file is created. A file larger than `size` is an error and is
/// not modified.
pub fn pad_file(path: &Path, size: u64, fill: u8) -> Result<PadReport> {
    let existing = fs::metadata(path).ok().map(|m| m.len());

    if let Some(old_size) = existing {
        if old_size > size {
            return Err(ToolError::new(
                ErrorCode::FileLargerThanSize,
                format!(
                    "\"{}\" is already {} bytes, larger than {}",
                    path.display(),
                    old_size,
                    size
                ),
            ));
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ToolError::io(ErrorCode::CannotOpenOutput, path, e))?;

    let old_size = existing.unwrap_or(0);
    io::copy(&mut io::repeat(fill).take(size - old_size), &mut file)
        .map_err(|e| ToolError::io(ErrorCode::WriteFailed, path, e))?;

    let outcome = match existing {
        None => PadOutcome::Created,
        Some(old) if old == size => PadOutcome::Unchanged,
        Some(_) => PadOutcome::Padded,
    };

    Ok(PadReport {
        outcome,
        old_size,
        new_size: size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        let out = dir.path().join("out.bin");
        fs::write(&a, [1, 2, 3]).unwrap();
        fs::write(&b, [4, 5]).unwrap();

        let written = join_files(&[a.clone(), b, a], &out).unwrap();

        assert_eq!(written, 8);
        assert_eq!(fs::read(&out).unwrap(), vec![1, 2, 3, 4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_join_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.bin");

        let err = join_files(&[dir.path().join("nope.bin")], &out).unwrap_err();

        assert_eq!(err.code, ErrorCode::CannotOpenInput);
    }

    #[test]
    fn test_pad_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rom.bin");
        fs::write(&path, [0xAA, 0xBB]).unwrap();

        let report = pad_file(&path, 6, 0xFF).unwrap();

        assert_eq!(report.outcome, PadOutcome::Padded);
        assert_eq!(report.old_size, 2);
        assert_eq!(
            fs::read(&path).unwrap(),
            vec![0xAA, 0xBB, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_pad_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.bin");

        let report = pad_file(&path, 1024, 0).unwrap();

        assert_eq!(report.outcome, PadOutcome::Created);
        assert_eq!(fs::read(&path).unwrap(), vec![0; 1024]);
    }

    #[test]
    fn test_pad_exact_size_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exact.bin");
        fs::write(&path, [1, 2, 3, 4]).unwrap();

        let report = pad_file(&path, 4, 0).unwrap();

        assert_eq!(report.outcome, PadOutcome::Unchanged);
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pad_larger_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        fs::write(&path, [0; 10]).unwrap();

        let err = pad_file(&path, 8, 0).unwrap_err();

        assert_eq!(err.code, ErrorCode::FileLargerThanSize);
        assert_eq!(fs::read(&path).unwrap().len(), 10);
    }
}
