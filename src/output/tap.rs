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

//! ZX Spectrum TAP file writer.
//!
//! A TAP file is a sequence of blocks, each prefixed with its length as a
//! 16-bit little-endian word. Loading machine code takes two blocks:
//!
//! 1. A 19 byte header: flag 0x00, type 3 (CODE), 10 character name,
//!    data length, load address, parameter 2 (0x8000), XOR checksum
//! 2. The data: flag 0xFF, the code, XOR checksum

use std::fs;
use std::path::Path;

use crate::error::{ErrorCode, Result, ToolError};

/// Maximum length of a tape file name.
pub const MAX_NAME_LENGTH: usize = 10;

/// Largest code block that fits, leaving room for the flag and checksum bytes.
pub const MAX_CODE_SIZE: usize = u16::MAX as usize - 2;

/// Length of a header block, excluding the length word itself.
const HEADER_BLOCK_LENGTH: u16 = 19;

/// Flag byte of a header block.
const FLAG_HEADER: u8 = 0x00;

/// Flag byte of a data block.
const FLAG_DATA: u8 = 0xFF;

/// Header type for a CODE file.
const TYPE_CODE: u8 = 3;

/// Parameter 2 of a CODE header.
const CODE_PARAM2: u16 = 0x8000;

/// XOR all bytes into `seed`.
fn checksum(seed: u8, bytes: &[u8]) -> u8 {
    bytes.iter().fold(seed, |acc, &b| acc ^ b)
}

/// Convert a file name into the 10 byte space padded header field.
///
/// Control characters become spaces.
pub fn tape_name(name: &str) -> Result<[u8; MAX_NAME_LENGTH]> {
    let bytes = name.as_bytes();
    if bytes.len() > MAX_NAME_LENGTH {
        return Err(ToolError::new(
            ErrorCode::NameTooLong,
            format!(
                "Code name \"{}\" is too long ({}). Must be {} characters or less.",
                name,
                bytes.len(),
                MAX_NAME_LENGTH
            ),
        )
        .with_argument(name, MAX_NAME_LENGTH..bytes.len()));
    }

    let mut field = [b' '; MAX_NAME_LENGTH];
    for (slot, &b) in field.iter_mut().zip(bytes) {
        *slot = if b < 32 { b' ' } else { b };
    }

    Ok(field)
}

/// Build a TAP image holding `code` as a CODE file loaded at `origin`.
pub fn build_tap(name: &str, origin: u16, code: &[u8]) -> Result<Vec<u8>> {
    let name = tape_name(name)?;

    if code.len() > MAX_CODE_SIZE {
        return Err(ToolError::new(
            ErrorCode::DataTooLarge,
            format!(
                "Code is {} bytes, a CODE block holds at most {}",
                code.len(),
                MAX_CODE_SIZE
            ),
        ));
    }
    let length = code.len() as u16;

    let mut tap = Vec::with_capacity(21 + 4 + code.len());

    // Header block
    tap.extend_from_slice(&HEADER_BLOCK_LENGTH.to_le_bytes());
    let header_start = tap.len();
    tap.push(FLAG_HEADER);
    tap.push(TYPE_CODE);
    tap.extend_from_slice(&name);
    tap.extend_from_slice(&length.to_le_bytes());
    tap.extend_from_slice(&origin.to_le_bytes());
    tap.extend_from_slice(&CODE_PARAM2.to_le_bytes());
    tap.push(checksum(0, &tap[header_start..]));

    // Data block
    tap.extend_from_slice(&(length + 2).to_le_bytes());
    tap.push(FLAG_DATA);
    tap.extend_from_slice(code);
    tap.push(checksum(FLAG_DATA, code));

    Ok(tap)
}

/// Wrap the machine code in `input` into the TAP file `output`.
///
/// Returns the size of the code block.
pub fn write_tap(input: &Path, name: &str, origin: u16, output: &Path) -> Result<usize> {
    let code =
        fs::read(input).map_err(|e| ToolError::io(ErrorCode::CannotOpenInput, input, e))?;
    let tap = build_tap(name, origin, &code)?;

    fs::write(output, &tap)
        .map_err(|e| ToolError::io(ErrorCode::CannotOpenOutput, output, e))?;

    Ok(code.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tape_name_padding() {
        assert_eq!(&tape_name("test").unwrap(), b"test      ");
        assert_eq!(&tape_name("0123456789").unwrap(), b"0123456789");
        assert_eq!(&tape_name("a\tb").unwrap(), b"a b       ");
    }

    #[test]
    fn test_tape_name_too_long() {
        let err = tape_name("abcdefghijk").unwrap_err();
        assert_eq!(err.code, ErrorCode::NameTooLong);
        assert_eq!(err.span.start, 10);
    }

    #[test]
    fn test_build_tap_layout() {
        let tap = build_tap("test", 0x8000, &[1, 2, 3]).unwrap();

        assert_eq!(tap.len(), 21 + 4 + 3);

        // Header block
        assert_eq!(&tap[0..4], &[19, 0, 0x00, 3]);
        assert_eq!(&tap[4..14], b"test      ");
        assert_eq!(&tap[14..16], &[3, 0]);
        assert_eq!(&tap[16..18], &[0x00, 0x80]);
        assert_eq!(&tap[18..20], &[0x00, 0x80]);
        assert_eq!(tap[20], 0x16);

        // Data block
        assert_eq!(&tap[21..24], &[5, 0, 0xFF]);
        assert_eq!(&tap[24..27], &[1, 2, 3]);
        assert_eq!(tap[27], 0xFF);
    }

    #[test]
    fn test_block_checksums_verify() {
        let code: Vec<u8> = (0..=255).collect();
        let tap = build_tap("ROUTINE", 0x6000, &code).unwrap();

        // XOR over flag, payload and checksum is zero for a valid block
        assert_eq!(checksum(0, &tap[2..21]), 0);
        assert_eq!(checksum(0, &tap[23..]), 0);
    }

    #[test]
    fn test_empty_code() {
        let tap = build_tap("EMPTY", 0x8000, &[]).unwrap();
        assert_eq!(&tap[21..], &[2, 0, 0xFF, 0xFF]);
    }

    #[test]
    fn test_code_too_large() {
        let code = vec![0; MAX_CODE_SIZE + 1];
        let err = build_tap("BIG", 0x0000, &code).unwrap_err();
        assert_eq!(err.code, ErrorCode::DataTooLarge);
    }
}
