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

//! Sega Master System ROM header fixer.
//!
//! The export SMS BIOS refuses to boot a cartridge unless it finds a
//! `TMR SEGA` header whose checksum matches the ROM contents. The header is
//! 16 bytes at 0x1FF0, 0x3FF0 or 0x7FF0:
//!
//! | Offset | Content                                   |
//! |--------|-------------------------------------------|
//! | 0x0    | `TMR SEGA`                                |
//! | 0x8    | reserved                                  |
//! | 0xA    | checksum (little-endian)                  |
//! | 0xC    | product code and version                  |
//! | 0xF    | region (high nibble), size (low nibble)   |
//!
//! The checksum is a 16-bit sum of the bytes below the header, plus whole
//! 16 KB banks from 0x8000 upwards for cartridges of 64 KB and more.

use std::fs;
use std::path::Path;

use crate::error::{ErrorCode, Result, ToolError};

/// Offsets where the BIOS looks for the header.
pub const HEADER_OFFSETS: [usize; 3] = [0x1FF0, 0x3FF0, 0x7FF0];

/// Size of the header.
pub const HEADER_SIZE: usize = 16;

/// Signature written to a new header, including the two reserved bytes.
const SIGNATURE: [u8; 10] = *b"TMR SEGA\xFF\xFF";

const CHECKSUM_OFFSET: usize = 0xA;
const REGION_SIZE_OFFSET: usize = 0xF;

/// Region code for a Japanese Master System.
pub const REGION_SMS_JAPAN: u8 = 3;

/// Region code for an export Master System.
pub const REGION_SMS_EXPORT: u8 = 4;

const BANK_SIZE: usize = 0x4000;
const FIRST_BANK: usize = 0x8000;

/// Summed range below the header, indexed by `(size_code - 0xA) & 0xF`.
const CHECKSUM_RANGES: [usize; 9] = [
    0x1FF0, 0x3FF0, 0x7FF0, 0xBFF0, // 8, 16, 32, 48 KB
    0x7FF0, 0x7FF0, 0x7FF0, 0x7FF0, 0x7FF0, // 64 KB - 1 MB
];

/// Extra 16 KB banks summed from 0x8000, for 64, 128, 256, 512 KB and 1 MB.
const EXTRA_BANKS: [usize; 5] = [2, 6, 14, 30, 62];

/// Whether the header was already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    /// A `TMR SEGA` header was found.
    Found,
    /// No header was found and one was written.
    Added,
}

/// What [`fix_rom`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    /// Offset of the header.
    pub header_offset: usize,
    /// Whether the header had to be created.
    pub header: HeaderStatus,
    /// The checksum stored in the header.
    pub checksum: u16,
    /// The ROM size code (low nibble of header byte 0xF).
    pub size_code: u8,
    /// Whether the region was switched to SMS Export.
    pub region_changed: bool,
}

/// Display name of a ROM size code.
pub fn size_code_name(code: u8) -> &'static str {
    match code & 0x0F {
        0xA => "8KB",
        0xB => "16KB",
        0xC => "32KB",
        0xD => "48KB",
        0xE => "64KB",
        0xF => "128KB",
        0x0 => "256KB",
        0x1 => "512KB",
        0x2 => "1MB",
        _ => "???",
    }
}

/// The size code for a ROM of `length` bytes, if it is a standard size.
///
/// Only whole 8 KB units count, so a dump with trailing bytes still gets
/// the code of its standard size.
fn size_code_for_length(length: usize) -> Option<u8> {
    match length / 8192 {
        1 => Some(0xA),
        2 => Some(0xB),
        4 => Some(0xC),
        6 => Some(0xD),
        8 => Some(0xE),
        16 => Some(0xF),
        32 => Some(0x0),
        64 => Some(0x1),
        128 => Some(0x2),
        _ => None,
    }
}

/// 16-bit wrapping sum of `bytes`.
pub fn checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |sum, &b| sum.wrapping_add(b as u16))
}

/// Checksum of `rom` as the BIOS computes it for `size_code`.
fn rom_checksum(rom: &[u8], size_code: u8) -> Result<u16> {
    let index = (size_code.wrapping_sub(0x0A) & 0x0F) as usize;

    let range = *CHECKSUM_RANGES.get(index).ok_or_else(|| {
        ToolError::new(
            ErrorCode::UnsupportedSizeCode,
            format!("Unsupported ROM size code 0x{:X}", size_code),
        )
    })?;
    let banks = index.checked_sub(4).map_or(0, |i| EXTRA_BANKS[i]);

    let required = if banks > 0 {
        FIRST_BANK + banks * BANK_SIZE
    } else {
        range
    };
    if rom.len() < required {
        return Err(ToolError::new(
            ErrorCode::RomTruncated,
            format!(
                "ROM is {} bytes but size code 0x{:X} ({}) needs {}",
                rom.len(),
                size_code,
                size_code_name(size_code),
                required
            ),
        ));
    }

    let mut sum = checksum(&rom[..range]);
    for bank in 0..banks {
        let start = FIRST_BANK + bank * BANK_SIZE;
        sum = sum.wrapping_add(checksum(&rom[start..start + BANK_SIZE]));
    }

    Ok(sum)
}

/// Locate the header, writing a new one if necessary.
fn find_or_add_header(rom: &mut [u8]) -> Result<(usize, HeaderStatus)> {
    let mut candidate = None;

    for &offset in &HEADER_OFFSETS {
        if offset + HEADER_SIZE > rom.len() {
            break;
        }
        if rom[offset..offset + 8] == SIGNATURE[..8] {
            return Ok((offset, HeaderStatus::Found));
        }
        candidate = Some(offset);
    }

    let offset = candidate.ok_or_else(|| {
        ToolError::new(
            ErrorCode::HeaderNotFound,
            format!("ROM is {} bytes, too small to hold a header", rom.len()),
        )
        .with_hint(format!("The smallest ROM with a header is {} bytes", 0x2000))
    })?;

    rom[offset..offset + SIGNATURE.len()].copy_from_slice(&SIGNATURE);
    Ok((offset, HeaderStatus::Added))
}

/// Update the header of `rom` in memory: signature, size code, region and checksum.
pub fn fix_rom(rom: &mut [u8]) -> Result<ChecksumReport> {
    let (offset, header) = find_or_add_header(rom)?;
    let info = offset + REGION_SIZE_OFFSET;

    // Size code from the actual length, when it is a standard size
    let mut size_code = rom[info] & 0x0F;
    if let Some(code) = size_code_for_length(rom.len()) {
        size_code = code;
    }
    rom[info] = (rom[info] & 0xF0) | size_code;

    let sum = rom_checksum(rom, size_code)?;

    // Only the export BIOS checks the header, so claim that region
    let region = rom[info] >> 4;
    let region_changed = region != REGION_SMS_JAPAN && region != REGION_SMS_EXPORT;
    if region_changed {
        rom[info] = (REGION_SMS_EXPORT << 4) | size_code;
    }

    let checksum_at = offset + CHECKSUM_OFFSET;
    rom[checksum_at..checksum_at + 2].copy_from_slice(&sum.to_le_bytes());

    Ok(ChecksumReport {
        header_offset: offset,
        header,
        checksum: sum,
        size_code,
        region_changed,
    })
}

/// Fix the header of the ROM file at `path` in place.
pub fn fix_rom_file(path: &Path) -> Result<ChecksumReport> {
    let mut rom =
        fs::read(path).map_err(|e| ToolError::io(ErrorCode::CannotOpenInput, path, e))?;
    let report = fix_rom(&mut rom)?;

    fs::write(path, &rom).map_err(|e| ToolError::io(ErrorCode::CannotOpenOutput, path, e))?;

    Ok(report)
}
