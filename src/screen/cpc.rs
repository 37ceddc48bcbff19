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

//! Amstrad CPC screen layout.
//!
//! Screen memory starts at 0xC000 and every line is 80 bytes wide in all
//! three video modes. Lines are grouped into character rows of 8: the row
//! selects an 80 byte step and the line within the row selects a 2 KB bank.
//!
//! ```text
//! address = 0xC000 + (y / 8) * 80 + (y % 8) * 2048
//! ```

/// Number of display lines.
pub const LINES: usize = 200;

/// Start of screen memory.
pub const SCREEN_BASE: u16 = 0xC000;

/// Bytes per display line.
pub const BYTES_PER_LINE: u16 = 80;

/// Distance between two lines of the same character row.
pub const LINE_BANK_SIZE: u16 = 2048;

/// Start address of display line `y`, or `None` below the last line.
pub const fn line_address(y: u16) -> Option<u16> {
    if (y as usize) < LINES {
        Some(address_of(y))
    } else {
        None
    }
}

/// Callers keep `y < LINES`, larger values overflow 16 bits.
const fn address_of(y: u16) -> u16 {
    SCREEN_BASE + (y / 8) * BYTES_PER_LINE + (y % 8) * LINE_BANK_SIZE
}

/// Start address of every display line.
pub const SCREEN_ADDRESSES: [u16; LINES] = {
    let mut table = [0u16; LINES];
    let mut y = 0;
    while y < LINES {
        table[y] = address_of(y as u16);
        y += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_addresses() {
        assert_eq!(line_address(0), Some(0xC000));
        assert_eq!(line_address(1), Some(0xC800));
        assert_eq!(line_address(7), Some(0xF800));
        assert_eq!(line_address(8), Some(0xC050));
        assert_eq!(line_address(199), Some(0xFF80));
    }

    #[test]
    fn test_lines_past_bottom() {
        assert_eq!(line_address(200), None);
        assert_eq!(line_address(1000), None);
        assert_eq!(line_address(u16::MAX), None);
    }

    #[test]
    fn test_table_matches_formula() {
        for (y, &address) in SCREEN_ADDRESSES.iter().enumerate() {
            assert_eq!(Some(address), line_address(y as u16));
        }
    }

    #[test]
    fn test_rows_are_80_bytes_apart() {
        for y in 0..(LINES - 8) {
            assert_eq!(SCREEN_ADDRESSES[y + 8] - SCREEN_ADDRESSES[y], 80);
        }
    }
}
