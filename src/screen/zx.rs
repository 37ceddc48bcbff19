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

//! ZX Spectrum screen layout.
//!
//! The bitmap starts at 0x4000 and the bits of the line number are
//! scattered over the address word:
//!
//! ```text
//! | 15| 14| 13| 12| 11| 10| 9 | 8 | 7 | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
//! | 0 | 1 | 0 | Y7| Y6| Y2| Y1| Y0| Y5| Y4| Y3| X4| X3| X2| X1| X0|
//! ```

/// Number of display lines.
pub const LINES: usize = 192;

/// Start of the bitmap.
pub const SCREEN_BASE: u16 = 0x4000;

/// Start address of display line `y`, or `None` below the last line.
pub const fn line_address(y: u16) -> Option<u16> {
    if (y as usize) < LINES {
        Some(address_of(y))
    } else {
        None
    }
}

/// Only the low 8 bits of `y` take part.
const fn address_of(y: u16) -> u16 {
    let y012 = y & 0b0000_0111;
    let y345 = (y & 0b0011_1000) >> 3;
    let y67 = (y & 0b1100_0000) >> 6;

    SCREEN_BASE | (y012 << 8) | (y345 << 5) | (y67 << 11)
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
        assert_eq!(line_address(0), Some(0x4000));
        assert_eq!(line_address(1), Some(0x4100));
        assert_eq!(line_address(8), Some(0x4020));
        assert_eq!(line_address(64), Some(0x4800));
        assert_eq!(line_address(191), Some(0x57E0));
    }

    #[test]
    fn test_lines_past_bottom() {
        // 256 would alias line 0 if the high bits were dropped
        assert_eq!(line_address(192), None);
        assert_eq!(line_address(256), None);
    }

    #[test]
    fn test_addresses_stay_in_bitmap() {
        for &address in SCREEN_ADDRESSES.iter() {
            assert!((0x4000..0x5800).contains(&address));
            assert_eq!(address & 0x1F, 0, "column bits must be clear");
        }
    }

    #[test]
    fn test_addresses_are_unique() {
        let mut sorted = SCREEN_ADDRESSES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), LINES);
    }
}
