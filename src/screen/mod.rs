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

//! Screen address tables for 8-bit home computers.
//!
//! Both supported machines lay out their bitmap memory so that consecutive
//! display lines are *not* consecutive in memory. Drawing code therefore
//! looks up the start address of each line in a precomputed table.
//!
//! - [`cpc`] - Amstrad CPC, 200 lines at 0xC000
//! - [`zx`] - ZX Spectrum, 192 lines at 0x4000

pub mod cpc;
pub mod zx;

/// A machine with a screen address table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Amstrad CPC (all three video modes share the same line layout).
    Cpc,
    /// Sinclair ZX Spectrum.
    Zx,
}

impl Platform {
    /// Human readable machine name.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Cpc => "Amstrad CPC",
            Platform::Zx => "ZX Spectrum",
        }
    }

    /// Number of display lines.
    pub fn line_count(self) -> usize {
        match self {
            Platform::Cpc => cpc::LINES,
            Platform::Zx => zx::LINES,
        }
    }

    /// File name the standalone generator writes to.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Platform::Cpc => "cpc-screen-addr.bin",
            Platform::Zx => "zx-screen-addr.bin",
        }
    }

    /// The start address of every display line, top to bottom.
    pub fn table(self) -> &'static [u16] {
        match self {
            Platform::Cpc => &cpc::SCREEN_ADDRESSES,
            Platform::Zx => &zx::SCREEN_ADDRESSES,
        }
    }

    /// The start address of line `y`, or `None` past the bottom of the screen.
    pub fn address(self, y: usize) -> Option<u16> {
        self.table().get(y).copied()
    }

    /// Size in bytes of the serialized table.
    pub fn table_size(self) -> usize {
        self.line_count() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(Platform::Cpc.table().len(), 200);
        assert_eq!(Platform::Zx.table().len(), 192);
        assert_eq!(Platform::Cpc.table_size(), 400);
        assert_eq!(Platform::Zx.table_size(), 384);
    }

    #[test]
    fn test_address_bounds() {
        assert_eq!(Platform::Cpc.address(0), Some(0xC000));
        assert_eq!(Platform::Cpc.address(199), Some(0xC000 + 24 * 80 + 7 * 2048));
        assert_eq!(Platform::Cpc.address(200), None);
        assert_eq!(Platform::Zx.address(191), Some(0x57E0));
        assert_eq!(Platform::Zx.address(192), None);
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(Platform::Cpc.default_file_name(), "cpc-screen-addr.bin");
        assert_eq!(Platform::Zx.default_file_name(), "zx-screen-addr.bin");
    }
}
