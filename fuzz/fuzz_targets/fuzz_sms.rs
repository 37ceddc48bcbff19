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

//! Fuzz target for the Sega Master System header fixer.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_sms

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut rom = data.to_vec();
    if let Ok(report) = binarytools::sms::fix_rom(&mut rom) {
        assert_eq!(rom.len(), data.len());
        let at = report.header_offset + 0xA;
        assert_eq!(u16::from_le_bytes([rom[at], rom[at + 1]]), report.checksum);
    }
});
