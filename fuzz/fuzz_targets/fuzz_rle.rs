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

//! Fuzz target for the RLE codec.
//!
//! Decodes arbitrary streams, and checks that encoding arbitrary data
//! decodes back to the same bytes.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_rle

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    planes: u8,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let planes = (input.planes % 8) as usize;

    let _ = binarytools::rle::decode(&input.data, planes);

    if planes > 0 {
        let encoded = binarytools::rle::encode(&input.data, planes);
        let decoded = binarytools::rle::decode(&encoded, planes);
        assert_eq!(decoded.ok().as_deref(), Some(input.data.as_slice()));
    }
});
