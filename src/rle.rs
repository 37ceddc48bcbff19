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

//! Run-length encoding for 8-bit decompressors.
//!
//! The stream is a sequence of packets, each introduced by a control byte:
//!
//! | Control     | Meaning                                    |
//! |-------------|--------------------------------------------|
//! | `0x00`      | End of plane                               |
//! | `0x01-0x7F` | Literal run: that many bytes follow        |
//! | `0x81-0xFF` | Repeat run: the next byte, `ctrl & 0x7F` times |
//!
//! Data can be split into interleaved planes (for example the attribute and
//! pixel bytes of a tile set) which usually compress better separately.
//! Plane `p` of `n` holds input bytes `p, p + n, p + 2n, ...`; every plane
//! is encoded on its own and ends with `0x00`.

use std::fs;
use std::path::Path;

use crate::error::{ErrorCode, Result, ToolError};

/// Longest run a single packet can describe.
pub const MAX_RUN: usize = 127;

/// Control bit marking a repeat run.
const REPEAT_FLAG: u8 = 0x80;

/// Control byte ending a plane.
const END_OF_PLANE: u8 = 0x00;

/// Encoder for one plane.
///
/// `pending` holds literal bytes, or while `repeats > 0` the single byte
/// being repeated (`repeats + 1` copies seen so far).
struct PlaneEncoder<'a> {
    out: &'a mut Vec<u8>,
    pending: Vec<u8>,
    repeats: usize,
}

impl<'a> PlaneEncoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            pending: Vec::with_capacity(MAX_RUN),
            repeats: 0,
        }
    }

    fn push(&mut self, value: u8) {
        let Some(&last) = self.pending.last() else {
            self.pending.push(value);
            return;
        };

        if value == last {
            // A literal run ends where a repeat begins; its last byte
            // becomes the first byte of the repeat.
            if self.repeats == 0 && self.pending.len() >= 2 {
                self.pending.pop();
                self.flush();
                self.pending.push(value);
            }

            self.repeats += 1;

            if self.repeats == MAX_RUN - 1 {
                self.flush();
            }
        } else {
            if self.repeats > 0 {
                self.flush();
            }

            self.pending.push(value);

            if self.pending.len() == MAX_RUN {
                self.flush();
            }
        }
    }

    fn flush(&mut self) {
        if self.repeats > 0 {
            self.out.push(REPEAT_FLAG | (self.repeats + 1) as u8);
            self.out.push(self.pending[0]);
        } else if !self.pending.is_empty() {
            self.out.push(self.pending.len() as u8);
            self.out.extend_from_slice(&self.pending);
        }

        self.pending.clear();
        self.repeats = 0;
    }

    fn finish(mut self) {
        self.flush();
        self.out.push(END_OF_PLANE);
    }
}

/// Encode `data` as `planes` interleaved planes.
///
/// # Panics
///
/// Panics if `planes` is zero.
pub fn encode(data: &[u8], planes: usize) -> Vec<u8> {
    assert!(planes > 0, "at least one plane is required");

    let mut out = Vec::with_capacity(data.len() + data.len() / MAX_RUN + planes * 2);

    for plane in 0..planes {
        let mut encoder = PlaneEncoder::new(&mut out);
        for &value in data.iter().skip(plane).step_by(planes) {
            encoder.push(value);
        }
        encoder.finish();
    }

    out
}

/// Decode a stream produced by [`encode`] with the same plane count.
pub fn decode(stream: &[u8], planes: usize) -> Result<Vec<u8>> {
    if planes == 0 {
        return Err(ToolError::new(
            ErrorCode::InvalidPlanes,
            "At least one plane is required",
        ));
    }

    let truncated = || ToolError::new(ErrorCode::CorruptRle, "RLE stream ends inside a packet");

    let mut decoded_planes: Vec<Vec<u8>> = Vec::with_capacity(planes);
    let mut pos = 0;

    for _ in 0..planes {
        let mut plane = Vec::new();

        loop {
            let control = *stream.get(pos).ok_or_else(truncated)?;
            pos += 1;

            if control == END_OF_PLANE {
                break;
            }

            if control & REPEAT_FLAG != 0 {
                let value = *stream.get(pos).ok_or_else(truncated)?;
                pos += 1;
                let count = (control & !REPEAT_FLAG) as usize;
                plane.extend(std::iter::repeat(value).take(count));
            } else {
                let count = control as usize;
                let literal = stream.get(pos..pos + count).ok_or_else(truncated)?;
                pos += count;
                plane.extend_from_slice(literal);
            }
        }

        decoded_planes.push(plane);
    }

    if pos != stream.len() {
        return Err(ToolError::new(
            ErrorCode::CorruptRle,
            format!("{} unexpected bytes after the last plane", stream.len() - pos),
        ));
    }

    // Interleave: plane p supplies bytes p, p + n, p + 2n, ...
    let total: usize = decoded_planes.iter().map(Vec::len).sum();
    let mut data = vec![0u8; total];
    for (p, plane) in decoded_planes.iter().enumerate() {
        for (i, &value) in plane.iter().enumerate() {
            let index = p + i * planes;
            let slot = data.get_mut(index).ok_or_else(|| {
                ToolError::new(ErrorCode::CorruptRle, "Plane lengths do not interleave")
            })?;
            *slot = value;
        }
    }

    Ok(data)
}

/// Parse a `--planes` argument.
pub fn parse_planes(text: &str) -> Result<usize> {
    match text.parse::<usize>() {
        Ok(planes) if planes > 0 => Ok(planes),
        _ => Err(ToolError::new(
            ErrorCode::InvalidPlanes,
            format!("Invalid plane count \"{}\". Must be 1 or more.", text),
        )
        .with_argument(text, 0..text.len())),
    }
}

/// Compress the file `input` into `output`.
///
/// Returns the input and output sizes.
pub fn compress_file(input: &Path, output: &Path, planes: usize) -> Result<(usize, usize)> {
    if planes == 0 {
        return Err(ToolError::new(
            ErrorCode::InvalidPlanes,
            "At least one plane is required",
        ));
    }

    let data =
        fs::read(input).map_err(|e| ToolError::io(ErrorCode::CannotOpenInput, input, e))?;
    let encoded = encode(&data, planes);

    fs::write(output, &encoded)
        .map_err(|e| ToolError::io(ErrorCode::CannotOpenOutput, output, e))?;

    Ok((data.len(), encoded.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(&[], 1), vec![0x00]);
        assert_eq!(encode(&[], 3), vec![0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_literal_run() {
        assert_eq!(encode(&[1, 2, 3], 1), vec![3, 1, 2, 3, 0]);
    }

    #[test]
    fn test_repeat_run() {
        assert_eq!(encode(&[7, 7, 7, 7], 1), vec![0x84, 7, 0]);
    }

    #[test]
    fn test_literal_then_repeat() {
        assert_eq!(
            encode(&[1, 2, 5, 5, 5, 3], 1),
            vec![2, 1, 2, 0x83, 5, 1, 3, 0]
        );
    }

    #[test]
    fn test_single_pair_is_a_repeat() {
        assert_eq!(encode(&[9, 9], 1), vec![0x82, 9, 0]);
    }

    #[test]
    fn test_long_repeat_splits() {
        let data = vec![0xAA; 300];
        let encoded = encode(&data, 1);
        assert_eq!(
            encoded,
            vec![0xFF, 0xAA, 0xFF, 0xAA, 0x80 | 46, 0xAA, 0x00]
        );
        assert_eq!(decode(&encoded, 1).unwrap(), data);
    }

    #[test]
    fn test_long_literal_splits() {
        let data: Vec<u8> = (0..200).map(|i| i as u8).collect();
        let encoded = encode(&data, 1);
        assert_eq!(encoded[0], 127);
        assert_eq!(encoded[128], 73);
        assert_eq!(decode(&encoded, 1).unwrap(), data);
    }

    #[test]
    fn test_planes_are_interleaved() {
        // Plane 0 is all zeros, plane 1 counts up
        let data = [0, 1, 0, 2, 0, 3];
        let encoded = encode(&data, 2);
        assert_eq!(encoded, vec![0x83, 0, 0, 3, 1, 2, 3, 0]);
        assert_eq!(decode(&encoded, 2).unwrap(), data);
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode(&[3, 1, 2], 1).unwrap_err().code, ErrorCode::CorruptRle);
        assert_eq!(decode(&[0x85], 1).unwrap_err().code, ErrorCode::CorruptRle);
        assert_eq!(decode(&[], 1).unwrap_err().code, ErrorCode::CorruptRle);
    }

    #[test]
    fn test_decode_trailing_bytes() {
        assert_eq!(decode(&[0, 0], 1).unwrap_err().code, ErrorCode::CorruptRle);
    }

    #[test]
    fn test_parse_planes() {
        assert_eq!(parse_planes("1").unwrap(), 1);
        assert_eq!(parse_planes("4").unwrap(), 4);
        assert_eq!(parse_planes("0").unwrap_err().code, ErrorCode::InvalidPlanes);
        assert_eq!(parse_planes("x").unwrap_err().code, ErrorCode::InvalidPlanes);
    }
}
