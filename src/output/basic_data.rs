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

//! BASIC `DATA` statement writer.
//!
//! Turns a binary file into BASIC source, so small tables and sprites can be
//! typed in or merged into a BASIC listing and `READ` back at run time:
//!
//! ```text
//! 10 DATA 0, 192, 0, 200, 0, 208
//! 20 DATA 0, 216, 0, 224
//! ```

use std::fs;
use std::path::Path;

use crate::error::{ErrorCode, Result, ToolError};
use crate::numbers::parse_value;

/// Default maximum line width.
pub const DEFAULT_COLUMNS: usize = 40;

/// Narrowest line width accepted.
pub const MIN_COLUMNS: usize = 20;

/// Default distance between line numbers.
pub const DEFAULT_LINE_STEP: u32 = 10;

/// Largest distance between line numbers.
pub const MAX_LINE_STEP: u32 = 100;

/// BASIC line numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNumbering {
    /// Number of the first line.
    pub start: u32,
    /// Increment between lines.
    pub step: u32,
}

/// How to lay out the `DATA` statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataOptions {
    /// Lines are kept shorter than this many characters.
    pub columns: usize,
    /// Separate values with `,` instead of `, `.
    pub compact: bool,
    /// Prefix each line with a line number.
    pub line_numbers: Option<LineNumbering>,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            compact: false,
            line_numbers: None,
        }
    }
}

/// Summary of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSummary {
    /// Bytes read from the input.
    pub bytes: usize,
    /// `DATA` lines written.
    pub lines: usize,
}

/// Parse a `--cols` argument.
pub fn parse_columns(text: &str) -> Result<usize> {
    let columns = parse_value(text, u32::MAX)? as usize;

    if columns < MIN_COLUMNS {
        return Err(ToolError::new(
            ErrorCode::InvalidColumns,
            format!("Invalid line width {}. Must be {} or more.", columns, MIN_COLUMNS),
        )
        .with_argument(text, 0..text.len()));
    }

    Ok(columns)
}

/// Parse a `--line` argument of the form `START` or `START,STEP`.
pub fn parse_line_numbering(text: &str) -> Result<LineNumbering> {
    let (start_text, step_text) = match text.split_once(',') {
        Some((start, step)) => (start, Some(step)),
        None => (text, None),
    };

    let start = start_text.parse::<u32>().map_err(|_| {
        ToolError::new(
            ErrorCode::InvalidLineNumber,
            format!("Invalid line number \"{}\"", start_text),
        )
        .with_argument(text, 0..start_text.len())
    })?;

    let step = match step_text {
        None => DEFAULT_LINE_STEP,
        Some(step_text) => {
            let offset = start_text.len() + 1;
            match step_text.parse::<u32>() {
                Ok(step) if (1..=MAX_LINE_STEP).contains(&step) => step,
                _ => {
                    return Err(ToolError::new(
                        ErrorCode::InvalidLineStep,
                        format!("Invalid line step \"{}\"", step_text),
                    )
                    .with_argument(text, offset..text.len())
                    .with_hint(format!("The step must be between 1 and {}", MAX_LINE_STEP)));
                }
            }
        }
    };

    Ok(LineNumbering { start, step })
}

/// Number of decimal digits in a byte value.
fn decimal_length(value: u8) -> usize {
    match value {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

/// Render `bytes` as `DATA` statements.
///
/// The result always ends with a newline; empty input renders as `"\n"`.
pub fn format_data(bytes: &[u8], options: &DataOptions) -> String {
    let delimiter = if options.compact { "," } else { ", " };

    let mut output = String::new();
    let mut line_length = 0;
    let mut line_number = options.line_numbers.map(|n| (n.start, n.step));

    for &value in bytes {
        let digits = decimal_length(value);

        if line_length > 0 {
            if line_length + delimiter.len() + digits < options.columns {
                output.push_str(delimiter);
                line_length += delimiter.len();
            } else {
                output.push('\n');
                line_length = 0;

                if let Some((number, step)) = line_number.as_mut() {
                    *number = number.saturating_add(*step);
                }
            }
        }

        if line_length == 0 {
            let line_start = output.len();

            if let Some((number, _)) = line_number {
                output.push_str(&format!("{} ", number));
            }
            output.push_str("DATA ");

            line_length = output.len() - line_start;
        }

        output.push_str(&value.to_string());
        line_length += digits;
    }

    output.push('\n');
    output
}

/// Convert the binary file `input` into the BASIC text file `output`.
pub fn write_data(input: &Path, output: &Path, options: &DataOptions) -> Result<DataSummary> {
    let bytes =
        fs::read(input).map_err(|e| ToolError::io(ErrorCode::CannotOpenInput, input, e))?;
    let text = format_data(&bytes, options);

    fs::write(output, &text)
        .map_err(|e| ToolError::io(ErrorCode::CannotOpenOutput, output, e))?;

    Ok(DataSummary {
        bytes: bytes.len(),
        lines: text.matches("DATA ").count(),
    })
}
