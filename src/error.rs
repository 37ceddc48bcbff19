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

//! Error types for BinaryTools.
//!
//! Every tool reports failures through [`ToolError`]. Errors caused by a
//! command line argument carry that argument and a [`Span`] inside it, so
//! [`format_error`] can point at the offending characters.

use std::io;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// A character range inside a command line argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Error codes for the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Number parsing (E001-E009)
    InvalidNumber,
    UnknownSuffix,
    ValueOutOfRange,
    NumberTooLarge,

    // Tool arguments (E020-E029)
    InvalidColumns,
    InvalidLineNumber,
    InvalidLineStep,
    InvalidPlanes,
    NameTooLong,

    // File access (E100-E109)
    CannotOpenInput,
    CannotOpenOutput,
    WriteFailed,
    LogFailed,

    // File content (E200-E209)
    FileLargerThanSize,
    DataTooLarge,
    HeaderNotFound,
    RomTruncated,
    UnsupportedSizeCode,
    CorruptRle,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidNumber => "E001",
            ErrorCode::UnknownSuffix => "E002",
            ErrorCode::ValueOutOfRange => "E003",
            ErrorCode::NumberTooLarge => "E004",

            ErrorCode::InvalidColumns => "E020",
            ErrorCode::InvalidLineNumber => "E021",
            ErrorCode::InvalidLineStep => "E022",
            ErrorCode::InvalidPlanes => "E023",
            ErrorCode::NameTooLong => "E024",

            ErrorCode::CannotOpenInput => "E100",
            ErrorCode::CannotOpenOutput => "E101",
            ErrorCode::WriteFailed => "E102",
            ErrorCode::LogFailed => "E103",

            ErrorCode::FileLargerThanSize => "E200",
            ErrorCode::DataTooLarge => "E201",
            ErrorCode::HeaderNotFound => "E202",
            ErrorCode::RomTruncated => "E203",
            ErrorCode::UnsupportedSizeCode => "E204",
            ErrorCode::CorruptRle => "E205",
        }
    }
}

/// A tool error, optionally pointing into the argument that caused it.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct ToolError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The command line argument the error refers to.
    pub argument: Option<String>,
    /// The offending range inside `argument`.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
    /// Underlying I/O failure.
    #[source]
    pub source: Option<io::Error>,
}

impl ToolError {
    /// Create a new tool error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            argument: None,
            span: Span::default(),
            hint: None,
            source: None,
        }
    }

    /// Create an error for a file that could not be read or written.
    pub fn io(code: ErrorCode, path: &Path, source: io::Error) -> Self {
        let message = match code {
            ErrorCode::CannotOpenInput => format!("Cannot open input file \"{}\"", path.display()),
            ErrorCode::CannotOpenOutput => {
                format!("Cannot open output file \"{}\"", path.display())
            }
            _ => format!("Cannot write \"{}\"", path.display()),
        };
        Self::new(code, message).with_source(source)
    }

    /// Attach the offending argument and the span inside it.
    pub fn with_argument(mut self, argument: impl Into<String>, span: impl Into<Span>) -> Self {
        self.argument = Some(argument.into());
        self.span = span.into();
        self
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attach the underlying I/O error.
    pub fn with_source(mut self, source: io::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Format an error for the terminal.
///
/// ```text
/// error[E002]: Unknown size suffix "XB"
///   |
///   | 16XB
///   |   ^^
///   = hint: Use KB, MB or MBit
/// ```
pub fn format_error(error: &ToolError) -> String {
    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));

    if let Some(argument) = &error.argument {
        let start = error.span.start.min(argument.len());
        let underline_len = error
            .span
            .len()
            .max(1)
            .min(argument.len().saturating_sub(start).max(1));

        output.push_str("  |\n");
        output.push_str(&format!("  | {}\n", argument));
        output.push_str(&format!(
            "  | {:>start$}{}\n",
            "",
            "^".repeat(underline_len),
            start = start
        ));
    }

    if let Some(source) = &error.source {
        output.push_str(&format!("  = cause: {}\n", source));
    }

    if let Some(hint) = &error.hint {
        output.push_str(&format!("  = hint: {}\n", hint));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(2, 4);
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
        assert_eq!(Span::from(3..3), Span::new(3, 3));
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_error_code() {
        assert_eq!(ErrorCode::InvalidNumber.code(), "E001");
        assert_eq!(ErrorCode::InvalidColumns.code(), "E020");
        assert_eq!(ErrorCode::CannotOpenInput.code(), "E100");
        assert_eq!(ErrorCode::LogFailed.code(), "E103");
        assert_eq!(ErrorCode::CorruptRle.code(), "E205");
    }

    #[test]
    fn test_display_includes_code() {
        let error = ToolError::new(ErrorCode::NameTooLong, "Name too long");
        assert_eq!(error.to_string(), "[E024] Name too long");
    }

    #[test]
    fn test_format_error_with_argument() {
        let error = ToolError::new(ErrorCode::UnknownSuffix, "Unknown size suffix \"XB\"")
            .with_argument("16XB", 2..4)
            .with_hint("Use KB, MB or MBit");

        let text = format_error(&error);
        assert_eq!(
            text,
            "error[E002]: Unknown size suffix \"XB\"\n  |\n  | 16XB\n  |   ^^\n  = hint: Use KB, MB or MBit\n"
        );
    }

    #[test]
    fn test_format_error_with_source() {
        let error = ToolError::io(
            ErrorCode::CannotOpenInput,
            Path::new("missing.bin"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );

        let text = format_error(&error);
        assert!(text.starts_with("error[E100]: Cannot open input file \"missing.bin\"\n"));
        assert!(text.contains("= cause: not found"));
    }
}
