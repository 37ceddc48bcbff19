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

//! BinaryTools Library
//!
//! Utilities for preparing binary data for 8-bit home computer projects:
//! screen address tables for the Amstrad CPC and ZX Spectrum, plus the
//! file tools used alongside them when building a ROM or tape image.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`numbers`] - Decimal and hex number arguments with size suffixes
//! - [`screen`] - CPC and ZX Spectrum screen address tables
//! - [`output`] - Table, TAP and BASIC `DATA` writers
//! - [`rle`] - Run-length encoder and decoder
//! - [`sms`] - Sega Master System ROM header fixer
//! - [`files`] - Joining and padding files
//!
//! # Example
//!
//! ```no_run
//! use binarytools::output::write_table_file;
//! use binarytools::screen::Platform;
//! use std::path::Path;
//!
//! fn build() -> Result<(), binarytools::ToolError> {
//!     let mut log = std::io::stdout();
//!     write_table_file(Platform::Zx, Path::new("zx-screen-addr.bin"), &mut log)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod files;
pub mod numbers;
pub mod output;
pub mod rle;
pub mod screen;
pub mod sms;

// Re-export commonly used types
pub use error::{format_error, ErrorCode, Result, Span, ToolError};
pub use screen::Platform;

/// The version of BinaryTools.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the tool collection.
pub const NAME: &str = "BinaryTools";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "BinaryTools");
    }
}
