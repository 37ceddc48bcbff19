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

//! Number scanning for command line arguments.
//!
//! Numbers can be written in any of the notations common in 8-bit
//! assemblers:
//! - Decimal (`49152`)
//! - Hexadecimal with a prefix (`0xC000`, `$C000`, `&C000`)
//! - Hexadecimal with an `h` suffix (`C000h`)
//!
//! Sizes additionally accept a unit suffix: `KB`, `MB` or `MBit`.

use crate::error::{ErrorCode, Result, ToolError};

/// Bytes per kilobyte.
pub const KILOBYTE: u64 = 1024;

/// Bytes per megabyte.
pub const MEGABYTE: u64 = 1_048_576;

/// Bytes per megabit, the unit cartridge ROM sizes are usually quoted in.
pub const MEGABIT: u64 = 131_072;

/// Detect a hex prefix and return the number of characters it occupies.
///
/// Returns 1 for `$` or `&`, 2 for `0x`/`0X`, and 0 when there is no prefix.
pub fn detect_hex_prefix(text: &str) -> usize {
    match text.as_bytes() {
        [b'$' | b'&', ..] => 1,
        [b'0', b'x' | b'X', ..] => 2,
        _ => 0,
    }
}

/// Scan the numeric part of `text`.
///
/// Returns the value and the byte offset where any unit suffix begins.
fn scan_number(text: &str) -> Result<(u64, usize)> {
    let prefix = detect_hex_prefix(text);

    // "C000h": everything before the suffix is hex
    if prefix == 0 && text.len() > 1 && (text.ends_with('h') || text.ends_with('H')) {
        let body = &text[..text.len() - 1];
        let value = scan_digits(text, 0, body.len(), 16)?;
        return Ok((value, text.len()));
    }

    let radix = if prefix > 0 { 16 } else { 10 };
    let end = text[prefix..]
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| prefix + i)
        .unwrap_or(text.len());

    let value = scan_digits(text, prefix, end, radix)?;
    Ok((value, end))
}

/// Accumulate the digits in `text[start..end]`, all of which must be valid in `radix`.
fn scan_digits(text: &str, start: usize, end: usize, radix: u32) -> Result<u64> {
    if start == end {
        return Err(ToolError::new(
            ErrorCode::InvalidNumber,
            format!("Invalid number \"{}\"", text),
        )
        .with_argument(text, start..(start + 1).min(text.len()))
        .with_hint("Use decimal digits, a 0x, $ or & prefix, or an h suffix for hex"));
    }

    let mut value: u64 = 0;
    for (i, c) in text[start..end].char_indices() {
        let digit = c.to_digit(radix).ok_or_else(|| {
            let at = start + i;
            ToolError::new(
                ErrorCode::InvalidNumber,
                format!("Invalid digit '{}' in \"{}\"", c, text),
            )
            .with_argument(text, at..at + c.len_utf8())
        })?;

        value = value
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or_else(|| {
                ToolError::new(
                    ErrorCode::NumberTooLarge,
                    format!("Number \"{}\" is too large", text),
                )
                .with_argument(text, start..end)
            })?;
    }

    Ok(value)
}

/// Parse a non-negative integer no greater than `limit`.
///
/// Accepts decimal, prefixed hex, or hex with an `h` suffix.
pub fn parse_value(text: &str, limit: u32) -> Result<u32> {
    let (value, end) = scan_number(text)?;

    if end != text.len() {
        return Err(ToolError::new(
            ErrorCode::UnknownSuffix,
            format!("Unexpected characters after number in \"{}\"", text),
        )
        .with_argument(text, end..text.len()));
    }

    if value > limit as u64 {
        return Err(ToolError::new(
            ErrorCode::ValueOutOfRange,
            format!("Value {} is out of range", text),
        )
        .with_argument(text, 0..text.len())
        .with_hint(format!("The maximum is {} (0x{:X})", limit, limit)));
    }

    Ok(value as u32)
}

/// Parse a byte count with an optional `KB`, `MB` or `MBit` suffix.
///
/// Suffixes are case-insensitive. Without a suffix the value is in bytes.
pub fn parse_size(text: &str) -> Result<u64> {
    let (value, end) = scan_number(text)?;
    let suffix = &text[end..];

    let multiplier = match suffix.to_ascii_lowercase().as_str() {
        "" => 1,
        "kb" => KILOBYTE,
        "mb" => MEGABYTE,
        "mbit" => MEGABIT,
        _ => {
            return Err(ToolError::new(
                ErrorCode::UnknownSuffix,
                format!("Unknown size suffix \"{}\"", suffix),
            )
            .with_argument(text, end..text.len())
            .with_hint("Use KB, MB or MBit, or no suffix for bytes"));
        }
    };

    value.checked_mul(multiplier).ok_or_else(|| {
        ToolError::new(
            ErrorCode::NumberTooLarge,
            format!("Size \"{}\" is too large", text),
        )
        .with_argument(text, 0..text.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_hex_prefix() {
        assert_eq!(detect_hex_prefix("$C000"), 1);
        assert_eq!(detect_hex_prefix("&C000"), 1);
        assert_eq!(detect_hex_prefix("0xC000"), 2);
        assert_eq!(detect_hex_prefix("0XC000"), 2);
        assert_eq!(detect_hex_prefix("0"), 0);
        assert_eq!(detect_hex_prefix("49152"), 0);
        assert_eq!(detect_hex_prefix(""), 0);
    }

    #[test]
    fn test_parse_value_notations() {
        assert_eq!(parse_value("49152", 65535).unwrap(), 0xC000);
        assert_eq!(parse_value("0xC000", 65535).unwrap(), 0xC000);
        assert_eq!(parse_value("$c000", 65535).unwrap(), 0xC000);
        assert_eq!(parse_value("&C000", 65535).unwrap(), 0xC000);
        assert_eq!(parse_value("C000h", 65535).unwrap(), 0xC000);
        assert_eq!(parse_value("0", 255).unwrap(), 0);
    }

    #[test]
    fn test_parse_value_limit() {
        assert_eq!(parse_value("255", 255).unwrap(), 255);
        let err = parse_value("256", 255).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_parse_value_rejects_suffix() {
        let err = parse_value("12KB", 65535).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSuffix);
        assert_eq!(err.span.start, 2);
    }

    #[test]
    fn test_prefix_and_h_suffix_rejected() {
        let err = parse_value("0x12h", 65535).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSuffix);
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            parse_value("", 10).unwrap_err().code,
            ErrorCode::InvalidNumber
        );
        assert_eq!(
            parse_value("-1", 10).unwrap_err().code,
            ErrorCode::InvalidNumber
        );
        let err = parse_value("C0G0h", 65535).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidNumber);
        assert_eq!(err.span.start, 2);
    }

    #[test]
    fn test_parse_size_suffixes() {
        assert_eq!(parse_size("100").unwrap(), 100);
        assert_eq!(parse_size("16KB").unwrap(), 16 * 1024);
        assert_eq!(parse_size("16kb").unwrap(), 16 * 1024);
        assert_eq!(parse_size("1MB").unwrap(), 1_048_576);
        assert_eq!(parse_size("4MBit").unwrap(), 4 * 131_072);
        assert_eq!(parse_size("4mbit").unwrap(), 524_288);
        assert_eq!(parse_size("$20KB").unwrap(), 32 * 1024);
        assert_eq!(parse_size("8000h").unwrap(), 0x8000);
    }

    #[test]
    fn test_parse_size_unknown_suffix() {
        let err = parse_size("16XB").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSuffix);
        assert_eq!(err.span.start, 2);
        assert_eq!(err.span.end, 4);
    }

    #[test]
    fn test_parse_size_overflow() {
        let err = parse_size("99999999999999999999999").unwrap_err();
        assert_eq!(err.code, ErrorCode::NumberTooLarge);

        let err = parse_size("0xFFFFFFFFFFFFFFFFMB").unwrap_err();
        assert_eq!(err.code, ErrorCode::NumberTooLarge);
    }
}
