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

//! BinaryTools CLI
//!
//! A collection of small binary file utilities for 8-bit home computer
//! development.

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use binarytools::error::{format_error, Result};
use binarytools::files::{join_files, pad_file, PadOutcome};
use binarytools::numbers::{parse_size, parse_value};
use binarytools::output::basic_data::{parse_columns, parse_line_numbering};
use binarytools::output::{write_data, write_table_file, write_tap, DataOptions};
use binarytools::rle::{compress_file, parse_planes};
use binarytools::sms::{fix_rom_file, size_code_name, HeaderStatus};
use binarytools::Platform;

/// BinaryTools - Binary file utilities for 8-bit home computers
#[derive(Parser, Debug)]
#[command(name = "binarytools")]
#[command(author = "BinaryTools Team")]
#[command(version)]
#[command(about = "Binary file utilities for 8-bit home computer development")]
#[command(long_about = r#"
BinaryTools prepares binary data for Amstrad CPC, ZX Spectrum and Sega
Master System projects.

Numbers can be given in decimal, or in hex with a 0x, $ or & prefix or an
h suffix. Sizes also accept KB, MB or MBit.

Example usage:
  binarytools cpc-screen-addr
  binarytools join boot.bin game.bin rom.bin
  binarytools pad rom.bin 32KB 0xFF
  binarytools data table.bin table.bas --line 1000,10
  binarytools rle tiles.bin tiles.rle --planes 4
  binarytools zxtap game.bin GAME $8000 game.tap
  binarytools smschk game.sms
"#)]
struct Cli {
    #[command(subcommand)]
    tool: Tool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Tool {
    /// Write the Amstrad CPC screen line address table.
    CpcScreenAddr {
        /// Output file
        #[arg(short, long, default_value = "cpc-screen-addr.bin")]
        output: PathBuf,
    },

    /// Write the ZX Spectrum screen line address table.
    ZxScreenAddr {
        /// Output file
        #[arg(short, long, default_value = "zx-screen-addr.bin")]
        output: PathBuf,
    },

    /// Join multiple files into a separate output.
    ///
    /// The output contains all input files in the order given. It is
    /// overwritten without confirmation.
    Join {
        /// Input files to read, in order
        #[arg(required = true, num_args = 1.., value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// The output file
        output: PathBuf,
    },

    /// Pad a file to a given size.
    ///
    /// The file is padded in place and created if it doesn't exist.
    Pad {
        /// The file to pad
        file: PathBuf,

        /// Target size, e.g. 16384, 16KB, 0x4000, 4000h or 1MBit
        size: String,

        /// Fill byte
        #[arg(default_value = "0")]
        fill: String,
    },

    /// Convert a binary file into BASIC DATA statements.
    Data {
        /// The binary file to read
        input: PathBuf,

        /// The BASIC text file to write
        output: PathBuf,

        /// Separate values with "," instead of ", "
        #[arg(long)]
        compact: bool,

        /// Number the lines, starting at START and stepping by STEP (default 10)
        #[arg(long, value_name = "START[,STEP]")]
        line: Option<String>,

        /// Maximum line width (20 or more)
        #[arg(long, default_value = "40")]
        cols: String,
    },

    /// Compress a file with run-length encoding.
    Rle {
        /// The file to compress
        input: PathBuf,

        /// The compressed output
        output: PathBuf,

        /// Number of interleaved planes to encode separately
        #[arg(long, default_value = "1")]
        planes: String,
    },

    /// Convert machine code into a ZX Spectrum .TAP file.
    Zxtap {
        /// The machine code file
        bin_file: PathBuf,

        /// File name of the CODE block, up to 10 characters
        name: String,

        /// Load address of the code
        org_addr: String,

        /// The .TAP file to write
        tap_file: PathBuf,
    },

    /// Fix the header and checksum of a Sega Master System ROM in place.
    Smschk {
        /// The ROM file
        rom_file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        println!("{} v{}", binarytools::NAME, binarytools::VERSION);
        println!();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", format_error(&e));
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.tool {
        Tool::CpcScreenAddr { output } => screen_table(Platform::Cpc, output, cli.verbose),
        Tool::ZxScreenAddr { output } => screen_table(Platform::Zx, output, cli.verbose),

        Tool::Join { inputs, output } => {
            if cli.verbose {
                for input in inputs {
                    println!("Reading {}...", input.display());
                }
            }

            let written = join_files(inputs, output)?;
            println!(
                "Joined {} files -> {} ({} bytes)",
                inputs.len(),
                output.display(),
                written
            );
            Ok(())
        }

        Tool::Pad { file, size, fill } => {
            let size = parse_size(size)?;
            let fill = parse_value(fill, 0xFF)? as u8;

            let report = pad_file(file, size, fill)?;
            match report.outcome {
                PadOutcome::Created => println!(
                    "Created \"{}\" with {} bytes of 0x{:02X}",
                    file.display(),
                    size,
                    fill
                ),
                PadOutcome::Padded => println!(
                    "Padded \"{}\" from {} to {} bytes with 0x{:02X}",
                    file.display(),
                    report.old_size,
                    size,
                    fill
                ),
                PadOutcome::Unchanged => {
                    println!("\"{}\" is already {} bytes", file.display(), size)
                }
            }
            Ok(())
        }

        Tool::Data {
            input,
            output,
            compact,
            line,
            cols,
        } => {
            let options = DataOptions {
                columns: parse_columns(cols)?,
                compact: *compact,
                line_numbers: line.as_deref().map(parse_line_numbering).transpose()?,
            };

            if cli.verbose {
                println!("Line width: {}", options.columns);
                if let Some(numbering) = options.line_numbers {
                    println!(
                        "Line numbers: from {} step {}",
                        numbering.start, numbering.step
                    );
                }
            }

            let summary = write_data(input, output, &options)?;
            println!(
                "Wrote {} bytes as {} DATA lines -> {}",
                summary.bytes,
                summary.lines,
                output.display()
            );
            Ok(())
        }

        Tool::Rle {
            input,
            output,
            planes,
        } => {
            let planes = parse_planes(planes)?;

            let (raw, encoded) = compress_file(input, output, planes)?;
            if planes > 1 {
                println!(
                    "Encoded {} ({} planes) -> {} ({} -> {} bytes)",
                    input.display(),
                    planes,
                    output.display(),
                    raw,
                    encoded
                );
            } else {
                println!(
                    "Encoded {} -> {} ({} -> {} bytes)",
                    input.display(),
                    output.display(),
                    raw,
                    encoded
                );
            }
            Ok(())
        }

        Tool::Zxtap {
            bin_file,
            name,
            org_addr,
            tap_file,
        } => {
            let origin = parse_value(org_addr, u16::MAX as u32)? as u16;

            let size = write_tap(bin_file, name, origin, tap_file)?;
            println!(
                "Created CODE block \"{}\", {} bytes at 0x{:04X} -> {}",
                name,
                size,
                origin,
                tap_file.display()
            );
            Ok(())
        }

        Tool::Smschk { rom_file } => {
            let report = fix_rom_file(rom_file)?;

            match report.header {
                HeaderStatus::Found => {
                    if cli.verbose {
                        println!("Found header at 0x{:04X}", report.header_offset);
                    }
                }
                HeaderStatus::Added => println!("Added header at 0x{:04X}", report.header_offset),
            }
            if report.region_changed {
                println!("Changed region to \"SMS Export\"");
            }
            println!(
                "Checksum = 0x{:04X}; Size Code = 0x{:X} ({}) -> {}",
                report.checksum,
                report.size_code,
                size_code_name(report.size_code),
                rom_file.display()
            );
            Ok(())
        }
    }
}

/// Write a screen address table, printing one line per entry.
fn screen_table(platform: Platform, output: &Path, verbose: bool) -> Result<()> {
    if verbose {
        println!("{} screen, {} lines", platform.name(), platform.line_count());
    }

    let written = write_table_file(platform, output, &mut io::stdout().lock())?;

    if verbose {
        println!("Wrote {} bytes to {}", written, output.display());
    }
    Ok(())
}
