// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use clap::{ArgAction, Parser, Subcommand};

use crate::error::{GenError, GenErrorKind};
use crate::instructions::{DEFAULT_COUNT, DEFAULT_MNEMONIC};
use crate::opcode_table::TableOptions;

pub const VERSION: &str = "1.0";

const LONG_ABOUT: &str = "Synthetic x86 encoding-fixture generator.

Generates either the full 0x00..0xFF opcode byte table or a batch of
randomized two-operand instruction lines over 16-bit register/memory
operands, and places the joined text on the system clipboard for pasting
into an assembler source or test fixture. Use --stdout to print instead
of touching the clipboard (e.g. on headless hosts).";

#[derive(Parser, Debug)]
#[command(
    name = "insforge",
    version = VERSION,
    about = "Synthetic x86 encoding-fixture generator",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(
        long = "stdout",
        global = true,
        action = ArgAction::SetTrue,
        long_help = "Print the generated text to stdout instead of writing it to the system clipboard."
    )]
    pub stdout: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the 256-entry opcode byte table.
    Opcodes {
        #[arg(
            short = 'p',
            long = "prefix",
            value_name = "hh",
            long_help = "Pair every entry with this prefix byte (2 hex digits), producing \"0xPP, 0xNN\" entries."
        )]
        prefix: Option<String>,
        #[arg(
            short = 'v',
            long = "vars",
            action = ArgAction::SetTrue,
            long_help = "Wrap entry i as the byte declaration line \"var{i} db {value}\"."
        )]
        vars: bool,
        #[arg(
            short = 's',
            long = "separate",
            value_name = "N",
            num_args = 0..=1,
            default_missing_value = "64",
            long_help = "Insert a separator comment line before every Nth entry, including the first. N is optional and defaults to 64."
        )]
        separate: Option<usize>,
        #[arg(
            long = "flat",
            action = ArgAction::SetTrue,
            long_help = "Join entries with commas on a single line instead of one entry per line. Only valid for plain literals."
        )]
        flat: bool,
    },
    /// Generate randomized two-operand instruction lines.
    Instructions {
        #[arg(
            short = 'c',
            long = "count",
            value_name = "N",
            default_value_t = DEFAULT_COUNT,
            long_help = "Number of instruction lines to generate. Defaults to 16."
        )]
        count: usize,
        #[arg(
            short = 'm',
            long = "mnemonic",
            value_name = "NAME",
            default_value = DEFAULT_MNEMONIC,
            long_help = "Mnemonic used for every generated line. Defaults to ADD."
        )]
        mnemonic: String,
    },
}

/// Which generation pathway a run executes, with validated parameters.
#[derive(Debug, Clone)]
pub enum Pathway {
    OpcodeTable { options: TableOptions, flat: bool },
    Instructions { count: usize, mnemonic: String },
}

/// Validated CLI configuration.
#[derive(Debug)]
pub struct GenConfig {
    pub pathway: Pathway,
    pub to_stdout: bool,
}

pub fn is_valid_hex_2(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validate CLI arguments and return parsed configuration.
pub fn validate_cli(cli: &Cli) -> Result<GenConfig, GenError> {
    let pathway = match &cli.command {
        Command::Opcodes {
            prefix,
            vars,
            separate,
            flat,
        } => {
            let prefix = match prefix.as_deref() {
                Some(p) => {
                    if !is_valid_hex_2(p) {
                        return Err(GenError::new(
                            GenErrorKind::Cli,
                            "Invalid -p/--prefix byte; must be 2 hex digits",
                            None,
                        ));
                    }
                    match u8::from_str_radix(p, 16) {
                        Ok(b) => Some(b),
                        Err(_) => {
                            return Err(GenError::new(
                                GenErrorKind::Cli,
                                "Invalid -p/--prefix byte; must be 2 hex digits",
                                None,
                            ))
                        }
                    }
                }
                None => None,
            };
            if separate == &Some(0) {
                return Err(GenError::new(
                    GenErrorKind::Cli,
                    "-s/--separate interval must be at least 1",
                    None,
                ));
            }
            if *flat && (*vars || separate.is_some()) {
                return Err(GenError::new(
                    GenErrorKind::Cli,
                    "--flat cannot be combined with -v/--vars or -s/--separate",
                    None,
                ));
            }
            Pathway::OpcodeTable {
                options: TableOptions {
                    prefix,
                    var_lines: *vars,
                    separator_interval: *separate,
                },
                flat: *flat,
            }
        }
        Command::Instructions { count, mnemonic } => {
            if *count == 0 {
                return Err(GenError::new(
                    GenErrorKind::Cli,
                    "-c/--count must be at least 1",
                    None,
                ));
            }
            if mnemonic.is_empty() {
                return Err(GenError::new(
                    GenErrorKind::Cli,
                    "-m/--mnemonic must not be empty",
                    None,
                ));
            }
            Pathway::Instructions {
                count: *count,
                mnemonic: mnemonic.clone(),
            }
        }
    };

    Ok(GenConfig {
        pathway,
        to_stdout: cli.stdout,
    })
}
