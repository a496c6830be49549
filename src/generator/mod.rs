// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Encoding-fixture generator - main entry point.
//!
//! Ties together the pure table and instruction generators with the
//! CLI, the random source, and the output sink. One pathway runs per
//! invocation; the joined text is written to the sink exactly once.

pub mod cli;

use clap::Parser;

use crate::error::GenError;
use crate::instructions::{self, InstructionSpec};
use crate::opcode_table;
use crate::random::{RandomSource, ThreadRandom};
use crate::sink::{ClipboardSink, OutputSink, StdoutSink};

use cli::{validate_cli, Cli, GenConfig, Pathway};

pub use cli::VERSION;

/// Run the generator with command-line arguments.
pub fn run() -> Result<(), GenError> {
    let cli = Cli::parse();
    let config = validate_cli(&cli)?;
    let mut rng = ThreadRandom::new();
    if config.to_stdout {
        run_with(&config, &mut rng, &mut StdoutSink)
    } else {
        run_with(&config, &mut rng, &mut ClipboardSink)
    }
}

/// Run one generation pathway against an explicit source and sink.
pub fn run_with(
    config: &GenConfig,
    rng: &mut dyn RandomSource,
    sink: &mut dyn OutputSink,
) -> Result<(), GenError> {
    sink.write(&render(config, rng))
}

/// Produce the final joined text for a validated configuration.
pub fn render(config: &GenConfig, rng: &mut dyn RandomSource) -> String {
    match &config.pathway {
        Pathway::OpcodeTable { options, flat } => {
            let entries = opcode_table::build_table(options);
            if *flat {
                entries.join(", ")
            } else {
                entries.join("\n")
            }
        }
        Pathway::Instructions { count, mnemonic } => {
            let spec = InstructionSpec::x86_16(mnemonic);
            instructions::generate(&spec, *count, rng).join("\n")
        }
    }
}
