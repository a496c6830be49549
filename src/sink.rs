// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Output sinks for generated text.
//!
//! Generation stays pure; the single side effect of a run goes through
//! [`OutputSink`]. Production uses the clipboard, `--stdout` prints
//! instead, and tests capture in memory.

use std::io::{self, Write};

use crate::error::{GenError, GenErrorKind};

/// Receives the final joined text once per run.
pub trait OutputSink {
    fn write(&mut self, text: &str) -> Result<(), GenError>;
}

/// Writes to the system clipboard.
pub struct ClipboardSink;

impl OutputSink for ClipboardSink {
    fn write(&mut self, text: &str) -> Result<(), GenError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|err| {
            GenError::new(
                GenErrorKind::Clipboard,
                "Cannot access the system clipboard",
                Some(&err.to_string()),
            )
        })?;
        clipboard.set_text(text.to_string()).map_err(|err| {
            GenError::new(
                GenErrorKind::Clipboard,
                "Cannot write to the system clipboard",
                Some(&err.to_string()),
            )
        })
    }
}

/// Writes to standard output with a trailing newline.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&mut self, text: &str) -> Result<(), GenError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")
            .map_err(|err| GenError::new(GenErrorKind::Io, &err.to_string(), None))
    }
}

/// Captures writes in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    captured: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured(&self) -> &[String] {
        &self.captured
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, text: &str) -> Result<(), GenError> {
        self.captured.push(text.to_string());
        Ok(())
    }
}
