// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Deterministic opcode byte table generation.
//!
//! Produces the full 0x00..0xFF opcode table as hex literal strings, with
//! optional prefix pairing, `db` declaration wrapping, and periodic
//! separator lines for visual chunking.

/// Number of entries in the opcode table.
pub const TABLE_SIZE: usize = 256;

/// Default separator interval (one marker per 64 entries).
pub const DEFAULT_SEPARATOR_INTERVAL: usize = 64;

/// Cosmetic marker inserted between table chunks; carries no meaning.
pub const SEPARATOR_LINE: &str = "; ------------------";

/// Options controlling how the opcode table is rendered.
#[derive(Debug, Default, Clone)]
pub struct TableOptions {
    /// Prepend this byte to every entry, as `"0xPP, 0xNN"`.
    pub prefix: Option<u8>,
    /// Wrap entry `i` as the declaration line `var{i} db {value}`.
    pub var_lines: bool,
    /// Insert [`SEPARATOR_LINE`] before every Nth entry, including the first.
    pub separator_interval: Option<usize>,
}

/// Generate the 256 opcode literals `0x0` through `0xff`, in order.
pub fn opcode_literals() -> Vec<String> {
    (0..TABLE_SIZE).map(|i| format!("{i:#x}")).collect()
}

/// Pair each entry with a fixed prefix byte literal.
pub fn with_prefix(entries: &[String], prefix: u8) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format!("{prefix:#x}, {entry}"))
        .collect()
}

/// Wrap each entry as a named byte declaration using its index.
pub fn as_var_lines(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("var{i} db {entry}"))
        .collect()
}

/// Insert a separator line before every `interval`-th entry.
///
/// The first entry always gets a separator. `interval` must be at least 1;
/// CLI validation enforces this before the call.
pub fn separate(entries: &[String], interval: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(entries.len() + entries.len() / interval + 1);
    for (i, entry) in entries.iter().enumerate() {
        if i % interval == 0 {
            out.push(SEPARATOR_LINE.to_string());
        }
        out.push(entry.clone());
    }
    out
}

/// Build the full table with the given options applied in order:
/// prefix pairing, declaration wrapping, separator insertion.
pub fn build_table(options: &TableOptions) -> Vec<String> {
    let mut entries = opcode_literals();
    if let Some(prefix) = options.prefix {
        entries = with_prefix(&entries, prefix);
    }
    if options.var_lines {
        entries = as_var_lines(&entries);
    }
    if let Some(interval) = options.separator_interval {
        entries = separate(&entries, interval);
    }
    entries
}
