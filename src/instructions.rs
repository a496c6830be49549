// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Randomized two-operand instruction synthesis.
//!
//! Samples a register, an indexed-addressing expression and an optional
//! offset per line, and formats the result as assembler source text:
//!
//! ```text
//! ADD bx+si, ax
//! ADD [bp+di+0x1f3a], cx
//! ```

use crate::random::RandomSource;

/// 16-bit general-purpose registers, in encoding order.
pub const REG_16: [&str; 8] = ["ax", "cx", "dx", "bx", "sp", "bp", "si", "di"];

/// 16-bit indexed-addressing expressions, in ModRM r/m order.
pub const INDEXED_REG_16: [&str; 8] = ["bx+si", "bx+di", "bp+si", "bp+di", "si", "di", "bp", "bx"];

/// Default mnemonic for generated lines.
pub const DEFAULT_MNEMONIC: &str = "ADD";

/// Default number of generated lines.
pub const DEFAULT_COUNT: usize = 16;

/// Inclusive bounds of the 8-bit offset class.
pub const BYTE_OFFSET_RANGE: (u16, u16) = (0x00, 0xff);

/// Inclusive bounds of the 16-bit offset class.
pub const WORD_OFFSET_RANGE: (u16, u16) = (0x100, 0xffff);

/// Operand tables and offset boundaries driving the generator.
#[derive(Debug, Clone)]
pub struct InstructionSpec<'a> {
    pub mnemonic: &'a str,
    pub registers: &'a [&'a str],
    pub addressing: &'a [&'a str],
    pub byte_offsets: (u16, u16),
    pub word_offsets: (u16, u16),
}

impl<'a> InstructionSpec<'a> {
    /// The fixed 16-bit x86 tables with the given mnemonic.
    pub fn x86_16(mnemonic: &'a str) -> Self {
        Self {
            mnemonic,
            registers: &REG_16,
            addressing: &INDEXED_REG_16,
            byte_offsets: BYTE_OFFSET_RANGE,
            word_offsets: WORD_OFFSET_RANGE,
        }
    }
}

/// Format one instruction line.
///
/// Without an offset the memory operand is bare; with one it is bracketed
/// and the offset rendered as a hex literal.
pub fn format_line(
    mnemonic: &str,
    addressing: &str,
    offset: Option<u16>,
    register: &str,
) -> String {
    match offset {
        None => format!("{mnemonic} {addressing}, {register}"),
        Some(offset) => format!("{mnemonic} [{addressing}+{offset:#x}], {register}"),
    }
}

// Offset classes: none, byte, word. Class first, then a value uniform
// within the chosen class's bounds.
fn sample_offset(spec: &InstructionSpec<'_>, rng: &mut dyn RandomSource) -> Option<u16> {
    match rng.pick(3) {
        0 => None,
        1 => Some(rng.range(spec.byte_offsets.0, spec.byte_offsets.1)),
        _ => Some(rng.range(spec.word_offsets.0, spec.word_offsets.1)),
    }
}

/// Generate `count` instruction lines from the given tables and source.
///
/// Sampling order per line: register, addressing expression, offset.
pub fn generate(
    spec: &InstructionSpec<'_>,
    count: usize,
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    (0..count)
        .map(|_| {
            let register = spec.registers[rng.pick(spec.registers.len())];
            let addressing = spec.addressing[rng.pick(spec.addressing.len())];
            let offset = sample_offset(spec, rng);
            format_line(spec.mnemonic, addressing, offset, register)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, ThreadRandom};

    #[test]
    fn forced_sample_without_offset() {
        // register ax (0), addressing bx+si (0), offset class none (0)
        let mut rng = ScriptedRandom::new(vec![0, 0, 0]);
        let lines = generate(&InstructionSpec::x86_16("ADD"), 1, &mut rng);
        assert_eq!(lines, vec!["ADD bx+si, ax".to_string()]);
    }

    #[test]
    fn forced_sample_with_byte_offset() {
        // register cx (1), addressing bp+di (3), byte class (1), value 0x7f
        let mut rng = ScriptedRandom::new(vec![1, 3, 1, 0x7f]);
        let lines = generate(&InstructionSpec::x86_16("ADD"), 1, &mut rng);
        assert_eq!(lines, vec!["ADD [bp+di+0x7f], cx".to_string()]);
    }

    #[test]
    fn forced_sample_with_word_offset() {
        // register di (7), addressing bx (7), word class (2), value 0x1234
        let mut rng = ScriptedRandom::new(vec![7, 7, 2, 0x1234]);
        let lines = generate(&InstructionSpec::x86_16("MOV"), 1, &mut rng);
        assert_eq!(lines, vec!["MOV [bx+0x1234], di".to_string()]);
    }

    #[test]
    fn generates_requested_count() {
        let mut rng = ThreadRandom::new();
        let spec = InstructionSpec::x86_16(DEFAULT_MNEMONIC);
        let lines = generate(&spec, DEFAULT_COUNT, &mut rng);
        assert_eq!(lines.len(), DEFAULT_COUNT);
    }

    #[test]
    fn every_line_matches_the_grammar() {
        let mut rng = ThreadRandom::new();
        let spec = InstructionSpec::x86_16(DEFAULT_MNEMONIC);
        for line in generate(&spec, 200, &mut rng) {
            let rest = line
                .strip_prefix("ADD ")
                .unwrap_or_else(|| panic!("missing mnemonic: {line}"));
            let (memory, register) = rest
                .rsplit_once(", ")
                .unwrap_or_else(|| panic!("missing register operand: {line}"));
            assert!(REG_16.contains(&register), "unknown register: {line}");

            if let Some(inner) = memory.strip_prefix('[') {
                let inner = inner.strip_suffix(']').expect("unclosed bracket");
                let (addressing, offset) = inner
                    .rsplit_once("+0x")
                    .unwrap_or_else(|| panic!("missing offset marker: {line}"));
                assert!(
                    INDEXED_REG_16.contains(&addressing),
                    "unknown addressing: {line}"
                );
                let value = u16::from_str_radix(offset, 16).expect("hex offset");
                assert!((0x00..=0xff).contains(&value) || (0x100..=0xffff).contains(&value));
            } else {
                assert!(
                    INDEXED_REG_16.contains(&memory),
                    "unknown addressing: {line}"
                );
            }
        }
    }

    #[test]
    fn custom_offset_bounds_are_respected() {
        let spec = InstructionSpec {
            byte_offsets: (0x10, 0x10),
            ..InstructionSpec::x86_16("ADD")
        };
        // byte class with an over-large scripted value clamps to the bound
        let mut rng = ScriptedRandom::new(vec![0, 0, 1, 0xff]);
        let lines = generate(&spec, 1, &mut rng);
        assert_eq!(lines, vec!["ADD [bx+si+0x10], ax".to_string()]);
    }
}
