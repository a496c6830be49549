// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Randomness abstraction for instruction sampling.
//!
//! Generators take a [`RandomSource`] instead of reaching for an ambient
//! RNG, so tests can replay a fixed sequence.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Uniform sampling over small finite sets and inclusive integer ranges.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: u16, hi: u16) -> u16;
}

/// Production source backed by the thread-local RNG.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn range(&mut self, lo: u16, hi: u16) -> u16 {
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays a scripted sequence of values; for deterministic tests.
///
/// `pick` consumes from the script in call order; `range` likewise. A
/// value beyond `len`/`hi` is clamped rather than panicking, so a short
/// or sloppy script still yields well-formed output.
pub struct ScriptedRandom {
    values: Vec<u16>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<u16>) -> Self {
        Self { values, next: 0 }
    }

    fn take(&mut self) -> u16 {
        let value = self.values.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        value
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        (self.take() as usize).min(len - 1)
    }

    fn range(&mut self, lo: u16, hi: u16) -> u16 {
        self.take().clamp(lo, hi)
    }
}
