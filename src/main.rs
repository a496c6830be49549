// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for insforge.

fn main() {
    if let Err(err) = insforge::generator::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
