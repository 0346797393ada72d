// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Example: hide a message in visible text and read it back.
//!
//! Usage:
//!   `cargo run --example zw_demo`                          (built-in sample)
//!   `cargo run --example zw_demo -- <carrier> <message>`
//!   `cargo run --example zw_demo -- --decode <text>`
//!
//! Set `RUST_LOG=phasm_text=debug` to see truncation diagnostics.

use tracing_subscriber::EnvFilter;

const SAMPLE_CARRIER: &str = "我对你的爱，加了蜜";
const SAMPLE_MESSAGE: &str = "最近我爸爸妈妈都不在家，能不能晚上8点带着蓝精灵来我家。";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() == 3 && args[1] == "--decode" {
        let (message, report) = phasm_text::decode_with_report(&args[2]);
        println!("Decoded message: {message}");
        if !report.is_clean() {
            eprintln!(
                "  warning: {} dangling bits dropped, {} invalid units replaced",
                report.dangling_bits, report.replaced_units
            );
        }
        return;
    }

    let (carrier, message) = match args.len() {
        1 => (SAMPLE_CARRIER, SAMPLE_MESSAGE),
        3 => (args[1].as_str(), args[2].as_str()),
        _ => {
            eprintln!("Usage: zw_demo [<carrier> <message>]");
            eprintln!("       zw_demo --decode <text>");
            std::process::exit(1);
        }
    };

    let encoded = match phasm_text::encode_checked(carrier, message) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Encode failed: {e}");
            std::process::exit(1);
        }
    };

    let info = phasm_text::capacity_info(carrier, message).unwrap_or_else(|e| {
        eprintln!("Encode failed: {e}");
        std::process::exit(1);
    });

    println!("Text with hidden message: {encoded}");
    println!(
        "Carrier: {} chars, glyphs: {} ({} inline, {} appended)",
        carrier.chars().count(),
        info.glyphs,
        info.inline_glyphs,
        info.tail_glyphs
    );
    println!();
    println!("Decoded message: {}", phasm_text::decode(&encoded));
}
