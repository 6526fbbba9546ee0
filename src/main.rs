//! emojistrip — remove emoji from source files in place.
//!
//! Thin binary entry point. All logic lives in the `emojistrip-core` crate.

use anyhow::Context;
use clap::Parser;

mod args;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the transcript.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("emojistrip starting");

    let summary = emojistrip_core::strip_directory(&cli.root, &cli.ext, |event| {
        println!("{event}");
    })
    .with_context(|| format!("cannot strip emoji under {}", cli.root.display()))?;

    println!("{summary}");

    // Per-file errors are already in the transcript and never change the
    // exit code.
    Ok(())
}
