//! CLI argument definitions for emojistrip.

use clap::Parser;
use std::path::PathBuf;

/// Strip emoji from source files in place.
///
/// Walks `--root` recursively and rewrites every file ending in `--ext`
/// whose text contains emoji. Files without emoji are never written.
///
/// ## Examples
///
///   emojistrip
///   emojistrip --root app/src --ext .swift
#[derive(Parser, Debug)]
#[command(name = "emojistrip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to walk
    #[arg(long, env = "EMOJISTRIP_ROOT", default_value = "android/app/src/main/java")]
    pub root: PathBuf,

    /// File name suffix to match exactly (e.g. ".kt")
    #[arg(long, env = "EMOJISTRIP_EXT", default_value = ".kt")]
    pub ext: String,
}
