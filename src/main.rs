//! Hideseek - hide messages in the letters of an untouched cover text
//!
//! A CLI tool for linguistic steganography. The cover text is pre-shared
//! and never modified - only the derived key is transmitted.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandExecutor, HideCommand, SeekCommand};

/// Hideseek - hide messages in the letters of an untouched cover text
///
/// Linguistic steganography over a pre-shared cover: hiding derives a key
/// of selected letters, seeking replays it. The cover text never changes.
#[derive(Parser)]
#[command(name = "hideseek")]
#[command(version)]
#[command(about = "Linguistic steganography: the cover text never changes, only a key travels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in a cover text, printing the derived key
    Hide(HideCommand),

    /// Replay a key against a cover text to recover the message
    ///
    /// NOTE: the codec never fails on mismatched inputs - a wrong cover or
    /// key recovers garbage bytes, not an error.
    Seek(SeekCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hide(cmd) => cmd.execute(),
        Commands::Seek(cmd) => cmd.execute(),
    }
}
