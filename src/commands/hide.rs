//! Hide command - derive a key that hides a message in a cover text.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::Args;

use hideseek::{hide_with_config, EncoderConfig};

use super::CommandExecutor;

/// Hide a message in a cover text.
///
/// The cover text is read from a file and NEVER modified. The output is a
/// key - one selected letter per hidden bit - that, replayed against the
/// exact same cover with `seek`, reconstructs the message.
///
/// Hiding is all-or-nothing: if the cover has too few encodable letters
/// for the message, the command fails without emitting a partial key.
#[derive(Args, Debug)]
pub struct HideCommand {
    /// Path to the cover text (words separated by single spaces)
    #[arg(short, long)]
    pub cover: PathBuf,

    /// Text message to hide (UTF-8)
    #[arg(short, long, conflicts_with_all = ["file", "message_b64"])]
    pub message: Option<String>,

    /// Binary file to hide
    /// Use this to hide arbitrary bytes (zip, image, etc.) behind the cover
    #[arg(short, long, conflicts_with_all = ["message", "message_b64"])]
    pub file: Option<PathBuf>,

    /// Base64-encoded bytes to hide
    #[arg(long, conflicts_with_all = ["message", "file"])]
    pub message_b64: Option<String>,

    /// Write the key to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output (shows word consumption)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for HideCommand {
    fn execute(&self) -> Result<()> {
        let cover = std::fs::read_to_string(&self.cover)
            .with_context(|| format!("Failed to read cover text from {}", self.cover.display()))?;

        let message = self.resolve_message()?;
        if message.is_empty() {
            anyhow::bail!("Message cannot be empty");
        }

        if self.verbose {
            eprintln!(
                "Hiding {} bytes ({} bits) behind {}",
                message.len(),
                message.len() * 8,
                self.cover.display()
            );
        }

        let config = EncoderConfig {
            verbose: self.verbose,
        };

        let hidden = hide_with_config(&cover, &message, &config)
            .context("Failed to hide message")?;

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, hidden.key.as_bytes())
                .with_context(|| format!("Failed to write key to {}", output_path.display()))?;
            eprintln!("Key written to {}", output_path.display());
        } else {
            println!("{}", hidden.key);
        }

        if self.verbose {
            eprintln!();
            eprintln!(
                "Key is {} letters, {} cover words consumed",
                hidden.key.chars().count(),
                hidden.words_consumed
            );
        }

        Ok(())
    }
}

impl HideCommand {
    /// Resolves the message bytes from the various input sources.
    /// Falls back to reading from stdin when none is given.
    fn resolve_message(&self) -> Result<Vec<u8>> {
        if let Some(message) = &self.message {
            return Ok(message.clone().into_bytes());
        }

        if let Some(path) = &self.file {
            return std::fs::read(path)
                .with_context(|| format!("Failed to read file {}", path.display()));
        }

        if let Some(encoded) = &self.message_b64 {
            return BASE64
                .decode(encoded.trim())
                .context("Failed to decode base64 message");
        }

        eprintln!("Reading message from stdin (Ctrl+D to finish):");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read message from stdin")?;
        Ok(buffer.trim().to_string().into_bytes())
    }
}
