//! Seek command - replay a key against a cover text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::Args;

use hideseek::{seek_with_config, DecoderConfig};

use super::CommandExecutor;

/// Replay a key against a cover text to recover the hidden message.
///
/// NOTE: the codec never fails on mismatched inputs. A wrong cover or key
/// recovers truncated or garbage bytes, printed as-is.
///
/// Use -o/--output to write raw bytes to a file (required for binary data).
/// Without -o, output is printed as text, falling back to base64 when the
/// recovered bytes are not valid UTF-8.
#[derive(Args, Debug)]
pub struct SeekCommand {
    /// Path to the cover text (must be the EXACT text used for hiding)
    #[arg(short, long)]
    pub cover: PathBuf,

    /// The key (direct text)
    #[arg(short, long, conflicts_with = "key_file")]
    pub key: Option<String>,

    /// Read the key from a file
    #[arg(long, conflicts_with = "key")]
    pub key_file: Option<PathBuf>,

    /// Output file for recovered bytes (prints text if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output (shows key consumption)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for SeekCommand {
    fn execute(&self) -> Result<()> {
        let cover = std::fs::read_to_string(&self.cover)
            .with_context(|| format!("Failed to read cover text from {}", self.cover.display()))?;

        let key = self.resolve_key()?;

        let config = DecoderConfig {
            verbose: self.verbose,
        };

        let revealed = seek_with_config(&cover, &key, &config);

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, &revealed.data)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            eprintln!(
                "Recovered {} bytes to {}",
                revealed.data.len(),
                output_path.display()
            );
        } else {
            match std::str::from_utf8(&revealed.data) {
                Ok(text) => println!("{}", text),
                Err(_) => {
                    eprintln!("Recovered bytes are not valid UTF-8, printing base64:");
                    println!("{}", BASE64.encode(&revealed.data));
                }
            }
        }

        if self.verbose {
            eprintln!();
            eprintln!(
                "Matched {} of {} key characters",
                revealed.chars_consumed,
                key.chars().count()
            );
        }

        Ok(())
    }
}

impl SeekCommand {
    /// Resolves the key from the direct argument or a file.
    fn resolve_key(&self) -> Result<String> {
        if let Some(key) = &self.key {
            return Ok(key.clone());
        }

        if let Some(path) = &self.key_file {
            return std::fs::read_to_string(path)
                .map(|s| s.trim().to_string())
                .with_context(|| format!("Failed to read key from {}", path.display()));
        }

        anyhow::bail!("No key provided. Use --key or --key-file")
    }
}
