//! Message decoding: replay a key against the cover text.
//!
//! This module orchestrates the decoding process:
//! 1. Pre-allocate a zeroed buffer of `key_chars / 8` bytes
//! 2. Walk the cover's encodable letter rounds, forward only
//! 3. Per key character, decode bit 0 (frontal letter) or bit 1 (posterior)
//! 4. Accumulate bits into bytes, writing each completed byte to the buffer
//!
//! CRITICAL: This decoder NEVER returns an error. A mismatched or corrupted
//! cover/key pair yields a truncated, zero-padded buffer, and a key
//! character matching neither letter of its round decodes as 0. Both are
//! intentional: decoding is best-effort over arbitrary inputs.

use crate::text::EncodableRounds;

/// Result of replaying a key.
/// Note: This is ALWAYS returned, even with mismatched inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedMessage {
    /// The reconstructed bytes. Sized to `key_chars / 8` regardless of how
    /// far the cover carried: bytes past the point where the cover ran out
    /// stay zero, and leftover bits short of a full byte are dropped.
    pub data: Vec<u8>,
    /// Number of key characters actually matched against a letter round.
    pub chars_consumed: usize,
}

/// Configuration for the decoder.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// Replays a key against a cover text, recovering the hidden message.
///
/// # Important
/// This function NEVER fails. If the cover has fewer encodable letter
/// rounds than the key has characters, the remaining buffer bytes stay
/// zero; if a key character matches neither letter of its round, that bit
/// decodes as 0.
///
/// # Arguments
/// * `cover` - The cover text (must match what was used for hiding)
/// * `key` - The key derived by [`hide`](crate::encoder::hide)
///
/// # Returns
/// A [`RevealedMessage`] with `key_chars / 8` bytes (or garbage on
/// mismatched inputs).
pub fn seek(cover: &str, key: &str) -> RevealedMessage {
    seek_with_config(cover, key, &DecoderConfig::default())
}

/// Replays a key with custom configuration.
/// NEVER returns an error - always produces output.
pub fn seek_with_config(cover: &str, key: &str, config: &DecoderConfig) -> RevealedMessage {
    let key_len = key.chars().count();
    let mut data = vec![0u8; key_len / 8];
    let mut rounds = EncodableRounds::new(cover);

    let mut byte = 0u8;
    let mut chars_consumed = 0;
    let mut slot = 0;

    for selected in key.chars() {
        let round = match rounds.next() {
            // Cover exhausted: return what was accumulated so far
            Some(round) => round,
            None => break,
        };

        // A character matching neither letter shifts a 0 in - the
        // permissive fallback that keeps decoding best-effort
        byte <<= 1;
        if selected == round.posterior {
            byte |= 1;
        }

        chars_consumed += 1;
        if chars_consumed % 8 == 0 {
            data[slot] = byte;
            slot += 1;
            byte = 0;
        }
    }

    if config.verbose {
        eprintln!(
            "Recovered {} of {} key characters across {} words ({} bytes written)",
            chars_consumed,
            key_len,
            rounds.words_scanned(),
            slot
        );
    }

    RevealedMessage {
        data,
        chars_consumed,
    }
}
