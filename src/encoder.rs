//! Message encoding: hide bits in the letters of an untouched cover text.
//!
//! This module orchestrates the encoding process:
//! 1. Expand the message into bits (most significant first)
//! 2. Walk the cover's encodable letter rounds, forward only
//! 3. Per bit, select the round's frontal letter (0) or posterior letter (1)
//! 4. Append the selected letter to the key
//!
//! The cover text is read-only throughout - only the key carries
//! information, and only together with the exact same cover text.

use thiserror::Error;

use crate::bits::to_bits;
use crate::text::EncodableRounds;

/// Errors that can occur during encoding.
#[derive(Error, Debug)]
pub enum EncoderError {
    /// The cover ran out of encodable letter rounds before every bit was
    /// placed. Encoding is all-or-nothing: a partial key is never returned.
    #[error("insufficient cover capacity: placed {placed} of {needed} bits")]
    InsufficientCapacity { placed: usize, needed: usize },
}

/// Result of hiding a message.
#[derive(Debug, Clone)]
pub struct HiddenMessage {
    /// The key: one selected letter per hidden bit, exactly 8 per message
    /// byte. Replayed against the same cover text, it reconstructs the
    /// message.
    pub key: String,
    /// Number of cover words the traversal moved past (for debugging/info).
    pub words_consumed: usize,
}

/// Configuration for the encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// Hides a message in a cover text, deriving the key.
///
/// # Arguments
/// * `cover` - The cover text (both parties must have this); never modified
/// * `message` - The secret bytes to hide
///
/// # Returns
/// A [`HiddenMessage`] carrying the key, or
/// [`EncoderError::InsufficientCapacity`] when the cover has fewer encodable
/// letter rounds than the message has bits. An empty message succeeds with
/// an empty key.
pub fn hide(cover: &str, message: &[u8]) -> Result<HiddenMessage, EncoderError> {
    hide_with_config(cover, message, &EncoderConfig::default())
}

/// Hides a message with custom configuration.
pub fn hide_with_config(
    cover: &str,
    message: &[u8],
    config: &EncoderConfig,
) -> Result<HiddenMessage, EncoderError> {
    let bits = to_bits(message);
    let mut rounds = EncodableRounds::new(cover);
    let mut key = String::with_capacity(bits.len());

    for (placed, bit) in bits.iter().enumerate() {
        let round = match rounds.next() {
            Some(round) => round,
            None => {
                return Err(EncoderError::InsufficientCapacity {
                    placed,
                    needed: bits.len(),
                });
            }
        };

        key.push(if *bit == 0 { round.frontal } else { round.posterior });
    }

    if config.verbose {
        eprintln!(
            "Hid {} bits in {} qualifying words ({} words consumed)",
            bits.len(),
            rounds.words_used(),
            rounds.words_scanned()
        );
    }

    Ok(HiddenMessage {
        key,
        words_consumed: rounds.words_scanned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_single_byte() {
        // 65 = 0b01000001: frontals for the 0 bits, posteriors for the 1s
        let cover = "ab cd ef gh ij kl mn op";
        let hidden = hide(cover, &[65]).unwrap();
        assert_eq!(hidden.key, "adegikmp");
        assert_eq!(hidden.words_consumed, 8);
    }

    #[test]
    fn test_hide_key_length_law() {
        let cover = "abcd ".repeat(64);
        let message = b"four";
        let hidden = hide(&cover, message).unwrap();
        assert_eq!(hidden.key.chars().count(), 8 * message.len());
    }

    #[test]
    fn test_hide_empty_message() {
        let hidden = hide("ab cd", &[]).unwrap();
        assert_eq!(hidden.key, "");
        assert_eq!(hidden.words_consumed, 0);
    }

    #[test]
    fn test_hide_no_qualifying_words() {
        let result = hide("aa bb radar x", &[65]);
        assert!(matches!(
            result,
            Err(EncoderError::InsufficientCapacity { placed: 0, needed: 8 })
        ));
    }

    #[test]
    fn test_hide_all_or_nothing() {
        // "ab cd" carries 2 bits; one byte needs 8 - no partial key
        let result = hide("ab cd", &[65]);
        assert!(matches!(
            result,
            Err(EncoderError::InsufficientCapacity { placed: 2, needed: 8 })
        ));
    }

    #[test]
    fn test_hide_skips_silent_rounds() {
        // "droid" qualifies but its d/d pair is silent: one bit per word
        let cover = "droid ".repeat(8);
        let hidden = hide(&cover, &[0b10110001]).unwrap();
        assert_eq!(hidden.key, "iriirrri");
    }
}
