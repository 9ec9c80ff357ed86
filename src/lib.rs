//! # Hideseek - hide messages in the letters of an untouched cover text
//!
//! Hideseek is a linguistic steganography codec. Instead of rewriting the
//! cover text, encoding records, for every hidden bit, which of two mirrored
//! letters of a cover word was selected. The cover is pre-shared and never
//! modified - only the derived key travels.
//!
//! ## Overview
//!
//! - The cover text is split into words on single ASCII spaces.
//! - A word whose first and last characters differ *qualifies*; its letters
//!   are paired from the outside in (frontal with posterior), and every pair
//!   of differing letters carries exactly one bit.
//! - Bit 0 selects the frontal letter, bit 1 the posterior letter; the
//!   selected letters, in order, form the key.
//! - Replaying the key against the same cover text recovers the bits, and
//!   with them the message.
//!
//! Hiding is all-or-nothing: if the cover runs out of encodable letters, it
//! fails outright rather than emit a partial key. Seeking NEVER fails: a
//! mismatched cover or key yields truncated or garbage bytes, not errors.
//!
//! ## Example Usage
//!
//! ```rust
//! use hideseek::{hide, seek};
//!
//! // Both parties have the same cover text
//! let cover = "ab cd ef gh ij kl mn op";
//!
//! // Hide one byte - the key records eight selected letters
//! let hidden = hide(cover, b"A").unwrap();
//! assert_eq!(hidden.key, "adegikmp");
//!
//! // Replay the key - seek never fails
//! let revealed = seek(cover, &hidden.key);
//! assert_eq!(revealed.data, b"A");
//! ```
//!
//! ## Modules
//!
//! - [`bits`]: byte/bit packing (most significant bit first)
//! - [`text`]: cover-text traversal (qualifying words, letter rounds)
//! - [`encoder`]: message hiding (all-or-nothing)
//! - [`decoder`]: key replay (best-effort, never fails)

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod text;

// Re-export commonly used types at the crate root
pub use decoder::{seek, seek_with_config, DecoderConfig, RevealedMessage};
pub use encoder::{hide, hide_with_config, EncoderConfig, EncoderError, HiddenMessage};
pub use text::{EncodableRounds, LetterRound};
