//! Cover-text traversal for the mirrored-letter codec.
//!
//! This module provides:
//! - Word tokenization (single ASCII space, no normalization)
//! - The qualifying-word rule (first and last characters differ)
//! - Letter rounds (outside-in letter pairs of a qualifying word)
//! - The shared forward-only traversal of encodable rounds

pub mod scan;

pub use scan::{is_qualifying, letter_rounds, EncodableRounds, LetterRound};
