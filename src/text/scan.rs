//! Word scanning and letter rounds.
//!
//! The cover text is split on single ASCII spaces only - no punctuation,
//! casing, or whitespace normalization. Runs of spaces produce empty words,
//! which never qualify and are skipped.
//!
//! A word *qualifies* when its first and last characters differ. The letters
//! of a qualifying word are paired up from the outside in (frontal with
//! posterior), and every pair of differing letters carries exactly one bit.
//!
//! Both the encoder and the decoder drive the same [`EncodableRounds`]
//! traversal, which keeps the two directions in lock-step by construction
//! instead of by duplicated scanning logic.

use std::str::Split;

/// One frontal/posterior letter pair of a qualifying word.
///
/// The frontal letter stands for bit 0, the posterior letter for bit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterRound {
    /// The i-th character from the front of the word.
    pub frontal: char,
    /// The i-th character from the back of the word.
    pub posterior: char,
}

/// Returns true when the word's first and last characters differ.
///
/// Empty words and one-character words never qualify. A word that fails
/// this check is skipped entirely, even when an inner letter pair of it
/// would differ.
pub fn is_qualifying(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => first != last,
        _ => false,
    }
}

/// Collects the encodable letter rounds of a word, in order.
///
/// A word of `L` characters has `L / 2` rounds; round `i` pairs the
/// character at position `i` with the one at position `L - 1 - i`. Rounds
/// whose two letters are equal carry no information and are left out.
/// The middle character of an odd-length word joins no round.
pub fn letter_rounds(word: &str) -> Vec<LetterRound> {
    let chars: Vec<char> = word.chars().collect();
    let mut rounds = Vec::with_capacity(chars.len() / 2);

    for index in 0..chars.len() / 2 {
        let frontal = chars[index];
        let posterior = chars[chars.len() - 1 - index];
        if frontal != posterior {
            rounds.push(LetterRound { frontal, posterior });
        }
    }

    rounds
}

/// Forward-only traversal of a cover text's encodable letter rounds.
///
/// Words are consumed strictly left to right and exactly once: once the
/// traversal moves past a word - whether it qualified or not - that word is
/// never revisited. Within a qualifying word, rounds are yielded from the
/// outside in.
pub struct EncodableRounds<'a> {
    words: Split<'a, char>,
    current: std::vec::IntoIter<LetterRound>,
    words_scanned: usize,
    words_used: usize,
}

impl<'a> EncodableRounds<'a> {
    /// Starts a traversal at the first word of the cover text.
    pub fn new(cover: &'a str) -> Self {
        Self {
            words: cover.split(' '),
            current: Vec::new().into_iter(),
            words_scanned: 0,
            words_used: 0,
        }
    }

    /// Number of words the traversal has moved past, qualifying or not.
    pub fn words_scanned(&self) -> usize {
        self.words_scanned
    }

    /// Number of qualifying words whose rounds have been yielded from.
    pub fn words_used(&self) -> usize {
        self.words_used
    }
}

impl Iterator for EncodableRounds<'_> {
    type Item = LetterRound;

    fn next(&mut self) -> Option<LetterRound> {
        loop {
            if let Some(round) = self.current.next() {
                return Some(round);
            }

            let word = self.words.next()?;
            self.words_scanned += 1;

            if is_qualifying(word) {
                // A qualifying word always has at least one encodable
                // round: its first and last letters differ.
                self.words_used += 1;
                self.current = letter_rounds(word).into_iter();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_qualifying() {
        assert!(is_qualifying("ab"));
        assert!(is_qualifying("word"));
        assert!(!is_qualifying(""));
        assert!(!is_qualifying("a"));
        assert!(!is_qualifying("aa"));
        assert!(!is_qualifying("radar"));
    }

    #[test]
    fn test_non_qualifying_word_hides_inner_rounds() {
        // "abca" pairs b with c on its inner round, but the word is
        // skipped outright because its first and last letters match
        assert!(!is_qualifying("abca"));
    }

    #[test]
    fn test_letter_rounds_pairs_outside_in() {
        assert_eq!(
            letter_rounds("word"),
            vec![
                LetterRound { frontal: 'w', posterior: 'd' },
                LetterRound { frontal: 'o', posterior: 'r' },
            ]
        );
    }

    #[test]
    fn test_letter_rounds_skips_equal_pairs() {
        // "droid": d/d is silent, r/i carries a bit, middle o joins no round
        assert_eq!(
            letter_rounds("droid"),
            vec![LetterRound { frontal: 'r', posterior: 'i' }]
        );
    }

    #[test]
    fn test_traversal_order() {
        let rounds: Vec<LetterRound> = EncodableRounds::new("ab cd").collect();
        assert_eq!(
            rounds,
            vec![
                LetterRound { frontal: 'a', posterior: 'b' },
                LetterRound { frontal: 'c', posterior: 'd' },
            ]
        );
    }

    #[test]
    fn test_traversal_skips_empty_and_palindromic_words() {
        // Double space yields an empty word; "aa" and "x" never qualify
        let rounds: Vec<LetterRound> = EncodableRounds::new("aa  x ab").collect();
        assert_eq!(rounds, vec![LetterRound { frontal: 'a', posterior: 'b' }]);
    }

    #[test]
    fn test_traversal_counters() {
        let mut traversal = EncodableRounds::new("aa ab cd");
        assert_eq!(traversal.by_ref().count(), 2);
        assert_eq!(traversal.words_scanned(), 3);
        assert_eq!(traversal.words_used(), 2);
    }

    #[test]
    fn test_traversal_unicode_words() {
        let rounds: Vec<LetterRound> = EncodableRounds::new("niño").collect();
        assert_eq!(
            rounds,
            vec![
                LetterRound { frontal: 'n', posterior: 'o' },
                LetterRound { frontal: 'i', posterior: 'ñ' },
            ]
        );
    }
}
