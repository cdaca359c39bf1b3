//! Per-letter feedback for a guess, and the consistency check used to
//! narrow candidates.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The mark a single guessed letter receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position.
    Correct,
    /// Letter is in the word, but somewhere else.
    Present,
    /// No unclaimed occurrence of the letter.
    Absent,
}

impl Mark {
    /// Parse one human-entered feedback symbol.
    ///
    /// `l`/`g` is correct, `j`/`y` is present, `p`/`x` is absent.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' | 'g' => Some(Mark::Correct),
            'j' | 'y' => Some(Mark::Present),
            'p' | 'x' => Some(Mark::Absent),
            _ => None,
        }
    }

    pub fn to_emoji(self) -> &'static str {
        match self {
            Mark::Correct => "🟩",
            Mark::Present => "🟨",
            Mark::Absent => "🔳",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseFeedbackError {
    #[error("feedback needs to be {expected} characters long, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("I don't know what {0} means")]
    UnknownMark(char),
}

/// Feedback for a whole guess: one [`Mark`] per letter position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    pub fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is [`Mark::Correct`].
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Parse feedback typed by a player, e.g. `"lpjp"`.
    pub fn parse(input: &str, word_length: usize) -> Result<Self, ParseFeedbackError> {
        let found = input.chars().count();
        if found != word_length {
            return Err(ParseFeedbackError::WrongLength {
                expected: word_length,
                found,
            });
        }
        input
            .chars()
            .map(|c| Mark::from_char(c).ok_or(ParseFeedbackError::UnknownMark(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            f.write_str(mark.to_emoji())?;
        }
        Ok(())
    }
}

/// Compute the feedback a game would give for `guess` when the answer is
/// `target`.
///
/// Correct positions are settled first and consume their target letter. The
/// remaining letters are then handed out left to right, so with repeated
/// letters the leftmost guessed occurrence is the one marked present.
pub fn compute_feedback(guess: &str, target: &str) -> Feedback {
    let guess: Vec<char> = guess.chars().collect();
    let target: Vec<char> = target.chars().collect();
    debug_assert_eq!(guess.len(), target.len());

    let mut marks = vec![Mark::Absent; guess.len()];
    let mut remaining: HashMap<char, usize> = HashMap::new();

    // First pass: correct positions
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            marks[i] = Mark::Correct;
        } else {
            *remaining.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: present letters, claimed left to right
    for (i, g) in guess.iter().enumerate() {
        if marks[i] == Mark::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            *count -= 1;
            marks[i] = Mark::Present;
        }
    }

    Feedback(marks)
}

/// Whether `candidate` could still be the answer, given that `guess` received
/// `feedback`.
///
/// The check works on the marks directly rather than recomputing feedback, so
/// hand-entered feedback is accepted as long as it is self-consistent. Each
/// correct mark claims its position, each present mark claims one further
/// occurrence of its letter, and an absent mark rejects any occurrence not
/// yet claimed. Present and absent marks are taken in index order, so an
/// absent mark only benefits from present claims to its left.
pub fn matches(feedback: &Feedback, guess: &str, candidate: &str) -> bool {
    let guess: Vec<char> = guess.chars().collect();
    let word: Vec<char> = candidate.chars().collect();
    if word.len() != guess.len() || feedback.len() != guess.len() {
        return false;
    }

    let mut claimed = vec![false; word.len()];

    // First pass: correct
    for (i, mark) in feedback.marks().iter().enumerate() {
        if *mark == Mark::Correct {
            if word[i] != guess[i] {
                return false;
            }
            claimed[i] = true;
        }
    }

    // Second pass: present and absent, in index order
    for (i, mark) in feedback.marks().iter().enumerate() {
        let letter = guess[i];
        match mark {
            Mark::Correct => {}
            Mark::Present => {
                if word[i] == letter {
                    return false;
                }
                match (0..word.len()).find(|&j| !claimed[j] && word[j] == letter) {
                    Some(j) => claimed[j] = true,
                    None => return false,
                }
            }
            Mark::Absent => {
                if (0..word.len()).any(|j| !claimed[j] && word[j] == letter) {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use super::Mark::{Absent as A, Correct as C, Present as P};

    fn fb(marks: &[Mark]) -> Feedback {
        Feedback::new(marks.to_vec())
    }

    fn sample_words() -> Vec<&'static str> {
        vec![
            "anpa", "kala", "kama", "lili", "mama", "nena", "pipi", "sama", "seme", "tawa",
            "wawa", "toki", "pona", "soko", "aabb", "abab", "baaa", "abcd",
        ]
    }

    #[rstest]
    #[case("aabb", "abab", &[C, P, P, C])]
    #[case("baaa", "abcd", &[P, P, A, A])]
    #[case("toki", "toki", &[C, C, C, C])]
    #[case("mama", "kama", &[A, C, C, C])]
    #[case("mama", "moku", &[C, A, A, A])]
    #[case("kala", "alak", &[P, P, P, P])]
    #[case("aaab", "baaa", &[P, C, C, P])]
    #[case("lili", "ilil", &[P, P, P, P])]
    #[case("pipi", "pona", &[C, A, A, A])]
    #[case("anpa", "pana", &[P, P, P, C])]
    fn test_compute_feedback_vectors(
        #[case] guess: &str,
        #[case] target: &str,
        #[case] expected: &[Mark],
    ) {
        assert_eq!(compute_feedback(guess, target), fb(expected));
    }

    #[test]
    fn test_leftmost_duplicate_claims_present() {
        // One spare 'a' in the target: only the first unmatched 'a' gets it.
        let feedback = compute_feedback("xaax", "abcd");
        assert_eq!(feedback, fb(&[A, P, A, A]));
    }

    #[test]
    fn test_correct_marks_exactly_where_letters_agree() {
        let words = sample_words();
        for guess in &words {
            for target in &words {
                let feedback = compute_feedback(guess, target);
                assert_eq!(feedback.len(), 4);
                for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
                    assert_eq!(
                        feedback.marks()[i] == Mark::Correct,
                        g == t,
                        "{guess} vs {target} at {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_marks_never_exceed_multiplicity() {
        let words = sample_words();
        for guess in &words {
            for target in &words {
                let feedback = compute_feedback(guess, target);
                for letter in guess.chars() {
                    let marked = guess
                        .chars()
                        .zip(feedback.marks())
                        .filter(|(g, m)| *g == letter && **m != Mark::Absent)
                        .count();
                    let available = target.chars().filter(|&t| t == letter).count();
                    assert!(marked <= available, "{guess} vs {target} for {letter}");
                }
            }
        }
    }

    #[test]
    fn test_target_always_matches_its_own_feedback() {
        let words = sample_words();
        for guess in &words {
            for target in &words {
                let feedback = compute_feedback(guess, target);
                assert!(
                    matches(&feedback, guess, target),
                    "{target} should match feedback {feedback} for {guess}"
                );
            }
        }
    }

    #[test]
    fn test_self_feedback_is_solved() {
        for word in sample_words() {
            let feedback = compute_feedback(word, word);
            assert!(feedback.is_solved());
            assert_eq!(feedback, fb(&[C, C, C, C]));
        }
    }

    #[test]
    fn test_is_solved_requires_every_mark_correct() {
        assert!(fb(&[C, C, C, C]).is_solved());
        assert!(!fb(&[C, C, C, P]).is_solved());
        assert!(!fb(&[A, C, C, C]).is_solved());
    }

    #[test]
    fn test_matches_correct_mark_requires_letter() {
        let feedback = fb(&[C, A, A, A]);
        assert!(matches(&feedback, "pipi", "pona"));
        assert!(!matches(&feedback, "pipi", "tona"));
    }

    #[test]
    fn test_matches_present_rejects_same_position() {
        // 'k' present at index 0 means the answer has 'k' elsewhere, not at 0.
        let feedback = fb(&[P, A, A, A]);
        assert!(matches(&feedback, "kxyz", "aakb"));
        assert!(!matches(&feedback, "kxyz", "kaab"));
    }

    #[test]
    fn test_matches_present_needs_distinct_occurrences() {
        // Two present 'a's need two unclaimed 'a's in the candidate.
        let feedback = fb(&[P, P, A, A]);
        assert!(matches(&feedback, "aaxy", "bcaa"));
        assert!(!matches(&feedback, "aaxy", "bcad"));
    }

    #[test]
    fn test_matches_present_skips_correct_claims() {
        // The 'a' at index 3 is already claimed by the correct mark.
        let feedback = fb(&[P, A, A, C]);
        assert!(!matches(&feedback, "axya", "bcda"));
        assert!(matches(&feedback, "axya", "bada"));
    }

    #[test]
    fn test_matches_absent_rejects_unclaimed_occurrence() {
        let feedback = fb(&[C, A, A, A]);
        assert!(!matches(&feedback, "aaxy", "abca"));
        assert!(matches(&feedback, "aaxy", "abcd"));
    }

    #[test]
    fn test_matches_absent_ignores_claimed_occurrences() {
        let feedback = compute_feedback("aaxx", "bacd");
        assert_eq!(feedback, fb(&[A, C, A, A]));
        assert!(matches(&feedback, "aaxx", "bacd"));
        assert!(!matches(&feedback, "aaxx", "aacd"));
    }

    #[test]
    fn test_matches_accepts_partial_hand_entered_feedback() {
        // Present at 0 and absent at 1 for the same letter; the present mark
        // claims the candidate's 'a' at index 1, so the absent mark is satisfied.
        let feedback = fb(&[P, A, A, A]);
        assert!(matches(&feedback, "aaxy", "bacd"));
    }

    #[test]
    fn test_matches_absent_only_sees_claims_to_its_left() {
        // The absent 'a' at index 0 is checked before the present 'a' at
        // index 3 claims the candidate's only 'a'.
        let feedback = fb(&[A, A, A, P]);
        assert!(!matches(&feedback, "abca", "xaxx"));
        // Absent after present for the same letter is still satisfied.
        assert!(matches(&fb(&[P, A, A, A]), "abca", "xaxx"));
    }

    #[test]
    fn test_matches_rejects_length_mismatch() {
        let feedback = fb(&[C, C, C, C]);
        assert!(!matches(&feedback, "toki", "tokii"));
        assert!(!matches(&fb(&[C, C, C]), "toki", "toki"));
    }

    #[test]
    fn test_parse_feedback() {
        assert_eq!(Feedback::parse("lpjp", 4), Ok(fb(&[C, A, P, A])));
        assert_eq!(Feedback::parse("GXYX", 4), Ok(fb(&[C, A, P, A])));
    }

    #[test]
    fn test_parse_feedback_invalid() {
        assert_eq!(
            Feedback::parse("lpj", 4),
            Err(ParseFeedbackError::WrongLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Feedback::parse("lpqp", 4),
            Err(ParseFeedbackError::UnknownMark('q'))
        );
    }

    #[test]
    fn test_emoji_display() {
        assert_eq!(fb(&[C, P, A, C]).to_string(), "🟩🟨🔳🟩");
    }
}
