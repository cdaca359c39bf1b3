use crate::feedback::{Feedback, compute_feedback, matches};
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the next guess is picked from the guess pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The guess leaving the fewest words on average.
    MinRemaining,
    /// The guess leaving the most words on average.
    MaxRemaining,
    /// Any word from the pool.
    Random,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minwords" => Ok(Strategy::MinRemaining),
            "maxwords" => Ok(Strategy::MaxRemaining),
            "random" => Ok(Strategy::Random),
            other => Err(format!(
                "invalid strategy: {other} (expected minwords, maxwords or random)"
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::MinRemaining => "minwords",
            Strategy::MaxRemaining => "maxwords",
            Strategy::Random => "random",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("couldn't find a valid guess")]
    NoValidGuess,
    #[error("no words are left that match {feedback} for {guess}")]
    NoCandidatesRemain { guess: String, feedback: String },
    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Still narrowing candidates.
    Active,
    /// Solved, or stopped by the caller. Build a new solver to play again.
    Terminated,
}

/// Plays one game: proposes guesses and narrows the candidate words as
/// feedback comes in.
#[derive(Debug, Clone)]
pub struct Solver<R = StdRng> {
    candidates: Vec<String>,
    guess_words: Vec<String>,
    strategy: Strategy,
    hard_mode: bool,
    state: SolverState,
    rng: R,
}

impl Solver<StdRng> {
    pub fn new(
        solution_words: Vec<String>,
        guess_words: Vec<String>,
        strategy: Strategy,
        hard_mode: bool,
    ) -> Self {
        Self::with_rng(
            solution_words,
            guess_words,
            strategy,
            hard_mode,
            StdRng::from_entropy(),
        )
    }
}

impl<R: Rng> Solver<R> {
    /// Like [`Solver::new`], with a caller-supplied random source for the
    /// random strategy.
    pub fn with_rng(
        solution_words: Vec<String>,
        guess_words: Vec<String>,
        strategy: Strategy,
        hard_mode: bool,
        rng: R,
    ) -> Self {
        Self {
            candidates: solution_words,
            guess_words,
            strategy,
            hard_mode,
            state: SolverState::Active,
            rng,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn is_hard_mode(&self) -> bool {
        self.hard_mode
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Words eligible as the next guess. In hard mode only words that can
    /// still be the answer.
    pub fn guess_pool(&self) -> &[String] {
        if self.hard_mode {
            &self.candidates
        } else {
            &self.guess_words
        }
    }

    /// Expected number of other candidates still left after guessing
    /// `guess`, taking every current candidate as equally likely.
    pub fn score_guess(&self, guess: &str) -> f64 {
        if self.candidates.is_empty() {
            return 0.0;
        }
        let total: usize = self
            .candidates
            .iter()
            .map(|answer| {
                let feedback = compute_feedback(guess, answer);
                self.candidates
                    .iter()
                    .filter(|word| word.as_str() != guess && matches(&feedback, guess, word))
                    .count()
            })
            .sum();
        total as f64 / self.candidates.len() as f64
    }

    /// Pick the next guess according to the strategy, with its score.
    pub fn make_guess(&mut self) -> Result<(String, f64), SolverError> {
        if self.state == SolverState::Terminated {
            return Err(SolverError::GameOver);
        }
        let (guess, score) = match self.strategy {
            Strategy::MinRemaining => self.best_by(|score, best| score < best)?,
            Strategy::MaxRemaining => self.best_by(|score, best| score > best)?,
            Strategy::Random => {
                let pool = if self.hard_mode {
                    &self.candidates
                } else {
                    &self.guess_words
                };
                let guess = pool
                    .choose(&mut self.rng)
                    .ok_or(SolverError::NoValidGuess)?
                    .clone();
                let score = self.score_guess(&guess);
                (guess, score)
            }
        };
        info_log!(
            "{} picked {guess} (expected remaining {score:.3}, {} candidates)",
            self.strategy,
            self.candidates.len()
        );
        Ok((guess, score))
    }

    // First word in pool order whose score beats every earlier one.
    fn best_by(&self, better: impl Fn(f64, f64) -> bool) -> Result<(String, f64), SolverError> {
        let mut best: Option<(&String, f64)> = None;
        for guess in self.guess_pool() {
            let score = self.score_guess(guess);
            debug_log!("score for {guess}: {score:.3}");
            match best {
                Some((_, best_score)) if !better(score, best_score) => {}
                _ => best = Some((guess, score)),
            }
        }
        best.map(|(guess, score)| (guess.clone(), score))
            .ok_or(SolverError::NoValidGuess)
    }

    /// Keep only the candidates consistent with `feedback` for `guess`.
    ///
    /// Returns the number of candidates left. Feedback that no candidate
    /// matches is rejected and the candidates stay as they were.
    pub fn apply_feedback(&mut self, guess: &str, feedback: &Feedback) -> Result<usize, SolverError> {
        if self.state == SolverState::Terminated {
            return Err(SolverError::GameOver);
        }
        let filtered: Vec<String> = self
            .candidates
            .iter()
            .filter(|word| matches(feedback, guess, word))
            .cloned()
            .collect();
        if filtered.is_empty() {
            debug_log!("rejected {feedback} for {guess}: no candidates would remain");
            return Err(SolverError::NoCandidatesRemain {
                guess: guess.to_string(),
                feedback: feedback.to_string(),
            });
        }
        info_log!(
            "{guess} {feedback}: {} -> {} candidates",
            self.candidates.len(),
            filtered.len()
        );
        self.candidates = filtered;
        if feedback.is_solved() {
            self.state = SolverState::Terminated;
        }
        Ok(self.candidates.len())
    }

    /// End the game without a solve, e.g. once the guess budget is spent.
    pub fn stop(&mut self) {
        self.state = SolverState::Terminated;
    }
}
