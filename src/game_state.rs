use crate::feedback::{Feedback, compute_feedback};
use crate::info_log;
use crate::solver::{Solver, SolverError};
use rand::Rng;
use std::io;
use thiserror::Error;

/// Limits and overrides for one game.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Guess budget; `None` plays until solved.
    pub max_guesses: Option<usize>,
    /// Played as the first guess instead of asking the solver.
    pub starter: Option<String>,
}

/// One played round.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub guess: String,
    /// The solver's expected number of words left before the guess was made.
    pub projected_score: f64,
    /// Words actually left after the feedback.
    pub remaining: usize,
    pub feedback: Feedback,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed getting the next guess: {0}")]
    Solver(#[from] SolverError),
    #[error("failed getting input: {0}")]
    Input(#[from] io::Error),
    #[error("input ended before the game was over")]
    InputClosed,
}

/// Where a game gets its feedback from, and how it tells the player what
/// is going on.
pub trait GameInterface {
    fn announce_guess(&mut self, guess: &str, projected_score: f64);

    /// Feedback for `guess`, or `None` once input runs out.
    fn read_feedback(&mut self, guess: &str) -> io::Result<Option<Feedback>>;

    /// Called when the solver rejects feedback. Return `true` to ask again.
    fn feedback_rejected(&mut self, error: &SolverError) -> bool;
}

/// Plays against a known answer; feedback is computed, never typed.
#[derive(Debug, Clone)]
pub struct SimulatedInterface {
    target: String,
}

impl SimulatedInterface {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl GameInterface for SimulatedInterface {
    fn announce_guess(&mut self, _guess: &str, _projected_score: f64) {}

    fn read_feedback(&mut self, guess: &str) -> io::Result<Option<Feedback>> {
        Ok(Some(compute_feedback(guess, &self.target)))
    }

    fn feedback_rejected(&mut self, _error: &SolverError) -> bool {
        // The same feedback would come back again.
        false
    }
}

/// Run rounds until a guess is solved or the budget is spent.
pub fn play_game<R: Rng, I: GameInterface>(
    solver: &mut Solver<R>,
    config: &GameConfig,
    interface: &mut I,
) -> Result<Vec<Round>, GameError> {
    let mut rounds = Vec::new();

    while config.max_guesses.is_none_or(|max| rounds.len() < max) {
        let (guess, projected_score) = match (&config.starter, rounds.is_empty()) {
            (Some(starter), true) => (starter.clone(), solver.score_guess(starter)),
            _ => solver.make_guess()?,
        };
        interface.announce_guess(&guess, projected_score);

        let (feedback, remaining) = loop {
            let Some(feedback) = interface.read_feedback(&guess)? else {
                return Err(GameError::InputClosed);
            };
            match solver.apply_feedback(&guess, &feedback) {
                Ok(remaining) => break (feedback, remaining),
                Err(err @ SolverError::NoCandidatesRemain { .. }) => {
                    if !interface.feedback_rejected(&err) {
                        return Err(err.into());
                    }
                }
                Err(err) => return Err(err.into()),
            }
        };

        let solved = feedback.is_solved();
        info_log!(
            "round {}: {guess} {feedback}, {remaining} left",
            rounds.len() + 1
        );
        rounds.push(Round {
            guess,
            projected_score,
            remaining,
            feedback,
        });
        if solved {
            return Ok(rounds);
        }
    }

    solver.stop();
    Ok(rounds)
}
