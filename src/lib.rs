// Library interface for nimi-solver
// The binary and the integration tests both build on these modules

pub mod cli;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use feedback::{Feedback, Mark, compute_feedback, matches};
pub use game_state::{GameConfig, GameError, GameInterface, Round, SimulatedInterface, play_game};
pub use solver::{Solver, SolverError, SolverState, Strategy};
pub use wordbank::{Tier, WORD_LENGTH, WordTiers, load_wordbank_from_file, load_wordbank_from_str};
