use crate::feedback::Feedback;
use crate::game_state::{GameConfig, GameInterface, Round};
use crate::solver::{SolverError, Strategy};
use crate::wordbank::{UnknownTier, WORD_LENGTH, WordTiers, load_wordbank_from_file};
use clap::Parser;
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{self, BufRead};
use std::path::PathBuf;
use thiserror::Error;

/// Solver for a four-letter word guessing game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Solution words: comma separated tiers out of core, common, uncommon,
    /// obscure, sandbox (and custom, with --input). Only core is a full list;
    /// the other tiers are short samples, use --input for a complete one
    #[arg(short = 'd', long = "dictionary", default_value = "core,common")]
    pub dictionary: String,

    /// Words allowed as guesses, same format as --dictionary (default is the
    /// solution dictionary)
    #[arg(short = 'g', long = "guess-dictionary")]
    pub guess_dictionary: Option<String>,

    /// Path to a newline-delimited word list, available as the `custom` tier
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// First guess to play instead of asking the strategy; "random" picks one
    #[arg(long)]
    pub starter: Option<String>,

    /// Word to solve for instead of entering feedback by hand; "random" picks one
    #[arg(short = 'w', long)]
    pub word: Option<String>,

    /// minwords: fewest words left, maxwords: most words left, random: any word
    #[arg(short = 's', long, default_value = "minwords")]
    pub strategy: Strategy,

    /// Only guess words that can still be the answer
    #[arg(long)]
    pub hard: bool,

    /// Number of guesses allowed; 0 for unlimited
    #[arg(long, default_value_t = 6)]
    pub guesses: usize,

    /// Seed for random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownTier(#[from] UnknownTier),
    #[error("failed to load word bank from '{}': {source}", path.display())]
    Wordbank {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the {0} dictionary is empty")]
    EmptyDictionary(&'static str),
    #[error("starter must be {} characters long", WORD_LENGTH)]
    StarterLength,
    #[error("word must be in the solution dictionary: {0}")]
    UnknownWord(String),
}

/// Everything needed to set up a game, resolved from the command line.
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub solution_words: Vec<String>,
    pub guess_words: Vec<String>,
    pub strategy: Strategy,
    pub hard_mode: bool,
    pub config: GameConfig,
    /// Known answer to simulate against, if any.
    pub target: Option<String>,
}

impl Cli {
    /// Load the dictionaries, check the overrides and pick any "random"
    /// words with `rng`.
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> Result<GameSetup, ConfigError> {
        let mut tiers = WordTiers::embedded();
        if let Some(path) = &self.wordbank_path {
            let words = load_wordbank_from_file(path).map_err(|source| ConfigError::Wordbank {
                path: path.clone(),
                source,
            })?;
            tiers = tiers.with_tier("custom", words);
        }

        let solution_words = tiers.select(&self.dictionary)?;
        let guess_words = match &self.guess_dictionary {
            Some(list) => tiers.select(list)?,
            None => solution_words.clone(),
        };

        let starter = match self.starter.as_deref().map(str::to_lowercase) {
            Some(word) if word == "random" => Some(pick(&solution_words, rng)?),
            Some(word) if word.chars().count() != WORD_LENGTH => {
                return Err(ConfigError::StarterLength);
            }
            other => other,
        };

        let target = match self.word.as_deref().map(str::to_lowercase) {
            Some(word) if word == "random" => Some(pick(&solution_words, rng)?),
            Some(word) if !solution_words.contains(&word) => {
                return Err(ConfigError::UnknownWord(word));
            }
            other => other,
        };

        Ok(GameSetup {
            solution_words,
            guess_words,
            strategy: self.strategy,
            hard_mode: self.hard,
            config: GameConfig {
                max_guesses: (self.guesses > 0).then_some(self.guesses),
                starter,
            },
            target,
        })
    }
}

fn pick<R: Rng>(words: &[String], rng: &mut R) -> Result<String, ConfigError> {
    words
        .choose(rng)
        .cloned()
        .ok_or(ConfigError::EmptyDictionary("solution"))
}

// UI Input/Output functions

pub fn display_guess(guess: &str) {
    println!("I guess {guess}.");
}

pub fn display_summary(rounds: &[Round]) {
    for round in rounds {
        let remaining = if round.feedback.is_solved() {
            "🥳".to_string()
        } else {
            round.remaining.to_string()
        };
        println!(
            "{} {} {:.6} {}",
            round.feedback, round.guess, round.projected_score, remaining
        );
    }
}

/// Read feedback lines until one parses. `Ok(None)` at end of input.
pub fn read_feedback<R: BufRead>(reader: &mut R) -> io::Result<Option<Feedback>> {
    loop {
        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        match Feedback::parse(input.trim(), WORD_LENGTH) {
            Ok(feedback) => return Ok(Some(feedback)),
            Err(err) => println!("{err}."),
        }
    }
}

/// CLI implementation of the GameInterface trait
/// Feedback is typed one line per guess: l = right spot, j = wrong spot,
/// p = not in the word (g/y/x work too).
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn announce_guess(&mut self, guess: &str, _projected_score: f64) {
        display_guess(guess);
    }

    fn read_feedback(&mut self, _guess: &str) -> io::Result<Option<Feedback>> {
        read_feedback(&mut self.reader)
    }

    fn feedback_rejected(&mut self, error: &SolverError) -> bool {
        println!("{error}. Check your input and try again.");
        true
    }
}
