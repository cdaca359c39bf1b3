use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word of a game.
pub const WORD_LENGTH: usize = 4;

const CORE_WORDS: &str = include_str!("resources/core.txt");
const COMMON_WORDS: &str = include_str!("resources/common.txt");
const UNCOMMON_WORDS: &str = include_str!("resources/uncommon.txt");
const OBSCURE_WORDS: &str = include_str!("resources/obscure.txt");
const SANDBOX_WORDS: &str = include_str!("resources/sandbox.txt");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid word category: {0}")]
pub struct UnknownTier(pub String);

/// The word lists shipped with the solver, from everyday words to rare ones.
///
/// `Core` is complete. The other tiers only carry a few sample words each;
/// a full list can be loaded as the `custom` tier instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Core,
    Common,
    Uncommon,
    Obscure,
    Sandbox,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Core,
        Tier::Common,
        Tier::Uncommon,
        Tier::Obscure,
        Tier::Sandbox,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Core => "core",
            Tier::Common => "common",
            Tier::Uncommon => "uncommon",
            Tier::Obscure => "obscure",
            Tier::Sandbox => "sandbox",
        }
    }

    pub fn words(self) -> Vec<String> {
        load_wordbank_from_str(match self {
            Tier::Core => CORE_WORDS,
            Tier::Common => COMMON_WORDS,
            Tier::Uncommon => UNCOMMON_WORDS,
            Tier::Obscure => OBSCURE_WORDS,
            Tier::Sandbox => SANDBOX_WORDS,
        })
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == s)
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named word lists a game's dictionaries are assembled from.
#[derive(Debug, Clone, Default)]
pub struct WordTiers {
    tiers: HashMap<String, Vec<String>>,
}

impl WordTiers {
    /// The built-in tiers.
    pub fn embedded() -> Self {
        Tier::ALL
            .into_iter()
            .fold(Self::default(), |tiers, tier| tiers.with_tier(tier.name(), tier.words()))
    }

    /// Add (or replace) a tier.
    pub fn with_tier(mut self, name: &str, words: Vec<String>) -> Self {
        self.tiers.insert(name.to_string(), words);
        self
    }

    pub fn tier(&self, name: &str) -> Option<&[String]> {
        self.tiers.get(name).map(Vec::as_slice)
    }

    /// Concatenate the tiers in a comma separated list like `"core,common"`,
    /// in the order given. Blank entries are skipped.
    pub fn select(&self, list: &str) -> Result<Vec<String>, UnknownTier> {
        let mut words = Vec::new();
        for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let tier = self
                .tier(name)
                .ok_or_else(|| UnknownTier(name.to_string()))?;
            words.extend_from_slice(tier);
        }
        Ok(words)
    }
}

fn is_valid_word(word: &str) -> bool {
    word.chars().count() == WORD_LENGTH && word.chars().all(char::is_alphabetic)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_valid_word(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_valid_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}
