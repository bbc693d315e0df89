use crate::error::{PuzzleError, Result};
use crate::Difficulty;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUILTIN_WORDS: &str = include_str!("../data/words.json");

/// Word lists keyed by difficulty tier.
///
/// The table is a JSON object mapping tier names (`"Easy"`, `"Medium"`,
/// `"Hard"`) to arrays of words.
#[derive(Debug, Clone)]
pub struct WordBank {
    tiers: BTreeMap<String, Vec<String>>,
}

impl WordBank {
    /// The word bank compiled into the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_WORDS)
    }

    /// Parse a word bank table from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;

        let mut tiers = BTreeMap::new();
        for (tier, words) in raw {
            let cleaned = normalize(&tier, words);
            if tiers.insert(tier.to_ascii_lowercase(), cleaned).is_some() {
                return Err(PuzzleError::DuplicateTier(tier));
            }
        }

        Ok(Self { tiers })
    }

    /// Read a word bank table from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let bank = Self::from_json(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            tiers = bank.tiers.len(),
            "Loaded word bank"
        );
        Ok(bank)
    }

    /// Words for a tier, in table order
    pub fn load(&self, difficulty: Difficulty) -> Result<Vec<String>> {
        match self.tiers.get(&difficulty.name().to_ascii_lowercase()) {
            Some(words) if !words.is_empty() => Ok(words.clone()),
            _ => Err(PuzzleError::MissingTier(difficulty)),
        }
    }
}

/// Trim and upper-case entries, dropping blanks and repeats
fn normalize(tier: &str, words: Vec<String>) -> Vec<String> {
    let total = words.len();
    let mut cleaned: Vec<String> = Vec::with_capacity(total);

    for word in words {
        let word = word.trim().to_uppercase();
        if word.is_empty() || cleaned.contains(&word) {
            continue;
        }
        cleaned.push(word);
    }

    if cleaned.len() != total {
        tracing::warn!(
            tier,
            dropped = total - cleaned.len(),
            "Word bank tier had blank or duplicate entries"
        );
    }
    cleaned
}
