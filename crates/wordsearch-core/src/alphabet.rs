use crate::error::{PuzzleError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Letters that have a tile. Words may only use these.
pub fn has_tile(letter: char) -> bool {
    letter.is_ascii_uppercase()
}

/// Pool of letters used to pad cells no word occupies.
///
/// Letters are kept uppercase, de-duplicated and in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::full()
    }
}

impl Alphabet {
    /// All 26 letters
    pub fn full() -> Self {
        Self {
            letters: ('A'..='Z').collect(),
        }
    }

    /// The 25-letter pool older word data shipped with. `T` is missing.
    pub fn legacy() -> Self {
        Self {
            letters: ('A'..='Z').filter(|&c| c != 'T').collect(),
        }
    }

    /// Build an alphabet from a string of letters, ignoring whitespace and commas
    pub fn from_letters(letters: &str) -> Result<Self> {
        let mut pool = Vec::new();
        for c in letters.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            let upper = c.to_ascii_uppercase();
            if !has_tile(upper) {
                return Err(PuzzleError::UnmappedLetter {
                    word: letters.to_string(),
                    letter: c,
                });
            }
            if !pool.contains(&upper) {
                pool.push(upper);
            }
        }
        if pool.is_empty() {
            return Err(PuzzleError::EmptyAlphabet);
        }
        Ok(Self { letters: pool })
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Draw a letter uniformly at random
    pub fn pick(&self, rng: &mut impl Rng) -> Result<char> {
        if self.letters.is_empty() {
            return Err(PuzzleError::EmptyAlphabet);
        }
        Ok(self.letters[rng.gen_range(0..self.letters.len())])
    }
}

impl FromStr for Alphabet {
    type Err = PuzzleError;

    /// Accepts `full`, `legacy`, or an explicit list of letters
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::full()),
            "legacy" => Ok(Self::legacy()),
            _ => Self::from_letters(s),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
