use crate::{Difficulty, Position};

/// Errors raised while building a puzzle.
///
/// Every variant is a setup-time failure: once a [`Puzzle`](crate::Puzzle)
/// exists, play never produces an error.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// A word list contained an empty entry.
    #[error("word list contains an empty word")]
    EmptyWord,

    /// A word contains a character that has no letter tile.
    #[error("word '{word}' contains '{letter}', which has no letter tile")]
    UnmappedLetter { word: String, letter: char },

    /// A word cannot fit on the grid along either axis.
    #[error("word '{word}' has {len} letters but the grid is only {dimension} wide")]
    WordTooLong {
        word: String,
        len: usize,
        dimension: usize,
    },

    /// A forced placement runs off the grid.
    #[error("word '{word}' starting at {start} runs off the grid")]
    OutOfBounds { word: String, start: Position },

    /// Two placements claim the same cell.
    #[error("word '{word}' overlaps another word at {cell}")]
    Overlap { word: String, cell: Position },

    /// The words need more cells than the grid has.
    #[error("words need {letters} cells but the grid only has {cells}")]
    GridOverfilled { letters: usize, cells: usize },

    /// Retries ran out while looking for a free span for a word.
    #[error("could not place '{word}' after {attempts} attempts")]
    PlacementInfeasible { word: String, attempts: usize },

    /// A grid must have at least one cell per side.
    #[error("grid dimension must be at least 1")]
    InvalidDimension,

    /// The grid is larger than a board can be.
    #[error("grid dimension {dimension} exceeds the maximum of {max}")]
    DimensionTooLarge { dimension: usize, max: usize },

    /// A placement's cells do not spell out its word in a straight line.
    #[error("placement of '{word}' does not cover one contiguous cell per letter")]
    MalformedPlacement { word: String },

    /// A cell must be at least one pixel in each direction.
    #[error("cell size must be at least 1x1")]
    InvalidCellSize,

    /// The filler alphabet has no letters to draw from.
    #[error("filler alphabet is empty")]
    EmptyAlphabet,

    /// A difficulty name did not match any tier.
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    /// The word bank has no entry for a tier.
    #[error("word bank has no words for {0}")]
    MissingTier(Difficulty),

    /// Two tiers in the word bank differ only by case.
    #[error("word bank lists tier '{0}' more than once")]
    DuplicateTier(String),

    /// The word bank table could not be parsed.
    #[error("malformed word bank: {0}")]
    WordBank(#[from] serde_json::Error),

    /// The word bank file could not be read.
    #[error("failed to read word bank: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
