use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cell on the grid, `x` across and `y` down.
///
/// Positions order by `x` first, then `y`, which is the canonical order a
/// selection trace is sorted into before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the position lies on a grid of the given dimension
    pub fn in_bounds(&self, dimension: usize) -> bool {
        self.x < dimension && self.y < dimension
    }

    /// Iterate all positions of a `dimension × dimension` grid in row-major order
    pub fn all(dimension: usize) -> impl Iterator<Item = Position> {
        (0..dimension).flat_map(move |y| (0..dimension).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Side length of the largest square grid that fits in `cell_count` cells
pub fn dimension_for_cell_count(cell_count: usize) -> usize {
    let mut dimension = (cell_count as f64).sqrt() as usize;
    // Guard against float rounding at perfect squares
    while dimension * dimension > cell_count {
        dimension -= 1;
    }
    while (dimension + 1) * (dimension + 1) <= cell_count {
        dimension += 1;
    }
    dimension
}

/// Direction a word is laid out and read in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::LeftToRight,
        Orientation::RightToLeft,
        Orientation::TopToBottom,
        Orientation::BottomToTop,
    ];

    /// Whether the word runs along a row
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::LeftToRight | Orientation::RightToLeft)
    }

    /// Whether the word reads against the grid's forward axis
    pub fn is_reversed(&self) -> bool {
        matches!(self, Orientation::RightToLeft | Orientation::BottomToTop)
    }

    /// Position of the `offset`-th cell of a span starting at `start`
    pub(crate) fn step(&self, start: Position, offset: usize) -> Position {
        if self.is_horizontal() {
            Position::new(start.x + offset, start.y)
        } else {
            Position::new(start.x, start.y + offset)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::LeftToRight => "left to right",
            Orientation::RightToLeft => "right to left",
            Orientation::TopToBottom => "top to bottom",
            Orientation::BottomToTop => "bottom to top",
        };
        write!(f, "{}", name)
    }
}

/// Word bank tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Tier name as it appears in the word bank table
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(PuzzleError::UnknownDifficulty(s.to_string())),
        }
    }
}
