use crate::alphabet::{has_tile, Alphabet};
use crate::error::{PuzzleError, Result};
use crate::{Orientation, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Largest grid side a puzzle may have
pub const MAX_DIMENSION: usize = 64;

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Cells per side of the square grid
    pub dimension: usize,
    /// Letters used to pad unused cells
    pub filler: Alphabet,
    /// Start positions tried per word before giving up
    pub max_attempts: usize,
    /// Fixed seed for reproducible puzzles
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dimension: 12,
            filler: Alphabet::full(),
            max_attempts: 1000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A word laid out on the grid.
///
/// `cells` are always stored in forward grid order (increasing `x` for
/// horizontal words, increasing `y` for vertical ones). Reversed orientations
/// read the word backwards along those cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlacementRecord")]
pub struct Placement {
    word: String,
    orientation: Orientation,
    cells: Vec<Position>,
}

impl Placement {
    /// Place `word` with its first grid cell at `start`.
    ///
    /// Fails if the word is empty, uses a letter without a tile, or runs off
    /// a grid of the given dimension.
    pub fn new(
        word: &str,
        orientation: Orientation,
        start: Position,
        dimension: usize,
    ) -> Result<Self> {
        validate_word(word, dimension)?;
        let len = word.chars().count();
        let end = orientation.step(start, len - 1);
        if !start.in_bounds(dimension) || !end.in_bounds(dimension) {
            return Err(PuzzleError::OutOfBounds {
                word: word.to_string(),
                start,
            });
        }
        Ok(Self::spanning(word, orientation, start, len))
    }

    fn spanning(word: &str, orientation: Orientation, start: Position, len: usize) -> Self {
        Self {
            word: word.to_string(),
            orientation,
            cells: (0..len).map(|i| orientation.step(start, i)).collect(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells in forward grid order
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Letter written to each cell
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let letters: Vec<char> = if self.orientation.is_reversed() {
            self.word.chars().rev().collect()
        } else {
            self.word.chars().collect()
        };
        self.cells.iter().copied().zip(letters)
    }

    /// Read the word back off its cells in its reading direction
    pub fn read_back(&self) -> String {
        let forward: String = self.letters().map(|(_, c)| c).collect();
        if self.orientation.is_reversed() {
            forward.chars().rev().collect()
        } else {
            forward
        }
    }

    /// Whether a sorted selection covers exactly this word's cells
    pub fn matches(&self, sorted_trace: &[Position]) -> bool {
        self.cells == sorted_trace
    }
}

/// Wire form of a [`Placement`], checked before it becomes one
#[derive(Deserialize)]
struct PlacementRecord {
    word: String,
    orientation: Orientation,
    cells: Vec<Position>,
}

impl TryFrom<PlacementRecord> for Placement {
    type Error = PuzzleError;

    fn try_from(record: PlacementRecord) -> Result<Self> {
        let PlacementRecord {
            word,
            orientation,
            cells,
        } = record;
        if word.is_empty() {
            return Err(PuzzleError::EmptyWord);
        }
        if let Some(letter) = word.chars().find(|&c| !has_tile(c)) {
            return Err(PuzzleError::UnmappedLetter { word, letter });
        }

        let len = word.chars().count();
        let contiguous = cells.len() == len
            && cells
                .iter()
                .enumerate()
                .all(|(i, &cell)| cell == orientation.step(cells[0], i));
        if !contiguous {
            return Err(PuzzleError::MalformedPlacement { word });
        }

        Ok(Self {
            word,
            orientation,
            cells,
        })
    }
}

/// Places words on a grid without overlap
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration.
    ///
    /// A configured seed makes the whole run reproducible.
    pub fn with_config(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(GeneratorConfig::default().seeded(seed))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The random stream, shared with the fill pass so one seed covers both
    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Place every word, in order, on the configured grid.
    ///
    /// The whole list is validated before anything is drawn. Each word gets
    /// one random orientation; colliding starts are redrawn up to
    /// `max_attempts` times. Earlier placements are never revisited.
    pub fn place_words<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Vec<Placement>> {
        let dimension = self.config.dimension;
        validate_word_list(words, dimension)?;

        let mut occupied: HashSet<Position> = HashSet::new();
        let mut placements = Vec::with_capacity(words.len());

        for word in words {
            let word = word.as_ref();
            let orientation = Orientation::ALL[self.rng.gen_range(0..Orientation::ALL.len())];
            let placement = self.place_word(word, orientation, &occupied)?;

            occupied.extend(placement.cells().iter().copied());
            placements.push(placement);
        }

        Ok(placements)
    }

    fn place_word(
        &mut self,
        word: &str,
        orientation: Orientation,
        occupied: &HashSet<Position>,
    ) -> Result<Placement> {
        let len = word.chars().count();

        for attempt in 1..=self.config.max_attempts {
            let start = self.random_start(orientation, len);
            let candidate = Placement::spanning(word, orientation, start, len);

            if candidate.cells().iter().all(|cell| !occupied.contains(cell)) {
                tracing::debug!(
                    word,
                    %orientation,
                    %start,
                    attempt,
                    "Placed word"
                );
                return Ok(candidate);
            }
        }

        tracing::warn!(word, attempts = self.config.max_attempts, "Ran out of placement attempts");
        Err(PuzzleError::PlacementInfeasible {
            word: word.to_string(),
            attempts: self.config.max_attempts,
        })
    }

    /// Random first cell for a span of `len` along the orientation's axis
    fn random_start(&mut self, orientation: Orientation, len: usize) -> Position {
        let dimension = self.config.dimension;
        let across = self.rng.gen_range(0..dimension);
        let along = self.rng.gen_range(0..=dimension - len);

        if orientation.is_horizontal() {
            Position::new(along, across)
        } else {
            Position::new(across, along)
        }
    }
}

/// Reject grids with no cells or more than [`MAX_DIMENSION`] per side
pub(crate) fn check_dimension(dimension: usize) -> Result<()> {
    if dimension == 0 {
        return Err(PuzzleError::InvalidDimension);
    }
    if dimension > MAX_DIMENSION {
        return Err(PuzzleError::DimensionTooLarge {
            dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

fn validate_word(word: &str, dimension: usize) -> Result<()> {
    check_dimension(dimension)?;
    if word.is_empty() {
        return Err(PuzzleError::EmptyWord);
    }
    if let Some(letter) = word.chars().find(|&c| !has_tile(c)) {
        return Err(PuzzleError::UnmappedLetter {
            word: word.to_string(),
            letter,
        });
    }
    let len = word.chars().count();
    if len > dimension {
        return Err(PuzzleError::WordTooLong {
            word: word.to_string(),
            len,
            dimension,
        });
    }
    Ok(())
}

/// Reject lists that can never be placed on a `dimension` grid
pub fn validate_word_list<S: AsRef<str>>(words: &[S], dimension: usize) -> Result<()> {
    check_dimension(dimension)?;
    for word in words {
        validate_word(word.as_ref(), dimension)?;
    }

    let letters: usize = words.iter().map(|w| w.as_ref().chars().count()).sum();
    let cells = dimension * dimension;
    if letters > cells {
        return Err(PuzzleError::GridOverfilled { letters, cells });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, WordBank};

    fn generator(dimension: usize, seed: u64) -> Generator {
        Generator::with_config(GeneratorConfig::with_dimension(dimension).seeded(seed))
    }

    fn assert_valid_layout(placements: &[Placement], dimension: usize) {
        let mut seen = HashSet::new();
        for placement in placements {
            let cells = placement.cells();
            assert_eq!(cells.len(), placement.word().len());

            for cell in cells {
                assert!(cell.in_bounds(dimension), "{} out of bounds", cell);
                assert!(seen.insert(*cell), "{} used twice", cell);
            }

            for pair in cells.windows(2) {
                if placement.orientation().is_horizontal() {
                    assert_eq!(pair[1].x, pair[0].x + 1);
                    assert_eq!(pair[1].y, pair[0].y);
                } else {
                    assert_eq!(pair[1].y, pair[0].y + 1);
                    assert_eq!(pair[1].x, pair[0].x);
                }
            }
        }
    }

    #[test]
    fn test_forced_cat_placement() {
        let cat = Placement::new("CAT", Orientation::LeftToRight, Position::new(0, 1), 4).unwrap();
        assert_eq!(
            cat.cells(),
            &[Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)]
        );
        let letters: Vec<_> = cat.letters().collect();
        assert_eq!(
            letters,
            vec![
                (Position::new(0, 1), 'C'),
                (Position::new(1, 1), 'A'),
                (Position::new(2, 1), 'T'),
            ]
        );
    }

    #[test]
    fn test_reversed_words_read_backwards_on_grid() {
        let cat = Placement::new("CAT", Orientation::RightToLeft, Position::new(1, 0), 4).unwrap();
        let letters: String = cat.letters().map(|(_, c)| c).collect();
        assert_eq!(letters, "TAC");
        assert_eq!(cat.read_back(), "CAT");

        let dog = Placement::new("DOG", Orientation::BottomToTop, Position::new(3, 1), 4).unwrap();
        assert_eq!(dog.cells()[0], Position::new(3, 1));
        assert_eq!(dog.letters().next(), Some((Position::new(3, 1), 'G')));
        assert_eq!(dog.read_back(), "DOG");
    }

    #[test]
    fn test_forced_placement_out_of_bounds() {
        assert!(matches!(
            Placement::new("CAT", Orientation::LeftToRight, Position::new(2, 0), 4),
            Err(PuzzleError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Placement::new("CAT", Orientation::TopToBottom, Position::new(0, 4), 4),
            Err(PuzzleError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Placement::new("HOUSE", Orientation::TopToBottom, Position::new(0, 0), 4),
            Err(PuzzleError::WordTooLong { len: 5, .. })
        ));
    }

    #[test]
    fn test_generated_layout_is_valid() {
        let words = WordBank::builtin().unwrap().load(Difficulty::Medium).unwrap();
        for seed in 0..20 {
            let placements = generator(12, seed).place_words(&words).unwrap();
            assert_eq!(placements.len(), words.len());
            assert_valid_layout(&placements, 12);
        }
    }

    #[test]
    fn test_round_trip_letters() {
        let words = WordBank::builtin().unwrap().load(Difficulty::Hard).unwrap();
        let placements = generator(12, 3).place_words(&words).unwrap();
        for (placement, word) in placements.iter().zip(&words) {
            assert_eq!(placement.word(), word);
            assert_eq!(&placement.read_back(), word);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let words = ["APPLE", "RIVER", "CASTLE", "WINTER"];
        let first = generator(8, 99).place_words(&words).unwrap();
        let second = generator(8, 99).place_words(&words).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_word_as_long_as_grid() {
        let placements = generator(5, 1).place_words(&["HELLO"]).unwrap();
        let cells = placements[0].cells();
        if placements[0].orientation().is_horizontal() {
            assert_eq!(cells[0].x, 0);
        } else {
            assert_eq!(cells[0].y, 0);
        }
    }

    #[test]
    fn test_word_too_long() {
        let err = generator(4, 1).place_words(&["CAT", "ELEPHANT"]).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::WordTooLong { len: 8, dimension: 4, .. }
        ));
    }

    #[test]
    fn test_overfilled_grid_fails_fast() {
        let words = ["ABCD", "EFGH", "IJKL", "MNOP", "Q"];
        let err = generator(4, 1).place_words(&words).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::GridOverfilled { letters: 17, cells: 16 }
        ));
    }

    #[test]
    fn test_unmapped_letter() {
        let err = generator(6, 1).place_words(&["CAT", "DO G"]).unwrap_err();
        assert!(matches!(err, PuzzleError::UnmappedLetter { letter: ' ', .. }));

        let err = generator(6, 1).place_words(&["cat"]).unwrap_err();
        assert!(matches!(err, PuzzleError::UnmappedLetter { letter: 'c', .. }));
    }

    #[test]
    fn test_empty_word_and_zero_dimension() {
        assert!(matches!(
            generator(4, 1).place_words(&["CAT", ""]),
            Err(PuzzleError::EmptyWord)
        ));
        assert!(matches!(
            generator(0, 1).place_words(&["CAT"]),
            Err(PuzzleError::InvalidDimension)
        ));
    }

    #[test]
    fn test_no_attempts_left() {
        let mut config = GeneratorConfig::with_dimension(5).seeded(1);
        config.max_attempts = 0;
        let err = Generator::with_config(config).place_words(&["CAT"]).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::PlacementInfeasible { attempts: 0, .. }
        ));
    }

    #[test]
    fn test_contention_is_bounded() {
        // Three full-width words only fit a 3x3 grid when they share an axis;
        // a row and a column always cross, so mixed axes must give up.
        let mut config = GeneratorConfig::with_dimension(3);
        config.max_attempts = 20;

        let mut gave_up = 0;
        for seed in 0..20 {
            let mut gen = Generator::with_config(config.clone().seeded(seed));
            match gen.place_words(&["ABC", "DEF", "GHI"]) {
                Ok(placements) => assert_valid_layout(&placements, 3),
                Err(PuzzleError::PlacementInfeasible { attempts, .. }) => {
                    assert_eq!(attempts, 20);
                    gave_up += 1;
                }
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
        assert!(gave_up > 0);
    }
}
