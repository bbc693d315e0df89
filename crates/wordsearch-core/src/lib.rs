//! Word search engine
//!
//! Loads word lists by difficulty, hides the words on a square letter grid
//! in one of four orientations, pads the rest with filler letters, and turns
//! pointer drags into found words.
//!
//! ```
//! use wordsearch_core::{GeneratorConfig, InputEvent, Puzzle, SelectionOutcome};
//!
//! let config = GeneratorConfig::with_dimension(6).seeded(7);
//! let mut puzzle = Puzzle::generate(&["CAT", "DOG"], &config).unwrap();
//!
//! let cat = puzzle.remaining()[0].clone();
//! puzzle.handle_event(InputEvent::DragStart);
//! for pos in cat.cells() {
//!     puzzle.handle_event(InputEvent::CellEntered(*pos));
//! }
//! assert_eq!(puzzle.handle_event(InputEvent::DragEnd), SelectionOutcome::Found(cat));
//! ```

mod alphabet;
mod error;
mod generator;
mod grid;
mod puzzle;
mod selection;
mod types;
mod word_bank;

pub use alphabet::{has_tile, Alphabet};
pub use error::{PuzzleError, Result};
pub use generator::{validate_word_list, Generator, GeneratorConfig, Placement, MAX_DIMENSION};
pub use grid::{LetterGrid, Tile, TileSource};
pub use puzzle::{check_config, InputEvent, Puzzle, SelectionOutcome};
pub use selection::{CellSize, DragState, SelectionController, SelectionTrace};
pub use types::{dimension_for_cell_count, Difficulty, Orientation, Position};
pub use word_bank::WordBank;
