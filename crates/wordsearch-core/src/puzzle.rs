use crate::alphabet::Alphabet;
use crate::error::{PuzzleError, Result};
use crate::generator::{check_dimension, Generator, GeneratorConfig, Placement};
use crate::grid::{LetterGrid, Tile};
use crate::selection::{CellSize, SelectionController, SelectionTrace};
use crate::{Difficulty, Position, WordBank};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Input the shell feeds to the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer button pressed
    DragStart,
    /// Pointer at a pixel offset from the grid's top-left corner
    PointerMoved { x: i32, y: i32 },
    /// Pointer over a cell, for shells that already know the cell
    CellEntered(Position),
    /// Pointer button released
    DragEnd,
}

/// What an input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing decided yet
    Tracking,
    /// The drag ended without selecting a remaining word
    Miss,
    /// A word was found and more remain
    Found(Placement),
    /// The last word was found
    Completed(Placement),
    /// The puzzle is already solved; input is ignored
    Finished,
}

/// A word search in play.
///
/// Owns the board, the words still hidden on it and the drag in progress.
/// Built once per game; nothing is regenerated during play.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: LetterGrid,
    active: Vec<Placement>,
    total_words: usize,
    occupied: HashSet<Position>,
    cell_size: CellSize,
    controller: SelectionController,
    completed: bool,
}

impl Puzzle {
    /// Place `words` and fill the board using one random stream
    pub fn generate<S: AsRef<str>>(words: &[S], config: &GeneratorConfig) -> Result<Self> {
        let mut generator = Generator::with_config(config.clone());
        let placements = generator.place_words(words)?;
        let grid = LetterGrid::build(
            config.dimension,
            &placements,
            &config.filler,
            generator.rng_mut(),
        )?;

        tracing::info!(
            words = placements.len(),
            dimension = config.dimension,
            seed = ?config.seed,
            "Generated puzzle"
        );
        Ok(Self::assemble(grid, placements))
    }

    /// Generate a puzzle from a word bank tier
    pub fn from_difficulty(
        bank: &WordBank,
        difficulty: Difficulty,
        config: &GeneratorConfig,
    ) -> Result<Self> {
        let words = bank.load(difficulty)?;
        tracing::debug!(%difficulty, count = words.len(), "Loaded words");
        Self::generate(&words, config)
    }

    /// Build a puzzle around placements chosen by the caller
    pub fn from_placements(
        dimension: usize,
        placements: Vec<Placement>,
        filler: &Alphabet,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = LetterGrid::build(dimension, &placements, filler, &mut rng)?;
        Ok(Self::assemble(grid, placements))
    }

    fn assemble(grid: LetterGrid, placements: Vec<Placement>) -> Self {
        let occupied = placements
            .iter()
            .flat_map(|p| p.cells().iter().copied())
            .collect();
        Self {
            grid,
            total_words: placements.len(),
            active: placements,
            occupied,
            cell_size: CellSize::default(),
            controller: SelectionController::new(),
            completed: false,
        }
    }

    /// Set how large a cell is in the shell's pixel units
    pub fn set_cell_size(&mut self, cell_size: CellSize) {
        self.cell_size = cell_size;
    }

    pub fn with_cell_size(mut self, width: u32, height: u32) -> Result<Self> {
        self.cell_size = CellSize::new(width, height)?;
        Ok(self)
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.grid.tile(pos)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.grid.rows()
    }

    /// Words not yet found, in placement order
    pub fn remaining_words(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(Placement::word)
    }

    pub fn remaining(&self) -> &[Placement] {
        &self.active
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn found_count(&self) -> usize {
        self.total_words - self.active.len()
    }

    /// Cells still held by hidden words
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.occupied.contains(&pos)
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// The drag in progress, for highlighting
    pub fn trace(&self) -> &SelectionTrace {
        self.controller.trace()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.state() == crate::DragState::Dragging
    }

    /// Drop the drag in progress without matching it
    pub fn cancel_drag(&mut self) {
        if self.controller.finish().is_some() {
            tracing::trace!("Drag cancelled");
        }
    }

    /// Advance the drag state machine by one input event
    pub fn handle_event(&mut self, event: InputEvent) -> SelectionOutcome {
        if self.completed {
            return SelectionOutcome::Finished;
        }

        let dimension = self.dimension();
        match event {
            InputEvent::DragStart => {
                self.controller.begin();
                SelectionOutcome::Tracking
            }
            InputEvent::PointerMoved { x, y } => {
                match self.cell_size.cell_at(x, y) {
                    Some(pos) => self.controller.sample(pos, dimension),
                    None => self.controller.sample_outside(),
                }
                SelectionOutcome::Tracking
            }
            InputEvent::CellEntered(pos) => {
                self.controller.sample(pos, dimension);
                SelectionOutcome::Tracking
            }
            InputEvent::DragEnd => match self.controller.finish() {
                Some(trace) => self.resolve(&trace),
                None => SelectionOutcome::Tracking,
            },
        }
    }

    /// Match a finished trace against the remaining words
    pub fn resolve(&mut self, trace: &SelectionTrace) -> SelectionOutcome {
        if self.completed {
            return SelectionOutcome::Finished;
        }
        if trace.is_empty() || trace.has_strayed() {
            tracing::trace!(cells = trace.cells().len(), strayed = trace.has_strayed(), "Selection missed");
            return SelectionOutcome::Miss;
        }

        let selected = trace.canonical();
        let Some(index) = self.active.iter().position(|p| p.matches(&selected)) else {
            tracing::trace!(cells = selected.len(), "Selection missed");
            return SelectionOutcome::Miss;
        };

        let found = self.active.remove(index);
        for cell in found.cells() {
            self.occupied.remove(cell);
        }
        self.grid.clear(found.cells());
        tracing::debug!(
            word = found.word(),
            remaining = self.active.len(),
            "Word found"
        );

        if self.active.is_empty() {
            self.completed = true;
            tracing::info!(words = self.total_words, "Puzzle complete");
            SelectionOutcome::Completed(found)
        } else {
            SelectionOutcome::Found(found)
        }
    }
}

/// Rejects configurations the shell cannot draw or the engine cannot fill
pub fn check_config(config: &GeneratorConfig) -> Result<()> {
    check_dimension(config.dimension)?;
    if config.filler.is_empty() {
        return Err(PuzzleError::EmptyAlphabet);
    }
    Ok(())
}
