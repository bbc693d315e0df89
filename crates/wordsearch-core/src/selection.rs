use crate::error::{PuzzleError, Result};
use crate::Position;

/// On-screen size of one grid cell, in the shell's pixel units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
        }
    }
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PuzzleError::InvalidCellSize);
        }
        Ok(Self { width, height })
    }

    /// Cell under a pixel offset from the grid's top-left corner.
    ///
    /// Returns `None` above or left of the grid. Cells past the far edges are
    /// returned as-is; callers check them against the grid dimension.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Position> {
        if x < 0 || y < 0 {
            return None;
        }
        Some(Position::new(
            x as usize / self.width as usize,
            y as usize / self.height as usize,
        ))
    }
}

/// Phase of the drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Cells visited during one drag, in the order first visited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTrace {
    cells: Vec<Position>,
    strayed: bool,
}

impl SelectionTrace {
    /// Add a cell unless it is already in the trace
    pub fn push(&mut self, pos: Position) {
        if !self.cells.contains(&pos) {
            self.cells.push(pos);
        }
    }

    /// Record that the pointer left the grid
    pub fn stray(&mut self) {
        self.strayed = true;
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn has_strayed(&self) -> bool {
        self.strayed
    }

    /// Cells sorted ascending, the form matched against placements
    pub fn canonical(&self) -> Vec<Position> {
        let mut sorted = self.cells.clone();
        sorted.sort();
        sorted
    }
}

/// Turns pointer samples into a selection trace
#[derive(Debug, Clone)]
pub struct SelectionController {
    state: DragState,
    trace: SelectionTrace,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            trace: SelectionTrace::default(),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn trace(&self) -> &SelectionTrace {
        &self.trace
    }

    /// Start a new gesture, dropping anything left from the last one
    pub fn begin(&mut self) {
        self.state = DragState::Dragging;
        self.trace = SelectionTrace::default();
    }

    /// Feed the cell under the pointer. Ignored while idle.
    pub fn sample(&mut self, pos: Position, dimension: usize) {
        if self.state != DragState::Dragging {
            return;
        }
        if pos.in_bounds(dimension) {
            self.trace.push(pos);
        } else {
            self.trace.stray();
        }
    }

    /// Feed a point that is off the grid entirely
    pub fn sample_outside(&mut self) {
        if self.state == DragState::Dragging {
            self.trace.stray();
        }
    }

    /// End the gesture and hand back what was selected.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn finish(&mut self) -> Option<SelectionTrace> {
        if self.state != DragState::Dragging {
            return None;
        }
        self.state = DragState::Idle;
        Some(std::mem::take(&mut self.trace))
    }
}
