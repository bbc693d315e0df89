use crate::alphabet::Alphabet;
use crate::error::{PuzzleError, Result};
use crate::generator::{check_dimension, Placement};
use crate::Position;
use rand::Rng;
use std::fmt;

/// Where a tile's letter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSource {
    /// Part of a hidden word
    Word,
    /// Random padding
    Filler,
}

/// A letter on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    letter: char,
    source: TileSource,
    cleared: bool,
}

impl Tile {
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn source(&self) -> TileSource {
        self.source
    }

    /// Whether the tile belonged to a word the player has found
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// The letter to draw, if the tile is still on the board
    pub fn visible(&self) -> Option<char> {
        if self.cleared {
            None
        } else {
            Some(self.letter)
        }
    }
}

/// The square board of letter tiles, stored row-major
#[derive(Debug, Clone)]
pub struct LetterGrid {
    dimension: usize,
    tiles: Vec<Tile>,
}

impl LetterGrid {
    /// Write every placement's letters, then pad the rest from `filler`.
    ///
    /// Padding walks cells in row-major order, so a seeded `rng` always yields
    /// the same board. Placements must already be disjoint and in bounds.
    pub fn build(
        dimension: usize,
        placements: &[Placement],
        filler: &Alphabet,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        check_dimension(dimension)?;
        if filler.is_empty() {
            return Err(PuzzleError::EmptyAlphabet);
        }

        let mut slots: Vec<Option<Tile>> = vec![None; dimension * dimension];

        for placement in placements {
            for (pos, letter) in placement.letters() {
                if !pos.in_bounds(dimension) {
                    return Err(PuzzleError::OutOfBounds {
                        word: placement.word().to_string(),
                        start: placement.cells()[0],
                    });
                }
                let slot = &mut slots[pos.y * dimension + pos.x];
                if slot.is_some() {
                    return Err(PuzzleError::Overlap {
                        word: placement.word().to_string(),
                        cell: pos,
                    });
                }
                *slot = Some(Tile {
                    letter,
                    source: TileSource::Word,
                    cleared: false,
                });
            }
        }

        let mut tiles = Vec::with_capacity(slots.len());
        for slot in slots {
            let tile = match slot {
                Some(tile) => tile,
                None => Tile {
                    letter: filler.pick(rng)?,
                    source: TileSource::Filler,
                    cleared: false,
                },
            };
            tiles.push(tile);
        }

        Ok(Self { dimension, tiles })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        if pos.in_bounds(self.dimension) {
            self.tiles.get(pos.y * self.dimension + pos.x)
        } else {
            None
        }
    }

    /// Letter at a position, cleared or not
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.tile(pos).map(Tile::letter)
    }

    /// Rows of tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.dimension)
    }

    /// Take a found word's tiles off the board
    pub fn clear(&mut self, cells: &[Position]) {
        for pos in cells {
            if pos.in_bounds(self.dimension) {
                self.tiles[pos.y * self.dimension + pos.x].cleared = true;
            }
        }
    }

    pub fn cleared_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.cleared).count()
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|tile| tile.visible().unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cat_on_4x4() -> Vec<Placement> {
        vec![Placement::new("CAT", Orientation::LeftToRight, Position::new(0, 1), 4).unwrap()]
    }

    #[test]
    fn test_word_letters_written() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = LetterGrid::build(4, &cat_on_4x4(), &Alphabet::full(), &mut rng).unwrap();

        assert_eq!(grid.letter(Position::new(0, 1)), Some('C'));
        assert_eq!(grid.letter(Position::new(1, 1)), Some('A'));
        assert_eq!(grid.letter(Position::new(2, 1)), Some('T'));
        assert_eq!(
            grid.tile(Position::new(1, 1)).unwrap().source(),
            TileSource::Word
        );
        assert_eq!(
            grid.tile(Position::new(3, 1)).unwrap().source(),
            TileSource::Filler
        );
        assert_eq!(grid.tile(Position::new(4, 0)), None);
    }

    #[test]
    fn test_filler_uses_configured_alphabet() {
        let mut rng = StdRng::seed_from_u64(9);
        let filler = Alphabet::from_letters("XY").unwrap();
        let grid = LetterGrid::build(4, &cat_on_4x4(), &filler, &mut rng).unwrap();

        let filler_letters: Vec<char> = grid
            .rows()
            .flatten()
            .filter(|t| t.source() == TileSource::Filler)
            .map(|t| t.letter())
            .collect();
        assert_eq!(filler_letters.len(), 13);
        assert!(filler_letters.iter().all(|&c| c == 'X' || c == 'Y'));
    }

    #[test]
    fn test_fill_is_deterministic_for_seed() {
        let build = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            LetterGrid::build(4, &cat_on_4x4(), &Alphabet::full(), &mut rng)
                .unwrap()
                .to_string()
        };
        assert_eq!(build(42), build(42));
    }

    #[test]
    fn test_overlap_rejected() {
        let mut placements = cat_on_4x4();
        placements.push(
            Placement::new("BAT", Orientation::TopToBottom, Position::new(1, 0), 4).unwrap(),
        );
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            LetterGrid::build(4, &placements, &Alphabet::full(), &mut rng),
            Err(PuzzleError::Overlap { cell, .. }) if cell == Position::new(1, 1)
        ));
    }

    #[test]
    fn test_clear_hides_tiles() {
        let mut rng = StdRng::seed_from_u64(1);
        let placements = cat_on_4x4();
        let mut grid = LetterGrid::build(4, &placements, &Alphabet::full(), &mut rng).unwrap();

        grid.clear(placements[0].cells());
        assert_eq!(grid.cleared_count(), 3);
        assert_eq!(grid.tile(Position::new(0, 1)).unwrap().visible(), None);
        assert_eq!(grid.letter(Position::new(0, 1)), Some('C'));

        let second_row = grid.to_string().lines().nth(1).unwrap().to_string();
        assert!(second_row.starts_with(". . ."));
    }
}
