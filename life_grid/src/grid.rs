// grid.rs - Grid storage for one generation of the Game of Life

use crate::cell::Cell;
use crate::error::GridError;

/// A single generation: `height` rows of `width` cells, row-major, zero-based.
///
/// Cells live in one flat buffer of exactly `height * width` entries, so every
/// row always has the same length. A grid produced by [`step`](crate::step)
/// is a fresh value; [`Grid::toggle`] is the only in-place edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid of the given size. Zero in either dimension, or a cell
    /// count that does not fit in `usize`, is rejected.
    pub fn new_blank(height: usize, width: usize) -> Result<Self, GridError> {
        let len = height
            .checked_mul(width)
            .filter(|&len| len > 0)
            .ok_or(GridError::InvalidDimensions { height, width })?;
        Ok(Self {
            height,
            width,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Blank grid with the listed `(row, col)` positions set alive.
    pub fn from_alive_cells(
        height: usize,
        width: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new_blank(height, width)?;
        for &(row, col) in alive {
            let idx = grid.index(row, col)?;
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Parse text rows, `#` or `O` alive and anything else dead.
    ///
    /// Every row must have the same non-zero length.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new_blank(height, width)?;

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(GridError::InvalidDimensions { height, width: line.chars().count() });
            }
            for (col, ch) in line.chars().enumerate() {
                grid.cells[row * width + col] = Cell::from(matches!(ch, '#' | 'O'));
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Flip the cell at `(row, col)` in place. Used for manual edits only.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = self.cells[idx].toggled();
        Ok(())
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Coordinates of every alive cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    // Builds a grid from cells already laid out row-major; the engine uses
    // this after computing a whole generation.
    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self { height, width, cells }
    }

    // Unchecked read for callers that already bounds-checked.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    pub(crate) fn set_alive(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = Cell::Alive;
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if !self.contains(row, col) {
            return Err(GridError::OutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }
}
