// engine.rs - Next-generation rule over bounded (non-wrapping) neighborhoods

use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::Grid;

// Neighbor offsets in enumeration order: N, NW, NE, S, SW, SE, W, E
const OFFSETS: [(isize, isize); 8] = [
    (-1,  0), (-1, -1), (-1,  1),
    ( 1,  0), ( 1, -1), ( 1,  1),
    ( 0, -1), ( 0,  1),
];

/// Values of every neighbor of `(row, col)` that lies inside the grid.
///
/// Order is N, NW, NE, S, SW, SE, W, E with missing positions skipped, so a
/// corner yields 3 values, an edge 5 and an interior cell 8. Nothing wraps
/// around the border.
pub fn neighbors_of(grid: &Grid, row: usize, col: usize) -> Result<Vec<Cell>, GridError> {
    grid.get(row, col)?;
    Ok(neighbors(grid, row, col).collect())
}

/// Number of alive neighbors of `(row, col)`.
pub fn live_neighbor_count(grid: &Grid, row: usize, col: usize) -> Result<usize, GridError> {
    grid.get(row, col)?;
    Ok(neighbors(grid, row, col).filter(|c| c.is_alive()).count())
}

/// Conway's rule: survive on 2 or 3 alive neighbors, birth on exactly 3.
pub fn next_value(current: Cell, neighbors: &[Cell]) -> Cell {
    let count = neighbors.iter().filter(|c| c.is_alive()).count();
    apply_rule(current, count)
}

/// Produce the next generation. The input is read-only, so every cell is
/// computed from the same generation.
pub fn step(grid: &Grid) -> Grid {
    let (height, width) = grid.dimensions();
    let mut cells = Vec::with_capacity(height * width);

    for row in 0..height {
        for col in 0..width {
            let count = neighbors(grid, row, col).filter(|c| c.is_alive()).count();
            cells.push(apply_rule(grid.at(row, col), count));
        }
    }
    Grid::from_cells(height, width, cells)
}

/// `seed`, `step(seed)`, `step(step(seed))`, ... without end.
pub fn generations(seed: Grid) -> impl Iterator<Item = Grid> {
    std::iter::successors(Some(seed), |g| Some(step(g)))
}

fn apply_rule(current: Cell, count: usize) -> Cell {
    match (current, count) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,  // Survival
        (Cell::Dead, 3)                      => Cell::Alive,  // Birth
        _                                    => Cell::Dead,   // Death or stays dead
    }
}

// Caller guarantees (row, col) is in range.
fn neighbors(grid: &Grid, row: usize, col: usize) -> impl Iterator<Item = Cell> + '_ {
    OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        grid.contains(r, c).then(|| grid.at(r, c))
    })
}
