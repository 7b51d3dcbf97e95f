// seeds.rs - Literal seed patterns and deterministic random fill

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::GridError;
use crate::grid::Grid;

/// A named literal pattern on its own `height` x `width` canvas.
pub struct Seed {
    pub name: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: &'static [(usize, usize)],
}

impl Seed {
    /// The seed as a standalone grid of its own size.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::from_alive_cells(self.height, self.width, self.cells)
    }
}

/// Period-2 oscillator, vertical phase.
pub const BLINKER: Seed = Seed {
    name: "Blinker",
    height: 3,
    width: 3,
    cells: &[(0, 1), (1, 1), (2, 1)],
};

/// `BLINKER` after one step, horizontal phase.
pub const BLINKER_NEXT: Seed = Seed {
    name: "Blinker (horizontal)",
    height: 3,
    width: 3,
    cells: &[(1, 0), (1, 1), (1, 2)],
};

/// Three-cell sample with a diagonal tail. On its own 3x3 grid it becomes
/// the pair (1,1), (1,2) after one step and dies out on the next.
pub const SAMPLE: Seed = Seed {
    name: "Sample",
    height: 3,
    width: 3,
    cells: &[(0, 2), (1, 1), (2, 1)],
};

/// Stamp the seed's alive cells into `grid` with its top-left at `(top, left)`.
///
/// Cells already alive in `grid` stay alive. If any seed cell would land
/// outside the grid nothing is written.
pub fn place(grid: &mut Grid, seed: &Seed, top: usize, left: usize) -> Result<(), GridError> {
    let (height, width) = grid.dimensions();
    let fits = |start: usize, len: usize, limit: usize| start.checked_add(len).is_some_and(|end| end <= limit);
    if !fits(top, seed.height, height) || !fits(left, seed.width, width) {
        return Err(GridError::OutOfRange {
            row: top.saturating_add(seed.height.saturating_sub(1)),
            col: left.saturating_add(seed.width.saturating_sub(1)),
            height,
            width,
        });
    }

    for &(row, col) in seed.cells {
        let out_of_range = GridError::OutOfRange { row, col, height, width };
        let r = top.checked_add(row).ok_or(out_of_range)?;
        let c = left.checked_add(col).ok_or(out_of_range)?;
        grid.set_alive(r, c)?;
    }
    Ok(())
}

/// Fill a fresh grid with roughly one alive cell in three.
///
/// The same `(height, width, seed)` always produces the same grid.
pub fn random_fill(height: usize, width: usize, seed: u64) -> Result<Grid, GridError> {
    let mut grid = Grid::new_blank(height, width)?;

    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    for row in 0..height {
        for col in 0..width {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if (state >> 33) % 3 == 0 {
                grid.set_alive(row, col)?;
            }
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_has_three_cells() {
        let grid = BLINKER.build().unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.count_alive(), 3);
    }

    #[test]
    fn seed_names_label_each_fixture() {
        let names = [BLINKER.name, BLINKER_NEXT.name, SAMPLE.name];
        assert_eq!(names, ["Blinker", "Blinker (horizontal)", "Sample"]);
    }

    #[test]
    fn place_offsets_cells() {
        let mut grid = Grid::new_blank(5, 6).unwrap();
        place(&mut grid, &BLINKER_NEXT, 2, 3).unwrap();
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(3, 3), (3, 4), (3, 5)]);
    }

    #[test]
    fn place_rejects_overhang_without_writing() {
        let mut grid = Grid::new_blank(4, 4).unwrap();
        assert!(place(&mut grid, &BLINKER, 2, 0).is_err());
        assert!(place(&mut grid, &BLINKER, 0, 2).is_err());
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn place_rejects_offsets_that_overflow() {
        let mut grid = Grid::new_blank(4, 4).unwrap();
        assert_eq!(
            place(&mut grid, &BLINKER, usize::MAX, 0),
            Err(GridError::OutOfRange { row: usize::MAX, col: 2, height: 4, width: 4 })
        );
        assert!(place(&mut grid, &BLINKER, 0, usize::MAX).is_err());
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn random_fill_is_deterministic() {
        let a = random_fill(20, 30, 7).unwrap();
        let b = random_fill(20, 30, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), (20, 30));
    }

    #[test]
    fn random_fill_density_is_about_a_third() {
        let grid = random_fill(50, 50, 42).unwrap();
        let alive = grid.count_alive();
        assert!((500..1200).contains(&alive), "alive = {alive}");
    }

    #[test]
    fn random_fill_rejects_zero_size() {
        assert!(random_fill(0, 10, 1).is_err());
    }
}
