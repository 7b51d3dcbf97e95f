//! Property-based tests for grid editing and the transition step.

use life_grid::{Grid, neighbors_of, seeds, step};
use proptest::prelude::*;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12).prop_flat_map(|(h, w)| {
        proptest::collection::vec(any::<bool>(), h * w).prop_map(move |bits| {
            let alive: Vec<(usize, usize)> = bits
                .iter()
                .enumerate()
                .filter(|(_, b)| **b)
                .map(|(idx, _)| (idx / w, idx % w))
                .collect();
            Grid::from_alive_cells(h, w, &alive).unwrap()
        })
    })
}

proptest! {
    /// step keeps the grid's dimensions
    #[test]
    fn prop_step_preserves_dimensions(grid in arb_grid()) {
        prop_assert_eq!(step(&grid).dimensions(), grid.dimensions());
    }

    /// an all-dead grid is a fixed point
    #[test]
    fn prop_dead_grid_is_fixed_point(h in 1usize..40, w in 1usize..40) {
        let blank = Grid::new_blank(h, w).unwrap();
        let next = step(&blank);
        prop_assert_eq!(next.count_alive(), 0);
        prop_assert_eq!(next, blank);
    }

    /// toggle is an involution
    #[test]
    fn prop_toggle_twice_is_identity(grid in arb_grid(), r in 0usize..12, c in 0usize..12) {
        let (h, w) = grid.dimensions();
        let (r, c) = (r % h, c % w);
        let mut edited = grid.clone();
        edited.toggle(r, c).unwrap();
        prop_assert_ne!(&edited, &grid);
        edited.toggle(r, c).unwrap();
        prop_assert_eq!(edited, grid);
    }

    /// corners have 3 neighbors, edges 5, interior cells 8
    #[test]
    fn prop_neighbor_count_by_position(h in 3usize..15, w in 3usize..15) {
        let grid = Grid::new_blank(h, w).unwrap();
        for i in 0..h {
            for j in 0..w {
                let edges = usize::from(i == 0 || i == h - 1) + usize::from(j == 0 || j == w - 1);
                let expected = [8, 5, 3][edges];
                prop_assert_eq!(neighbors_of(&grid, i, j).unwrap().len(), expected);
            }
        }
    }

    /// count_alive matches the alive cell listing
    #[test]
    fn prop_count_alive_matches_alive_cells(grid in arb_grid()) {
        prop_assert_eq!(grid.count_alive(), grid.alive_cells().count());
    }

    /// the same seed always fills the same grid
    #[test]
    fn prop_random_fill_is_reproducible(h in 1usize..30, w in 1usize..30, seed: u64) {
        let a = seeds::random_fill(h, w, seed).unwrap();
        let b = seeds::random_fill(h, w, seed).unwrap();
        prop_assert_eq!(a, b);
    }
}
