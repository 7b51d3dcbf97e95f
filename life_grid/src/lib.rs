//! Bounded Conway's Game of Life.
//!
//! [`Grid`] holds one generation; [`step`] builds the next one from it
//! without touching the input. Neighborhoods stop at the grid edge: border
//! cells simply have fewer neighbors, nothing wraps around.
//!
//! ```
//! use life_grid::{seeds, step};
//!
//! let blinker = seeds::BLINKER.build().unwrap();
//! let next = step(&blinker);
//! assert_eq!(next, seeds::BLINKER_NEXT.build().unwrap());
//! assert_eq!(step(&next), blinker);
//! ```

pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod render;
pub mod seeds;

pub use cell::Cell;
pub use engine::{generations, live_neighbor_count, neighbors_of, next_value, step};
pub use error::GridError;
pub use grid::Grid;
