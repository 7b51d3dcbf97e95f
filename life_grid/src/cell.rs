// cell.rs - Cell value for a single grid position

use std::fmt;

/// Value of one cell. Position is implied by where it sits in a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Alive becomes Dead and Dead becomes Alive.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead  => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Alive => write!(f, "#"),
            Cell::Dead  => write!(f, "."),
        }
    }
}
