// error.rs - Failure kinds for grid construction and indexing

use thiserror::Error;

/// Errors raised by grid operations.
///
/// Both kinds are precondition violations: callers are expected to validate
/// sizes and coordinates up front rather than recover from these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {height}x{width}: both must be at least 1")]
    InvalidDimensions { height: usize, width: usize },

    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = GridError::InvalidDimensions { height: 0, width: 4 };
        assert_eq!(err.to_string(), "invalid grid dimensions 0x4: both must be at least 1");

        let err = GridError::OutOfRange { row: 3, col: 1, height: 3, width: 3 };
        assert_eq!(err.to_string(), "cell (3, 1) is outside the 3x3 grid");
    }
}
