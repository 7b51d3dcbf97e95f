// config.rs - Startup configuration for the display window

use std::time::Duration;

use clap::Parser;

pub const DEFAULT_ROWS: usize = 40;           // Initial grid height
pub const DEFAULT_COLS: usize = 40;           // Initial grid width
pub const DEFAULT_TICK_MS: u64 = 1000;        // Auto-tick interval
pub const DEFAULT_CELL_SIZE: f32 = 15.0;      // Cell edge in pixels
pub const CELL_SPACING: f32 = 0.5;            // Gap between cells in pixels
pub const MAX_DIMENSION: usize = 200;         // Upper bound offered by the size controls

/// Bounded Game of Life viewer.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Initial number of rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Initial number of columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Auto-tick interval in milliseconds
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Cell edge in pixels
    #[arg(long = "cell-size", default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// Start from a random fill with this seed instead of a blank grid
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_ms: DEFAULT_TICK_MS,
            cell_size: DEFAULT_CELL_SIZE,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parser_defaults() {
        let parsed = Args::try_parse_from(["life_display"]).unwrap();
        let defaults = Args::default();
        assert_eq!(parsed.rows, defaults.rows);
        assert_eq!(parsed.cols, defaults.cols);
        assert_eq!(parsed.tick_ms, defaults.tick_ms);
        assert_eq!(parsed.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "life_display", "--rows", "12", "--cols", "30", "--tick-ms", "250", "--seed", "9",
        ])
        .unwrap();
        assert_eq!((args.rows, args.cols), (12, 30));
        assert_eq!(args.tick_interval(), Duration::from_millis(250));
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let args = Args { tick_ms: 0, ..Args::default() };
        assert_eq!(args.tick_interval(), Duration::from_millis(1));
    }
}
