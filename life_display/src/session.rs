// session.rs - Driver state: the current generation and tick timing

use std::time::{Duration, Instant};

use life_grid::{Grid, GridError, render, seeds, step};
use tracing::{debug, info, trace};

/// Holds the one live grid between frames.
///
/// Every edit goes through `&mut self`, so a toggle can never land in the
/// middle of a tick.
pub struct Session {
    grid: Grid,
    generation: u64,
    auto_ticking: bool,
    tick_interval: Duration,
    last_tick: Instant,
}

impl Session {
    pub fn new(height: usize, width: usize, tick_interval: Duration) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::new_blank(height, width)?, tick_interval))
    }

    pub fn with_grid(grid: Grid, tick_interval: Duration) -> Self {
        Self {
            grid,
            generation: 0,
            auto_ticking: false,
            tick_interval,
            last_tick: Instant::now(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive_count(&self) -> usize {
        self.grid.count_alive()
    }

    pub fn is_auto_ticking(&self) -> bool {
        self.auto_ticking
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval.max(Duration::from_millis(1));
    }

    /// Advance one generation, replacing the held grid.
    pub fn tick(&mut self) {
        self.grid = step(&self.grid);
        self.generation += 1;
        debug!(generation = self.generation, alive = self.grid.count_alive(), "tick");
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid.toggle(row, col)?;
        trace!(row, col, "toggled cell\n{}", render::to_table(&self.grid));
        Ok(())
    }

    /// Replace the grid with a blank one of the new size. Old cells are
    /// dropped. On error the current grid is kept.
    pub fn resize(&mut self, height: usize, width: usize) -> Result<(), GridError> {
        let grid = Grid::new_blank(height, width)?;
        info!(height, width, "resized grid");
        self.replace(grid);
        Ok(())
    }

    /// Blank grid of the current size with a blinker in the middle.
    pub fn seed_blinker(&mut self) -> Result<(), GridError> {
        let (height, width) = self.grid.dimensions();
        let mut grid = Grid::new_blank(height, width)?;
        let top = height.saturating_sub(seeds::BLINKER.height) / 2;
        let left = width.saturating_sub(seeds::BLINKER.width) / 2;
        seeds::place(&mut grid, &seeds::BLINKER, top, left)?;
        info!(seed = seeds::BLINKER.name, top, left, "seeded pattern");
        self.replace(grid);
        Ok(())
    }

    pub fn seed_random(&mut self, seed: u64) -> Result<(), GridError> {
        let (height, width) = self.grid.dimensions();
        let grid = seeds::random_fill(height, width, seed)?;
        info!(seed, alive = grid.count_alive(), "seeded random fill");
        self.replace(grid);
        Ok(())
    }

    pub fn set_auto_ticking(&mut self, on: bool, now: Instant) {
        if on && !self.auto_ticking {
            self.last_tick = now;
        }
        self.auto_ticking = on;
        debug!(auto_ticking = on, "auto tick");
    }

    pub fn toggle_auto_ticking(&mut self, now: Instant) {
        self.set_auto_ticking(!self.auto_ticking, now);
    }

    /// Run at most one tick if auto-ticking and the interval has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.auto_ticking || now.saturating_duration_since(self.last_tick) < self.tick_interval {
            return false;
        }
        self.tick();
        self.last_tick = now;
        true
    }

    /// Time left before `poll` would tick, or `None` when not auto-ticking.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.auto_ticking
            .then(|| self.tick_interval.saturating_sub(now.saturating_duration_since(self.last_tick)))
    }

    fn replace(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }
}
