// main.rs - Window driver for the bounded Game of Life
// The grid rules live in life_grid; this crate only owns and paints the state.

use clap::Parser;
use eframe::egui;
use egui::Color32;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;    // CLI flags and defaults
mod session;   // Current grid and tick timing
mod ui;        // eframe::App impl

use config::Args;
use session::Session;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let app = match LifeApp::from_args(&args) {
        Ok(app) => app,
        Err(err) => {
            error!(%err, "invalid startup configuration");
            std::process::exit(2);
        }
    };
    info!(rows = args.rows, cols = args.cols, tick_ms = args.tick_ms, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

/// Window state. The session is the only owner of the live grid.
pub struct LifeApp {
    pub session: Session,
    pub cell_size: f32,
    pub pending_rows: usize,   // Size controls, applied on "Apply size"
    pub pending_cols: usize,
    pub random_seed: u64,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl LifeApp {
    fn from_args(args: &Args) -> Result<Self, life_grid::GridError> {
        let session = match args.seed {
            Some(seed) => Session::with_grid(
                life_grid::seeds::random_fill(args.rows, args.cols, seed)?,
                args.tick_interval(),
            ),
            None => Session::new(args.rows, args.cols, args.tick_interval())?,
        };

        Ok(Self {
            session,
            cell_size: args.cell_size.max(1.0),
            pending_rows: args.rows,
            pending_cols: args.cols,
            random_seed: args.seed.unwrap_or(0),
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
        })
    }
}
