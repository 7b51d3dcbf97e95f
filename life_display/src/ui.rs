// ui.rs - egui front end: controls, grid painting and click-to-toggle

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use life_grid::seeds;
use tracing::warn;

use crate::LifeApp;
use crate::config::{CELL_SPACING, MAX_DIMENSION};

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.poll(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("⏭ Tick").clicked() {
                    self.session.tick();
                }

                let auto_text = if self.session.is_auto_ticking() { "⏸ Stop" } else { "▶ Auto tick" };
                if ui.button(auto_text).clicked() {
                    self.session.toggle_auto_ticking(Instant::now());
                }

                ui.separator();

                if ui.button(seeds::BLINKER.name).clicked() {
                    self.session.set_auto_ticking(false, now);
                    if let Err(err) = self.session.seed_blinker() {
                        warn!(%err, "blinker does not fit");
                    }
                }

                if ui.button("🎲 Random").clicked() {
                    self.session.set_auto_ticking(false, now);
                    self.random_seed = self.random_seed.wrapping_add(1);
                    if let Err(err) = self.session.seed_random(self.random_seed) {
                        warn!(%err, "random fill rejected");
                    }
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.generation()));
            });

            ui.separator();

            // Speed, size and colours
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.session.tick_interval().as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.2..=30.0).suffix(" gen/sec")).changed() {
                    self.session.set_tick_interval(Duration::from_millis((1000.0 / speed) as u64));
                }

                ui.separator();

                ui.label("Rows:");
                ui.add(egui::DragValue::new(&mut self.pending_rows).clamp_range(1..=MAX_DIMENSION));
                ui.label("Cols:");
                ui.add(egui::DragValue::new(&mut self.pending_cols).clamp_range(1..=MAX_DIMENSION));
                if ui.button("Apply size").clicked() {
                    self.session.set_auto_ticking(false, now);
                    if let Err(err) = self.session.resize(self.pending_rows, self.pending_cols) {
                        warn!(%err, "resize rejected");
                    }
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Tick steps once; Auto tick keeps stepping.");

            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| {
                self.draw_grid(ui);
            });

            ui.separator();

            let (rows, cols) = self.session.grid().dimensions();
            let total = rows * cols;
            let alive = self.session.alive_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {alive}"));
                ui.label(format!("Dead cells: {}", total - alive));
                ui.label(format!("Population: {:.1}%", alive as f32 / total as f32 * 100.0));
            });
        });

        // Wake up in time for the next auto tick
        if let Some(wait) = self.session.until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl LifeApp {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (rows, cols) = self.session.grid().dimensions();
        let pitch = self.cell_size + CELL_SPACING;
        let total_size = Vec2::new(pitch * cols as f32 - CELL_SPACING, pitch * rows as f32 - CELL_SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::BLACK);

        for (row, cells) in self.session.grid().rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let rect = cell_rect(origin, row, col, self.cell_size);
                let color = if cell.is_alive() { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        if response.clicked() {
            let hit = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(origin, pos, self.cell_size, (rows, cols)));
            if let Some((row, col)) = hit {
                if let Err(err) = self.session.toggle(row, col) {
                    warn!(%err, "toggle rejected");
                }
            }
        }
    }
}

/// Screen rectangle of cell `(row, col)`, derived from its index on demand.
fn cell_rect(origin: Pos2, row: usize, col: usize, cell_size: f32) -> Rect {
    let pitch = cell_size + CELL_SPACING;
    Rect::from_min_size(
        origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
        Vec2::splat(cell_size),
    )
}

/// Cell under `pos`, or `None` for positions outside the grid or in the gaps.
fn cell_at(origin: Pos2, pos: Pos2, cell_size: f32, (rows, cols): (usize, usize)) -> Option<(usize, usize)> {
    let pitch = cell_size + CELL_SPACING;
    let local = pos - origin;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }

    let col = (local.x / pitch).floor();
    let row = (local.y / pitch).floor();
    if local.x - col * pitch > cell_size || local.y - row * pitch > cell_size {
        return None;
    }

    let (row, col) = (row as usize, col as usize);
    (row < rows && col < cols).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Pos2 = Pos2::new(10.0, 20.0);

    #[test]
    fn click_maps_to_cell() {
        // pitch is 10.5 with 10px cells
        assert_eq!(cell_at(ORIGIN, Pos2::new(10.0, 20.0), 10.0, (3, 3)), Some((0, 0)));
        assert_eq!(cell_at(ORIGIN, Pos2::new(25.0, 45.0), 10.0, (3, 3)), Some((2, 1)));
    }

    #[test]
    fn clicks_outside_are_ignored() {
        assert_eq!(cell_at(ORIGIN, Pos2::new(5.0, 25.0), 10.0, (3, 3)), None);
        assert_eq!(cell_at(ORIGIN, Pos2::new(50.0, 25.0), 10.0, (3, 3)), None);
        // in the gap between column 0 and 1
        assert_eq!(cell_at(ORIGIN, Pos2::new(20.25, 25.0), 10.0, (3, 3)), None);
    }

    #[test]
    fn rect_and_hit_test_agree() {
        let rect = cell_rect(ORIGIN, 2, 1, 10.0);
        assert_eq!(cell_at(ORIGIN, rect.center(), 10.0, (3, 3)), Some((2, 1)));
    }
}
