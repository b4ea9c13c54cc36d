// ui.rs - egui view: reads the current snapshot, turns clicks into intents

use std::time::Duration;

use conway::{Intent, patterns};
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::app::GameOfLife;

const SPACING: f32 = 0.5;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance once per tick the step timer delivered since the last frame
        self.drive(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            ui.label(self.snapshot.status().message());

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.snapshot.generation));
                ui.separator();
                ui.label(format!("Population: {}", self.snapshot.population()));
            });

            ui.separator();

            // Controls
            ui.horizontal(|ui| {
                if ui.button("⏭ Next").clicked() {
                    self.dispatch(ctx, Intent::Step);
                }

                let button_text = if self.snapshot.is_paused { "▶ Start" } else { "⏸ Pause" };
                if ui.button(button_text).clicked() {
                    self.dispatch(ctx, Intent::SetPaused(None));
                }

                if ui.button("⏹ Reset").clicked() {
                    self.dispatch(ctx, Intent::Reset);
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern(ctx);
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern(ctx);
                }
            });

            ui.separator();

            // Speed and colours
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.step_interval().as_millis().max(1) as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec"))
                    .changed()
                {
                    let interval = Duration::from_millis((1000.0 / speed) as u64);
                    self.set_step_interval(ctx, interval);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();
            ui.label("Click cells to toggle them. Edges wrap around.");
            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| {
                self.draw_grid(ctx, ui);
            });
        });
    }
}

impl GameOfLife {
    fn draw_grid(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let (rows, cols) = self.dimensions();
        let pitch = self.cell_size + SPACING;
        let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::from_gray(238));

        for (row, col, alive) in self.snapshot.grid.iter() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                Vec2::splat(self.cell_size),
            );
            let color = if alive { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, 1.0, color);
            painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(200)));
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                let col = (offset.x / pitch).floor();
                let row = (offset.y / pitch).floor();
                if row >= 0.0 && col >= 0.0 {
                    self.dispatch(
                        ctx,
                        Intent::ToggleCell {
                            row: row as usize,
                            col: col as usize,
                        },
                    );
                }
            }
        }
    }
}
