//! Interactive 2D contagion viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation [`Model`] and
//! an editable [`Config`], and implements [`eframe::App`] to render and
//! control the simulation through an egui UI.

use contagion_core::{CellColor, Config, Model, types::CellId};
use eframe::App;
use glam::Vec2;
use log::warn;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Model`] built from a [`Config`].
/// - UI configuration (pan/zoom, timing).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input.
/// 2. If `running` is `true` and enough time has passed, call [`Viewer::step_once`].
/// 3. Render the bounds and cells.
///
/// ### Fields
/// - `model` - Current simulation state.
/// - `cfg` - Configuration edited in the side panel; applied on reset.
/// - `cfg_error` - Validation message from the last rejected config, if any.
///
/// - `rng` - Random number generator used to place cells on reset.
///
/// - `running` - Whether the simulation is currently auto-advancing.
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
///
/// - `last_new_ids` - Cells infected in the last simulation step (for highlighting).
///
/// - `step_interval` - Target time step between automatic simulation steps (seconds).
/// - `last_step_time` - Time stamp of the last step (egui time).
/// - `last_step_dt` - Actual time delta between the last two steps (for display only).
pub struct Viewer {
    model: Model,
    cfg: Config,
    cfg_error: Option<String>,

    rng: rand::rngs::ThreadRng,

    running: bool,
    zoom: f32,
    pan: egui::Vec2,

    last_new_ids: Vec<CellId>,

    step_interval: f64,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a new viewer running the simulation described by `cfg`.
    ///
    /// ### Errors
    /// Returns the core's validation error if `cfg` cannot build a model.
    pub fn new(cfg: Config) -> contagion_core::Result<Self> {
        let mut rng = rand::rng();
        let model = Self::build_model(&cfg, &mut rng)?;

        Ok(Self {
            model,
            cfg,
            cfg_error: None,
            rng,
            running: false,
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
            last_new_ids: Vec::new(),
            step_interval: 0.03,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        })
    }

    /// A seeded config is reproduced exactly; otherwise `rng` places the cells.
    fn build_model(cfg: &Config, rng: &mut rand::rngs::ThreadRng) -> contagion_core::Result<Model> {
        if cfg.seed.is_some() {
            Model::new(cfg)
        } else {
            Model::with_rng(cfg, rng)
        }
    }

    /// Rebuilds the model from the edited configuration.
    ///
    /// If the configuration is rejected, the current model is kept and the
    /// error is shown in the config panel. Auto-running stops either way.
    fn reset(&mut self) {
        self.running = false;
        self.last_new_ids.clear();
        match Self::build_model(&self.cfg, &mut self.rng) {
            Ok(model) => {
                self.model = model;
                self.cfg_error = None;
            }
            Err(e) => {
                warn!("config rejected: {e}");
                self.cfg_error = Some(e.to_string());
            }
        }
    }

    /// Advances the simulation by a single step.
    ///
    /// Newly infected cells are stored in `last_new_ids` so they can be
    /// highlighted in the next frame. Auto-running stops once the model
    /// reports completion.
    fn step_once(&mut self) {
        if self.model.is_complete() {
            self.running = false;
            return;
        }

        self.model.tick();
        self.last_new_ids = self.model.newly_infected().to_vec();

        if self.model.is_complete() {
            self.running = false;
        }
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to floating
    /// point rounding).
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    fn cell_color(color: CellColor) -> egui::Color32 {
        let [r, g, b] = color.rgb();
        egui::Color32::from_rgb(r, g, b)
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `u32` [`egui::DragValue`].
    fn labeled_drag_u32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut u32,
        range: std::ops::RangeInclusive<u32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_run = !self.model.is_complete();
                if ui
                    .add_enabled(
                        can_run,
                        egui::Button::new(if self.running { "⏸ Pause" } else { "▶ Run" }),
                    )
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("dt target = ")
                        .range(0.0..=1.0)
                        .speed(0.01),
                );

                if ui.add_enabled(can_run, egui::Button::new("Step")).clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (time, census, completion).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let census = self.model.census();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                if self.model.is_complete() {
                    ui.label("complete");
                }
                ui.label(format!("immune = {}", census.immune));
                ui.label(format!("infected = {}", census.infected));
                ui.label(format!("vulnerable = {}", census.vulnerable));
                ui.separator();
                ui.label(format!("t = {}", self.model.time));
            });
        });
    }

    /// Builds the right-hand configuration panel for simulation parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Population");
                Self::labeled_drag_usize(ui, "cells:", &mut self.cfg.population, 1..=5000, 1.0);
                Self::labeled_drag_usize(ui, "infected:", &mut self.cfg.infected, 0..=5000, 1.0);
                Self::labeled_drag_usize(ui, "immune:", &mut self.cfg.immune, 0..=5000, 1.0);

                ui.separator();
                ui.label("Motion");
                Self::labeled_drag_f32(ui, "speed:", &mut self.cfg.speed, 0.0..=50.0, 0.1);

                ui.separator();
                ui.label("Disease");
                Self::labeled_drag_f32(
                    ui,
                    "contact_radius:",
                    &mut self.cfg.contact_radius,
                    0.0..=200.0,
                    0.5,
                );
                Self::labeled_drag_u32(
                    ui,
                    "recovery_period:",
                    &mut self.cfg.recovery_period,
                    0..=10_000,
                    1.0,
                );

                ui.separator();
                if ui.button("Apply & reset").clicked() {
                    self.reset();
                }
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }

                if let Some(err) = &self.cfg_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }
            });
    }

    /// Builds the central panel where the bounds and cells are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(0.1, 10.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            // Draw bounds.
            let bounds = self.model.config().bounds;
            let corners = [
                Vec2::new(bounds.min.x, bounds.min.y),
                Vec2::new(bounds.max.x, bounds.min.y),
                Vec2::new(bounds.max.x, bounds.max.y),
                Vec2::new(bounds.min.x, bounds.max.y),
            ];
            let points: Vec<egui::Pos2> = corners
                .iter()
                .map(|&c| self.world_to_screen(c, rect))
                .collect();
            painter.add(egui::Shape::closed_line(
                points,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            ));

            // Draw cells (outlining the ones infected last step).
            let r = (self.model.config().contact_radius * 0.5 * self.zoom).max(2.0);
            for (i, cell) in self.model.cells().iter().enumerate() {
                let p = self.world_to_screen(cell.location.into(), rect);
                painter.circle_filled(p, r, Self::cell_color(cell.color()));
                if self.last_new_ids.contains(&i) {
                    painter.circle_stroke(p, r + 1.5, egui::Stroke::new(1.5, egui::Color32::YELLOW));
                }
            }

            // Auto-run simulation if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.step_interval {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
