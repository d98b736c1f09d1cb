//! Interactive bubble sort animation built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the sorting state
//! (bar array, sorter, configuration) and implements [`eframe::App`]
//! to render the bars and drive the algorithm from keyboard and UI input.

use eframe::App;
use rand::rng;
use sort_core::{bars::BarArray, config::Config, sorter::BubbleSorter};

/// Main application state for the bubble sort viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`BarArray`], [`BubbleSorter`], [`Config`].
/// - Timing state for auto-play.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle keyboard input (step, toggle auto-play).
/// 2. If `running` is `true` and enough time has passed, call
///    [`Viewer::step_once`].
/// 3. Render the bars, highlighting the pair under comparison.
///
/// ### Fields
/// - `bars` - The array of bar heights being sorted.
/// - `sorter` - Cursor, pass bookkeeping, and completion state.
/// - `cfg` - Generation parameters (bar count, value range).
///
/// - `rng` - Random number generator used for shuffling.
///
/// - `running` - Whether the sort is currently auto-advancing.
///
/// - `step_interval` - Target time between automatic steps (seconds).
/// - `last_step_time` - Time stamp of the last step (egui time).
/// - `last_step_dt` - Actual time delta between the last two steps
///   (for display only).
pub struct Viewer {
    bars: BarArray,
    sorter: BubbleSorter,
    cfg: Config,

    rng: rand::rngs::ThreadRng,

    running: bool,

    step_interval: f64,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a new viewer with a freshly shuffled bar array.
    ///
    /// The default setup uses [`Config::default`] (24 bars, values in
    /// `[0, 256)`) and a 25 Hz auto-play cadence.
    pub fn new() -> Self {
        let mut rng = rng();
        let cfg = Config::default();
        let bars = BarArray::random(cfg.bar_count, cfg.max_value, &mut rng);

        Self {
            bars,
            sorter: BubbleSorter::new(),
            cfg,
            rng,
            running: false,
            step_interval: 1.0 / 25.0,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Regenerates the bar array from the current configuration and
    /// restarts the sorter.
    ///
    /// Camera-independent state (`step_interval`) is kept; auto-play is
    /// stopped so the fresh array sits still until the user steps it.
    fn shuffle(&mut self) {
        self.bars = BarArray::random(self.cfg.bar_count, self.cfg.max_value, &mut self.rng);
        self.sorter.reset();
        self.running = false;
        log::debug!("shuffled {} bars", self.bars.len());
    }

    /// Advances the sort by a single comparison.
    ///
    /// When the sorter reports completion, auto-play is switched off so
    /// the finished gradient stays on screen.
    fn step_once(&mut self) {
        self.sorter.step(&mut self.bars);
        if self.sorter.is_completed() {
            self.running = false;
        }
    }

    /// Computes the screen-space rectangle for bar `i` inside `rect`.
    ///
    /// Bars split the panel width evenly and are anchored to the bottom
    /// edge, with height proportional to `value / cfg.max_value`.
    ///
    /// ### Parameters
    /// - `i` - Index of the bar.
    /// - `rect` - Screen-space rectangle representing the drawing area.
    ///
    /// ### Returns
    /// The egui rectangle to fill for this bar.
    fn bar_rect(&self, i: usize, rect: egui::Rect) -> egui::Rect {
        let width = rect.width() / self.bars.len() as f32;
        let height = rect.height() * self.bars.values[i] as f32 / self.cfg.max_value as f32;
        egui::Rect::from_min_size(
            egui::pos2(rect.left() + width * i as f32, rect.bottom() - height),
            egui::vec2(width, height),
        )
    }

    /// Picks the fill color for bar `i`.
    ///
    /// While sorting, the compared pair is tinted red/blue and everything
    /// else is white. Once completed, bars sweep through the hue circle
    /// by index.
    fn bar_color(&self, i: usize) -> egui::Color32 {
        if self.sorter.is_completed() {
            let hue = i as f32 / self.bars.len() as f32;
            return egui::Color32::from(egui::ecolor::Hsva::new(hue, 1.0, 1.0, 1.0));
        }
        match self.sorter.highlight_pair() {
            Some((a, _)) if i == a => egui::Color32::RED,
            Some((_, b)) if i == b => egui::Color32::BLUE,
            _ => egui::Color32::WHITE,
        }
    }

    /// Handles the two keyboard bindings.
    ///
    /// - `Space` performs one manual step (ignored while auto-play runs).
    /// - `ArrowRight` toggles auto-play.
    /// - Once the sort has completed, either key reshuffles and restarts.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (step_key, toggle_key) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if self.sorter.is_completed() {
            if step_key || toggle_key {
                self.shuffle();
            }
            return;
        }

        if toggle_key {
            self.running = !self.running;
        }

        if step_key && !self.running {
            let now = ctx.input(|i| i.time);
            if self.last_step_time > 0.0 {
                self.last_step_dt = now - self.last_step_time;
            }
            self.step_once();
            self.last_step_time = now;
        }
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

    /// Builds the top panel UI (run controls, stepping, shuffling).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                    && !self.sorter.is_completed()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("dt target = ")
                        .range(0.01..=1.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() && !self.sorter.is_completed() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Shuffle").clicked() {
                    self.shuffle();
                }
            });
        });
    }

    /// Builds the bottom status bar (time step, counters, sort state).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("comparisons = {}", self.sorter.comparisons));
                ui.label(format!("swaps = {}", self.sorter.swaps));
                ui.label(format!("passes = {}", self.sorter.passes));
                ui.separator();
                ui.label(if self.sorter.is_completed() {
                    "sorted"
                } else {
                    "sorting"
                });
            });
        });
    }

    /// Builds the right-hand configuration panel for generation parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Array (applies on shuffle)");
                Self::labeled_drag_usize(ui, "bar_count:", &mut self.cfg.bar_count, 2..=256, 1.0);
                Self::labeled_drag_u32(ui, "max_value:", &mut self.cfg.max_value, 2..=4096, 8.0);

                ui.separator();
                ui.label("Keys");
                ui.label("Space: one step");
                ui.label("→: toggle auto-play");

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }
            });
    }

    /// Builds the central panel where the bars are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::DARK_GRAY);

            for i in 0..self.bars.len() {
                painter.rect_filled(
                    self.bar_rect(i, rect),
                    egui::CornerRadius::ZERO,
                    self.bar_color(i),
                );
            }

            // Auto-run the sort if requested.
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
    ///
    /// This method:
    /// - Applies the keyboard bindings.
    /// - Renders the top control bar and status bar.
    /// - Renders the config side panel.
    /// - Draws the central bar view and advances auto-play.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sort_core::bars::BarArray;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(600.0, 300.0))
    }

    #[test]
    fn bar_rects_split_the_panel_and_anchor_to_the_bottom() {
        let mut viewer = Viewer::new();
        viewer.bars = BarArray::from_values(vec![0, 128, 256]);
        viewer.cfg.max_value = 256;
        let rect = test_rect();

        let eps = 1e-4;

        for i in 0..3 {
            let r = viewer.bar_rect(i, rect);
            assert!((r.width() - 200.0).abs() < eps);
            assert!((r.left() - 200.0 * i as f32).abs() < eps);
            assert!((r.bottom() - rect.bottom()).abs() < eps);
        }

        // Heights scale with value / max_value.
        assert!((viewer.bar_rect(0, rect).height() - 0.0).abs() < eps);
        assert!((viewer.bar_rect(1, rect).height() - 150.0).abs() < eps);
        assert!((viewer.bar_rect(2, rect).height() - 300.0).abs() < eps);
    }

    #[test]
    fn bar_color_highlights_the_compared_pair() {
        let mut viewer = Viewer::new();
        viewer.bars = BarArray::from_values(vec![3, 1, 2]);
        viewer.sorter.reset();

        assert_eq!(viewer.bar_color(0), egui::Color32::RED);
        assert_eq!(viewer.bar_color(1), egui::Color32::BLUE);
        assert_eq!(viewer.bar_color(2), egui::Color32::WHITE);
    }

    #[test]
    fn completed_sort_uses_the_hue_gradient() {
        let mut viewer = Viewer::new();
        viewer.bars = BarArray::from_values(vec![1, 2]);
        viewer.sorter.reset();

        viewer.step_once();
        assert!(viewer.sorter.is_completed());

        // Hue 0 at index 0 is pure red; no bar should be plain white.
        assert_eq!(viewer.bar_color(0), egui::Color32::from_rgb(255, 0, 0));
        assert_ne!(viewer.bar_color(1), egui::Color32::WHITE);
    }

    #[test]
    fn shuffle_restores_a_fresh_sorter() {
        let mut viewer = Viewer::new();
        viewer.cfg.bar_count = 10;

        // Mutate state to make sure shuffle actually changes things.
        viewer.step_once();
        viewer.running = true;

        viewer.shuffle();

        assert_eq!(viewer.bars.len(), 10);
        assert!(!viewer.sorter.is_completed());
        assert_eq!(viewer.sorter.comparisons, 0);
        assert!(!viewer.running);
    }

    #[test]
    fn completion_stops_auto_play() {
        let mut viewer = Viewer::new();
        viewer.bars = BarArray::from_values(vec![1, 2, 3]);
        viewer.sorter.reset();
        viewer.running = true;

        // Two comparisons finish the already-sorted pass.
        viewer.step_once();
        viewer.step_once();

        assert!(viewer.sorter.is_completed());
        assert!(!viewer.running);
    }

    #[test]
    fn step_once_sorts_the_array_eventually() {
        let mut viewer = Viewer::new();
        viewer.bars = BarArray::from_values(vec![5, 4, 3, 2, 1]);
        viewer.sorter.reset();

        for _ in 0..viewer.bars.len() * viewer.bars.len() {
            viewer.step_once();
        }

        assert!(viewer.bars.is_sorted());
        assert!(viewer.sorter.is_completed());
    }
}
