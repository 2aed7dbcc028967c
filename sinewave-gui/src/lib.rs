use eframe::egui;
use sinewave_core::{sample_curve, DomainBound, SLIDER_MAX, SLIDER_SCALE};

mod curve_view;

use curve_view::CurveView;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Sine Wave GUI".to_string(),
            width: 900.0,
            height: 500.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Runs the sine wave viewer until the window is closed.
pub fn run_gui(config: GuiConfig) -> Result<(), GuiError> {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &config.title,
        options,
        Box::new(|_cc| Box::new(GuiApp::new())),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

/// The single window: reset button and plot on the left, the input controls
/// on a fixed-width panel to the right.
///
/// All three controls edit the one [`DomainBound`]; every mutation goes
/// through [`refresh_surfaces`](GuiApp::refresh_surfaces) so the text
/// buffer, the slider position, the result label and the curve never
/// disagree.
struct GuiApp {
    bound: DomainBound,
    input_buffer: String,
    curve: CurveView,
}

impl GuiApp {
    fn new() -> Self {
        let mut app = Self {
            bound: DomainBound::new(),
            input_buffer: String::new(),
            curve: CurveView::default(),
        };
        app.refresh_surfaces();
        app
    }

    /// Pulls every presentation surface back in line with the bound. After
    /// a rejected text entry this overwrites the buffer with the last valid
    /// value, which is the whole recovery.
    fn refresh_surfaces(&mut self) {
        self.input_buffer = self.bound.formatted();
        self.curve
            .set_curve(self.bound.plot_title(), sample_curve(self.bound.value()));
    }

    fn commit_input_buffer(&mut self) {
        if self.bound.set_from_text(&self.input_buffer).is_ok() {
            let tick = self.bound.slider_tick();
            if f64::from(tick) != (self.bound.value() * SLIDER_SCALE).trunc() {
                log::debug!(
                    "x max {} is outside the slider range, displaying tick {tick}",
                    self.bound.value()
                );
            }
        }
        self.refresh_surfaces();
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls")
            .resizable(false)
            .exact_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("x max:");
                    let response = ui.add_sized(
                        [80.0, 0.0],
                        egui::TextEdit::singleline(&mut self.input_buffer),
                    );
                    // Commit on focus loss (Enter included), not per keystroke.
                    if response.lost_focus() {
                        self.commit_input_buffer();
                    }
                });
                ui.add_space(6.0);
                let mut tick = self.bound.slider_tick();
                if ui
                    .add(egui::Slider::new(&mut tick, 1..=SLIDER_MAX).show_value(false))
                    .changed()
                {
                    self.bound.set_from_slider(tick);
                    self.refresh_surfaces();
                }
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(10.0);
                    ui.label(self.bound.result_text());
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if ui.button("Reset").clicked() {
                self.bound.reset();
                self.refresh_surfaces();
            }
            self.curve.show(ui);
        });
    }
}
