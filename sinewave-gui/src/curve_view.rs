use egui::Color32;
use egui_plot::{Line, Plot, PlotPoints};

/// The rendered curve. Regenerated wholesale whenever the domain bound
/// changes; read-only in between.
#[derive(Default)]
pub(crate) struct CurveView {
    title: String,
    points: Vec<(f64, f64)>,
}

impl CurveView {
    pub(crate) fn set_curve(&mut self, title: String, points: Vec<(f64, f64)>) {
        self.title = title;
        self.points = points;
    }

    pub(crate) fn show(&self, ui: &mut egui::Ui) {
        // egui_plot has no title of its own.
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(&self.title).strong().size(16.0));
        });

        Plot::new("sine_curve")
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .x_axis_label("x")
            .y_axis_label("y")
            .show_grid(true)
            .show(ui, |plot_ui| {
                let points: PlotPoints = self.points.iter().map(|&(x, y)| [x, y]).collect();
                let line = Line::new(points)
                    .color(Color32::from_rgb(0, 160, 0))
                    .width(2.0);
                plot_ui.line(line);
            });
    }
}
