use eframe::egui;

use crate::plot::Plot;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Window contents: one composed plot, drawn every frame until closed.
pub struct GrapherApp {
    plot: Plot,
    line_width: f32,
}

impl GrapherApp {
    pub fn new(plot: Plot, line_width: f32) -> Self {
        Self { plot, line_width }
    }
}

impl eframe::App for GrapherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.plot);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::line_plot(ui, &self.plot, self.line_width);
        });
    }
}
