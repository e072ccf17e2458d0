use eframe::egui::Ui;

use crate::plot::Plot;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title heading plus a short summary of what is drawn.
pub fn top_bar(ui: &mut Ui, plot: &Plot) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(plot.title());
        ui.separator();
        ui.label(format!(
            "{} series, {} points",
            plot.series().len(),
            plot.point_count()
        ));
    });
    ui.add_space(2.0);
}
