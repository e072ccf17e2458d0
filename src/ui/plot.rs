use eframe::egui::Ui;
use egui_plot::{Legend, Line, PlotPoints};

use crate::plot::Plot;

// ---------------------------------------------------------------------------
// Line chart (central panel)
// ---------------------------------------------------------------------------

/// Render every series of `plot` as a line with the plot's axis labels.
pub fn line_plot(ui: &mut Ui, plot: &Plot, line_width: f32) {
    let multi = plot.series().len() > 1;

    let mut chart = egui_plot::Plot::new("line_plot")
        .x_axis_label(plot.x_label())
        .y_axis_label(plot.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if multi {
        chart = chart.legend(Legend::default());
    }

    chart.show(ui, |plot_ui| {
        for (idx, series) in plot.series().iter().enumerate() {
            let points: PlotPoints = series.iter().copied().collect();

            let mut line = Line::new(points).width(line_width);
            if multi {
                line = line.name(format!("column {idx}"));
            }
            plot_ui.line(line);
        }
    });
}
