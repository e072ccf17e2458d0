use eframe::egui;

use crate::app::GrapherApp;
use crate::config::GrapherConfig;
use crate::error::DisplayError;
use crate::plot::Plot;

/// Open a native window showing `plot` and block until the user closes it.
///
/// Fails when no display backend is available.
pub fn show(plot: Plot, config: &GrapherConfig) -> Result<(), DisplayError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(plot.title())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = plot.title();
    let line_width = config.line_width;
    log::info!("Opening plot window ({} points)", plot.point_count());

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(GrapherApp::new(plot, line_width)))),
    )
    .map_err(|e| DisplayError::Window(e.to_string()))?;

    log::debug!("Plot window closed");
    Ok(())
}
