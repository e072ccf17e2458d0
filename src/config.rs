use std::path::PathBuf;

pub const DEFAULT_TIME_FILE: &str = "time.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Fixed settings of the viewer. The binary takes no arguments and always
/// runs with [`GrapherConfig::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct GrapherConfig {
    /// Source of the x values.
    pub time_file: PathBuf,
    /// Source of the y values.
    pub output_file: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub line_width: f32,
}

impl Default for GrapherConfig {
    fn default() -> Self {
        Self {
            time_file: PathBuf::from(DEFAULT_TIME_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
            line_width: 1.5,
        }
    }
}
