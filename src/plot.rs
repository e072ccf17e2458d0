use crate::data::model::SampleSequence;
use crate::error::PlotError;

pub const X_LABEL: &str = "time";
pub const Y_LABEL: &str = "Amplitude";
pub const TITLE: &str = "time vs Amplitude";

/// One line of the chart.
pub type Series = Vec<[f64; 2]>;

// ---------------------------------------------------------------------------
// Plot – composed chart, ready to render
// ---------------------------------------------------------------------------

/// The line chart built from two sample sequences, prior to rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    series: Vec<Series>,
}

impl Plot {
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Vec::len).sum()
    }

    pub fn x_label(&self) -> &'static str {
        X_LABEL
    }

    pub fn y_label(&self) -> &'static str {
        Y_LABEL
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }
}

/// Pair `x` and `y` by position: point i is `(x[i], y[i])`.
///
/// Row counts must match exactly. For tables, a single-column side is shared
/// by every column of the other side; otherwise column j of `x` is paired
/// with column j of `y`.
pub fn compose(x: &SampleSequence, y: &SampleSequence) -> Result<Plot, PlotError> {
    if x.len() != y.len() {
        return Err(PlotError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    let pairs: Vec<(usize, usize)> = match (x.columns(), y.columns()) {
        (1, k) => (0..k).map(|j| (0, j)).collect(),
        (k, 1) => (0..k).map(|j| (j, 0)).collect(),
        (kx, ky) if kx == ky => (0..kx).map(|j| (j, j)).collect(),
        (kx, ky) => return Err(PlotError::ColumnMismatch { x: kx, y: ky }),
    };

    let series = pairs
        .into_iter()
        .map(|(xc, yc)| x.column(xc).zip(y.column(yc)).map(|(xi, yi)| [xi, yi]).collect())
        .collect();

    Ok(Plot { series })
}
