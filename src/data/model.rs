// ---------------------------------------------------------------------------
// SampleSequence – the numeric contents of one input file
// ---------------------------------------------------------------------------

/// An ordered table of `f64` samples loaded from one file.
///
/// Values are stored row-major. A plain one-value-per-line file has a
/// single column; a file with several values per row is a `rows × columns`
/// table. Integer-looking text is still held as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    values: Vec<f64>,
    columns: usize,
}

impl SampleSequence {
    /// A single-column sequence.
    pub fn from_values(values: Vec<f64>) -> Self {
        SampleSequence { values, columns: 1 }
    }

    /// Build from rows that the caller has already checked to be rectangular.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let columns = rows.first().map_or(1, |r| r.len().max(1));
        let values = rows.into_iter().flatten().collect();
        SampleSequence { values, columns }
    }

    /// Number of rows (samples per column).
    pub fn len(&self) -> usize {
        self.values.len() / self.columns
    }

    /// Whether the file held no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All values in file order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate the values of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .skip(col)
            .step_by(self.columns)
            .copied()
    }
}
