use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an input file into a [`SampleSequence`](crate::data::model::SampleSequence).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: '{token}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// A row whose width differs from the first data row.
    #[error("{}:{line}: expected {expected} columns, found {found}", path.display())]
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}: row {row} has no values", path.display())]
    EmptyRow { path: PathBuf, row: usize },

    #[error("parsing CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("parsing JSON {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to pair two sequences into a plot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlotError {
    #[error("x and y must have the same length, got {x} and {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("cannot pair {x} x-columns with {y} y-columns")]
    ColumnMismatch { x: usize, y: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum SignalError {
    #[error("invalid signal type: {0}")]
    Unknown(String),

    #[error("invalid signal parameters: {0}")]
    InvalidParams(String),
}

#[derive(Debug, Error)]
pub enum DisplayError {
    /// No usable display backend, or the event loop failed.
    #[error("could not open plot window: {0}")]
    Window(String),
}
