/// Data layer: the sample type and the file loaders.
///
/// Architecture:
/// ```text
///  time.txt / output.txt (.txt / .csv / .json)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SampleSequence
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SampleSequence  │  row-major Vec<f64>, column count
///   └────────────────┘
/// ```

pub mod loader;
pub mod model;
