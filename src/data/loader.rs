use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::model::SampleSequence;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sample sequence from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-separated numeric rows, no header
/// * `.json` – `[0.0, 0.1, ...]` or `[[0.0, 1.0], [0.1, 1.1], ...]`
/// * anything else (`.txt`, `.dat`, ...) – whitespace-delimited numeric text
pub fn load_file(path: &Path) -> Result<SampleSequence, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let seq = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        _ => load_text(path)?,
    };
    log::debug!(
        "Loaded {} rows x {} columns from {}",
        seq.len(),
        seq.columns(),
        path.display()
    );
    Ok(seq)
}

fn read_to_string(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    if source.kind() == ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Plain text loader
// ---------------------------------------------------------------------------

/// One row per line, values separated by any whitespace.
/// Blank lines are skipped and `#` starts a comment.
fn load_text(path: &Path) -> Result<SampleSequence, LoadError> {
    let text = read_to_string(path)?;
    parse_text(path, &text)
}

fn parse_text(path: &Path, text: &str) -> Result<SampleSequence, LoadError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.split('#').next().unwrap_or("");
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|tok| parse_token(path, line_no, tok))
            .collect::<Result<Vec<f64>, _>>()?;
        push_row(path, line_no, &mut rows, row)?;
    }

    Ok(into_sequence(rows))
}

/// A single data row is a flat sequence, not a `1 × k` table.
fn into_sequence(mut rows: Vec<Vec<f64>>) -> SampleSequence {
    if rows.len() == 1 {
        SampleSequence::from_values(rows.remove(0))
    } else {
        SampleSequence::from_rows(rows)
    }
}

fn parse_token(path: &Path, line: usize, tok: &str) -> Result<f64, LoadError> {
    tok.trim().parse::<f64>().map_err(|_| LoadError::Parse {
        path: path.to_path_buf(),
        line,
        token: tok.to_string(),
    })
}

fn push_row(
    path: &Path,
    line: usize,
    rows: &mut Vec<Vec<f64>>,
    row: Vec<f64>,
) -> Result<(), LoadError> {
    if let Some(first) = rows.first() {
        if first.len() != row.len() {
            return Err(LoadError::RaggedRow {
                path: path.to_path_buf(),
                line,
                expected: first.len(),
                found: row.len(),
            });
        }
    }
    rows.push(row);
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header-less CSV; every field must be numeric.
fn load_csv(path: &Path) -> Result<SampleSequence, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|source| csv_error(path, source))?;
        let line_no = record.position().map_or(0, |p| p.line() as usize);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let row = record
            .iter()
            .map(|field| parse_token(path, line_no, field))
            .collect::<Result<Vec<f64>, _>>()?;
        push_row(path, line_no, &mut rows, row)?;
    }

    Ok(into_sequence(rows))
}

fn csv_error(path: &Path, source: csv::Error) -> LoadError {
    let not_found = matches!(
        source.kind(),
        csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound
    );
    if not_found {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Either a flat column or a list of rows.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSamples {
    Column(Vec<f64>),
    Rows(Vec<Vec<f64>>),
}

fn load_json(path: &Path) -> Result<SampleSequence, LoadError> {
    let text = read_to_string(path)?;
    let samples: JsonSamples = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match samples {
        JsonSamples::Column(values) => Ok(SampleSequence::from_values(values)),
        JsonSamples::Rows(json_rows) => {
            let mut rows = Vec::with_capacity(json_rows.len());
            for (i, row) in json_rows.into_iter().enumerate() {
                if row.is_empty() {
                    return Err(LoadError::EmptyRow {
                        path: path.to_path_buf(),
                        row: i + 1,
                    });
                }
                push_row(path, i + 1, &mut rows, row)?;
            }
            Ok(into_sequence(rows))
        }
    }
}
