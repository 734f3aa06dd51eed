//! JSON recording loader.
//!
//! Reads the document written by the mat logger:
//! `{"pressureData": [{"dateTime": "...", "pressureMatrix": [[...], ...]}, ...]}`.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::{
    source::{clamp_low, SourceKind},
    timestamp,
};
use crate::error::AnalysisError;
use crate::models::{Frame, Recording};

const ENABLE_LOGS: bool = true;

use crate::log_info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrame {
    pub date_time: String,
    pub pressure_matrix: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub pressure_data: Vec<RawFrame>,
}

/// How raw matrices are turned into analysis frames.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub source: SourceKind,
    /// Readings below this value are zeroed.
    pub clamp_below: f64,
}

pub fn read_document(path: &Path) -> Result<RawDocument> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recording from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse recording {}", path.display()))
}

/// Load, orient, clamp and time-normalise a recording file.
pub fn load_recording(path: &Path, options: LoadOptions) -> Result<Recording> {
    let document = read_document(path)?;
    let recording = build_recording(&document, options)
        .with_context(|| format!("Malformed recording {}", path.display()))?;
    let (rows, cols) = recording.dims();
    log_info!(
        "Loaded {} frames ({}x{}) from {}",
        recording.len(),
        rows,
        cols,
        path.display()
    );
    Ok(recording)
}

/// Build a `Recording` from an already decoded document.
pub fn build_recording(
    document: &RawDocument,
    options: LoadOptions,
) -> std::result::Result<Recording, AnalysisError> {
    let first = document
        .pressure_data
        .first()
        .ok_or(AnalysisError::EmptyRecording)?;
    let origin = timestamp::parse(&first.date_time)?;

    let mut frames = Vec::with_capacity(document.pressure_data.len());
    for (index, raw) in document.pressure_data.iter().enumerate() {
        let captured_at = timestamp::parse(&raw.date_time)?;
        let mut matrix = options.source.orient(to_matrix(index, &raw.pressure_matrix)?);
        clamp_low(&mut matrix, options.clamp_below);
        frames.push(Frame {
            matrix,
            captured_at,
            time_secs: timestamp::seconds_since(&origin, &captured_at),
            label: timestamp::label(&captured_at),
        });
    }

    Recording::new(frames)
}

/// Convert nested rows into a dense matrix, rejecting ragged input.
pub fn to_matrix(
    index: usize,
    rows: &[Vec<f64>],
) -> std::result::Result<Array2<f64>, AnalysisError> {
    let expected = rows.first().map(Vec::len).unwrap_or(0);
    if rows.is_empty() || expected == 0 {
        return Err(AnalysisError::EmptyMatrix { index });
    }
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
        return Err(AnalysisError::RaggedMatrix {
            index,
            row,
            len: r.len(),
            expected,
        });
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), expected), flat).map_err(|_| AnalysisError::RaggedMatrix {
        index,
        row: 0,
        len: 0,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(at: &str, matrix: Vec<Vec<f64>>) -> RawFrame {
        RawFrame {
            date_time: at.to_string(),
            pressure_matrix: matrix,
        }
    }

    fn options() -> LoadOptions {
        LoadOptions {
            source: SourceKind::SensingMat,
            clamp_below: 300.0,
        }
    }

    #[test]
    fn builds_normalised_times() {
        let doc = RawDocument {
            pressure_data: vec![
                raw("2023-03-04T10:00:00.000000+00:00", vec![vec![0.0, 500.0]]),
                raw("2023-03-04T10:00:00.5+00:00", vec![vec![0.0, 0.0]]),
                raw("2023-03-04T10:00:02.25+00:00", vec![vec![100.0, 0.0]]),
            ],
        };
        let rec = build_recording(&doc, options()).unwrap();
        assert_eq!(rec.times(), vec![0.0, 0.5, 2.25]);
        assert_eq!(rec.activity(), vec![true, false, false]);
    }

    #[test]
    fn empty_document_is_an_error() {
        let doc = RawDocument { pressure_data: vec![] };
        assert!(matches!(
            build_recording(&doc, options()),
            Err(AnalysisError::EmptyRecording)
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = to_matrix(3, &[vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, AnalysisError::RaggedMatrix { index: 3, row: 1, .. }));
    }

    #[test]
    fn mismatched_frames_are_rejected() {
        let doc = RawDocument {
            pressure_data: vec![
                raw("2023-03-04T10:00:00.0+00:00", vec![vec![0.0, 0.0]]),
                raw("2023-03-04T10:00:01.0+00:00", vec![vec![0.0], vec![0.0]]),
            ],
        };
        assert!(matches!(
            build_recording(&doc, options()),
            Err(AnalysisError::DimensionMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn bad_timestamp_fails_whole_recording() {
        let doc = RawDocument {
            pressure_data: vec![raw("2023-03-04 10:00:00", vec![vec![0.0]])],
        };
        assert!(matches!(
            build_recording(&doc, options()),
            Err(AnalysisError::InvalidTimestamp { .. })
        ));
    }
}
