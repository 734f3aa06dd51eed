//! Recording data model.
//!
//! A `Recording` owns every frame of one capture. All frames share the same
//! grid and are immutable once the recording is built.

use chrono::NaiveDateTime;
use ndarray::{s, Array2, Array3};

use crate::error::{AnalysisError, Result};

/// One pressure matrix with its capture time.
#[derive(Debug, Clone)]
pub struct Frame {
    pub matrix: Array2<f64>,
    pub captured_at: NaiveDateTime,
    /// Seconds since the first frame of the recording.
    pub time_secs: f64,
    /// Human readable capture time, e.g. `04 Mar 2023 10:15:02.250000`.
    pub label: String,
}

impl Frame {
    pub fn is_active(&self) -> bool {
        self.matrix.iter().any(|&v| v != 0.0)
    }
}

#[derive(Debug, Clone)]
pub struct Recording {
    frames: Vec<Frame>,
    rows: usize,
    cols: usize,
}

impl Recording {
    /// Build a recording, checking the shape invariants:
    /// at least one frame, equal non-empty grids, non-decreasing timestamps.
    pub fn new(frames: Vec<Frame>) -> Result<Self> {
        let first = frames.first().ok_or(AnalysisError::EmptyRecording)?;
        let (rows, cols) = first.matrix.dim();
        if rows == 0 || cols == 0 {
            return Err(AnalysisError::EmptyMatrix { index: 0 });
        }

        for (index, frame) in frames.iter().enumerate() {
            let (r, c) = frame.matrix.dim();
            if (r, c) != (rows, cols) {
                return Err(AnalysisError::DimensionMismatch {
                    index,
                    rows: r,
                    cols: c,
                    expected_rows: rows,
                    expected_cols: cols,
                });
            }
            if let Some(&value) = frame.matrix.iter().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(AnalysisError::InvalidReading { index, value });
            }
            if index > 0 && frame.captured_at < frames[index - 1].captured_at {
                return Err(AnalysisError::NonMonotonicTimestamps { index });
            }
        }

        Ok(Self { frames, rows, cols })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Grid dimensions as `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Normalised time (seconds since start) of every frame.
    pub fn times(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.time_secs).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.frames.iter().map(|f| f.label.clone()).collect()
    }

    /// Per-frame activity: any non-zero reading in the frame.
    pub fn activity(&self) -> Vec<bool> {
        self.frames.iter().map(Frame::is_active).collect()
    }

    /// Stack the frames into a `(time, row, col)` volume.
    pub fn volume(&self) -> Array3<f64> {
        let mut volume = Array3::zeros((self.frames.len(), self.rows, self.cols));
        for (t, frame) in self.frames.iter().enumerate() {
            volume.slice_mut(s![t, .., ..]).assign(&frame.matrix);
        }
        volume
    }
}
