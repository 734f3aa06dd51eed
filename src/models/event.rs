//! Contact events and the index ranges that bound them.

use serde::{Deserialize, Serialize};

/// Half-open index interval `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub stop: usize,
}

impl Span {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.stop
    }
}

/// Bounding box of one detected foot contact in (row, col, time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEvent {
    pub rows: Span,
    pub cols: Span,
    pub frames: Span,
}

impl ContactEvent {
    pub fn new(rows: Span, cols: Span, frames: Span) -> Self {
        Self { rows, cols, frames }
    }

    /// True when boundary correction left a zero-length or inverted window.
    /// Such events are excluded from pairing.
    pub fn is_degenerate(&self) -> bool {
        self.frames.is_empty() || self.rows.is_empty() || self.cols.is_empty()
    }

    /// Normalised time of the first frame of the event.
    pub fn start_time(&self, times: &[f64]) -> f64 {
        time_at(times, self.frames.start)
    }

    /// Normalised time of the last frame inside the event.
    pub fn stop_time(&self, times: &[f64]) -> f64 {
        time_at(times, self.frames.stop.saturating_sub(1))
    }

    /// Time between the first and last frame of the event.
    pub fn stance_secs(&self, times: &[f64]) -> f64 {
        self.stop_time(times) - self.start_time(times)
    }
}

/// Spatial bounding box of a region detected inside a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub rows: Span,
    pub cols: Span,
}

/// Peak-pressure pixel of an event in its first frame, in absolute grid
/// coordinates. Used as the event's position on the mat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeelPoint {
    pub row: usize,
    pub col: usize,
    pub frame: usize,
}

impl HeelPoint {
    pub fn distance_to(&self, other: &HeelPoint) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        dr.hypot(dc)
    }
}

/// Time at `index`, clamped to the last available sample.
pub fn time_at(times: &[f64], index: usize) -> f64 {
    match times.len() {
        0 => 0.0,
        len => times[index.min(len - 1)],
    }
}

/// Clamp a frame index to the recording so it can address a label or time.
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
