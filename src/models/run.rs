use serde::{Deserialize, Serialize};

use super::event::Span;

/// One walking bout: a frame interval separated from its neighbours by
/// more than the tolerated number of inactive frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// Zero-based position of the run in the recording.
    pub index: usize,
    pub frames: Span,
}

impl Run {
    pub fn new(index: usize, start: usize, stop: usize) -> Self {
        Self {
            index,
            frames: Span::new(start, stop),
        }
    }
}
