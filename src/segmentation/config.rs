use serde::{Deserialize, Serialize};

/// Configuration for splitting a recording into walking runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentationConfig {
    /// Consecutive all-zero frames tolerated inside a run. One more closes it.
    pub gap_tolerance: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self { gap_tolerance: 2 }
    }
}
