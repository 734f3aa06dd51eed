use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Tunables for contact detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionConfig {
    /// Box filter width (taps per axis). Spans time as well as space, so
    /// brief sensor dropouts inside one contact are bridged.
    pub smooth_size: usize,

    /// A smoothed value strictly above this marks the element active.
    pub activation_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            smooth_size: 5,
            activation_threshold: 0.0001,
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.smooth_size == 0 {
            return Err(AnalysisError::InvalidConfig(
                "detection.smoothSize must be at least 1".into(),
            ));
        }
        if !self.activation_threshold.is_finite() || self.activation_threshold < 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "detection.activationThreshold must be a non-negative number, got {}",
                self.activation_threshold
            )));
        }
        Ok(())
    }
}
