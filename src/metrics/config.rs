use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Stride analysis tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrideConfig {
    /// Contacts a run needs before stride metrics are attempted.
    pub min_events: usize,
}

impl Default for StrideConfig {
    fn default() -> Self {
        Self { min_events: 4 }
    }
}

impl StrideConfig {
    pub fn validate(&self) -> Result<()> {
        // the first stride closes on the third contact
        if self.min_events < 3 {
            return Err(AnalysisError::InvalidConfig(format!(
                "stride.minEvents must be at least 3, got {}",
                self.min_events
            )));
        }
        Ok(())
    }
}
