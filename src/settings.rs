use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    detection::DetectionConfig,
    error::AnalysisError,
    metrics::StrideConfig,
    models::FootSide,
    segmentation::SegmentationConfig,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordingConfig {
    /// Readings below this are zeroed before metrics are computed.
    pub metrics_clamp: f64,
    /// Readings below this are zeroed for the per-frame region log.
    pub report_clamp: f64,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            metrics_clamp: 300.0,
            report_clamp: 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelConfig {
    /// Fixed side of positional foot one. Unset means ask per run.
    pub foot_one: Option<FootSide>,
}

/// Every tunable of an analysis, loadable from a JSON file. Missing keys
/// take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisSettings {
    pub recording: RecordingConfig,
    pub detection: DetectionConfig,
    pub segmentation: SegmentationConfig,
    pub stride: StrideConfig,
    pub labels: LabelConfig,
}

impl AnalysisSettings {
    /// Read settings from `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Self = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse settings in {}", path.display()))?
        } else {
            Self::default()
        };
        settings
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        for (key, value) in [
            ("recording.metricsClamp", self.recording.metrics_clamp),
            ("recording.reportClamp", self.recording.report_clamp),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{key} must be a non-negative number, got {value}"
                )));
            }
        }
        self.detection.validate()?;
        self.stride.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = AnalysisSettings::default();
        assert_eq!(s.recording.metrics_clamp, 300.0);
        assert_eq!(s.recording.report_clamp, 100.0);
        assert_eq!(s.detection.smooth_size, 5);
        assert_eq!(s.segmentation.gap_tolerance, 2);
        assert_eq!(s.stride.min_events, 4);
        assert_eq!(s.labels.foot_one, None);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let s: AnalysisSettings = serde_json::from_str(
            r#"{"segmentation": {"gapTolerance": 4}, "labels": {"footOne": "right"}}"#,
        )
        .unwrap();
        assert_eq!(s.segmentation.gap_tolerance, 4);
        assert_eq!(s.labels.foot_one, Some(FootSide::Right));
        assert_eq!(s.detection.activation_threshold, 0.0001);
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = AnalysisSettings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(s.stride.min_events, 4);
    }

    #[test]
    fn bad_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"detection": {"smoothSize": 0}}"#).unwrap();
        assert!(AnalysisSettings::load(&path).is_err());

        fs::write(&path, "not json").unwrap();
        assert!(AnalysisSettings::load(&path).is_err());

        let mut s = AnalysisSettings::default();
        s.recording.metrics_clamp = -1.0;
        assert!(s.validate().is_err());
    }
}
