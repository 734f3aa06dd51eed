//! Per-frame region log: every contact region of every frame, cropped and
//! rendered, with a JSON index tying the images to capture times.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    detection::{detect_regions, DetectionConfig},
    models::{Recording, Region},
};

use super::{
    palette::Palette,
    render::{crop, heatmap, save_png, upscale},
};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

pub const INDEX_FILE: &str = "index.json";
const REGION_SCALE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLogEntry {
    pub index: usize,
    pub label: String,
    pub regions: Vec<Region>,
    /// Paths relative to the log directory, one per region.
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLog {
    pub name: String,
    pub entries: Vec<FrameLogEntry>,
}

/// Render the region log of `recording` into `out_dir` and write its index.
pub fn write_frame_log(
    recording: &Recording,
    config: &DetectionConfig,
    name: &str,
    out_dir: &Path,
) -> Result<FrameLog> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let palette = Palette::default();
    let mut entries = Vec::with_capacity(recording.len());
    for (index, frame) in recording.frames().iter().enumerate() {
        let regions = detect_regions(&frame.matrix, config);
        let mut images = Vec::with_capacity(regions.len());
        for (k, region) in regions.iter().enumerate() {
            let file = PathBuf::from(format!("frame_{index:05}_region_{k}.png"));
            let image = upscale(&heatmap(crop(&frame.matrix, region).view(), &palette), REGION_SCALE);
            save_png(&image, &out_dir.join(&file))?;
            images.push(file);
        }
        log_debug!("frame {}: {} regions", index, regions.len());
        entries.push(FrameLogEntry {
            index,
            label: frame.label.clone(),
            regions,
            images,
        });
    }

    let log = FrameLog {
        name: name.to_string(),
        entries,
    };
    let index_path = out_dir.join(INDEX_FILE);
    let serialized = serde_json::to_string_pretty(&log)?;
    fs::write(&index_path, serialized)
        .with_context(|| format!("Failed to write frame log index {}", index_path.display()))?;

    log_info!(
        "Wrote region log for {} frames to {}",
        log.entries.len(),
        out_dir.display()
    );
    Ok(log)
}
