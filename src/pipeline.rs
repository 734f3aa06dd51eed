//! Recording in, metrics out.
//!
//! detect -> correct -> segment into runs -> per-run metrics -> (several
//! runs only) label feet and consolidate.

use anyhow::Result;
use ndarray::Array3;
use serde::Serialize;

use crate::{
    detection::{correct_events, detect_events},
    labels::FootLabeler,
    metrics::{analyze_run, consolidate, Metrics, RunMetrics},
    models::{ContactEvent, Recording, Run},
    segmentation::{assign_events, segment_runs},
    settings::AnalysisSettings,
};

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Outcome {
    /// Nothing on the mat at any point.
    NoActivity,
    /// One walking bout, reported as is with positional foot names.
    Single { run: RunMetrics },
    /// Several bouts, each labelled by the operator, then merged.
    Multi {
        runs: Vec<RunMetrics>,
        consolidated: Metrics,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub frame_count: usize,
    pub dims: (usize, usize),
    /// Every corrected contact, in detection order.
    pub events: Vec<ContactEvent>,
    pub outcome: Outcome,
}

impl Analysis {
    /// Recording-level metrics, if there was anything to measure.
    pub fn metrics(&self) -> Option<Metrics> {
        match &self.outcome {
            Outcome::NoActivity => None,
            Outcome::Single { run } => Some(Metrics::from_run(run)),
            Outcome::Multi { consolidated, .. } => Some(consolidated.clone()),
        }
    }

    pub fn runs(&self) -> &[RunMetrics] {
        match &self.outcome {
            Outcome::NoActivity => &[],
            Outcome::Single { run } => std::slice::from_ref(run),
            Outcome::Multi { runs, .. } => runs,
        }
    }
}

/// Contacts with their time bounds tightened onto raw pressure.
pub fn find_contacts(volume: &Array3<f64>, settings: &AnalysisSettings) -> Vec<ContactEvent> {
    let detected = detect_events(volume, &settings.detection);
    let corrected = correct_events(volume, &detected);
    log_info!("Detected {} contact events", corrected.len());
    corrected
}

fn analyze_runs(
    recording: &Recording,
    volume: &Array3<f64>,
    events: &[ContactEvent],
    settings: &AnalysisSettings,
) -> Vec<RunMetrics> {
    let runs: Vec<Run> = segment_runs(&recording.activity(), &settings.segmentation);
    log_info!("Found {} walking runs", runs.len());

    let times = recording.times();
    let labels = recording.labels();
    let grouped = assign_events(events, &runs);
    runs.iter()
        .zip(&grouped)
        .map(|(run, run_events)| {
            analyze_run(volume, &times, &labels, *run, run_events, &settings.stride)
        })
        .collect()
}

/// Run the full analysis. `labeler` is consulted once per run, in run
/// order, only when the recording holds more than one run.
pub fn analyze(
    recording: &Recording,
    settings: &AnalysisSettings,
    labeler: &mut dyn FootLabeler,
) -> Result<Analysis> {
    settings.validate()?;

    let volume = recording.volume();
    let events = find_contacts(&volume, settings);
    let mut runs = analyze_runs(recording, &volume, &events, settings);

    let outcome = match runs.len() {
        0 => {
            log_warn!("No activity in recording; metrics cannot be calculated");
            Outcome::NoActivity
        }
        1 => Outcome::Single {
            run: runs.remove(0),
        },
        _ => {
            for run in runs.iter_mut() {
                let side = labeler.foot_one_side(run)?;
                run.apply_side(side);
            }
            let consolidated = consolidate(&runs);
            Outcome::Multi { runs, consolidated }
        }
    };

    Ok(Analysis {
        frame_count: recording.len(),
        dims: recording.dims(),
        events,
        outcome,
    })
}
