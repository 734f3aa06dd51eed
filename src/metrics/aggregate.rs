//! Duration-weighted consolidation of per-run metrics.
//!
//! Each run contributes with weight `duration / total duration`, taken over
//! the runs that actually produced the metric. A single run consolidates to
//! exactly its own values.

use crate::models::{Foot, FootPair};

use super::types::{Computed, GaitSummary, Metrics, RunMetrics, StrideSummary};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Accumulates `(value, weight)` pairs.
#[derive(Debug, Default)]
struct WeightedMean {
    entries: Vec<(f64, f64)>,
}

impl WeightedMean {
    fn push(&mut self, value: f64, weight: f64) {
        self.entries.push((value, weight));
    }

    /// Falls back to an equal-weight mean when every weight is zero.
    fn finish(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: f64 = self.entries.iter().map(|(_, w)| w).sum();
        if total > 0.0 {
            Some(self.entries.iter().map(|(v, w)| v * (w / total)).sum())
        } else {
            let n = self.entries.len() as f64;
            Some(self.entries.iter().map(|(v, _)| v / n).sum())
        }
    }
}

fn combined_reason<'a, T: 'a>(values: impl Iterator<Item = &'a Computed<T>>) -> String {
    let mut reasons: Vec<&str> = Vec::new();
    for value in values {
        if let Computed::Insufficient(reason) = value {
            if !reasons.contains(&reason.as_str()) {
                reasons.push(reason);
            }
        }
    }
    if reasons.is_empty() {
        "no runs to consolidate".to_string()
    } else {
        reasons.join("; ")
    }
}

fn consolidate_cadence(runs: &[RunMetrics]) -> Computed<f64> {
    let mut mean = WeightedMean::default();
    for run in runs {
        if let Some(&cadence) = run.cadence.ready() {
            mean.push(cadence, run.weight());
        }
    }
    match mean.finish() {
        Some(value) => Computed::Ready(value),
        None => Computed::Insufficient(combined_reason(runs.iter().map(|r| &r.cadence))),
    }
}

fn consolidate_stride(runs: &[RunMetrics]) -> Computed<StrideSummary> {
    let ready: Vec<(&StrideSummary, f64)> = runs
        .iter()
        .filter_map(|r| r.stride.summary.ready().map(|s| (s, r.weight())))
        .collect();
    if ready.is_empty() {
        return Computed::Insufficient(combined_reason(runs.iter().map(|r| &r.stride.summary)));
    }

    let mut length = FootPair::new(None, None);
    let mut velocity = FootPair::new(None, None);
    for foot in [Foot::One, Foot::Two] {
        let mut length_mean = WeightedMean::default();
        let mut velocity_mean = WeightedMean::default();
        for (summary, weight) in &ready {
            if let Some(v) = summary.length.get(foot) {
                length_mean.push(*v, *weight);
            }
            if let Some(v) = summary.velocity.get(foot) {
                velocity_mean.push(*v, *weight);
            }
        }
        *length.get_mut(foot) = length_mean.finish();
        *velocity.get_mut(foot) = velocity_mean.finish();
    }

    Computed::Ready(StrideSummary { length, velocity })
}

fn consolidate_gait(runs: &[RunMetrics]) -> Computed<GaitSummary> {
    let ready: Vec<(&GaitSummary, f64)> = runs
        .iter()
        .filter_map(|r| r.gait.summary.ready().map(|s| (s, r.weight())))
        .collect();
    if ready.is_empty() {
        return Computed::Insufficient(combined_reason(runs.iter().map(|r| &r.gait.summary)));
    }

    let mut cycles = FootPair::new(0, 0);
    let mut stance = FootPair::new(0.0, 0.0);
    let mut swing = FootPair::new(0.0, 0.0);
    let mut percent = FootPair::new(0.0, 0.0);
    for foot in [Foot::One, Foot::Two] {
        let mut stance_mean = WeightedMean::default();
        let mut swing_mean = WeightedMean::default();
        let mut percent_mean = WeightedMean::default();
        for (summary, weight) in &ready {
            *cycles.get_mut(foot) += summary.cycles.get(foot);
            stance_mean.push(*summary.avg_stance_secs.get(foot), *weight);
            swing_mean.push(*summary.avg_swing_secs.get(foot), *weight);
            percent_mean.push(*summary.stance_percent.get(foot), *weight);
        }
        *stance.get_mut(foot) = stance_mean.finish().unwrap_or_default();
        *swing.get_mut(foot) = swing_mean.finish().unwrap_or_default();
        *percent.get_mut(foot) = percent_mean.finish().unwrap_or_default();
    }

    Computed::Ready(GaitSummary {
        cycles,
        avg_stance_secs: stance,
        avg_swing_secs: swing,
        stance_percent: percent,
    })
}

/// Merge per-run metrics into recording-level metrics.
pub fn consolidate(runs: &[RunMetrics]) -> Metrics {
    let total_duration_secs: f64 = runs.iter().map(RunMetrics::weight).sum();
    log_debug!(
        "consolidating {} runs over {:.3}s",
        runs.len(),
        total_duration_secs
    );

    Metrics {
        run_count: runs.len(),
        total_duration_secs,
        cadence: consolidate_cadence(runs),
        stride: consolidate_stride(runs),
        gait: consolidate_gait(runs),
    }
}
