use serde::{Deserialize, Serialize};

use crate::models::{Foot, FootPair, FootSide, HeelPoint, Run};

/// Either a computed value or the reason it could not be computed for this
/// data. Too little data is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Computed<T> {
    Ready(T),
    Insufficient(String),
}

impl<T> Computed<T> {
    pub fn insufficient(reason: impl Into<String>) -> Self {
        Computed::Insufficient(reason.into())
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Computed::Ready(value) => Some(value),
            Computed::Insufficient(_) => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Computed::Ready(value) => Some(value),
            Computed::Insufficient(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Computed::Ready(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Stance,
    Swing,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Stance => "Stance",
            Phase::Swing => "Swing",
        }
    }
}

/// One line of the gait timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRecord {
    pub foot: Foot,
    pub phase: Phase,
    pub start_secs: f64,
    pub end_secs: f64,
    pub duration_secs: f64,
    pub from_label: String,
    pub to_label: String,
}

/// Stance of one event plus the swing that ends at the next same-foot event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaitCycle {
    pub foot: Foot,
    pub event_index: usize,
    pub stance_secs: f64,
    pub swing_secs: f64,
}

impl GaitCycle {
    /// Stance share of the cycle in percent, if the cycle has positive length.
    pub fn stance_percent(&self) -> Option<f64> {
        let total = self.stance_secs + self.swing_secs;
        (total > 0.0).then(|| self.stance_secs / total * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaitSummary {
    pub cycles: FootPair<usize>,
    pub avg_stance_secs: FootPair<f64>,
    pub avg_swing_secs: FootPair<f64>,
    pub stance_percent: FootPair<f64>,
}

impl GaitSummary {
    pub fn swing_percent(&self, foot: Foot) -> f64 {
        100.0 - self.stance_percent.get(foot)
    }

    pub fn swap_feet(&mut self) {
        self.cycles.swap();
        self.avg_stance_secs.swap();
        self.avg_swing_secs.swap();
        self.stance_percent.swap();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaitAnalysis {
    pub phases: Vec<PhaseRecord>,
    pub cycles: Vec<GaitCycle>,
    pub summary: Computed<GaitSummary>,
}

/// Distance between two successive heel points of the same foot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrideMeasurement {
    pub foot: Foot,
    pub from_event: usize,
    pub to_event: usize,
    pub distance: f64,
    pub duration_secs: f64,
    /// Undefined when both heel strikes share a timestamp.
    pub velocity: Option<f64>,
}

/// Per-foot averages; `None` where the foot has fewer than two heel strikes
/// or a zero-duration stride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrideSummary {
    pub length: FootPair<Option<f64>>,
    pub velocity: FootPair<Option<f64>>,
}

impl StrideSummary {
    pub fn swap_feet(&mut self) {
        self.length.swap();
        self.velocity.swap();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrideAnalysis {
    pub heels: Vec<HeelPoint>,
    pub steps: Vec<StrideMeasurement>,
    pub summary: Computed<StrideSummary>,
}

/// Everything computed for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetrics {
    pub run: Run,
    pub event_count: usize,
    /// Time from the first event's start to the last event's stop.
    pub duration_secs: Option<f64>,
    pub cadence: Computed<f64>,
    pub stride: StrideAnalysis,
    pub gait: GaitAnalysis,
    /// Operator-given side of positional foot one, once labelled.
    pub foot_one_side: Option<FootSide>,
}

impl RunMetrics {
    /// Record the operator's answer. When foot one is the right foot the
    /// per-foot summaries are swapped so slot one always means left.
    pub fn apply_side(&mut self, side: FootSide) {
        if side == FootSide::Right {
            self.swap_feet();
        }
        self.foot_one_side = Some(side);
    }

    pub fn swap_feet(&mut self) {
        if let Some(stride) = self.stride.summary.ready_mut() {
            stride.swap_feet();
        }
        if let Some(gait) = self.gait.summary.ready_mut() {
            gait.swap_feet();
        }
    }

    pub fn weight(&self) -> f64 {
        self.duration_secs.unwrap_or(0.0)
    }
}

/// Recording-level metrics: one run reported directly, or several runs
/// merged with duration weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub run_count: usize,
    pub total_duration_secs: f64,
    pub cadence: Computed<f64>,
    pub stride: Computed<StrideSummary>,
    pub gait: Computed<GaitSummary>,
}

impl Metrics {
    pub fn from_run(run: &RunMetrics) -> Self {
        Self {
            run_count: 1,
            total_duration_secs: run.weight(),
            cadence: run.cadence.clone(),
            stride: run.stride.summary.clone(),
            gait: run.gait.summary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> RunMetrics {
        RunMetrics {
            run: Run::new(0, 0, 40),
            event_count: 6,
            duration_secs: Some(2.4),
            cadence: Computed::Ready(150.0),
            stride: StrideAnalysis {
                heels: Vec::new(),
                steps: Vec::new(),
                summary: Computed::Ready(StrideSummary {
                    length: FootPair::new(Some(20.0), Some(22.0)),
                    velocity: FootPair::new(Some(25.0), None),
                }),
            },
            gait: GaitAnalysis {
                phases: Vec::new(),
                cycles: Vec::new(),
                summary: Computed::Ready(GaitSummary {
                    cycles: FootPair::new(3, 2),
                    avg_stance_secs: FootPair::new(0.5, 0.3),
                    avg_swing_secs: FootPair::new(0.3, 0.5),
                    stance_percent: FootPair::new(62.5, 37.5),
                }),
            },
            foot_one_side: None,
        }
    }

    #[test]
    fn swap_exchanges_every_per_foot_slot() {
        let mut r = run();
        r.swap_feet();
        let stride = r.stride.summary.ready().unwrap();
        assert_eq!(stride.length, FootPair::new(Some(22.0), Some(20.0)));
        assert_eq!(stride.velocity, FootPair::new(None, Some(25.0)));
        let gait = r.gait.summary.ready().unwrap();
        assert_eq!(gait.cycles, FootPair::new(2, 3));
        assert_eq!(gait.avg_stance_secs, FootPair::new(0.3, 0.5));
        assert_eq!(gait.avg_swing_secs, FootPair::new(0.5, 0.3));
        assert_eq!(gait.stance_percent, FootPair::new(37.5, 62.5));
        assert_eq!(r.cadence, Computed::Ready(150.0));
    }

    #[test]
    fn double_swap_restores_run() {
        let mut r = run();
        r.swap_feet();
        r.swap_feet();
        assert_eq!(r, run());
    }

    #[test]
    fn left_label_keeps_slots() {
        let mut r = run();
        r.apply_side(FootSide::Left);
        assert_eq!(r.foot_one_side, Some(FootSide::Left));
        assert_eq!(r.gait.summary, run().gait.summary);

        let mut r = run();
        r.apply_side(FootSide::Right);
        assert_eq!(r.gait.summary.ready().unwrap().cycles, FootPair::new(2, 3));
    }

    #[test]
    fn stance_percent_needs_positive_cycle() {
        let cycle = GaitCycle {
            foot: Foot::One,
            event_index: 0,
            stance_secs: 0.0,
            swing_secs: 0.0,
        };
        assert_eq!(cycle.stance_percent(), None);
    }

    #[test]
    fn computed_serializes_with_status_tag() {
        let json = serde_json::to_value(Computed::<f64>::insufficient("too few")).unwrap();
        assert_eq!(json["status"], "insufficient");
        assert_eq!(json["value"], "too few");
    }
}
