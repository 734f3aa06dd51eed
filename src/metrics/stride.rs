//! Heel points and stride length/velocity.

use ndarray::{s, Array3};

use crate::models::{clamp_index, parity_split, ContactEvent, Foot, FootPair, HeelPoint};

use super::{
    config::StrideConfig,
    order_events,
    types::{Computed, StrideAnalysis, StrideMeasurement, StrideSummary},
};

const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Centimetres per sensor cell.
pub const STRIDE_SCALE: f64 = 2.0;

/// Peak-pressure pixel of `event` in its first frame. Ties resolve to the
/// first maximum in row-major order.
pub fn find_heel(volume: &Array3<f64>, event: &ContactEvent) -> HeelPoint {
    let frame = clamp_index(event.frames.start, volume.dim().0);
    let patch = volume.slice(s![
        frame,
        event.rows.start..event.rows.stop,
        event.cols.start..event.cols.stop
    ]);

    let mut best = (0, 0);
    let mut best_value = f64::NEG_INFINITY;
    for ((r, c), &value) in patch.indexed_iter() {
        if value > best_value {
            best_value = value;
            best = (r, c);
        }
    }

    HeelPoint {
        row: event.rows.start + best.0,
        col: event.cols.start + best.1,
        frame,
    }
}

/// Measure strides between successive same-foot heel strikes.
pub fn stride_steps(times: &[f64], events: &[ContactEvent], heels: &[HeelPoint]) -> Vec<StrideMeasurement> {
    let mut steps = Vec::new();
    let mut last = FootPair::new(0usize, 1usize);

    for i in 2..heels.len().min(events.len()) {
        let foot = Foot::from_index(i);
        let prev = *last.get(foot);
        let distance = heels[prev].distance_to(&heels[i]) * STRIDE_SCALE;
        let duration_secs = events[i].start_time(times) - events[prev].start_time(times);
        steps.push(StrideMeasurement {
            foot,
            from_event: prev,
            to_event: i,
            distance,
            duration_secs,
            velocity: (duration_secs > 0.0).then(|| distance / duration_secs),
        });
        *last.get_mut(foot) = i;
    }
    steps
}

fn summarize(steps: &[StrideMeasurement], event_count: usize) -> StrideSummary {
    let counts = parity_split(event_count);
    let mut length = FootPair::new(None, None);
    let mut velocity = FootPair::new(None, None);

    for foot in [Foot::One, Foot::Two] {
        let strides = counts.get(foot).saturating_sub(1);
        if strides == 0 {
            log_warn!("foot {} has fewer than two contacts; stride undefined", foot);
            continue;
        }
        let own: Vec<&StrideMeasurement> = steps.iter().filter(|s| s.foot == foot).collect();
        let total: f64 = own.iter().map(|s| s.distance).sum();
        *length.get_mut(foot) = Some(total / strides as f64);

        let velocities: Option<Vec<f64>> = own.iter().map(|s| s.velocity).collect();
        match velocities {
            Some(v) => *velocity.get_mut(foot) = Some(v.iter().sum::<f64>() / strides as f64),
            None => log_warn!("foot {} has a zero-duration stride; velocity undefined", foot),
        }
    }

    StrideSummary { length, velocity }
}

/// Heel points, stride measurements and per-foot averages for one run.
pub fn analyze_stride(
    volume: &Array3<f64>,
    times: &[f64],
    events: &[ContactEvent],
    config: &StrideConfig,
) -> StrideAnalysis {
    let events = order_events(events);
    let heels: Vec<HeelPoint> = events.iter().map(|e| find_heel(volume, e)).collect();

    if events.len() < config.min_events {
        return StrideAnalysis {
            heels,
            steps: Vec::new(),
            summary: Computed::insufficient(format!(
                "stride metrics cannot be calculated for this data ({} contacts, need {})",
                events.len(),
                config.min_events
            )),
        };
    }

    let steps = stride_steps(times, &events, &heels);
    let summary = Computed::Ready(summarize(&steps, events.len()));
    StrideAnalysis {
        heels,
        steps,
        summary,
    }
}
