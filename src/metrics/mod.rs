pub mod aggregate;
pub mod cadence;
pub mod config;
pub mod gait;
pub mod stride;
mod types;

pub use aggregate::consolidate;
pub use cadence::{cadence, event_span_secs};
pub use config::StrideConfig;
pub use gait::analyze_gait;
pub use stride::{analyze_stride, find_heel};
pub use types::{
    Computed, GaitAnalysis, GaitCycle, GaitSummary, Metrics, Phase, PhaseRecord, RunMetrics,
    StrideAnalysis, StrideMeasurement, StrideSummary,
};

use ndarray::Array3;

use crate::models::{ContactEvent, Run};

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Events in pairing order: degenerate windows dropped, then stably sorted
/// by first frame. Foot parity is assigned over this order.
pub fn order_events(events: &[ContactEvent]) -> Vec<ContactEvent> {
    let mut ordered: Vec<ContactEvent> = events
        .iter()
        .filter(|e| !e.is_degenerate())
        .copied()
        .collect();
    ordered.sort_by_key(|e| e.frames.start);
    ordered
}

/// Cadence, stride and gait metrics for the events of one run.
pub fn analyze_run(
    volume: &Array3<f64>,
    times: &[f64],
    labels: &[String],
    run: Run,
    events: &[ContactEvent],
    stride_config: &StrideConfig,
) -> RunMetrics {
    let event_count = order_events(events).len();
    let metrics = RunMetrics {
        run,
        event_count,
        duration_secs: event_span_secs(times, events),
        cadence: cadence(times, events),
        stride: analyze_stride(volume, times, events, stride_config),
        gait: analyze_gait(times, labels, events),
        foot_one_side: None,
    };

    log_info!(
        "run {} (frames {}..{}): {} contacts, cadence {}",
        run.index + 1,
        run.frames.start,
        run.frames.stop,
        event_count,
        match metrics.cadence.ready() {
            Some(c) => format!("{c:.2} steps/min"),
            None => "unavailable".to_string(),
        }
    );
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Span;

    fn event(start: usize, stop: usize) -> ContactEvent {
        ContactEvent::new(Span::new(0, 1), Span::new(0, 1), Span::new(start, stop))
    }

    #[test]
    fn ordering_drops_degenerate_and_is_stable() {
        let a = ContactEvent::new(Span::new(0, 1), Span::new(0, 1), Span::new(4, 6));
        let b = ContactEvent::new(Span::new(2, 3), Span::new(2, 3), Span::new(4, 8));
        let events = vec![a, event(7, 7), event(1, 3), b];
        let ordered = order_events(&events);
        assert_eq!(ordered, vec![event(1, 3), a, b]);
    }
}
