//! Stance/swing timeline and per-foot gait cycle averages.
//!
//! Events alternate feet by position. Event `i` contributes a stance (its own
//! first-to-last frame time) and, from the third event on, a swing measured
//! from the end of event `i - 2` (same foot) to the start of event `i`.

use crate::models::{clamp_index, parity_split, ContactEvent, Foot, FootPair};

use super::{
    order_events,
    types::{Computed, GaitAnalysis, GaitCycle, GaitSummary, Phase, PhaseRecord},
};

const ENABLE_LOGS: bool = true;

use crate::log_warn;

fn label_at(labels: &[String], index: usize) -> String {
    labels
        .get(clamp_index(index, labels.len()))
        .cloned()
        .unwrap_or_default()
}

/// Build the gait timeline and summary for one run's events.
pub fn analyze_gait(times: &[f64], labels: &[String], events: &[ContactEvent]) -> GaitAnalysis {
    let events = order_events(events);
    let mut phases = Vec::with_capacity(events.len() * 2);
    let mut stances = Vec::with_capacity(events.len());
    let mut swings = Vec::with_capacity(events.len());

    for (i, event) in events.iter().enumerate() {
        let foot = Foot::from_index(i);

        if i >= 2 {
            let previous = &events[i - 2];
            let start = previous.stop_time(times);
            let end = event.start_time(times);
            phases.push(PhaseRecord {
                foot,
                phase: Phase::Swing,
                start_secs: start,
                end_secs: end,
                duration_secs: end - start,
                from_label: label_at(labels, previous.frames.stop.saturating_sub(1)),
                to_label: label_at(labels, event.frames.start),
            });
            swings.push(end - start);
        }

        let stance = event.stance_secs(times);
        phases.push(PhaseRecord {
            foot,
            phase: Phase::Stance,
            start_secs: event.start_time(times),
            end_secs: event.stop_time(times),
            duration_secs: stance,
            from_label: label_at(labels, event.frames.start),
            to_label: label_at(labels, event.frames.stop.saturating_sub(1)),
        });
        stances.push(stance);
    }

    // Cycle i pairs stance i with the swing that ends at event i + 2.
    let cycles: Vec<GaitCycle> = stances
        .iter()
        .zip(&swings)
        .enumerate()
        .map(|(i, (&stance_secs, &swing_secs))| GaitCycle {
            foot: Foot::from_index(i),
            event_index: i,
            stance_secs,
            swing_secs,
        })
        .collect();

    let summary = summarize(&events, &stances, &swings, &cycles);
    GaitAnalysis {
        phases,
        cycles,
        summary,
    }
}

/// Per-foot averages. Every sum is divided by the foot's share of the
/// events (ceil/floor of the event count), so foot one also owns the odd one
/// out. Swing `k` belongs to event `k + 2`.
fn summarize(
    events: &[ContactEvent],
    stances: &[f64],
    swings: &[f64],
    cycles: &[GaitCycle],
) -> Computed<GaitSummary> {
    let counts = parity_split(events.len());
    if counts.one == 0 || counts.two == 0 {
        return Computed::insufficient(format!(
            "gait metrics cannot be calculated for this data ({} contacts)",
            events.len()
        ));
    }

    let mut stance = FootPair::new(0.0, 0.0);
    let mut swing = FootPair::new(0.0, 0.0);
    let mut percent = FootPair::new(0.0, 0.0);
    for (i, &secs) in stances.iter().enumerate() {
        *stance.get_mut(Foot::from_index(i)) += secs;
    }
    for (k, &secs) in swings.iter().enumerate() {
        *swing.get_mut(Foot::from_index(k + 2)) += secs;
    }
    for cycle in cycles {
        match cycle.stance_percent() {
            Some(p) => *percent.get_mut(cycle.foot) += p,
            None => log_warn!(
                "cycle at event {} has no duration; left out of the stance percentage",
                cycle.event_index
            ),
        }
    }

    let average = |sums: FootPair<f64>| FootPair {
        one: sums.one / counts.one as f64,
        two: sums.two / counts.two as f64,
    };

    Computed::Ready(GaitSummary {
        cycles: counts,
        avg_stance_secs: average(stance),
        avg_swing_secs: average(swing),
        stance_percent: average(percent),
    })
}
