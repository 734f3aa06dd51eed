//! Steps per minute.

use crate::models::{time_at, ContactEvent};

use super::{order_events, types::Computed};

/// Time from the first contact's start to the frame at the last contact's
/// `stop` index (clamped to the recording). `None` without events.
pub fn event_span_secs(times: &[f64], events: &[ContactEvent]) -> Option<f64> {
    let events = order_events(events);
    let first = events.first()?;
    let last = events.last()?;
    Some(time_at(times, last.frames.stop) - first.start_time(times))
}

/// Contacts per minute over [`event_span_secs`].
pub fn cadence(times: &[f64], events: &[ContactEvent]) -> Computed<f64> {
    let count = order_events(events).len();
    match event_span_secs(times, events) {
        Some(span) if span > 0.0 => Computed::Ready(count as f64 / (span / 60.0)),
        Some(_) => Computed::insufficient("cadence cannot be calculated: contacts span no time"),
        None => Computed::insufficient("cadence cannot be calculated: no contacts"),
    }
}
