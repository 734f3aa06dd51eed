//! Tighten the time bounds of detected events.
//!
//! Temporal smoothing inflates every event by up to half the filter width on
//! each side. Correction walks the raw frames inside the event's spatial box
//! and moves the bounds onto the first and last frames that actually carry
//! pressure.

use ndarray::{s, Array3};

use crate::models::{ContactEvent, Span};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

fn region_active(volume: &Array3<f64>, event: &ContactEvent, frame: usize) -> bool {
    volume
        .slice(s![
            frame,
            event.rows.start..event.rows.stop,
            event.cols.start..event.cols.stop
        ])
        .iter()
        .any(|&v| v != 0.0)
}

/// Correct one event. When no frame in range carries pressure inside the
/// event's box, the event is returned unchanged.
pub fn correct_event(volume: &Array3<f64>, event: &ContactEvent) -> ContactEvent {
    let frame_count = volume.dim().0;
    let stop = event.frames.stop.min(frame_count);
    if event.frames.start >= stop || event.rows.is_empty() || event.cols.is_empty() {
        return *event;
    }

    let Some(first) = (event.frames.start..stop).find(|&t| region_active(volume, event, t)) else {
        log_debug!("no pressure inside event box {:?}; bounds kept", event);
        return *event;
    };
    let last = (first..stop)
        .rev()
        .find(|&t| region_active(volume, event, t))
        .unwrap_or(first);

    ContactEvent {
        frames: Span::new(first, last + 1),
        ..*event
    }
}

pub fn correct_events(volume: &Array3<f64>, events: &[ContactEvent]) -> Vec<ContactEvent> {
    events.iter().map(|e| correct_event(volume, e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume_with_block() -> Array3<f64> {
        let mut v = Array3::<f64>::zeros((15, 6, 6));
        v.slice_mut(s![5..10, 1..3, 2..5]).fill(350.0);
        v
    }

    #[test]
    fn shrinks_inflated_bounds() {
        let v = volume_with_block();
        let coarse = ContactEvent::new(Span::new(1, 3), Span::new(2, 5), Span::new(3, 12));
        let fixed = correct_event(&v, &coarse);
        assert_eq!(fixed.frames, Span::new(5, 10));
        assert_eq!(fixed.rows, coarse.rows);
    }

    #[test]
    fn correction_is_idempotent() {
        let v = volume_with_block();
        let coarse = ContactEvent::new(Span::new(0, 6), Span::new(0, 6), Span::new(0, 15));
        let once = correct_event(&v, &coarse);
        let twice = correct_event(&v, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn single_frame_contact() {
        let mut v = Array3::<f64>::zeros((8, 3, 3));
        v[[4, 1, 1]] = 900.0;
        let coarse = ContactEvent::new(Span::new(0, 3), Span::new(0, 3), Span::new(2, 7));
        assert_eq!(correct_event(&v, &coarse).frames, Span::new(4, 5));
    }

    #[test]
    fn empty_box_keeps_bounds() {
        let v = volume_with_block();
        let elsewhere = ContactEvent::new(Span::new(4, 6), Span::new(0, 1), Span::new(2, 8));
        assert_eq!(correct_event(&v, &elsewhere), elsewhere);
    }

    #[test]
    fn stop_past_end_is_clamped() {
        let v = volume_with_block();
        let coarse = ContactEvent::new(Span::new(1, 3), Span::new(2, 5), Span::new(4, 40));
        assert_eq!(correct_event(&v, &coarse).frames, Span::new(5, 10));
    }
}
