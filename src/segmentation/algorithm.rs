use crate::models::{ContactEvent, Run};
use crate::segmentation::config::SegmentationConfig;

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Inactive,
    Active { start: usize, idle: usize },
}

/// Split per-frame activity flags into runs.
///
/// A run opens on the first active frame and closes once more than
/// `gap_tolerance` consecutive inactive frames have been seen; its end is
/// the index of the frame that broke the tolerance. A run still open when
/// the recording ends is closed at the frame count.
pub fn segment_runs(activity: &[bool], config: &SegmentationConfig) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut state = ScanState::Inactive;

    for (i, &active) in activity.iter().enumerate() {
        state = match (state, active) {
            (ScanState::Inactive, true) => ScanState::Active { start: i, idle: 0 },
            (ScanState::Inactive, false) => ScanState::Inactive,
            (ScanState::Active { start, .. }, true) => ScanState::Active { start, idle: 0 },
            (ScanState::Active { start, idle }, false) => {
                let idle = idle + 1;
                if idle > config.gap_tolerance {
                    runs.push(Run::new(runs.len(), start, i));
                    ScanState::Inactive
                } else {
                    ScanState::Active { start, idle }
                }
            }
        };
    }

    if let ScanState::Active { start, .. } = state {
        runs.push(Run::new(runs.len(), start, activity.len()));
    }

    log_debug!("segmented {} frames into {} runs", activity.len(), runs.len());
    runs
}

/// Group time-ordered events by the run containing their start frame.
/// The returned vector has one entry per run, in run order.
pub fn assign_events(events: &[ContactEvent], runs: &[Run]) -> Vec<Vec<ContactEvent>> {
    let mut grouped = vec![Vec::new(); runs.len()];
    for event in events {
        match runs.iter().position(|run| run.frames.contains(event.frames.start)) {
            Some(index) => grouped[index].push(*event),
            None => log_warn!(
                "contact event at frames {}..{} lies outside every run; skipped",
                event.frames.start,
                event.frames.stop
            ),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Span;

    fn flags(active: &[usize], len: usize) -> Vec<bool> {
        (0..len).map(|i| active.contains(&i)).collect()
    }

    #[test]
    fn two_frame_gap_is_tolerated() {
        let activity = flags(&[0, 1, 2, 3, 4, 7, 8, 9, 10], 11);
        let runs = segment_runs(&activity, &SegmentationConfig::default());
        assert_eq!(runs, vec![Run::new(0, 0, 11)]);
    }

    #[test]
    fn three_frame_gap_splits() {
        let activity = flags(&[0, 1, 2, 3, 4, 8, 9, 10, 11], 12);
        let runs = segment_runs(&activity, &SegmentationConfig::default());
        assert_eq!(runs, vec![Run::new(0, 0, 7), Run::new(1, 8, 12)]);
    }

    #[test]
    fn idle_counter_resets_on_activity() {
        // Two separate 2-frame gaps never add up to a split.
        let activity = flags(&[0, 1, 4, 5, 8, 9], 10);
        let runs = segment_runs(&activity, &SegmentationConfig::default());
        assert_eq!(runs.len(), 1);
    }

    #[test]
    fn leading_and_trailing_idle_frames() {
        let activity = flags(&[3, 4, 5], 12);
        let runs = segment_runs(&activity, &SegmentationConfig::default());
        assert_eq!(runs, vec![Run::new(0, 3, 8)]);
    }

    #[test]
    fn no_activity_no_runs() {
        assert!(segment_runs(&[false; 9], &SegmentationConfig::default()).is_empty());
        assert!(segment_runs(&[], &SegmentationConfig::default()).is_empty());
    }

    #[test]
    fn events_follow_their_start_frame() {
        let runs = vec![Run::new(0, 0, 10), Run::new(1, 14, 30)];
        let event = |a, b| ContactEvent::new(Span::new(0, 1), Span::new(0, 1), Span::new(a, b));
        let events = vec![event(1, 4), event(5, 9), event(15, 18), event(11, 12)];
        let grouped = assign_events(&events, &runs);
        assert_eq!(grouped[0].len(), 2);
        assert_eq!(grouped[1], vec![event(15, 18)]);
    }
}
