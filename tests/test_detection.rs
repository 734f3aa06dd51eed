// tests/test_detection.rs: Contact detection, boundary correction and run
// segmentation through the public API.

use ndarray::{s, Array2, Array3};

use gaitmat_lib::detection::{correct_event, correct_events, detect_events, detect_regions, DetectionConfig};
use gaitmat_lib::models::Run;
use gaitmat_lib::segmentation::{assign_events, segment_runs, SegmentationConfig};

fn block_volume() -> Array3<f64> {
    let mut v = Array3::<f64>::zeros((16, 8, 10));
    v.slice_mut(s![5..10, 2..4, 3..6]).fill(640.0);
    v
}

// ---------------------------------------------------------------------------
// Detection + correction
// ---------------------------------------------------------------------------

#[test]
fn test_all_zero_volume_has_no_events() {
    let v = Array3::<f64>::zeros((12, 6, 6));
    assert!(detect_events(&v, &DetectionConfig::default()).is_empty());
}

#[test]
fn test_single_block_is_one_event() {
    let v = block_volume();
    let config = DetectionConfig {
        smooth_size: 1,
        ..DetectionConfig::default()
    };
    let events = detect_events(&v, &config);
    assert_eq!(events.len(), 1);
    let e = events[0];
    assert_eq!((e.frames.start, e.frames.stop), (5, 10));
    assert_eq!((e.rows.start, e.rows.stop), (2, 4));
    assert_eq!((e.cols.start, e.cols.stop), (3, 6));
}

#[test]
fn test_correction_undoes_temporal_smoothing() {
    let v = block_volume();
    let events = detect_events(&v, &DetectionConfig::default());
    assert_eq!(events.len(), 1);
    assert_eq!((events[0].frames.start, events[0].frames.stop), (3, 12));

    let corrected = correct_events(&v, &events);
    assert_eq!((corrected[0].frames.start, corrected[0].frames.stop), (5, 10));
    // spatial bounds stay as detected
    assert_eq!(corrected[0].rows, events[0].rows);
}

#[test]
fn test_correction_is_idempotent() {
    let v = block_volume();
    for event in detect_events(&v, &DetectionConfig::default()) {
        let once = correct_event(&v, &event);
        assert_eq!(correct_event(&v, &once), once);
    }
}

#[test]
fn test_two_feet_are_separate_events() {
    let mut v = Array3::<f64>::zeros((20, 16, 12));
    v.slice_mut(s![2..8, 1..4, 1..4]).fill(500.0);
    v.slice_mut(s![6..12, 10..13, 6..9]).fill(500.0);
    let events = correct_events(&v, &detect_events(&v, &DetectionConfig::default()));
    let mut frames: Vec<(usize, usize)> = events.iter().map(|e| (e.frames.start, e.frames.stop)).collect();
    frames.sort();
    assert_eq!(frames, vec![(2, 8), (6, 12)]);
}

#[test]
fn test_regions_in_one_frame() {
    let mut m = Array2::<f64>::zeros((20, 20));
    m.slice_mut(s![2..5, 2..5]).fill(300.0);
    m.slice_mut(s![12..16, 10..14]).fill(300.0);
    let regions = detect_regions(&m, &DetectionConfig::default());
    assert_eq!(regions.len(), 2);
    // bounds grow by half the filter width on each side
    assert_eq!((regions[0].rows.start, regions[0].rows.stop), (0, 7));
    assert_eq!((regions[1].cols.start, regions[1].cols.stop), (8, 16));
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

fn flags(pattern: &str) -> Vec<bool> {
    pattern.chars().map(|c| c == '#').collect()
}

#[test]
fn test_gap_of_two_is_one_run() {
    let runs = segment_runs(&flags("#####..####"), &SegmentationConfig::default());
    assert_eq!(runs, vec![Run::new(0, 0, 11)]);
}

#[test]
fn test_gap_of_three_splits() {
    let runs = segment_runs(&flags("#####...####"), &SegmentationConfig::default());
    assert_eq!(runs, vec![Run::new(0, 0, 7), Run::new(1, 8, 12)]);
}

#[test]
fn test_events_follow_their_run() {
    let mut v = Array3::<f64>::zeros((30, 6, 6));
    v.slice_mut(s![1..6, 1..3, 1..3]).fill(500.0);
    v.slice_mut(s![20..25, 1..3, 1..3]).fill(500.0);
    let activity: Vec<bool> = (0..30).map(|t| v.slice(s![t, .., ..]).iter().any(|&x| x != 0.0)).collect();

    let runs = segment_runs(&activity, &SegmentationConfig::default());
    assert_eq!(runs.len(), 2);

    let events = correct_events(&v, &detect_events(&v, &DetectionConfig::default()));
    let grouped = assign_events(&events, &runs);
    assert_eq!(grouped[0].len(), 1);
    assert_eq!(grouped[1].len(), 1);
    assert_eq!(grouped[1][0].frames.start, 20);
}
