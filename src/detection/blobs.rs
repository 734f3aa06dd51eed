//! Contact blob detection.
//!
//! Smooth, threshold, fill interior holes, then label connected components.
//! The same pipeline runs in 3D over a whole recording (one blob per foot
//! contact, diagonal neighbours included) and in 2D over a single frame (one
//! blob per foot region for the frame log, edge neighbours only).

use ndarray::{Array, Array2, Array3, Dimension};

use super::{
    config::DetectionConfig,
    filter::box_filter,
    morphology::{fill_holes, label_components, Connectivity},
};
use crate::models::{ContactEvent, Region, Span};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

fn detect_boxes<D: Dimension>(
    data: &Array<f64, D>,
    config: &DetectionConfig,
    connectivity: Connectivity,
) -> Vec<Vec<Span>> {
    let smoothed = box_filter(data, config.smooth_size);
    let threshold = config.activation_threshold;
    let active = smoothed.mapv(|v| v > threshold);
    let filled = fill_holes(active.view());
    label_components(filled.view(), connectivity)
}

/// Detect contact events in a `(time, row, col)` volume.
///
/// The result is unordered with respect to time and carries the coarse
/// time bounds produced by the smoothed mask; see
/// [`super::correction::correct_events`].
pub fn detect_events(volume: &Array3<f64>, config: &DetectionConfig) -> Vec<ContactEvent> {
    let events: Vec<ContactEvent> = detect_boxes(volume, config, Connectivity::Full)
        .into_iter()
        .map(|b| ContactEvent::new(b[1], b[2], b[0]))
        .collect();
    log_debug!("labeled {} contact blobs", events.len());
    events
}

/// Detect foot regions inside one frame. Cells touching only at a corner
/// are separate regions.
pub fn detect_regions(matrix: &Array2<f64>, config: &DetectionConfig) -> Vec<Region> {
    detect_boxes(matrix, config, Connectivity::Face)
        .into_iter()
        .map(|b| Region {
            rows: b[0],
            cols: b[1],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::s;

    fn exact() -> DetectionConfig {
        DetectionConfig {
            smooth_size: 1,
            ..DetectionConfig::default()
        }
    }

    #[test]
    fn all_zero_volume_has_no_events() {
        let volume = Array3::<f64>::zeros((20, 8, 8));
        assert!(detect_events(&volume, &DetectionConfig::default()).is_empty());
    }

    #[test]
    fn rectangular_block_is_one_event() {
        let mut volume = Array3::<f64>::zeros((16, 8, 10));
        volume.slice_mut(s![5..10, 2..4, 3..6]).fill(500.0);
        let events = detect_events(&volume, &exact());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].frames, Span::new(5, 10));
        assert_eq!(events[0].rows, Span::new(2, 4));
        assert_eq!(events[0].cols, Span::new(3, 6));
    }

    #[test]
    fn smoothing_widens_time_bounds() {
        let mut volume = Array3::<f64>::zeros((16, 8, 10));
        volume.slice_mut(s![5..10, 2..4, 3..6]).fill(500.0);
        let events = detect_events(&volume, &DetectionConfig::default());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].frames, Span::new(3, 12));
    }

    #[test]
    fn short_dropout_is_bridged() {
        let mut volume = Array3::<f64>::zeros((20, 6, 6));
        volume.slice_mut(s![4..8, 2..4, 2..4]).fill(400.0);
        volume.slice_mut(s![9..13, 2..4, 2..4]).fill(400.0);
        assert_eq!(detect_events(&volume, &DetectionConfig::default()).len(), 1);
        assert_eq!(detect_events(&volume, &exact()).len(), 2);
    }

    #[test]
    fn separated_feet_in_one_frame() {
        let mut frame = Array2::<f64>::zeros((12, 12));
        frame.slice_mut(s![1..4, 1..3]).fill(700.0);
        frame.slice_mut(s![7..11, 8..11]).fill(700.0);
        let regions = detect_regions(&frame, &exact());
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].rows, Span::new(1, 4));
        assert_eq!(regions[1].cols, Span::new(8, 11));
    }

    #[test]
    fn diagonal_cells_are_separate_regions() {
        let mut frame = Array2::<f64>::zeros((8, 8));
        frame.slice_mut(s![1..3, 1..3]).fill(700.0);
        frame.slice_mut(s![3..5, 3..5]).fill(700.0);
        let regions = detect_regions(&frame, &exact());
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].rows, Span::new(1, 3));
        assert_eq!(regions[1].rows, Span::new(3, 5));
    }

    #[test]
    fn diagonal_steps_join_in_time() {
        let mut volume = Array3::<f64>::zeros((8, 8, 8));
        volume.slice_mut(s![1..3, 1..3, 1..3]).fill(700.0);
        volume.slice_mut(s![3..5, 3..5, 3..5]).fill(700.0);
        let events = detect_events(&volume, &exact());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].frames, Span::new(1, 5));
    }
}
