pub mod algorithm;
pub mod config;

pub use algorithm::{assign_events, segment_runs};
pub use config::SegmentationConfig;
