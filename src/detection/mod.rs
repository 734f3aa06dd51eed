pub mod blobs;
pub mod config;
pub mod correction;
pub mod filter;
pub mod morphology;

pub use blobs::{detect_events, detect_regions};
pub use config::DetectionConfig;
pub use correction::{correct_event, correct_events};
