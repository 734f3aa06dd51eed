pub mod frame_log;
pub mod palette;
pub mod render;
pub mod text;

pub use frame_log::{write_frame_log, FrameLog, FrameLogEntry};
pub use palette::Palette;
pub use render::{heatmap, heel_path, run_footprint, save_png, write_heel_path};
pub use text::{gait_table, metrics_report, run_report, FootNames};
