pub mod cli;
pub mod detection;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod recording;
pub mod report;
pub mod segmentation;
pub mod settings;
mod utils;

use clap::Parser;

pub use error::AnalysisError;
pub use pipeline::{analyze, Analysis, Outcome};
pub use settings::AnalysisSettings;

pub fn run() -> anyhow::Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    cli::execute(cli::Cli::parse())
}
