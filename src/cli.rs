//! Command-line surface.
//!
//! ```bash
//! # metrics for a consolidated recording, asking for foot labels per run
//! gaitmat analyze walk.json --source consolidator
//!
//! # fixed labels, heel-path images and a JSON dump
//! gaitmat analyze walk.json --source sensing-mat --foot-one left \
//!     --images out/ --json out/metrics.json
//!
//! # per-frame region log
//! gaitmat frames walk.json --source consolidator --out log/
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::{
    labels::{ConsolePrompt, FixedLabeler, FootLabeler},
    models::FootSide,
    pipeline::{self, Analysis, Outcome},
    recording::{load_recording, LoadOptions, SourceKind},
    report::{self, FootNames},
    settings::AnalysisSettings,
};

const ENABLE_LOGS: bool = true;

use crate::log_info;

#[derive(Parser, Debug)]
#[command(name = "gaitmat")]
#[command(author, version, about = "Gait metrics from pressure-sensing mat recordings")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect contacts and compute cadence, stride and gait metrics
    Analyze(AnalyzeArgs),

    /// Render every contact region of every frame, with a JSON index
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Recording file (JSON with a `pressureData` array)
    pub file: PathBuf,

    /// Which device wrote the recording; selects the orientation fix
    #[arg(long, value_enum)]
    pub source: SourceKind,

    /// Settings file; missing keys keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Side of positional foot one for every run, instead of asking
    #[arg(long, value_enum)]
    pub foot_one: Option<FootSide>,

    /// Write the full analysis as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Directory for per-run heel path images
    #[arg(long)]
    pub images: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FramesArgs {
    /// Recording file (JSON with a `pressureData` array)
    pub file: PathBuf,

    #[arg(long, value_enum)]
    pub source: SourceKind,

    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for region images and `index.json`
    #[arg(long)]
    pub out: PathBuf,
}

fn load_settings(path: Option<&Path>) -> Result<AnalysisSettings> {
    match path {
        Some(path) => AnalysisSettings::load(path),
        None => Ok(AnalysisSettings::default()),
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => analyze(args),
        Commands::Frames(args) => frames(args),
    }
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let mut settings = load_settings(args.config.as_deref())?;
    if args.foot_one.is_some() {
        settings.labels.foot_one = args.foot_one;
    }

    let recording = load_recording(
        &args.file,
        LoadOptions {
            source: args.source,
            clamp_below: settings.recording.metrics_clamp,
        },
    )?;

    let fixed = settings.labels.foot_one;
    let mut labeler: Box<dyn FootLabeler> = match fixed {
        Some(side) => Box::new(FixedLabeler(side)),
        None => Box::new(ConsolePrompt::stdio()),
    };
    let analysis = pipeline::analyze(&recording, &settings, labeler.as_mut())?;

    print_analysis(&analysis, fixed.is_some());

    if let Some(dir) = &args.images {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        let volume = recording.volume();
        for run in analysis.runs() {
            let path = dir.join(format!("run_{}_heel_path.png", run.run.index + 1));
            report::write_heel_path(&volume, run, &path)?;
            log_info!("Wrote {}", path.display());
        }
    }

    if let Some(path) = &args.json {
        let serialized = serde_json::to_string_pretty(&analysis)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write metrics to {}", path.display()))?;
        log_info!("Wrote {}", path.display());
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis, labels_fixed: bool) {
    match &analysis.outcome {
        Outcome::NoActivity => println!("No activity found; metrics cannot be calculated for this data"),
        Outcome::Single { run } => println!("{}", report::run_report(run)),
        Outcome::Multi { runs, consolidated } => {
            // the console prompt has already shown each run
            if labels_fixed {
                for run in runs {
                    println!("{}", report::run_report(run));
                }
            }
            println!("\n{}", report::metrics_report(consolidated, FootNames::Sided));
        }
    }
}

fn frames(args: FramesArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let recording = load_recording(
        &args.file,
        LoadOptions {
            source: args.source,
            clamp_below: settings.recording.report_clamp,
        },
    )?;
    let name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    report::write_frame_log(&recording, &settings.detection, &name, &args.out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze() {
        let cli = Cli::try_parse_from([
            "gaitmat",
            "analyze",
            "walk.json",
            "--source",
            "sensing-mat",
            "--foot-one",
            "right",
            "--json",
            "out.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.source, SourceKind::SensingMat);
                assert_eq!(args.foot_one, Some(FootSide::Right));
                assert_eq!(args.json, Some(PathBuf::from("out.json")));
                assert!(args.images.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn source_is_required() {
        assert!(Cli::try_parse_from(["gaitmat", "analyze", "walk.json"]).is_err());
    }

    #[test]
    fn parses_frames() {
        let cli = Cli::try_parse_from([
            "gaitmat", "frames", "walk.json", "--source", "consolidator", "--out", "log",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Frames(ref a) if a.out == PathBuf::from("log")));
    }
}
