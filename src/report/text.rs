//! Plain-text reports: gait timeline, per-foot summaries, run banners.

use crate::{
    metrics::{Computed, GaitAnalysis, GaitSummary, Metrics, RunMetrics, StrideSummary},
    models::Foot,
};

/// How per-foot slots are named in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootNames {
    /// Before labelling: "Foot 1" / "Foot 2".
    Positional,
    /// After labelling slot one holds the left foot.
    Sided,
}

impl FootNames {
    pub fn name(&self, foot: Foot) -> &'static str {
        match (self, foot) {
            (FootNames::Positional, Foot::One) => "Foot 1",
            (FootNames::Positional, Foot::Two) => "Foot 2",
            (FootNames::Sided, Foot::One) => "Left",
            (FootNames::Sided, Foot::Two) => "Right",
        }
    }
}

const RULE_WIDTH: usize = 112;

fn banner(title: &str) -> String {
    let rule = "-".repeat(title.len() + 4);
    format!("{rule}\n| {title} |\n{rule}\n")
}

fn or_dash(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

/// One line per entry, each newline-terminated.
fn lines<I: IntoIterator<Item = String>>(items: I) -> String {
    items.into_iter().map(|line| line + "\n").collect()
}

/// Stance and swing rows in event order.
pub fn gait_table(gait: &GaitAnalysis) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let header = format!(
        "| {:>12} | {:>12} | {:>12} | {:<6} | {:<4} | {:<47} |",
        "Start", "End", "Duration", "Phase", "Foot", "Timestamp"
    );
    let rows = gait.phases.iter().map(|phase| {
        let stamps = format!("{} - {}", phase.from_label, phase.to_label);
        format!(
            "| {:>12.8} | {:>12.8} | {:>12.8} | {:<6} | {:<4} | {:<47} |",
            phase.start_secs,
            phase.end_secs,
            phase.duration_secs,
            phase.phase.as_str(),
            phase.foot,
            stamps
        )
    });

    lines(
        [rule.clone(), header, rule.clone()]
            .into_iter()
            .chain(rows)
            .chain(std::iter::once(rule)),
    )
}

pub fn gait_summary(summary: &Computed<GaitSummary>, names: FootNames) -> String {
    let summary = match summary {
        Computed::Ready(summary) => summary,
        Computed::Insufficient(reason) => return format!("Gait: {reason}\n"),
    };

    let header = format!(
        "{:<8} {:>7} {:>18} {:>18} {:>16}",
        "", "Cycles", "Avg. Stance (s)", "Avg. Swing (s)", "Stance | Swing %"
    );
    let rows = [Foot::One, Foot::Two].into_iter().map(|foot| {
        format!(
            "{:<8} {:>7} {:>18.8} {:>18.8} {:>7.2} | {:<6.2}",
            names.name(foot),
            summary.cycles.get(foot),
            summary.avg_stance_secs.get(foot),
            summary.avg_swing_secs.get(foot),
            summary.stance_percent.get(foot),
            summary.swing_percent(foot)
        )
    });
    lines(std::iter::once(header).chain(rows))
}

pub fn stride_summary(summary: &Computed<StrideSummary>, names: FootNames) -> String {
    let summary = match summary {
        Computed::Ready(summary) => summary,
        Computed::Insufficient(reason) => return format!("Stride: {reason}\n"),
    };

    lines([Foot::One, Foot::Two].into_iter().map(|foot| {
        format!(
            "Avg. Stride Length of {:<6}: {:>10} cm\tAvg. Stride Velocity of {:<6}: {:>10} cm/s",
            names.name(foot),
            or_dash(*summary.length.get(foot), 4),
            names.name(foot),
            or_dash(*summary.velocity.get(foot), 4)
        )
    }))
}

pub fn cadence_line(cadence: &Computed<f64>) -> String {
    match cadence {
        Computed::Ready(value) => format!("Cadence: {value:.4} steps/min\n"),
        Computed::Insufficient(reason) => format!("Cadence: {reason}\n"),
    }
}

/// Banner, cadence, stride, gait timeline and summary of one run.
pub fn run_report(run: &RunMetrics) -> String {
    let names = match run.foot_one_side {
        Some(_) => FootNames::Sided,
        None => FootNames::Positional,
    };

    [
        banner(&format!("Run {}", run.run.index + 1)),
        format!(
            "Frames {}..{}, {} contacts\n\n",
            run.run.frames.start, run.run.frames.stop, run.event_count
        ),
        cadence_line(&run.cadence),
        stride_summary(&run.stride.summary, names),
        gait_table(&run.gait),
        gait_summary(&run.gait.summary, names),
    ]
    .concat()
}

/// Recording-level block printed after every run has been labelled.
pub fn metrics_report(metrics: &Metrics, names: FootNames) -> String {
    [
        banner("Consolidated Metrics"),
        format!(
            "{} runs, {:.4} s of walking\n\n",
            metrics.run_count, metrics.total_duration_secs
        ),
        cadence_line(&metrics.cadence),
        stride_summary(&metrics.stride, names),
        "\n".to_string(),
        gait_summary(&metrics.gait, names),
    ]
    .concat()
}
