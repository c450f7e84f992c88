use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::pipeline::ScoringOutcome;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ComparisonChart, ReportContext, format_f64_2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub outcome: &'a ScoringOutcome,
    pub model_name: String,
    pub dataset: Option<String>,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn build_report_context(input: &Stage5Input<'_>) -> ReportContext {
    let outcome = input.outcome;
    let result = &outcome.result;
    let comparison = outcome
        .nearest
        .as_ref()
        .map(|m| ComparisonChart::new(result.percentage, m.outcome_percentage));

    ReportContext {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        model_name: input.model_name.clone(),
        dataset: input.dataset.clone(),
        profile: outcome.profile,
        raw_prediction: outcome.raw_prediction,
        percentage: result.percentage,
        percent_label: result.percent_label(),
        bucket: result.bucket,
        color: result.bucket.color(),
        severity: result.bucket.severity(),
        message: result.message(),
        nearest: outcome.nearest,
        comparison,
    }
}

pub fn render(ctx: &ReportContext, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(render_report_text(ctx)),
        OutputFormat::Json => Ok(render_summary_json(ctx)?),
    }
}

pub fn write_reports(ctx: &ReportContext, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(ctx))?;

    let summary_path = out_dir.join("prediction.json");
    write_text(&summary_path, &render_summary_json(ctx)?)?;

    if let Some(chart) = &ctx.comparison {
        let comparison_path = out_dir.join("comparison.tsv");
        write_comparison_tsv(chart, &comparison_path)?;
    }

    crate::info!("wrote reports to {}", out_dir.display());
    Ok(())
}

fn write_comparison_tsv(chart: &ComparisonChart, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "series\tpercentage")?;
    for b in &chart.bars {
        writeln!(w, "{}\t{}", b.label, format_f64_2(b.value))?;
    }
    w.flush()
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

/// One-line form used in logs and the CLI exit summary.
pub fn headline(ctx: &ReportContext) -> String {
    format!(
        "{}% ({:?}, {})",
        ctx.percent_label,
        ctx.bucket,
        ctx.color
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
