use serde::Serialize;

use crate::model::profile::ApplicantProfile;
use crate::model::thresholds::{Bucket, Severity};
use crate::report::{ComparisonChart, ReportContext};

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct PredictionBlock<'a> {
    model: &'a str,
    raw: f64,
    percentage: f64,
    bucket: Bucket,
    color: &'a str,
    severity: Severity,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct NearestBlock<'a> {
    dataset: Option<&'a str>,
    row: usize,
    squared_distance: f64,
    profile: &'a ApplicantProfile,
    outcome_percentage: f64,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: ToolMeta<'a>,
    input: &'a ApplicantProfile,
    prediction: PredictionBlock<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nearest_match: Option<NearestBlock<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<&'a ComparisonChart>,
}

pub fn render_summary_json(ctx: &ReportContext) -> serde_json::Result<String> {
    let summary = Summary {
        tool: ToolMeta {
            name: &ctx.tool_name,
            version: &ctx.tool_version,
        },
        input: &ctx.profile,
        prediction: PredictionBlock {
            model: &ctx.model_name,
            raw: ctx.raw_prediction,
            percentage: ctx.percentage,
            bucket: ctx.bucket,
            color: ctx.color,
            severity: ctx.severity,
            message: &ctx.message,
        },
        nearest_match: ctx.nearest.as_ref().map(|m| NearestBlock {
            dataset: ctx.dataset.as_deref(),
            row: m.index + 1,
            squared_distance: m.distance,
            profile: &m.record.profile,
            outcome_percentage: m.outcome_percentage,
        }),
        comparison: ctx.comparison.as_ref(),
    };
    serde_json::to_string_pretty(&summary)
}
