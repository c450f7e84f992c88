pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::profile::ApplicantProfile;
use crate::model::thresholds::{Bucket, Severity};
use crate::pipeline::stage4_nearest::NearestMatch;

pub const METER_WIDTH: usize = 40;

#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
}

/// Model prediction next to the closest reference outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonChart {
    pub bars: [ChartBar; 2],
}

impl ComparisonChart {
    pub fn new(predicted: f64, nearest: f64) -> Self {
        Self {
            bars: [
                ChartBar {
                    label: "Model Prediction",
                    value: predicted,
                },
                ChartBar {
                    label: "Nearest Match",
                    value: nearest,
                },
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub tool_name: String,
    pub tool_version: String,
    pub model_name: String,
    pub dataset: Option<String>,

    pub profile: ApplicantProfile,
    pub raw_prediction: f64,

    pub percentage: f64,
    pub percent_label: String,
    pub bucket: Bucket,
    pub color: &'static str,
    pub severity: Severity,
    pub message: String,

    pub nearest: Option<NearestMatch>,
    pub comparison: Option<ComparisonChart>,
}

/// Rounds half away from zero to two decimals; negative zero becomes zero.
pub fn round2(v: f64) -> f64 {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 { 0.0 } else { r }
}

/// Float form that always keeps a decimal: 84.5, 60.0, 69.99.
pub fn format_percent(v: f64) -> String {
    format!("{:?}", v)
}

/// Bare form for values pinned to a range end: 0, 100.
pub fn format_saturated_percent(v: f64) -> String {
    format!("{}", v)
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Horizontal bar of `width` cells filled in proportion to `percentage`.
pub fn bar(percentage: f64, width: usize) -> String {
    let filled = filled_cells(percentage, width);
    let mut out = String::with_capacity(width);
    for i in 0..width {
        out.push(if i < filled { '#' } else { '.' });
    }
    out
}

pub fn filled_cells(percentage: f64, width: usize) -> usize {
    if !percentage.is_finite() || percentage <= 0.0 {
        return 0;
    }
    let cells = (percentage.min(100.0) / 100.0 * width as f64).round() as usize;
    cells.min(width)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
