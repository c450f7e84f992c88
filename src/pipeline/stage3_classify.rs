use serde::Serialize;

use crate::model::thresholds::{Bucket, BucketThresholds};
use crate::report::{format_percent, format_saturated_percent, round2};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub percentage: f64,
    pub bucket: Bucket,
    /// True when the rounded value fell outside the percent range and was pinned.
    #[serde(skip)]
    pub saturated: bool,
}

impl PredictionResult {
    pub fn percent_label(&self) -> String {
        if self.saturated {
            format_saturated_percent(self.percentage)
        } else {
            format_percent(self.percentage)
        }
    }

    pub fn message(&self) -> String {
        self.bucket.message(&self.percent_label())
    }
}

pub fn run_stage3(raw: f64, thresholds: &BucketThresholds) -> PredictionResult {
    let percentage = to_percentage(raw, thresholds);
    PredictionResult {
        percentage,
        bucket: classify(percentage, thresholds),
        saturated: is_saturated(raw, thresholds),
    }
}

/// Zero itself counts as pinned to the floor; the ceiling is pinned only
/// when exceeded.
pub fn is_saturated(raw: f64, thresholds: &BucketThresholds) -> bool {
    if raw.is_nan() {
        return true;
    }
    let rounded = round2(raw * 100.0);
    rounded <= thresholds.percent_min || rounded > thresholds.percent_max
}

/// Scales a fraction to a percentage rounded to two decimals, then clamps.
pub fn to_percentage(raw: f64, thresholds: &BucketThresholds) -> f64 {
    if raw.is_nan() {
        return thresholds.percent_min;
    }
    round2(raw * 100.0).clamp(thresholds.percent_min, thresholds.percent_max)
}

pub fn classify(percentage: f64, thresholds: &BucketThresholds) -> Bucket {
    if percentage >= thresholds.high_min {
        Bucket::High
    } else if percentage >= thresholds.moderate_min {
        Bucket::Moderate
    } else {
        Bucket::Low
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
