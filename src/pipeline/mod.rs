pub mod stage1_validate;
pub mod stage2_predict;
pub mod stage3_classify;
pub mod stage4_nearest;
pub mod stage5_report;

use thiserror::Error;

use crate::input::ReferenceTable;
use crate::model::predictor::Predictor;
use crate::model::profile::{ApplicantProfile, RawProfile};
use crate::model::thresholds::BucketThresholds;
use stage1_validate::{ValidationError, validate};
use stage2_predict::run_stage2;
use stage3_classify::{PredictionResult, run_stage3};
use stage4_nearest::{NearestMatch, NearestMatchError, run_stage4};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NearestMatch(#[from] NearestMatchError),
}

#[derive(Debug, Clone)]
pub struct ScoringOutcome {
    pub profile: ApplicantProfile,
    pub raw_prediction: f64,
    pub result: PredictionResult,
    pub nearest: Option<NearestMatch>,
}

/// Scores one request against resources owned by the caller.
pub struct ScoringPipeline<'a> {
    predictor: &'a dyn Predictor,
    reference: Option<&'a ReferenceTable>,
    thresholds: BucketThresholds,
}

impl<'a> ScoringPipeline<'a> {
    pub fn new(predictor: &'a dyn Predictor, thresholds: BucketThresholds) -> Self {
        Self {
            predictor,
            reference: None,
            thresholds,
        }
    }

    pub fn with_reference(mut self, table: &'a ReferenceTable) -> Self {
        self.reference = Some(table);
        self
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn score(&self, raw: &RawProfile) -> Result<ScoringOutcome, ScoringError> {
        let profile = validate(raw)?;

        let raw_prediction = run_stage2(self.predictor, &profile);
        if !(0.0..=1.0).contains(&raw_prediction) {
            crate::warn!(
                "raw prediction {} from '{}' is outside [0, 1]; percentage will be clamped",
                raw_prediction,
                self.predictor.name()
            );
        }
        let result = run_stage3(raw_prediction, &self.thresholds);

        let nearest = match self.reference {
            Some(table) => Some(run_stage4(&profile, table)?),
            None => None,
        };

        crate::info!(
            "scored applicant: percentage={} bucket={:?} nearest={}",
            result.percent_label(),
            result.bucket,
            nearest
                .as_ref()
                .map(|m| format!("row {} ({}%)", m.index, m.outcome_percentage))
                .unwrap_or_else(|| "n/a".to_string())
        );

        Ok(ScoringOutcome {
            profile,
            raw_prediction,
            result,
            nearest,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
