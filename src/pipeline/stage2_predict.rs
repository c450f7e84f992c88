use crate::model::predictor::Predictor;
use crate::model::profile::ApplicantProfile;

pub fn run_stage2(predictor: &dyn Predictor, profile: &ApplicantProfile) -> f64 {
    let features = profile.features();
    predictor.predict(&features)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_predict.rs"]
mod tests;
