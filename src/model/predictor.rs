use serde::{Deserialize, Serialize};

use crate::model::profile::FeatureVector;

/// Anything that maps a packed applicant feature vector to a raw score.
pub trait Predictor {
    fn name(&self) -> &str {
        "anonymous"
    }

    fn predict(&self, features: &FeatureVector) -> f64;
}

impl<F> Predictor for F
where
    F: Fn(&FeatureVector) -> f64,
{
    fn predict(&self, features: &FeatureVector) -> f64 {
        self(features)
    }
}

/// Ordinary least squares model exported as plain weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub model_name: String,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Predictor for LinearModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn predict(&self, features: &FeatureVector) -> f64 {
        let dot = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>();
        self.intercept + dot
    }
}
