pub mod predictor;
pub mod profile;
pub mod thresholds;
