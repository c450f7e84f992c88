use std::path::Path;

use crate::input::InputError;
use crate::model::predictor::LinearModel;
use crate::model::profile::FEATURE_COUNT;

pub fn load_linear_model(path: &Path) -> Result<LinearModel, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let model: LinearModel =
        serde_json::from_str(&text).map_err(|source| InputError::Json {
            path: path.display().to_string(),
            source,
        })?;

    if model.coefficients.len() != FEATURE_COUNT {
        return Err(InputError::InvalidInput(format!(
            "model {} has {} coefficients, expected {}",
            path.display(),
            model.coefficients.len(),
            FEATURE_COUNT
        )));
    }
    if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
        return Err(InputError::InvalidInput(format!(
            "model {} contains non-finite weights",
            path.display()
        )));
    }

    crate::info!("loaded model '{}' from {}", model.model_name, path.display());
    Ok(model)
}
