//! Linear regression over the four house features.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use casita_core::{HouseInput, PredictError, Predictor};

/// Why model parameters could not be loaded.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("model file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected 4 feature weights, found {found}")]
    Shape { found: usize },
}

/// On-disk form of the model parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    /// Weights for rooms, size, income, population, in that order.
    pub weights: Vec<f64>,
    /// Intercept added to the weighted sum.
    pub intercept: f64,
}

/// A fitted linear model: estimate = weights · features + intercept.
#[derive(Debug, Clone)]
pub struct LinearModel {
    weights: [f64; 4],
    intercept: f64,
}

impl LinearModel {
    /// Build a model from already-validated parameters.
    #[must_use]
    pub const fn new(weights: [f64; 4], intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Load model parameters from a JSON file.
    ///
    /// # Errors
    /// Returns a [`ModelError`] when the file cannot be read, parsed, or
    /// has the wrong number of weights.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path)?;
        let file: ModelFile = serde_json::from_str(&raw)?;
        let model = Self::try_from(file)?;
        info!(path = %path.display(), "prediction model loaded");
        Ok(model)
    }
}

impl TryFrom<ModelFile> for LinearModel {
    type Error = ModelError;

    fn try_from(file: ModelFile) -> Result<Self, ModelError> {
        let found = file.weights.len();
        let weights: [f64; 4] = file
            .weights
            .try_into()
            .map_err(|_| ModelError::Shape { found })?;
        Ok(Self::new(weights, file.intercept))
    }
}

impl Predictor for LinearModel {
    fn predict(&self, input: &HouseInput) -> Result<f64, PredictError> {
        let weighted: f64 = self
            .weights
            .iter()
            .zip(input.features())
            .map(|(weight, feature)| weight * feature)
            .sum();
        let estimate = weighted + self.intercept;

        if !estimate.is_finite() {
            return Err(PredictError::NonFinite);
        }

        // A linear fit can dip below zero for tiny inputs.
        Ok(estimate.max(0.0))
    }
}

/// Demo parameters fitted offline against California housing data.
#[must_use]
pub fn default_model() -> ModelFile {
    ModelFile {
        weights: vec![1800.0, 58.0, 5.9, -2.4],
        intercept: 52_000.0,
    }
}

/// Write the demo parameter file, as `casita init` does.
///
/// # Errors
/// Returns a [`ModelError`] when the file cannot be written.
pub fn write_default_model(path: &Path) -> Result<(), ModelError> {
    let file = default_model();
    fs::write(path, serde_json::to_string_pretty(&file)?)?;
    info!(path = %path.display(), "default model written");
    Ok(())
}
