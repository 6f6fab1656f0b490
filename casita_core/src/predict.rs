//! The prediction capability consumed by the dialogue layer.

use thiserror::Error;

use crate::house::HouseInput;

/// Failures while producing an estimate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("the prediction model is not available: {0}")]
    Unavailable(String),

    #[error("the model produced a non-finite estimate")]
    NonFinite,
}

/// Maps a validated house record to a price estimate in dollars.
///
/// Implementations are synchronous and side-effect-free; the dialogue layer
/// calls this at most once per turn and never retries.
pub trait Predictor: Send + Sync {
    /// Estimate the price of the described house.
    ///
    /// # Errors
    /// Returns a [`PredictError`] when the model cannot produce a usable
    /// number.
    fn predict(&self, input: &HouseInput) -> Result<f64, PredictError>;
}
