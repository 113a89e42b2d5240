// src/prediction.rs
use crate::domain::{encode, Estimate, ListingRequest, PricingRules};
use crate::model::{ModelError, Predictor};
use thiserror::Error;

/// Why a price could not be shown. Both variants are rendered inline on the
/// page rather than as an error response.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Model is not loaded. Please upload the model file.")]
    ModelUnavailable,

    #[error("An error occurred: {0}")]
    Value(#[from] ModelError),
}

/// Encodes a request, runs the model and formats the result.
#[derive(Debug, Clone, Default)]
pub struct PriceEstimator {
    pub rules: PricingRules,
    /// Value for the fifth model column the form does not collect.
    pub placeholder_feature: f64,
}

impl PriceEstimator {
    pub fn new(rules: PricingRules, placeholder_feature: f64) -> Self {
        Self {
            rules,
            placeholder_feature,
        }
    }

    pub fn estimate(
        &self,
        model: Option<&dyn Predictor>,
        request: ListingRequest,
    ) -> Result<Estimate, PredictError> {
        let Some(model) = model else {
            return Err(PredictError::ModelUnavailable);
        };

        let features = encode(&request, self.placeholder_feature).to_array();
        let output = model.predict(&features)?;
        let raw_price = *output.first().ok_or(ModelError::EmptyOutput)?;

        if !raw_price.is_finite() {
            return Err(ModelError::NonFiniteOutput(raw_price).into());
        }

        Ok(self.rules.estimate(request, raw_price))
    }
}
