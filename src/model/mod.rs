//! Price model seam.
//!
//! The trained regressor lives outside this crate. It is shipped as a JSON
//! artifact (see `artifact`) and exposed to the rest of the app only through
//! the `Predictor` trait, so handlers and tests never care what kind of
//! estimator is behind it.

pub mod artifact;
pub mod tree;

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub use artifact::load_model;

/// Anything that can turn one encoded feature row into predictions.
pub trait Predictor: Send + Sync {
    /// Number of input columns the model was trained with.
    fn n_features(&self) -> usize;

    /// Predict for a single row. The first element is the price.
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// Shared, read-only handle to the loaded model.
pub type ModelHandle = Arc<dyn Predictor>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file '{0}' not found")]
    NotFound(PathBuf),

    #[error("failed to read model file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model file is not a valid artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported model format version {0}")]
    UnsupportedVersion(u32),

    #[error("model expects features {found:?}, this app sends {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("encoding table {version} does not match the app: {detail}")]
    EncodingMismatch { version: String, detail: String },

    #[error("malformed estimator: {0}")]
    Malformed(String),

    #[error("expected {expected} features, got {got}")]
    Arity { expected: usize, got: usize },

    #[error("feature {index} is not a finite number")]
    NonFiniteInput { index: usize },

    #[error("model produced no output")]
    EmptyOutput,

    #[error("model produced a non-finite price ({0})")]
    NonFiniteOutput(f64),
}
