// src/app.rs
use crate::config::AppConfig;
use crate::model::{load_model, ModelError, ModelHandle, Predictor};
use crate::prediction::PriceEstimator;
use crate::session::SessionStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Everything a request handler needs, built once at startup and shared
/// across astra's worker threads.
pub struct App {
    model: Option<ModelHandle>,
    /// Why the model is missing, shown as a banner on every page.
    model_error: Option<String>,
    pub estimator: PriceEstimator,
    pub sessions: SessionStore,
    pub feedback_path: PathBuf,
}

impl App {
    pub fn new(
        model: Result<ModelHandle, ModelError>,
        estimator: PriceEstimator,
        feedback_path: PathBuf,
        sessions: SessionStore,
    ) -> Self {
        let (model, model_error) = match model {
            Ok(m) => (Some(m), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            model,
            model_error,
            estimator,
            sessions,
            feedback_path,
        }
    }

    /// Load the model named in `cfg` and wire up the app. A model that fails
    /// to load is logged and leaves predictions disabled.
    pub fn from_config(cfg: &AppConfig) -> Self {
        let model = load_model(&cfg.model.path).map(|m| {
            info!(
                path = %cfg.model.path.display(),
                kind = m.kind(),
                features = m.n_features(),
                encoding = m.encoding_version(),
                "Model loaded"
            );
            Arc::new(m) as ModelHandle
        });

        if let Err(e) = &model {
            error!(path = %cfg.model.path.display(), error = %e, "Model unavailable, predictions disabled");
        }

        let estimator = PriceEstimator::new(cfg.pricing.rules(), cfg.pricing.placeholder_feature);

        Self::new(
            model,
            estimator,
            cfg.feedback.path.clone(),
            SessionStore::new(cfg.server.session_idle_secs, cfg.server.max_sessions),
        )
    }

    pub fn model(&self) -> Option<&dyn Predictor> {
        self.model.as_deref()
    }

    pub fn model_error(&self) -> Option<&str> {
        self.model_error.as_deref()
    }
}
