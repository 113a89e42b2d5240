// src/model/artifact.rs
use crate::domain::listing::{LOCATIONS, TITLES};
use crate::domain::{FEATURE_COUNT, FEATURE_NAMES};
use crate::model::tree::Tree;
use crate::model::{ModelError, Predictor};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const FORMAT_VERSION: u32 = 1;

/// On-disk model file, as exported by the training pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub encoding: EncodingTable,
    pub estimator: Regressor,
}

/// The category orderings the model was trained with. Shipped with the
/// artifact so a reordered table is caught at load instead of silently
/// mispricing.
#[derive(Debug, Clone, Deserialize)]
pub struct EncodingTable {
    pub version: String,
    pub locations: Vec<String>,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regressor {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    DecisionTree {
        tree: Tree,
    },
    /// Mean of the trees.
    RandomForest {
        trees: Vec<Tree>,
    },
    /// `init + learning_rate * sum(trees)`.
    GradientBoosting {
        init: f64,
        learning_rate: f64,
        trees: Vec<Tree>,
    },
}

impl Regressor {
    pub fn kind(&self) -> &'static str {
        match self {
            Regressor::Linear { .. } => "linear",
            Regressor::DecisionTree { .. } => "decision_tree",
            Regressor::RandomForest { .. } => "random_forest",
            Regressor::GradientBoosting { .. } => "gradient_boosting",
        }
    }

    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        let malformed = |msg: String| ModelError::Malformed(msg);

        match self {
            Regressor::Linear {
                coefficients,
                intercept,
            } => {
                if coefficients.len() != n_features {
                    return Err(malformed(format!(
                        "{} coefficients for {n_features} features",
                        coefficients.len()
                    )));
                }
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(malformed("non-finite coefficient".into()));
                }
            }
            Regressor::DecisionTree { tree } => tree.validate(n_features).map_err(malformed)?,
            Regressor::RandomForest { trees } => {
                if trees.is_empty() {
                    return Err(malformed("random forest has no trees".into()));
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate(n_features)
                        .map_err(|e| malformed(format!("tree {i}: {e}")))?;
                }
            }
            Regressor::GradientBoosting {
                init,
                learning_rate,
                trees,
            } => {
                if !init.is_finite() || !learning_rate.is_finite() {
                    return Err(malformed("non-finite boosting parameters".into()));
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate(n_features)
                        .map_err(|e| malformed(format!("tree {i}: {e}")))?;
                }
            }
        }
        Ok(())
    }

    fn eval(&self, x: &[f64]) -> f64 {
        match self {
            Regressor::Linear {
                coefficients,
                intercept,
            } => intercept + coefficients.iter().zip(x).map(|(c, v)| c * v).sum::<f64>(),
            Regressor::DecisionTree { tree } => tree.eval(x),
            Regressor::RandomForest { trees } => {
                trees.iter().map(|t| t.eval(x)).sum::<f64>() / trees.len() as f64
            }
            Regressor::GradientBoosting {
                init,
                learning_rate,
                trees,
            } => init + learning_rate * trees.iter().map(|t| t.eval(x)).sum::<f64>(),
        }
    }
}

/// A validated artifact, ready to serve predictions.
#[derive(Debug, Clone)]
pub struct RegressionModel {
    regressor: Regressor,
    encoding_version: String,
}

impl RegressionModel {
    /// Check an artifact against the feature layout and category tables this
    /// app encodes with.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        if artifact.format_version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion(artifact.format_version));
        }

        if artifact.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                found: artifact.feature_names,
            });
        }

        let enc = &artifact.encoding;
        check_table("locations", &enc.locations, &LOCATIONS).map_err(|detail| {
            ModelError::EncodingMismatch {
                version: enc.version.clone(),
                detail,
            }
        })?;
        check_table("titles", &enc.titles, &TITLES).map_err(|detail| {
            ModelError::EncodingMismatch {
                version: enc.version.clone(),
                detail,
            }
        })?;

        artifact.estimator.validate(FEATURE_COUNT)?;

        Ok(Self {
            regressor: artifact.estimator,
            encoding_version: artifact.encoding.version,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.regressor.kind()
    }

    pub fn encoding_version(&self) -> &str {
        &self.encoding_version
    }
}

fn check_table(name: &str, found: &[String], expected: &[&str]) -> Result<(), String> {
    if found.len() != expected.len() {
        return Err(format!(
            "{name}: {} entries, expected {}",
            found.len(),
            expected.len()
        ));
    }
    match found.iter().zip(expected).position(|(f, e)| f != e) {
        Some(i) => Err(format!(
            "{name}[{i}] is '{}', expected '{}'",
            found[i], expected[i]
        )),
        None => Ok(()),
    }
}

impl Predictor for RegressionModel {
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != FEATURE_COUNT {
            return Err(ModelError::Arity {
                expected: FEATURE_COUNT,
                got: features.len(),
            });
        }
        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(ModelError::NonFiniteInput { index });
        }

        let y = self.regressor.eval(features);
        if !y.is_finite() {
            return Err(ModelError::NonFiniteOutput(y));
        }
        Ok(vec![y])
    }
}

/// Read, parse and validate the model file at `path`.
pub fn load_model(path: impl AsRef<Path>) -> Result<RegressionModel, ModelError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact: ModelArtifact = serde_json::from_str(&raw)?;

    RegressionModel::from_artifact(artifact)
}
