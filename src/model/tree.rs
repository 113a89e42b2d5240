// src/model/tree.rs
use serde::Deserialize;

/// Regression tree in the flat parallel-array layout scikit-learn exports.
/// Node `i` is a leaf when `children_left[i] == -1`; otherwise rows with
/// `x[feature[i]] <= threshold[i]` go left.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

const LEAF: i64 = -1;

impl Tree {
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Structural checks run once at load time.
    /// Children must point strictly forward, which rules out cycles and lets
    /// `eval` walk without a depth guard.
    pub fn validate(&self, n_features: usize) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".into());
        }
        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err("tree arrays have different lengths".into());
        }

        for i in 0..n {
            let left = self.children_left[i];
            let right = self.children_right[i];

            if left == LEAF {
                if right != LEAF {
                    return Err(format!("node {i} has a right child but no left child"));
                }
                if !self.value[i].is_finite() {
                    return Err(format!("leaf {i} has a non-finite value"));
                }
                continue;
            }

            for child in [left, right] {
                if child <= i as i64 || child >= n as i64 {
                    return Err(format!("node {i} points to invalid child {child}"));
                }
            }

            let feature = self.feature[i];
            if feature < 0 || feature >= n_features as i64 {
                return Err(format!("node {i} splits on unknown feature {feature}"));
            }
            if !self.threshold[i].is_finite() {
                return Err(format!("node {i} has a non-finite threshold"));
            }
        }

        Ok(())
    }

    /// Walk from the root to a leaf. Assumes `validate` passed.
    pub fn eval(&self, x: &[f64]) -> f64 {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                return self.value[node];
            }
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}
