//! Binary logistic regression over sparse TF-IDF features
//!
//! L2-regularised with a fitted intercept, trained by full-batch gradient
//! descent on the mean log-loss.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::vectorizer::SparseVector;
use crate::error::{NewsError, Result};

/// Training hyper-parameters
#[derive(Debug, Clone)]
pub struct LogisticRegressionParams {
    /// Inverse regularisation strength
    pub c: f64,
    /// Iteration cap
    pub max_iter: usize,
    /// Stop once the largest gradient component falls below this
    pub tol: f64,
    /// Gradient descent step size
    pub learning_rate: f64,
}

impl Default for LogisticRegressionParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            max_iter: 1000,
            tol: 1e-4,
            learning_rate: 1.0,
        }
    }
}

/// Fitted binary classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    intercept: f64,
    /// Iterations run during fitting
    pub n_iter: usize,
    /// Whether fitting met the tolerance before the iteration cap
    #[serde(default)]
    pub converged: bool,
}

impl LogisticRegression {
    /// Fit on `samples` against class labels (0 or 1)
    pub fn fit(
        samples: &[SparseVector],
        labels: &[u8],
        n_features: usize,
        params: &LogisticRegressionParams,
    ) -> Result<Self> {
        if samples.len() != labels.len() {
            return Err(NewsError::Dataset(format!(
                "{} samples but {} labels",
                samples.len(),
                labels.len()
            )));
        }
        if !labels.contains(&0) || !labels.contains(&1) {
            return Err(NewsError::Dataset(
                "training data must contain both classes".to_string(),
            ));
        }
        if let Some(&(index, _)) = samples.iter().flatten().find(|(i, _)| *i >= n_features) {
            return Err(NewsError::Dataset(format!(
                "feature index {} out of range for {} features",
                index, n_features
            )));
        }

        let n = samples.len() as f64;
        let reg = 1.0 / (params.c * n);

        let mut model = Self {
            weights: vec![0.0; n_features],
            intercept: 0.0,
            n_iter: 0,
            converged: false,
        };
        let mut grad_w = vec![0.0; n_features];

        for iteration in 1..=params.max_iter {
            grad_w.iter_mut().for_each(|g| *g = 0.0);
            let mut grad_b = 0.0;

            for (x, &y) in samples.iter().zip(labels) {
                let residual = sigmoid(model.decision_function(x)) - y as f64;
                for &(index, value) in x {
                    grad_w[index] += residual * value;
                }
                grad_b += residual;
            }

            let mut max_grad = (grad_b / n).abs();
            for (g, w) in grad_w.iter_mut().zip(&model.weights) {
                *g = *g / n + reg * w;
                max_grad = max_grad.max(g.abs());
            }

            for (w, g) in model.weights.iter_mut().zip(&grad_w) {
                *w -= params.learning_rate * g;
            }
            model.intercept -= params.learning_rate * grad_b / n;
            model.n_iter = iteration;

            if max_grad < params.tol {
                model.converged = true;
                break;
            }
        }

        if !model.converged {
            warn!(
                "Logistic regression did not converge in {} iterations; consider raising max_iter",
                params.max_iter
            );
        }

        Ok(model)
    }

    /// Signed distance to the decision boundary
    pub fn decision_function(&self, x: &SparseVector) -> f64 {
        x.iter()
            .filter_map(|&(index, value)| self.weights.get(index).map(|w| w * value))
            .sum::<f64>()
            + self.intercept
    }

    /// Class probabilities `[P(class 0), P(class 1)]`
    pub fn predict_proba(&self, x: &SparseVector) -> [f64; 2] {
        let p1 = sigmoid(self.decision_function(x));
        [1.0 - p1, p1]
    }

    /// Most probable class
    pub fn predict(&self, x: &SparseVector) -> u8 {
        if self.decision_function(x) > 0.0 {
            1
        } else {
            0
        }
    }

    /// Number of input features the model was trained on
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
