use crate::classifiers::classifier::{Classifier, ClassifierError};
use crate::utils::math::sigmoid;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_threshold() -> f64 {
    0.5
}

/// Binary logistic regression: a weighted sum of the features squashed
/// through a sigmoid, thresholded into a 0/1 label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LogisticRegression {
    #[schemars(
        title = "Coefficients",
        description = "One weight per feature, in positional order"
    )]
    pub coefficients: Vec<f64>,

    #[schemars(title = "Intercept")]
    pub intercept: f64,

    #[serde(default = "default_threshold")]
    #[schemars(
        title = "Decision Threshold",
        description = "Probabilities at or above this map to label 1",
        default = "default_threshold"
    )]
    pub threshold: f64,
}

impl LogisticRegression {
    /// Shape coherence check run once at load time.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("logistic regression has no coefficients".into());
        }
        if !self.threshold.is_finite() {
            return Err(format!(
                "decision threshold {} is not finite",
                self.threshold
            ));
        }
        Ok(())
    }
}

impl Classifier for LogisticRegression {
    fn feature_count(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_one(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        if features.len() != self.coefficients.len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        let score = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>();

        Ok(if sigmoid(score) >= self.threshold {
            1.0
        } else {
            0.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(coefficients: Vec<f64>, intercept: f64) -> LogisticRegression {
        LogisticRegression {
            coefficients,
            intercept,
            threshold: default_threshold(),
        }
    }

    #[test]
    fn positive_score_predicts_one() {
        let m = model(vec![1.0, 1.0], 0.0);
        assert_eq!(m.predict_one(&[2.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn negative_score_predicts_zero() {
        let m = model(vec![1.0, 1.0], 0.0);
        assert_eq!(m.predict_one(&[-2.0, -3.0]).unwrap(), 0.0);
    }

    #[test]
    fn zero_score_sits_exactly_on_the_default_threshold() {
        // sigmoid(0) == 0.5, and the comparison is inclusive.
        let m = model(vec![1.0], 0.0);
        assert_eq!(m.predict_one(&[0.0]).unwrap(), 1.0);
    }

    #[test]
    fn custom_threshold_shifts_the_decision() {
        let mut m = model(vec![1.0], 0.0);
        m.threshold = 0.9;
        // sigmoid(1) ~ 0.73 < 0.9
        assert_eq!(m.predict_one(&[1.0]).unwrap(), 0.0);
        assert_eq!(m.predict_one(&[4.0]).unwrap(), 1.0);
    }

    #[test]
    fn rejects_wrong_arity() {
        let m = model(vec![1.0, 1.0, 1.0], 0.0);
        let err = m.predict_one(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::ShapeMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn threshold_defaults_when_absent_from_json() {
        let m: LogisticRegression =
            serde_json::from_value(serde_json::json!({
                "coefficients": [0.5, -0.5],
                "intercept": 0.1
            }))
            .unwrap();
        assert_eq!(m.threshold, 0.5);
    }

    #[test]
    fn validate_flags_empty_coefficients() {
        let m = model(vec![], 0.0);
        assert!(m.validate().is_err());
        assert!(model(vec![1.0], 0.0).validate().is_ok());
    }
}
