use crate::classifiers::classifier::{Classifier, ClassifierError};
use crate::utils::math::ln_gaussian_pdf;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Gaussian naive Bayes over independent numeric features.
///
/// Each class carries a prior and one Gaussian per feature; prediction
/// is the argmax of the per-class log-joint. Class index doubles as the
/// predicted label, so a two-class model emits 0 or 1.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GaussianNaiveBayes {
    #[schemars(title = "Class Priors", description = "One prior per class")]
    pub class_priors: Vec<f64>,

    #[schemars(title = "Means", description = "Per-class feature means")]
    pub means: Vec<Vec<f64>>,

    #[schemars(title = "Variances", description = "Per-class feature variances")]
    pub variances: Vec<Vec<f64>>,
}

/// Priors of zero would put -inf into every score of that class; the
/// floor keeps the class merely improbable.
const MIN_PRIOR: f64 = 1e-12;

impl GaussianNaiveBayes {
    /// Shape coherence check run once at load time.
    pub fn validate(&self) -> Result<(), String> {
        let classes = self.class_priors.len();
        if classes == 0 {
            return Err("gaussian naive bayes has no classes".into());
        }
        if self.means.len() != classes || self.variances.len() != classes {
            return Err(format!(
                "{} priors but {} mean rows and {} variance rows",
                classes,
                self.means.len(),
                self.variances.len()
            ));
        }
        let arity = self.means[0].len();
        if arity == 0 {
            return Err("gaussian naive bayes has no features".into());
        }
        for (c, (m, v)) in self.means.iter().zip(&self.variances).enumerate() {
            if m.len() != arity || v.len() != arity {
                return Err(format!("class {c} rows do not all have {arity} features"));
            }
        }
        Ok(())
    }
}

impl Classifier for GaussianNaiveBayes {
    fn feature_count(&self) -> usize {
        self.means.first().map_or(0, Vec::len)
    }

    fn predict_one(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        let arity = self.feature_count();
        if features.len() != arity {
            return Err(ClassifierError::ShapeMismatch {
                expected: arity,
                got: features.len(),
            });
        }

        let mut best: Option<usize> = None;
        let mut best_score = f64::NEG_INFINITY;
        for (c, prior) in self.class_priors.iter().enumerate() {
            let mut score = libm::log(prior.max(MIN_PRIOR));
            for (i, &x) in features.iter().enumerate() {
                score += ln_gaussian_pdf(x, self.means[c][i], self.variances[c][i]);
            }
            if best.is_none() || score > best_score {
                best = Some(c);
                best_score = score;
            }
        }

        // validate() guarantees at least one class.
        Ok(best.unwrap_or(0) as f64)
    }
}
