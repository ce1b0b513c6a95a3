use crate::classifiers::{Classifier, ClassifierError};

/// Classifier that always answers with a fixed label, enforcing the
/// same shape contract as the real models.
pub struct StubClassifier {
    pub label: f64,
    pub feature_count: usize,
}

impl StubClassifier {
    pub fn new(label: f64, feature_count: usize) -> Self {
        Self {
            label,
            feature_count,
        }
    }
}

impl Classifier for StubClassifier {
    fn feature_count(&self) -> usize {
        self.feature_count
    }

    fn predict_one(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        if features.len() != self.feature_count {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.feature_count,
                got: features.len(),
            });
        }
        Ok(self.label)
    }
}
