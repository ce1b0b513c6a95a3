use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

/// A pre-trained binary decision function over a fixed-length numeric
/// feature vector.
///
/// Implementations are immutable after construction and pure at
/// inference time: identical inputs always produce identical labels,
/// and a shared reference can serve any number of concurrent callers.
pub trait Classifier: Send + Sync {
    /// Arity of the feature vector the model was trained on.
    fn feature_count(&self) -> usize;

    /// Predicts the label for a single sample.
    ///
    /// Label `1` is the positive class. Rejects vectors whose length
    /// does not match [`feature_count`](Classifier::feature_count).
    fn predict_one(&self, features: &[f64]) -> Result<f64, ClassifierError>;
}
