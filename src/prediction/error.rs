use crate::classifiers::ClassifierError;
use thiserror::Error;

/// Per-request failures. These never escape the dispatcher boundary as
/// errors; [`respond`](crate::prediction::DiseaseDispatcher::respond)
/// renders them into the uniform error string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictionError {
    #[error("value #{position} {value:?} is not a number")]
    NotANumber { position: usize, value: String },

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
