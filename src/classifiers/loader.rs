use crate::classifiers::classifier::Classifier;
use crate::classifiers::model_file::{FORMAT_VERSION, ModelFile, ModelKind};
use crate::core::Disease;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can keep a model from reaching a servable state.
/// Each variant names the offending file; the process treats any of
/// them as fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read model file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse model file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model file {} has format version {found}, this build reads version {supported}", path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    #[error("model file {} is for domain '{found}', expected '{expected}'", path.display())]
    DomainMismatch {
        path: PathBuf,
        found: Disease,
        expected: Disease,
    },

    #[error("model file {} is malformed: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("model file {} takes {model_arity} features, but {disease} defines {schema_arity}", path.display())]
    ArityMismatch {
        path: PathBuf,
        disease: Disease,
        model_arity: usize,
        schema_arity: usize,
    },
}

/// A deserialized classifier together with its envelope metadata.
pub struct LoadedModel {
    pub disease: Disease,
    pub kind: ModelKind,
    pub trained_at: DateTime<Utc>,
    pub classifier: Box<dyn Classifier>,
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("disease", &self.disease)
            .field("kind", &self.kind)
            .field("trained_at", &self.trained_at)
            .field("classifier", &format_args!("Box<dyn Classifier>"))
            .finish()
    }
}

/// Deserializes one model file and checks it against the expected
/// domain. All checks run eagerly so a bad file fails at startup, not
/// on the first request.
pub fn load_model(path: &Path, expected: Disease) -> Result<LoadedModel, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: ModelFile = serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if file.format_version != FORMAT_VERSION {
        return Err(LoadError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: file.format_version,
            supported: FORMAT_VERSION,
        });
    }

    if file.disease != expected {
        return Err(LoadError::DomainMismatch {
            path: path.to_path_buf(),
            found: file.disease,
            expected,
        });
    }

    file.model.validate().map_err(|reason| LoadError::Malformed {
        path: path.to_path_buf(),
        reason,
    })?;

    let kind = file.model.kind();
    let classifier = file.model.into_classifier();

    if classifier.feature_count() != expected.arity() {
        return Err(LoadError::ArityMismatch {
            path: path.to_path_buf(),
            disease: expected,
            model_arity: classifier.feature_count(),
            schema_arity: expected.arity(),
        });
    }

    Ok(LoadedModel {
        disease: file.disease,
        kind,
        trained_at: file.trained_at,
        classifier,
    })
}
