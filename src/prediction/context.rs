use crate::classifiers::loader::{LoadError, LoadedModel, load_model};
use crate::classifiers::model_file::ModelKind;
use crate::core::Disease;
use crate::prediction::dispatcher::DiseaseDispatcher;
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};
use std::path::Path;

/// One line of the startup banner describing a loaded model.
pub struct ModelSummary {
    pub disease: Disease,
    pub kind: ModelKind,
    pub feature_count: usize,
    pub trained_at: DateTime<Utc>,
}

impl Display for ModelSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} over {} features (trained {})",
            self.disease,
            self.kind,
            self.feature_count,
            self.trained_at.format("%Y-%m-%d")
        )
    }
}

/// Immutable bundle of everything the request path needs, built once at
/// startup and passed by reference to each caller. Holds one dispatcher
/// per disease; nothing in it mutates after construction.
pub struct PredictionContext {
    heart: DiseaseDispatcher,
    parkinsons: DiseaseDispatcher,
    summaries: Vec<ModelSummary>,
}

impl std::fmt::Debug for PredictionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionContext").finish_non_exhaustive()
    }
}

impl PredictionContext {
    /// Loads both models eagerly from the given directory. Any failure
    /// is returned as-is and must keep the process from serving.
    pub fn load_from_dir(dir: &Path) -> Result<Self, LoadError> {
        let heart = load_model(
            &dir.join(Disease::HeartDisease.model_file_name()),
            Disease::HeartDisease,
        )?;
        let parkinsons = load_model(
            &dir.join(Disease::Parkinsons.model_file_name()),
            Disease::Parkinsons,
        )?;
        Ok(Self::from_models(heart, parkinsons))
    }

    /// Assembles a context from already-loaded models. The loader
    /// guarantees each model's domain; callers constructing models by
    /// hand are expected to pass them in matching order.
    pub fn from_models(heart: LoadedModel, parkinsons: LoadedModel) -> Self {
        let summaries = vec![summary_of(&heart), summary_of(&parkinsons)];
        Self {
            heart: DiseaseDispatcher::new(heart.disease, heart.classifier),
            parkinsons: DiseaseDispatcher::new(parkinsons.disease, parkinsons.classifier),
            summaries,
        }
    }

    pub fn dispatcher(&self, disease: Disease) -> &DiseaseDispatcher {
        match disease {
            Disease::HeartDisease => &self.heart,
            Disease::Parkinsons => &self.parkinsons,
        }
    }

    pub fn summaries(&self) -> &[ModelSummary] {
        &self.summaries
    }
}

fn summary_of(model: &LoadedModel) -> ModelSummary {
    ModelSummary {
        disease: model.disease,
        kind: model.kind,
        feature_count: model.classifier.feature_count(),
        trained_at: model.trained_at,
    }
}
