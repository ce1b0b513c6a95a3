use crate::classifiers::bayes::GaussianNaiveBayes;
use crate::classifiers::classifier::Classifier;
use crate::classifiers::linear::LogisticRegression;
use crate::core::Disease;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Version of the on-disk model layout this build reads.
pub const FORMAT_VERSION: u32 = 1;

/// Tagged union of the model families the loader can deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ModelKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ModelChoice {
    #[strum_discriminants(strum(
        message = "Logistic Regression",
        detailed_message = "Weighted feature sum squashed through a sigmoid."
    ))]
    LogisticRegression(LogisticRegression),

    #[strum_discriminants(strum(
        message = "Gaussian Naive Bayes",
        detailed_message = "Per-class Gaussian likelihoods over independent features."
    ))]
    GaussianNaiveBayes(GaussianNaiveBayes),
}

impl ModelChoice {
    pub fn kind(&self) -> ModelKind {
        self.into()
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            ModelChoice::LogisticRegression(m) => m.validate(),
            ModelChoice::GaussianNaiveBayes(m) => m.validate(),
        }
    }

    pub fn into_classifier(self) -> Box<dyn Classifier> {
        match self {
            ModelChoice::LogisticRegression(m) => Box::new(m),
            ModelChoice::GaussianNaiveBayes(m) => Box::new(m),
        }
    }
}

/// On-disk layout of a serialized model.
///
/// The params blob stays opaque to everything past the loader; the
/// surrounding envelope names the domain and carries provenance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModelFile {
    #[schemars(title = "Format Version")]
    pub format_version: u32,

    #[schemars(title = "Disease")]
    pub disease: Disease,

    #[schemars(with = "String", title = "Trained At")]
    pub trained_at: DateTime<Utc>,

    pub model: ModelChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> ModelFile {
        ModelFile {
            format_version: FORMAT_VERSION,
            disease: Disease::HeartDisease,
            trained_at: Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap(),
            model: ModelChoice::LogisticRegression(LogisticRegression {
                coefficients: vec![0.25, -0.5],
                intercept: 0.1,
                threshold: 0.5,
            }),
        }
    }

    #[test]
    fn wire_format_is_the_tagged_layout() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["format_version"], 1);
        assert_eq!(v["disease"], "heart-disease");
        assert_eq!(v["model"]["type"], "logistic-regression");
        assert_eq!(v["model"]["params"]["coefficients"], serde_json::json!([0.25, -0.5]));
    }

    #[test]
    fn round_trips_through_json() {
        let v = serde_json::to_value(sample()).unwrap();
        let back: ModelFile = serde_json::from_value(v).unwrap();
        assert_eq!(back.disease, Disease::HeartDisease);
        assert_eq!(back.trained_at, sample().trained_at);
        match back.model {
            ModelChoice::LogisticRegression(m) => assert_eq!(m.coefficients.len(), 2),
            other => panic!("unexpected model kind: {:?}", other.kind()),
        }
    }

    #[test]
    fn kind_names_are_kebab_case() {
        assert_eq!(sample().model.kind().to_string(), "logistic-regression");
    }
}
