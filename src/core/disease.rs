use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, IntoStaticStr};

/// The two screening domains served by this process.
///
/// Each domain pairs a fixed-arity feature vector with a pre-trained
/// binary classifier and two fixed verdict sentences. The serialized
/// form (kebab-case) is the `disease` tag of the model file format.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumMessage,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Disease {
    #[strum(
        message = "Heart Disease",
        detailed_message = "Predict if a person has heart disease from 13 clinical measurements."
    )]
    HeartDisease,

    #[strum(
        message = "Parkinson's Disease",
        detailed_message = "Predict if a person has Parkinson's disease from 22 voice measurements."
    )]
    Parkinsons,
}

impl Disease {
    /// Number of features the domain's model takes, positional.
    pub fn arity(self) -> usize {
        match self {
            Disease::HeartDisease => 13,
            Disease::Parkinsons => 22,
        }
    }

    /// File name of the serialized model inside the models directory.
    pub fn model_file_name(self) -> &'static str {
        match self {
            Disease::HeartDisease => "heart_disease_model.json",
            Disease::Parkinsons => "parkinsons_model.json",
        }
    }

    pub fn positive_verdict(self) -> &'static str {
        match self {
            Disease::HeartDisease => "The person has heart disease",
            Disease::Parkinsons => "The person has Parkinson's disease",
        }
    }

    pub fn negative_verdict(self) -> &'static str {
        match self {
            Disease::HeartDisease => "The person does not have heart disease",
            Disease::Parkinsons => "The person does not have Parkinson's disease",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_kebab_case_tag() {
        let heart = serde_json::to_value(Disease::HeartDisease).unwrap();
        assert_eq!(heart, serde_json::json!("heart-disease"));

        let parkinsons = serde_json::to_value(Disease::Parkinsons).unwrap();
        assert_eq!(parkinsons, serde_json::json!("parkinsons"));
    }

    #[test]
    fn round_trips_through_serde() {
        for d in [Disease::HeartDisease, Disease::Parkinsons] {
            let v = serde_json::to_value(d).unwrap();
            let back: Disease = serde_json::from_value(v).unwrap();
            assert_eq!(back, d);
        }
    }

    #[test]
    fn verdicts_are_the_fixed_sentences() {
        assert_eq!(
            Disease::HeartDisease.positive_verdict(),
            "The person has heart disease"
        );
        assert_eq!(
            Disease::HeartDisease.negative_verdict(),
            "The person does not have heart disease"
        );
        assert_eq!(
            Disease::Parkinsons.positive_verdict(),
            "The person has Parkinson's disease"
        );
        assert_eq!(
            Disease::Parkinsons.negative_verdict(),
            "The person does not have Parkinson's disease"
        );
    }
}
