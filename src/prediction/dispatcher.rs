use crate::classifiers::Classifier;
use crate::core::Disease;
use crate::prediction::error::PredictionError;
use crate::prediction::outcome::Outcome;

/// Request handler for one disease domain: parses raw field values,
/// runs the loaded classifier on the single sample, and formats the
/// verdict.
///
/// The dispatcher is stateless across calls and holds the only
/// reference it needs, the immutable classifier, so a shared
/// `DiseaseDispatcher` can serve any number of concurrent requests.
pub struct DiseaseDispatcher {
    disease: Disease,
    classifier: Box<dyn Classifier>,
}

impl DiseaseDispatcher {
    pub fn new(disease: Disease, classifier: Box<dyn Classifier>) -> Self {
        Self {
            disease,
            classifier,
        }
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    /// Typed core of the request path.
    ///
    /// Parses every raw value to `f64` in order, then asks the
    /// classifier for the single-sample label. No range checks are
    /// applied to the parsed values; vectors of the wrong length are
    /// rejected by the classifier, not here.
    pub fn predict(&self, raw_values: &[String]) -> Result<Outcome, PredictionError> {
        let mut features = Vec::with_capacity(raw_values.len());
        for (i, value) in raw_values.iter().enumerate() {
            let parsed: f64 =
                value
                    .trim()
                    .parse()
                    .map_err(|_| PredictionError::NotANumber {
                        position: i + 1,
                        value: value.clone(),
                    })?;
            features.push(parsed);
        }

        let label = self.classifier.predict_one(&features)?;
        Ok(Outcome::from_label(label))
    }

    /// String boundary of the request path: always returns text, never
    /// panics, never propagates an error. Failures surface as
    /// `"Error in prediction: {details}"`.
    pub fn respond(&self, raw_values: &[String]) -> String {
        match self.predict(raw_values) {
            Ok(Outcome::Positive) => self.disease.positive_verdict().to_string(),
            Ok(Outcome::Negative) => self.disease.negative_verdict().to_string(),
            Err(e) => format!("Error in prediction: {e}"),
        }
    }
}
