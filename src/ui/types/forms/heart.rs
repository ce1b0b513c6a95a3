use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The 13 clinical measurements of the heart-disease form, declared in
/// the positional order the model was trained on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct HeartForm {
    #[schemars(title = "Age")]
    pub age: f64,

    #[schemars(title = "Sex", description = "0: Female, 1: Male")]
    pub sex: f64,

    #[schemars(title = "Chest Pain Type", description = "0-3")]
    pub cp: f64,

    #[schemars(title = "Resting Blood Pressure")]
    pub trestbps: f64,

    #[schemars(title = "Serum Cholesterol", description = "mg/dl")]
    pub chol: f64,

    #[schemars(title = "Fasting Blood Sugar > 120 mg/dl", description = "0: No, 1: Yes")]
    pub fbs: f64,

    #[schemars(title = "Resting ECG Results", description = "0-2")]
    pub restecg: f64,

    #[schemars(title = "Max Heart Rate Achieved")]
    pub thalach: f64,

    #[schemars(title = "Exercise Induced Angina", description = "0: No, 1: Yes")]
    pub exang: f64,

    #[schemars(title = "ST Depression Induced by Exercise")]
    pub oldpeak: f64,

    #[schemars(title = "Slope of the Peak Exercise ST Segment", description = "0-2")]
    pub slope: f64,

    #[schemars(title = "Number of Major Vessels", description = "0-4")]
    pub ca: f64,

    #[schemars(
        title = "Thal",
        description = "0 = Normal; 1 = Fixed Defect; 2 = Reversible Defect"
    )]
    pub thal: f64,
}
