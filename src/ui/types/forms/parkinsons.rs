use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The 22 voice measurements of the Parkinson's form, declared in the
/// positional order the model was trained on. Field names follow the
/// UCI Parkinson's dataset columns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct ParkinsonsForm {
    #[schemars(title = "MDVP:Fo(Hz)", description = "Average vocal fundamental frequency")]
    pub fo: f64,

    #[schemars(title = "MDVP:Fhi(Hz)", description = "Maximum vocal fundamental frequency")]
    pub fhi: f64,

    #[schemars(title = "MDVP:Flo(Hz)", description = "Minimum vocal fundamental frequency")]
    pub flo: f64,

    #[schemars(title = "MDVP:Jitter(%)")]
    pub jitter_percent: f64,

    #[schemars(title = "MDVP:Jitter(Abs)")]
    pub jitter_abs: f64,

    #[schemars(title = "MDVP:RAP")]
    pub rap: f64,

    #[schemars(title = "MDVP:PPQ")]
    pub ppq: f64,

    #[schemars(title = "Jitter:DDP")]
    pub ddp: f64,

    #[schemars(title = "MDVP:Shimmer")]
    pub shimmer: f64,

    #[schemars(title = "MDVP:Shimmer(dB)")]
    pub shimmer_db: f64,

    #[schemars(title = "Shimmer:APQ3")]
    pub apq3: f64,

    #[schemars(title = "Shimmer:APQ5")]
    pub apq5: f64,

    #[schemars(title = "MDVP:APQ")]
    pub apq: f64,

    #[schemars(title = "Shimmer:DDA")]
    pub dda: f64,

    #[schemars(title = "NHR", description = "Noise-to-harmonics ratio")]
    pub nhr: f64,

    #[schemars(title = "HNR", description = "Harmonics-to-noise ratio")]
    pub hnr: f64,

    #[schemars(title = "RPDE", description = "Recurrence period density entropy")]
    pub rpde: f64,

    #[schemars(title = "DFA", description = "Signal fractal scaling exponent")]
    pub dfa: f64,

    #[schemars(title = "Spread1")]
    pub spread1: f64,

    #[schemars(title = "Spread2")]
    pub spread2: f64,

    #[schemars(title = "D2", description = "Correlation dimension")]
    pub d2: f64,

    #[schemars(title = "PPE", description = "Pitch period entropy")]
    pub ppe: f64,
}
