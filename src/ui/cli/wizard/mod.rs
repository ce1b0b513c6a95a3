mod wizard;

pub use wizard::{collect_raw_features, run_session};
