use anyhow::{Context, Result};
use prognos::prediction::PredictionContext;
use prognos::ui::cli::drivers::InquireDriver;
use prognos::ui::cli::wizard::run_session;
use prognos::utils::paths::default_models_dir;

fn main() -> Result<()> {
    let models_dir = default_models_dir().context("cannot resolve the saved_models directory")?;
    let context = PredictionContext::load_from_dir(&models_dir).with_context(|| {
        format!(
            "cannot start: failed to load models from {}",
            models_dir.display()
        )
    })?;

    for summary in context.summaries() {
        println!("loaded {summary}");
    }
    println!();

    run_session(&InquireDriver, &context)
}
