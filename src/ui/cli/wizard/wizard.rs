use anyhow::Result;
use std::fmt::{Display, Formatter};
use strum::{EnumMessage, IntoEnumIterator};

use crate::core::Disease;
use crate::prediction::PredictionContext;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::FieldSpec;
use crate::ui::types::forms::form_specs;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

struct KindItem<K> {
    kind: K,
    text: String,
}

impl<K> Display for KindItem<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn kind_items<K>() -> Vec<KindItem<K>>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            KindItem { kind: k, text }
        })
        .collect()
}

fn prompt_disease() -> Result<Disease> {
    let items = kind_items::<Disease>();
    let selected = inquire::Select::new("Choose a screening:", items)
        .with_help_message("↑/↓ to navigate, ↵ to select")
        .prompt()?;
    Ok(selected.kind)
}

/// Prompts every field of the form, in order, as free text.
///
/// Answers are deliberately not parsed here; the dispatcher owns the
/// numeric cast and reports bad values in its response string.
pub fn collect_raw_features<D: PromptDriver>(driver: &D, specs: &[FieldSpec]) -> Result<Vec<String>> {
    let mut raw = Vec::with_capacity(specs.len());
    for spec in specs {
        let help = spec.help.as_deref().unwrap_or("");
        raw.push(driver.ask_string(&spec.title, help, "")?);
    }
    Ok(raw)
}

/// Interactive loop: pick a disease, fill its form, print the verdict,
/// repeat until the user declines.
pub fn run_session<D: PromptDriver>(driver: &D, context: &PredictionContext) -> Result<()> {
    loop {
        let disease = prompt_disease()?;
        if let Some(description) = disease.get_detailed_message() {
            println!("\n{description}");
        }

        let specs = form_specs(disease)?;
        let raw = collect_raw_features(driver, &specs)?;

        let response = context.dispatcher(disease).respond(&raw);
        println!("\n{response}\n");

        if !driver.ask_bool("Run another screening?", "", true)? {
            return Ok(());
        }
    }
}
