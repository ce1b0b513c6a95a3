use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, Text};

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        let mut q = Confirm::new(title).with_default(default);
        if !help.is_empty() {
            q = q.with_help_message(help);
        }
        Ok(q.prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        let mut q = Text::new(title).with_initial_value(default);
        if !help.is_empty() {
            q = q.with_help_message(help);
        }
        Ok(q.prompt()?)
    }
}
