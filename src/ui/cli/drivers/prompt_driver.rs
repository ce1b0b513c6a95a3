use anyhow::Result;

/// Terminal prompt seam. The wizard only talks to this trait, so tests
/// can run the form headless with a scripted implementation.
pub trait PromptDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
}
