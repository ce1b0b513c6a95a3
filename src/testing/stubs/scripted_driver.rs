use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Prompt driver that replays queued answers, for headless wizard
/// tests. Booleans are parsed from "y"/"yes"/"true".
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<String>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    fn next(&self, title: &str) -> Result<String> {
        match self.answers.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted answer left for prompt {title:?}"),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        let answer = self.next(title)?;
        Ok(matches!(answer.as_str(), "y" | "yes" | "true"))
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        self.next(title)
    }
}
