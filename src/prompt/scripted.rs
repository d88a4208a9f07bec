//! Prompt gateway answering from a pre-recorded script
//!
//! Useful for automation and tests. Answers are consumed in order; running out
//! of answers behaves like the user closing the input.

use super::interface::{Answers, PromptGateway, Schema};
use crate::error::Result;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ScriptedGateway {
    script: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedGateway {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { script: answers.into_iter().map(Into::into).collect(), asked: Vec::new() }
    }

    /// Names of the schemas asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PromptGateway for ScriptedGateway {
    fn ask(&mut self, schema: &Schema) -> Result<Option<Answers>> {
        self.asked.push(schema.name.clone());
        let mut answers = Answers::new();

        for field in &schema.fields {
            if !field.should_ask(&answers) {
                continue;
            }
            let value = loop {
                let Some(raw) = self.script.pop_front() else {
                    log::debug!("Script exhausted while asking '{}'", field.name);
                    return Ok(None);
                };
                let value = match field.default_for(&answers) {
                    Some(default) if raw.trim().is_empty() => default,
                    _ => raw.trim().to_string(),
                };
                match field.check(&value) {
                    Ok(()) => break value,
                    Err(message) => log::warn!("Rejected '{value}' for '{}': {message}", field.name),
                }
            };
            answers.insert(&field.name, value);
        }

        Ok(Some(answers))
    }
}
