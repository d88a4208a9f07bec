//! Pure interfaces for prompting without external dependencies
//!
//! A [`Schema`] is a named set of fields. A [`PromptGateway`] asks every field
//! of a schema and returns the collected [`Answers`], or `None` when the user
//! cancelled the conversation.

use crate::error::Result;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

/// Pattern an answer must satisfy before the gateway accepts it.
#[derive(Debug, Clone)]
pub struct Validation {
    pub pattern: Regex,
    pub message: String,
}

impl Validation {
    pub fn new(pattern: &str, message: &str) -> Result<Self> {
        Ok(Self { pattern: Regex::new(pattern)?, message: message.to_string() })
    }
}

/// Makes a field depend on an earlier answer of the same schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    IsYes(String),
}

/// Default offered when the user submits an empty answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    Fixed(String),
    /// Kebab-case of an earlier answer.
    KebabOf(String),
}

/// A single question of a schema.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub message: String,
    pub default: Option<DefaultValue>,
    pub validation: Option<Validation>,
    pub ask_if: Option<Condition>,
}

impl Field {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            default: None,
            validation: None,
            ask_if: None,
        }
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn ask_if(mut self, condition: Condition) -> Self {
        self.ask_if = Some(condition);
        self
    }

    /// Whether this field is asked given the answers collected so far.
    pub fn should_ask(&self, answers: &Answers) -> bool {
        match &self.ask_if {
            None => true,
            Some(Condition::IsYes(other)) => answers.is_yes(other),
        }
    }

    pub fn default_for(&self, answers: &Answers) -> Option<String> {
        match self.default.as_ref()? {
            DefaultValue::Fixed(value) => Some(value.clone()),
            DefaultValue::KebabOf(other) => answers
                .get(other)
                .map(cruet::case::kebab::to_kebab_case)
                .filter(|value| !value.is_empty()),
        }
    }

    /// Checks an answer against the field's validation pattern.
    pub fn check(&self, answer: &str) -> std::result::Result<(), String> {
        match &self.validation {
            Some(validation) if !validation.pattern.is_match(answer) => {
                Err(validation.message.clone())
            }
            _ => Ok(()),
        }
    }
}

/// A named set of fields asked in one go.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(name: &str, fields: Vec<Field>) -> Self {
        Self { name: name.to_string(), fields }
    }
}

/// Field name to answer, in the order the fields were asked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Answers(IndexMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, answer: String) {
        self.0.insert(field.to_string(), answer);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_yes(&self, field: &str) -> bool {
        self.get(field).is_some_and(is_yes)
    }

    pub fn is_no(&self, field: &str) -> bool {
        self.get(field).is_some_and(is_no)
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn is_no(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "n" | "no")
}

/// Asks the questions of a schema.
///
/// `Ok(None)` signals that the user cancelled (interrupted or closed input);
/// errors are reserved for terminal failures.
pub trait PromptGateway {
    fn ask(&mut self, schema: &Schema) -> Result<Option<Answers>>;
}

impl<G: PromptGateway + ?Sized> PromptGateway for &mut G {
    fn ask(&mut self, schema: &Schema) -> Result<Option<Answers>> {
        (**self).ask(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yes_and_no_loosely() {
        for answer in ["y", "Y", "yes", " YES "] {
            assert!(is_yes(answer), "{answer}");
            assert!(!is_no(answer), "{answer}");
        }
        for answer in ["n", "No", "NO"] {
            assert!(is_no(answer), "{answer}");
        }
        assert!(!is_yes("yep"));
        assert!(!is_no(""));
    }

    #[test]
    fn conditional_field_follows_earlier_yes() {
        let field = Field::new("url", "Url").ask_if(Condition::IsYes("add".into()));
        let mut answers = Answers::new();
        assert!(!field.should_ask(&answers));
        answers.insert("add", "no".into());
        assert!(!field.should_ask(&answers));
        answers.insert("add", "yes".into());
        assert!(field.should_ask(&answers));
    }

    #[test]
    fn kebab_default_derives_from_earlier_answer() {
        let field =
            Field::new("machine", "Machine").with_default(DefaultValue::KebabOf("title".into()));
        let mut answers = Answers::new();
        assert_eq!(field.default_for(&answers), None);
        answers.insert("title", "Acme App".into());
        assert_eq!(field.default_for(&answers).as_deref(), Some("acme-app"));
    }

    #[test]
    fn check_reports_validation_message() {
        let field = Field::new("key", "Key")
            .with_validation(Validation::new("^[0-9]$", "bad key").unwrap());
        assert!(field.check("3").is_ok());
        assert_eq!(field.check("x").unwrap_err(), "bad key");
        assert!(Field::new("free", "Free").check("").is_ok());
    }
}
