//! Dialoguer-based implementation of the prompt gateway
//!
//! On a terminal every field is asked with [`dialoguer::Input`]; validation
//! failures are re-asked in place by dialoguer itself. When stdin is piped or
//! closed, fields are read line by line and end of input is a cancellation.

use super::interface::{Answers, Field, PromptGateway, Schema};
use crate::error::Result;
use dialoguer::Input;
use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

/// Ctrl-D as it may arrive from a raw-mode terminal.
const END_OF_TRANSMISSION: char = '\u{4}';

/// Terminal gateway asking questions on stdin/stdout.
#[derive(Debug)]
pub struct DialoguerGateway {
    attended: bool,
}

impl DialoguerGateway {
    pub fn new() -> Self {
        let attended = io::stdin().is_terminal() && console::Term::stderr().is_term();
        log::debug!("Prompting {}", if attended { "interactively" } else { "from piped input" });
        Self { attended }
    }

    /// Returns `Ok(None)` if the input was interrupted or closed.
    fn prompt_field(&self, field: &Field, answers: &Answers) -> Result<Option<String>> {
        if !self.attended {
            let stdin = io::stdin();
            return read_answer(field, answers, &mut stdin.lock(), &mut io::stdout());
        }

        let mut input = Input::<String>::new()
            .with_prompt(&field.message)
            .allow_empty(true)
            .validate_with(|value: &String| {
                if value.contains(END_OF_TRANSMISSION) {
                    Ok(())
                } else {
                    field.check(value)
                }
            });

        if let Some(default) = field.default_for(answers) {
            input = input.default(default);
        }

        let answer = classify(input.interact_text())?;
        if answer.is_none() {
            log::debug!("Prompt '{}' cancelled", field.name);
        }
        Ok(answer)
    }
}

impl Default for DialoguerGateway {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a dialoguer result to an answer, `None` standing for cancellation.
pub fn classify(result: dialoguer::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(value) if value.contains(END_OF_TRANSMISSION) => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(dialoguer::Error::IO(e)) if is_cancellation(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn is_cancellation(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::Interrupted | ErrorKind::UnexpectedEof | ErrorKind::NotConnected
    ) || error.to_string().eq_ignore_ascii_case("not a terminal")
}

/// Asks `field` on plain line-based streams.
///
/// End of input yields `Ok(None)`; answers failing validation are reported and asked again.
pub fn read_answer<R: BufRead, W: Write>(
    field: &Field,
    answers: &Answers,
    reader: &mut R,
    writer: &mut W,
) -> Result<Option<String>> {
    let default = field.default_for(answers);
    loop {
        match &default {
            Some(default) => write!(writer, "{} [{default}]: ", field.message)?,
            None => write!(writer, "{}: ", field.message)?,
        }
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(None);
        }

        let value = match &default {
            Some(default) if line.trim().is_empty() => default.clone(),
            _ => line.trim().to_string(),
        };
        match field.check(&value) {
            Ok(()) => return Ok(Some(value)),
            Err(message) => writeln!(writer, "{message}")?,
        }
    }
}

impl PromptGateway for DialoguerGateway {
    fn ask(&mut self, schema: &Schema) -> Result<Option<Answers>> {
        let mut answers = Answers::new();
        for field in &schema.fields {
            if !field.should_ask(&answers) {
                continue;
            }
            match self.prompt_field(field, &answers)? {
                Some(value) => answers.insert(&field.name, value),
                None => return Ok(None),
            }
        }
        log::debug!("Schema '{}' answered", schema.name);
        Ok(Some(answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{schema, DefaultValue, Validation};
    use std::io::Cursor;

    fn io_error(kind: ErrorKind, message: &str) -> dialoguer::Result<String> {
        Err(dialoguer::Error::IO(io::Error::new(kind, message)))
    }

    #[test]
    fn classify_keeps_trimmed_answers() {
        assert_eq!(classify(Ok("  acme ".to_string())).unwrap().as_deref(), Some("acme"));
        assert_eq!(classify(Ok(String::new())).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn classify_treats_closed_input_as_cancellation() {
        for kind in [ErrorKind::Interrupted, ErrorKind::UnexpectedEof, ErrorKind::NotConnected] {
            assert!(classify(io_error(kind, "closed")).unwrap().is_none(), "{kind:?}");
        }
        assert!(classify(io_error(ErrorKind::Other, "not a terminal")).unwrap().is_none());
        assert!(classify(Ok("abc\u{4}".to_string())).unwrap().is_none());
    }

    #[test]
    fn classify_propagates_other_failures() {
        let result = classify(io_error(ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(result, Err(crate::error::Error::PromptError(_))));
    }

    #[test]
    fn read_answer_returns_none_at_end_of_input() {
        let field = Field::new(schema::TITLE, "Project title");
        let mut out = Vec::new();
        let answer =
            read_answer(&field, &Answers::new(), &mut Cursor::new(""), &mut out).unwrap();
        assert!(answer.is_none());
        assert!(String::from_utf8(out).unwrap().starts_with("Project title: "));
    }

    #[test]
    fn read_answer_uses_default_and_retries_invalid_lines() {
        let field = Field::new("machine", "Machine name")
            .with_default(DefaultValue::KebabOf("title".into()))
            .with_validation(Validation::new("^[a-z-]+$", "lowercase only").unwrap());
        let mut answers = Answers::new();
        answers.insert("title", "Acme App".into());

        let mut out = Vec::new();
        let mut input = Cursor::new("Not Valid\n\n");
        let answer = read_answer(&field, &answers, &mut input, &mut out).unwrap();

        assert_eq!(answer.as_deref(), Some("acme-app"));
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("lowercase only").count(), 1);
        assert!(out.contains("Machine name [acme-app]: "));
    }

    #[test]
    fn read_answer_cancels_after_rejected_line_then_eof() {
        let field = Field::new("key", "Key")
            .with_validation(Validation::new("^[0-9]$", "bad key").unwrap());
        let mut out = Vec::new();
        let answer =
            read_answer(&field, &Answers::new(), &mut Cursor::new("x\n"), &mut out).unwrap();
        assert!(answer.is_none());
    }
}
