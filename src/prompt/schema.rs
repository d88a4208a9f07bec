//! The fixed schemas asked during setup.

use super::interface::{Condition, DefaultValue, Field, Schema, Validation};
use crate::{catalog::FeatureDescriptor, constants, error::Result};

pub const TITLE: &str = "title";
pub const MACHINE: &str = "machine";
pub const PACKAGE: &str = "package";
pub const FEATURE: &str = "feature";
pub const REMOVE_LOCAL: &str = "remove_local";
pub const ADD_OWN_REPO: &str = "add_own_repo";
pub const OWN_REPO: &str = "own_repo";

pub fn name() -> Result<Schema> {
    Ok(Schema::new(
        "name",
        vec![
            Field::new(TITLE, "Project title").with_validation(Validation::new(
                r"\S",
                "The project title cannot be empty",
            )?),
            Field::new(MACHINE, "Machine name")
                .with_default(DefaultValue::KebabOf(TITLE.to_string()))
                .with_validation(Validation::new(
                    constants::MACHINE_NAME_PATTERN,
                    "Use lowercase letters, digits, '-' or '_' only",
                )?),
        ],
    ))
}

/// Selection keys are validated by the setup sequence, not by the gateway.
pub fn packages() -> Schema {
    Schema::new("packages", vec![Field::new(PACKAGE, "Package key")])
}

pub fn feature(descriptor: &FeatureDescriptor) -> Schema {
    Schema::new("feature", vec![Field::new(FEATURE, &descriptor.prompt_text)])
}

pub fn git() -> Result<Schema> {
    let yes_no = Validation::new(constants::YES_NO_PATTERN, "Answer yes or no")?;
    Ok(Schema::new(
        "git",
        vec![
            Field::new(REMOVE_LOCAL, "Remove the boilerplate's git history? (yes/no)")
                .with_default(DefaultValue::Fixed("no".to_string()))
                .with_validation(yes_no.clone()),
            Field::new(ADD_OWN_REPO, "Add your own repository? (yes/no)")
                .with_default(DefaultValue::Fixed("no".to_string()))
                .with_validation(yes_no),
            Field::new(OWN_REPO, "Repository url").ask_if(Condition::IsYes(ADD_OWN_REPO.to_string())),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_name_rejects_spaces_and_capitals() {
        let schema = name().unwrap();
        let machine = schema.fields.iter().find(|f| f.name == MACHINE).unwrap();
        assert!(machine.check("acme-app").is_ok());
        assert!(machine.check("acme_app2").is_ok());
        assert!(machine.check("Acme App").is_err());
        assert!(machine.check("-acme").is_err());
    }

    #[test]
    fn git_questions_accept_yes_no_only() {
        let schema = git().unwrap();
        let remove = &schema.fields[0];
        assert!(remove.check("Yes").is_ok());
        assert!(remove.check("n").is_ok());
        assert!(remove.check("maybe").is_err());
    }

    #[test]
    fn selection_fields_are_not_gateway_validated() {
        assert!(packages().fields[0].validation.is_none());
    }
}
