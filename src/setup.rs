//! The setup conversation: name, package, git, then finish.
//!
//! Steps are driven by an explicit loop over [`Step`]. Each step either moves
//! on, retries itself in place, or aborts the whole sequence.

use std::io::{self, Stdout, Write};

use console::style;
use regex::Regex;

use crate::{
    catalog::{Catalog, FeatureDescriptor, PackageVariant},
    command::{self, CommandRunner},
    constants,
    error::Result,
    finisher::{ExecutionConfig, ExecutionOverrides, Finisher},
    prompt::{schema, PromptGateway},
    types::ProjectState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    NameCapture,
    PackageSelection,
    GitConfiguration,
    Finishing(ExecutionOverrides),
    Aborted,
}

/// How a run of the sequence ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Finished { project: ProjectState, config: ExecutionConfig },
    Aborted,
}

/// Drives the setup conversation through a gateway, submitting commands to a runner.
///
/// Conversation text goes to `out`.
pub struct SetupSequence<G, R, W = Stdout> {
    gateway: G,
    runner: R,
    finisher: Finisher,
    catalog: Catalog,
    overrides: ExecutionOverrides,
    out: W,
    project: ProjectState,
}

impl<G: PromptGateway, R: CommandRunner> SetupSequence<G, R, Stdout> {
    pub fn new(gateway: G, runner: R, finisher: Finisher) -> Self {
        Self::with_output(gateway, runner, finisher, io::stdout())
    }
}

impl<G: PromptGateway, R: CommandRunner, W: Write> SetupSequence<G, R, W> {
    pub fn with_output(gateway: G, runner: R, finisher: Finisher, out: W) -> Self {
        Self {
            gateway,
            runner,
            finisher,
            catalog: Catalog::builtin(),
            overrides: ExecutionOverrides::default(),
            out,
            project: ProjectState::new(),
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Flags applied to the finisher regardless of the git answers.
    pub fn with_overrides(mut self, overrides: ExecutionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Runs the conversation until it finishes or the user cancels.
    pub fn run(&mut self) -> Result<Outcome> {
        let mut step = Step::NameCapture;
        loop {
            log::debug!("Entering {step:?}");
            step = match step {
                Step::NameCapture => self.capture_name()?,
                Step::PackageSelection => self.select_package()?,
                Step::GitConfiguration => self.configure_git()?,
                Step::Finishing(step_overrides) => return self.finish(step_overrides),
                Step::Aborted => {
                    writeln!(self.out, "\n{}\n", style(constants::EXITED_NOTICE).yellow())?;
                    return Ok(Outcome::Aborted);
                }
            };
        }
    }

    fn capture_name(&mut self) -> Result<Step> {
        writeln!(self.out, "{}", style("What's the name of your project?").bold())?;

        let Some(answers) = self.gateway.ask(&schema::name()?)? else {
            return Ok(Step::Aborted);
        };
        if let Some(machine) = answers.get(schema::MACHINE) {
            self.project.machine_name = machine.to_string();
        }
        if let Some(title) = answers.get(schema::TITLE) {
            self.project.title = title.to_string();
        }

        writeln!(
            self.out,
            "\n🙌 Great! We'll call your project {}.\n",
            style(&self.project.title).cyan()
        )?;
        Ok(Step::PackageSelection)
    }

    fn select_package(&mut self) -> Result<Step> {
        let key_pattern = Regex::new(constants::PACKAGE_KEY_PATTERN)?;
        let packages = schema::packages();

        let variant = loop {
            writeln!(self.out, "Now, this is the available packages:")?;
            for variant in &self.catalog.packages {
                writeln!(self.out, "{} {}", variant.id, variant.title)?;
            }
            writeln!(
                self.out,
                "\n{}\n{}",
                style("Which package do you want to install?").bold(),
                style("Select it by writing it's key [0-9]").dim()
            )?;

            let Some(answers) = self.gateway.ask(&packages)? else {
                return Ok(Step::Aborted);
            };
            let key = answers.get(schema::PACKAGE).unwrap_or_default();
            match self.catalog.find_package(key).filter(|_| key_pattern.is_match(key)) {
                Some(variant) => break variant.clone(),
                None => {
                    log::debug!("Unknown package key '{key}'");
                    writeln!(self.out, "{}", style(constants::UNKNOWN_KEY_MESSAGE).red())?;
                }
            }
        };

        self.runner.submit(command::checkout(&variant.source_branch));
        writeln!(
            self.out,
            "\n📦 Amazing! You've select the {} package.\n",
            style(&variant.title).cyan()
        )?;

        if self.select_features(&variant)? {
            Ok(Step::GitConfiguration)
        } else {
            Ok(Step::Aborted)
        }
    }

    /// Asks every feature the package declares. Returns `false` on cancellation.
    fn select_features(&mut self, variant: &PackageVariant) -> Result<bool> {
        for key in &variant.feature_keys {
            let Some(descriptor) = self.catalog.feature(key).cloned() else {
                log::warn!("Package '{}' declares unknown feature '{key}'", variant.id);
                continue;
            };
            match self.select_feature(&descriptor)? {
                Some(internal_name) => {
                    log::info!("Feature '{key}' uses the '{internal_name}' structure");
                    self.project.features.insert(key.clone(), internal_name);
                }
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    fn select_feature(&mut self, descriptor: &FeatureDescriptor) -> Result<Option<String>> {
        let key_pattern = Regex::new(&descriptor.validation_pattern)?;
        let feature = schema::feature(descriptor);

        loop {
            if let Some(pre_description) = &descriptor.pre_description {
                writeln!(self.out, "{pre_description}")?;
            }
            for variant in &descriptor.variants {
                writeln!(self.out, "{} {}", variant.id, variant.title)?;
            }
            writeln!(self.out, "\n{}", style(&descriptor.prompt_text).bold())?;

            let Some(answers) = self.gateway.ask(&feature)? else {
                return Ok(None);
            };
            let key = answers.get(schema::FEATURE).unwrap_or_default();
            match descriptor.find_variant(key).filter(|_| key_pattern.is_match(key)) {
                Some(variant) => {
                    writeln!(
                        self.out,
                        "\n✨ You've selected {}.\n",
                        style(&variant.title).cyan()
                    )?;
                    return Ok(Some(variant.internal_name.clone()));
                }
                None => writeln!(self.out, "{}", style(&descriptor.error_message).red())?,
            }
        }
    }

    fn configure_git(&mut self) -> Result<Step> {
        let git = schema::git()?;

        loop {
            writeln!(self.out, "{}", style("Awesome! Let's setup git, shall we?").bold())?;

            let Some(answers) = self.gateway.ask(&git)? else {
                return Ok(Step::Aborted);
            };

            if answers.is_yes(schema::ADD_OWN_REPO) {
                let url = answers.get(schema::OWN_REPO).unwrap_or_default();
                if url.is_empty() {
                    writeln!(self.out, "{}", style(constants::MISSING_URL_MESSAGE).red())?;
                    continue;
                }
                self.project.own_repository_url = Some(url.to_string());
                writeln!(
                    self.out,
                    "{}",
                    style("\nAlright, we'll use your own repository, and start setting up\n").cyan()
                )?;
                return Ok(Step::Finishing(ExecutionOverrides {
                    apply_git_repo: Some(true),
                    ..Default::default()
                }));
            }

            if answers.is_yes(schema::REMOVE_LOCAL) {
                writeln!(
                    self.out,
                    "{}",
                    style("\nAlright, we'll delete the boilerplate repository, and start setting up\n")
                        .cyan()
                )?;
                return Ok(Step::Finishing(ExecutionOverrides {
                    remove_git_history: Some(true),
                    ..Default::default()
                }));
            }

            writeln!(
                self.out,
                "{}",
                style("\nAlright, we'll keep the boilerplate repository, and start setting up\n")
                    .cyan()
            )?;
            return Ok(Step::Finishing(ExecutionOverrides::default()));
        }
    }

    fn finish(&mut self, step_overrides: ExecutionOverrides) -> Result<Outcome> {
        let config = ExecutionConfig::from(self.overrides.merge(step_overrides));
        if let Ok(state) = serde_json::to_string(&self.project) {
            log::debug!("Project state: {state}");
        }
        self.finisher.finish(&self.project, config, &mut self.runner, &mut self.out)?;
        Ok(Outcome::Finished { project: self.project.clone(), config })
    }
}
