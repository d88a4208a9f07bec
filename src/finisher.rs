//! The last step of setup: rewrite git, substitute names, install, clean up.

use std::io::Write;
use std::path::{Path, PathBuf};

use console::style;

use crate::{
    command::{self, CommandRunner},
    constants::{commands, substitution as tokens},
    error::{Error, Result},
    substitution::{apply_all, Substitution},
    types::ProjectState,
};

/// Flags controlling what the finisher does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Replace the local git metadata with the user's own repository.
    pub apply_git_repo: bool,
    pub run_install: bool,
    /// Keeps the setup folder even when `remove_setup_folder` is set.
    pub preserve_setup_folder: bool,
    pub remove_setup_folder: bool,
    pub remove_git_history: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            apply_git_repo: false,
            run_install: true,
            preserve_setup_folder: false,
            remove_setup_folder: true,
            remove_git_history: false,
        }
    }
}

/// Partial flags; anything left as `None` keeps its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionOverrides {
    pub apply_git_repo: Option<bool>,
    pub run_install: Option<bool>,
    pub preserve_setup_folder: Option<bool>,
    pub remove_setup_folder: Option<bool>,
    pub remove_git_history: Option<bool>,
}

impl ExecutionOverrides {
    /// Fields set in `other` win over fields set in `self`.
    pub fn merge(self, other: ExecutionOverrides) -> Self {
        Self {
            apply_git_repo: other.apply_git_repo.or(self.apply_git_repo),
            run_install: other.run_install.or(self.run_install),
            preserve_setup_folder: other.preserve_setup_folder.or(self.preserve_setup_folder),
            remove_setup_folder: other.remove_setup_folder.or(self.remove_setup_folder),
            remove_git_history: other.remove_git_history.or(self.remove_git_history),
        }
    }
}

impl From<ExecutionOverrides> for ExecutionConfig {
    fn from(overrides: ExecutionOverrides) -> Self {
        let defaults = ExecutionConfig::default();
        Self {
            apply_git_repo: overrides.apply_git_repo.unwrap_or(defaults.apply_git_repo),
            run_install: overrides.run_install.unwrap_or(defaults.run_install),
            preserve_setup_folder: overrides
                .preserve_setup_folder
                .unwrap_or(defaults.preserve_setup_folder),
            remove_setup_folder: overrides
                .remove_setup_folder
                .unwrap_or(defaults.remove_setup_folder),
            remove_git_history: overrides
                .remove_git_history
                .unwrap_or(defaults.remove_git_history),
        }
    }
}

impl ExecutionConfig {
    pub fn removes_setup_folder(&self) -> bool {
        self.remove_setup_folder && !self.preserve_setup_folder
    }
}

/// The substitutions applied to a freshly scaffolded project.
pub fn project_substitutions(project: &ProjectState) -> Vec<Substitution> {
    vec![
        Substitution::new(tokens::TITLE_TOKEN, &project.title, tokens::TITLE_FILE),
        Substitution::new(tokens::MACHINE_TOKEN, &project.machine_name, tokens::MACHINE_FILE),
    ]
}

/// Performs the finishing side effects exactly once.
#[derive(Debug)]
pub struct Finisher {
    project_root: PathBuf,
    apply_substitutions: bool,
    finalized: bool,
}

impl Finisher {
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            apply_substitutions: true,
            finalized: false,
        }
    }

    /// Skip file rewrites, for dry runs.
    pub fn without_substitutions(mut self) -> Self {
        self.apply_substitutions = false;
        self
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Issues every finishing command through `runner` and writes the completion banner to `out`.
    ///
    /// Calling it a second time fails with [`Error::AlreadyFinalized`]: the setup
    /// folder may already be gone.
    pub fn finish<R: CommandRunner, W: Write>(
        &mut self,
        project: &ProjectState,
        config: ExecutionConfig,
        runner: &mut R,
        out: &mut W,
    ) -> Result<()> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        self.finalized = true;
        log::debug!("Finishing with {config:?}");

        if config.remove_git_history && !config.apply_git_repo {
            runner.submit(commands::REMOVE_GIT.to_string());
        }

        if config.apply_git_repo {
            match project.own_repository_url.as_deref() {
                Some(url) => runner.submit(command::replace_git_history(url)),
                None => log::warn!("Own repository requested without a url, keeping git as is"),
            }
        }

        if self.apply_substitutions {
            apply_all(&self.project_root, &project_substitutions(project));
        } else {
            log::info!("[dry-run] Skipping file substitutions");
        }

        if config.run_install {
            runner.submit(commands::INSTALL.to_string());
        }

        if config.removes_setup_folder() {
            runner.submit(commands::REMOVE_SETUP.to_string());
        }

        writeln!(out, "{}", completion_banner())?;
        Ok(())
    }
}

pub fn completion_banner() -> String {
    format!(
        "\n❤️  Great! We'll start setting up your project.\n\
         Thank you for using the boilerplate for your React project.\n\n\
         {}\n{}\nyarn start\n\n{}\nyarn build\n",
        style("Here's some quick commands to get you started.").bold(),
        style("Development").underlined(),
        style("Production Build").underlined(),
    )
}
