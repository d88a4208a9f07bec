//! Submission of external shell commands.
//!
//! Commands are fire-and-forget: submitting never blocks the setup flow and a
//! failing command never aborts it.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::constants::commands;

/// One-way capability to hand a shell command off for execution.
pub trait CommandRunner {
    fn submit(&mut self, command: String);
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn submit(&mut self, command: String) {
        (**self).submit(command)
    }
}

pub fn checkout(branch: &str) -> String {
    format!("git checkout {}", shell_quote(branch))
}

/// Swaps the local git metadata for the metadata of `url`, leaving the working tree alone.
pub fn replace_git_history(url: &str) -> String {
    let temp = commands::TEMP_GIT_DIR;
    format!(
        "{} && git clone --no-checkout {} {temp} && mv ./{temp}/.git ./.git && rm -rf {temp}",
        commands::REMOVE_GIT,
        shell_quote(url),
    )
}

/// Quotes `value` for `sh` unless it only holds characters that need no quoting.
pub fn shell_quote(value: &str) -> String {
    let is_plain = !value.is_empty()
        && value.chars().all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-~".contains(c));
    if is_plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

/// Runs commands through `sh -c` in the project directory without waiting for them.
#[derive(Debug)]
pub struct ShellRunner {
    working_dir: PathBuf,
    dry_run: bool,
    children: Vec<(String, Child)>,
}

impl ShellRunner {
    pub fn new<P: AsRef<Path>>(working_dir: P, dry_run: bool) -> Self {
        Self { working_dir: working_dir.as_ref().to_path_buf(), dry_run, children: Vec::new() }
    }

    /// Reaps every spawned command before the process exits.
    ///
    /// Exit statuses are logged only; nothing here can fail the setup.
    pub fn wait_all(&mut self) {
        for (command, mut child) in self.children.drain(..) {
            match child.wait() {
                Ok(status) if status.success() => log::debug!("'{command}' finished"),
                Ok(status) => log::warn!("'{command}' exited with {status}"),
                Err(e) => log::warn!("Failed to wait for '{command}': {e}"),
            }
        }
    }
}

impl CommandRunner for ShellRunner {
    fn submit(&mut self, command: String) {
        if self.dry_run {
            log::info!("[dry-run] Would run: {command}");
            return;
        }

        log::info!("Running: {command}");
        let spawned = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => self.children.push((command, child)),
            Err(e) => log::warn!("Failed to start '{command}': {e}"),
        }
    }
}

/// Records submitted commands instead of running them.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub commands: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_matching(&self, command: &str) -> usize {
        self.commands.iter().filter(|c| c.as_str() == command).count()
    }
}

impl CommandRunner for RecordingRunner {
    fn submit(&mut self, command: String) {
        log::debug!("Recorded: {command}");
        self.commands.push(command);
    }
}
