use crate::{
    constants::{exit_codes, verbosity},
    finisher::ExecutionOverrides,
};
use clap::{error::ErrorKind, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for the setup tool. Every flag is optional.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory of the project being set up.
    #[arg(short = 'C', long = "project-dir", value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log commands instead of running them and leave files untouched.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not install dependencies when finished.
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Keep the setup folder instead of deleting it when finished.
    #[arg(long = "keep-setup")]
    pub keep_setup: bool,
}

impl Args {
    /// Finisher flags requested on the command line; unset flags keep their defaults.
    pub fn overrides(&self) -> ExecutionOverrides {
        let mut overrides = ExecutionOverrides::default();
        if self.no_install {
            overrides.run_install = Some(false);
        }
        if self.keep_setup {
            overrides.remove_setup_folder = Some(false);
            overrides.preserve_setup_folder = Some(true);
        }
        overrides
    }
}

/// Parse command line arguments, exiting on invalid input.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
        let _ = e.print();
        std::process::exit(exit_codes::FAILURE);
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn no_flags_means_plain_interactive_run() {
        let args = Args::parse_from(["setup"]);
        assert_eq!(args.project_dir, PathBuf::from("."));
        assert_eq!(args.verbose, 0);
        assert!(!args.dry_run);
        assert_eq!(args.overrides(), ExecutionOverrides::default());
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "setup",
            "-C",
            "/tmp/app",
            "-vv",
            "--dry-run",
            "--no-install",
            "--keep-setup",
        ]);
        assert_eq!(args.project_dir, PathBuf::from("/tmp/app"));
        assert_eq!(args.verbose, 2);
        assert!(args.dry_run);
        let overrides = args.overrides();
        assert_eq!(overrides.run_install, Some(false));
        assert_eq!(overrides.remove_setup_folder, Some(false));
        assert_eq!(overrides.preserve_setup_folder, Some(true));
        assert_eq!(overrides.apply_git_repo, None);
    }
}
