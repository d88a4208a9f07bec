use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    cli::Args,
    command::ShellRunner,
    constants::{exit_codes, EXITED_NOTICE},
    error::Result,
    finisher::Finisher,
    prompt::DialoguerGateway,
    setup::{Outcome, SetupSequence},
};

/// Set once the finisher has issued its commands; Ctrl-C after that is no longer an abort.
static FINISHED: AtomicBool = AtomicBool::new(false);

/// Main CLI runner that wires the terminal up to the setup sequence
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        install_interrupt_handler();

        let mut shell = ShellRunner::new(&self.args.project_dir, self.args.dry_run);
        let finisher = if self.args.dry_run {
            Finisher::new(&self.args.project_dir).without_substitutions()
        } else {
            Finisher::new(&self.args.project_dir)
        };

        let outcome = SetupSequence::new(DialoguerGateway::new(), &mut shell, finisher)
            .with_overrides(self.args.overrides())
            .run()?;

        match outcome {
            Outcome::Finished { project, config } => {
                FINISHED.store(true, Ordering::SeqCst);
                log::info!("Setup of '{}' finished with {config:?}", project.machine_name);
            }
            Outcome::Aborted => log::info!("Setup aborted"),
        }

        // Commands never fail the run; waiting only keeps them from outliving the terminal session.
        shell.wait_all();
        Ok(())
    }
}

/// Ctrl-C while a prompt is open leaves cleanly, like any other cancellation.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        if let Some(notice) = interrupt_notice(&FINISHED) {
            println!("\n{}\n", console::style(notice).yellow());
        }
        std::process::exit(exit_codes::SUCCESS);
    });
    if let Err(e) = installed {
        log::warn!("Failed to install the interrupt handler: {e}");
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}

/// The notice printed on Ctrl-C, if any.
fn interrupt_notice(finished: &AtomicBool) -> Option<&'static str> {
    (!finished.load(Ordering::SeqCst)).then_some(EXITED_NOTICE)
}
