mod agents;
mod cli;
mod config;
mod error;
mod output;
mod utils;
mod workflow;

#[cfg(test)]
mod testing;

use agents::SystemCommandRunner;
use agents::interaction::TerminalPrompter;
use clap::Parser;
use cli::Cli;
use config::UpdateConfiguration;
use error::{INTERRUPTED_EXIT_CODE, MaintError};
use std::process;
use workflow::MaintenanceWorkflow;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var(output::VERBOSE_ENV, "1");
        }
    }

    install_interrupt_handler();
    output::header("🔧 MAINTENANCE UPDATE SCRIPT 🔧", '=');

    let result = UpdateConfiguration::resolve(&cli).and_then(|config| {
        let runner = SystemCommandRunner::new(&cli.path)?;
        MaintenanceWorkflow::new(config, runner, TerminalPrompter::stdin()).run()
    });

    match result {
        Ok(report) => workflow::print_report(&report),
        Err(e) => {
            output::error(&e.abort_message());
            process::exit(1);
        }
    }
}

/// Ctrl-C at any point ends the run with an operator-abort message
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        println!();
        output::error(&MaintError::UserCancelled.abort_message());
        process::exit(INTERRUPTED_EXIT_CODE);
    });

    if let Err(e) = installed {
        output::warning(&format!("Could not install Ctrl-C handler: {e}"));
    }
}
