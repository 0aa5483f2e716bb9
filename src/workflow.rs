use crate::agents::dependency_planner::DependencyUpdater;
use crate::agents::go_toolchain::GoToolchainAgent;
use crate::agents::interaction::{CommitController, CommitOutcome, Prompter, StagingController};
use crate::agents::release::ReleaseVersion;
use crate::agents::version_control::VersionControlAgent;
use crate::agents::CommandRunner;
use crate::config::UpdateConfiguration;
use crate::error::{MaintError, Result};
use crate::output;
use colored::Colorize;
use jiff::Zoned;
use std::path::Path;

/// An update step plus the validation and commit that close it
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub name: &'static str,
    pub validate_label: &'static str,
    pub commit_message: &'static str,
}

pub const DEPENDENCY_PHASE: Phase = Phase {
    name: "Dependency updates",
    validate_label: "Validate go.mod update changes",
    commit_message: "Updating go.mod dependencies",
};

pub const BOILERPLATE_PHASE: Phase = Phase {
    name: "Boilerplate update",
    validate_label: "Validate boilerplate update changes",
    commit_message: "Updating boilerplate dependencies",
};

/// How a phase ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome {
    Clean,
    Committed { message: String, staged: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct MaintenanceReport {
    pub started: Zoned,
    pub finished: Zoned,
    pub dependency_updates: usize,
    pub phases: Vec<PhaseOutcome>,
}

impl MaintenanceReport {
    pub fn duration_secs(&self) -> f64 {
        self.finished
            .timestamp()
            .duration_since(self.started.timestamp())
            .as_secs_f64()
    }
}

/// Drives both maintenance phases against one repository
pub struct MaintenanceWorkflow<R: CommandRunner, P: Prompter> {
    config: UpdateConfiguration,
    runner: R,
    prompter: P,
}

impl<R: CommandRunner, P: Prompter> MaintenanceWorkflow<R, P> {
    pub fn new(config: UpdateConfiguration, runner: R, prompter: P) -> Self {
        Self {
            config,
            runner,
            prompter,
        }
    }

    pub fn run(&mut self) -> Result<MaintenanceReport> {
        let started = Zoned::now();
        output::info(&format!(
            "Started at {}",
            started.strftime("%Y-%m-%d %H:%M:%S")
        ));
        self.print_configuration();

        let release = self
            .config
            .release
            .as_deref()
            .map(ReleaseVersion::parse)
            .transpose()?;

        let repo_root = VersionControlAgent::new(&self.runner).repo_root()?;
        self.runner.change_dir(Path::new(&repo_root))?;
        output::success(&format!("Repository root: {repo_root}"));

        output::section("Preparing Dependencies");
        let mut dependency_updates = 0;
        {
            let updater = DependencyUpdater::new(&self.runner);
            if let Some(release) = &release {
                dependency_updates += updater.update_pinned(release, &self.config.version_deps)?;
            }
            dependency_updates += updater.update_latest(&self.config.latest_deps)?;
        }
        let dependencies = self.finish_phase(DEPENDENCY_PHASE)?;

        output::section("Updating Boilerplate");
        output::info("Running boilerplate update...");
        GoToolchainAgent::new(&self.runner).make(&self.config.tools.boilerplate_target)?;
        output::success("Boilerplate updated successfully");
        let boilerplate = self.finish_phase(BOILERPLATE_PHASE)?;

        Ok(MaintenanceReport {
            started,
            finished: Zoned::now(),
            dependency_updates,
            phases: vec![dependencies, boilerplate],
        })
    }

    /// Tidy, validate, then stage and commit whatever the update left behind
    fn finish_phase(&mut self, phase: Phase) -> Result<PhaseOutcome> {
        let go = GoToolchainAgent::new(&self.runner);

        output::info("Running go mod tidy...");
        go.mod_tidy()?;
        output::success("Dependencies tidied");

        output::section(phase.validate_label);
        output::info("Running validation tests with container-make...");
        go.validate(&self.config.tools.validation_script)?;
        output::success("Validation tests completed successfully");

        let git = VersionControlAgent::new(&self.runner);
        if !git.has_changes() {
            output::success("No git changes detected - repository is clean");
            return Ok(PhaseOutcome::Clean);
        }

        output::warning("Found local changes in the git repository");
        git.show_summary()?;

        let changes = git.change_set()?;
        let staged = StagingController::new(&git, &mut self.prompter).run(&changes)?;

        match CommitController::new(&git, &mut self.prompter).run(phase.commit_message)? {
            CommitOutcome::Committed(message) => Ok(PhaseOutcome::Committed { message, staged }),
            CommitOutcome::Declined => Err(MaintError::CommitDeclined),
        }
    }

    fn print_configuration(&self) {
        output::section("Configuration");
        println!(
            "  {} {}",
            "Release version:".cyan(),
            self.config.release.as_deref().unwrap_or("None")
        );
        println!(
            "  {} {} items",
            "Version dependencies:".cyan(),
            self.config.version_deps.len()
        );
        println!(
            "  {} {} items",
            "Latest dependencies:".cyan(),
            self.config.latest_deps.len()
        );
        output::debug(&format!(
            "Validation script: {}",
            self.config.tools.validation_script.display()
        ));
        output::debug(&format!(
            "Boilerplate target: {}",
            self.config.tools.boilerplate_target
        ));
    }
}

/// Print the closing banner for a successful run
pub fn print_report(report: &MaintenanceReport) {
    output::header("🎉 MAINTENANCE UPDATE COMPLETED 🎉", '*');
    output::success(&format!(
        "Completed at {}",
        report.finished.strftime("%Y-%m-%d %H:%M:%S")
    ));
    output::info(&format!("Dependency updates issued: {}", report.dependency_updates));
    for line in phase_summaries(report) {
        output::info(&line);
    }
    output::info(&format!(
        "Total duration: {:.1} seconds",
        report.duration_secs()
    ));
    println!(
        "\n{}\n",
        "All maintenance tasks completed successfully!".green().bold()
    );
}

fn phase_summaries(report: &MaintenanceReport) -> Vec<String> {
    [DEPENDENCY_PHASE, BOILERPLATE_PHASE]
        .iter()
        .zip(&report.phases)
        .map(|(phase, outcome)| match outcome {
            PhaseOutcome::Clean => format!("{}: nothing to commit", phase.name),
            PhaseOutcome::Committed { message, staged } => format!(
                "{}: committed \"{message}\" ({} files staged interactively)",
                phase.name,
                staged.len()
            ),
        })
        .collect()
}
