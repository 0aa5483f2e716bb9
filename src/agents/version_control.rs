use crate::agents::command_runner::{Check, CommandRunner, CommandSpec};
use crate::error::Result;
use crate::output;
use colored::Colorize;

/// Files with changes, split by whether they are in the index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitChangeSet {
    pub staged: Vec<String>,
    pub unstaged: Vec<String>,
}

/// VersionControlAgent inspects and updates the repository through `git`
pub struct VersionControlAgent<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> VersionControlAgent<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Top-level directory of the repository containing the working directory
    pub fn repo_root(&self) -> Result<String> {
        self.runner.capture(
            &git(["rev-parse", "--show-toplevel"]).quiet(),
            Check::Strict,
        )
    }

    /// True when anything is modified, staged or not. Inspection failures read as clean.
    pub fn has_changes(&self) -> bool {
        self.runner
            .capture(&git(["status", "--porcelain"]).quiet(), Check::Lenient)
            .map(|status| !status.is_empty())
            .unwrap_or(false)
    }

    pub fn staged_files(&self) -> Result<Vec<String>> {
        self.list(git(["diff", "--cached", "--name-only"]))
    }

    pub fn unstaged_files(&self) -> Result<Vec<String>> {
        self.list(git(["diff", "--name-only"]))
    }

    pub fn change_set(&self) -> Result<GitChangeSet> {
        Ok(GitChangeSet {
            staged: self.staged_files()?,
            unstaged: self.unstaged_files()?,
        })
    }

    /// Print the full diff, short status and diffstat
    pub fn show_summary(&self) -> Result<()> {
        output::section("Git Changes Summary");

        output::info("Current changes:");
        self.runner
            .run(&git(["--no-pager", "diff"]).quiet(), Check::Strict)?;

        println!("\n{}", "Status:".yellow());
        self.runner
            .run(&git(["status", "--porcelain"]).quiet(), Check::Strict)?;

        println!("\n{}", "Statistics:".yellow());
        self.runner
            .run(&git(["--no-pager", "diff", "--stat"]).quiet(), Check::Strict)?;
        Ok(())
    }

    /// Add `files` to the index in one invocation
    pub fn stage(&self, files: &[String]) -> Result<()> {
        if files.is_empty() {
            return Ok(());
        }
        let command = git(["add", "--"]).args(files.iter().cloned());
        let command = if files.len() > 1 { command.quiet() } else { command };
        self.runner.run(&command, Check::Strict)?;
        Ok(())
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.runner
            .run(&git(["commit", "-m"]).arg(message), Check::Strict)?;
        Ok(())
    }

    fn list(&self, command: CommandSpec) -> Result<Vec<String>> {
        let listing = self.runner.capture(&command.quiet(), Check::Strict)?;
        Ok(split_paths(&listing))
    }
}

fn git<const N: usize>(args: [&str; N]) -> CommandSpec {
    CommandSpec::new("git").args(args)
}

fn split_paths(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
