use crate::agents::command_runner::CommandRunner;
use crate::agents::interaction::Prompter;
use crate::agents::version_control::{GitChangeSet, VersionControlAgent};
use crate::error::Result;
use crate::output;
use colored::Colorize;
use std::ops::Range;

/// Operator's answer for one unstaged file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingDecision {
    Stage,
    Skip,
    StageAllRemaining,
}

impl StagingDecision {
    /// `y`/`yes` stage, `a`/`all` stage the rest, anything else skips
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => StagingDecision::Stage,
            "a" | "all" => StagingDecision::StageAllRemaining,
            _ => StagingDecision::Skip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingState {
    Prompting(usize),
    Done,
}

/// Files to add (as indices into the unstaged list) and the state that follows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingTransition {
    pub stage: Range<usize>,
    pub next: StagingState,
}

impl StagingState {
    pub fn start(total: usize) -> Self {
        if total == 0 {
            StagingState::Done
        } else {
            StagingState::Prompting(0)
        }
    }

    pub fn next(self, total: usize, decision: StagingDecision) -> StagingTransition {
        let StagingState::Prompting(index) = self else {
            return StagingTransition {
                stage: 0..0,
                next: StagingState::Done,
            };
        };

        let advance = if index + 1 < total {
            StagingState::Prompting(index + 1)
        } else {
            StagingState::Done
        };

        match decision {
            StagingDecision::Stage => StagingTransition {
                stage: index..index + 1,
                next: advance,
            },
            StagingDecision::Skip => StagingTransition {
                stage: index..index,
                next: advance,
            },
            StagingDecision::StageAllRemaining => StagingTransition {
                stage: index..total,
                next: StagingState::Done,
            },
        }
    }
}

/// Walks the unstaged files and asks which ones go into the next commit
pub struct StagingController<'a, R: CommandRunner, P: Prompter> {
    git: &'a VersionControlAgent<'a, R>,
    prompter: &'a mut P,
}

impl<'a, R: CommandRunner, P: Prompter> StagingController<'a, R, P> {
    pub fn new(git: &'a VersionControlAgent<'a, R>, prompter: &'a mut P) -> Self {
        Self { git, prompter }
    }

    /// Returns the files staged during this walk, in list order
    pub fn run(&mut self, changes: &GitChangeSet) -> Result<Vec<String>> {
        output::section("Git Staging Overview");

        if changes.staged.is_empty() {
            output::info("No files currently staged");
        } else {
            output::success(&format!("Already staged ({} files):", changes.staged.len()));
            for (i, file) in changes.staged.iter().enumerate() {
                output::item(i + 1, file);
            }
            println!();
        }

        let files = &changes.unstaged;
        if files.is_empty() {
            if changes.staged.is_empty() {
                output::info("No unstaged files to add");
            } else {
                output::info("All changes are already staged - ready to commit!");
            }
            return Ok(Vec::new());
        }

        output::warning(&format!("Unstaged changes ({} files):", files.len()));
        for (i, file) in files.iter().enumerate() {
            output::item(i + 1, file);
        }
        println!("\n{}", "Select files to stage:".bold());

        let total = files.len();
        let mut staged = Vec::new();
        let mut state = StagingState::start(total);

        while let StagingState::Prompting(index) = state {
            let file = &files[index];
            println!(
                "\n{} {file}",
                format!("[{}/{}]", index + 1, total).cyan()
            );
            let answer = self
                .prompter
                .ask("Add this file to git cache? (y/yes/n/No/a/all):")?;
            let decision = StagingDecision::from_answer(&answer);

            let transition = state.next(total, decision);
            let batch = &files[transition.stage.clone()];
            match decision {
                StagingDecision::Stage => {
                    output::success(&format!("Adding {file} to git cache"));
                }
                StagingDecision::Skip => output::warning(&format!("Skipping {file}")),
                StagingDecision::StageAllRemaining => {
                    output::success("Adding all remaining files to git cache");
                }
            }

            self.git.stage(batch)?;
            if decision == StagingDecision::StageAllRemaining {
                output::info(&format!("Added {} files to git cache", batch.len()));
            }
            staged.extend(batch.iter().cloned());
            state = transition.next;
        }

        Ok(staged)
    }
}
