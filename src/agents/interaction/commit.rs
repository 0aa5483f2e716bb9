use crate::agents::command_runner::CommandRunner;
use crate::agents::interaction::{Prompter, is_affirmative};
use crate::agents::version_control::VersionControlAgent;
use crate::error::Result;
use crate::output;
use colored::Colorize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(String),
    Declined,
}

/// Asks the operator to confirm (and optionally reword) a commit
pub struct CommitController<'a, R: CommandRunner, P: Prompter> {
    git: &'a VersionControlAgent<'a, R>,
    prompter: &'a mut P,
}

impl<'a, R: CommandRunner, P: Prompter> CommitController<'a, R, P> {
    pub fn new(git: &'a VersionControlAgent<'a, R>, prompter: &'a mut P) -> Self {
        Self { git, prompter }
    }

    pub fn run(&mut self, default_message: &str) -> Result<CommitOutcome> {
        println!("\n{}", "📝 Commit Changes".yellow());
        println!("Default message: {}", format!("\"{default_message}\"").cyan());

        let confirm = self
            .prompter
            .ask("\nDo you wish to commit the changes? (y/yes/n/No):")?;
        if !is_affirmative(&confirm) {
            output::warning("Not committing the changes to repository. Exiting.");
            return Ok(CommitOutcome::Declined);
        }

        println!("\n{}", "✏️  Custom Commit Message".yellow());
        println!("Press Enter to use default message, or type your custom message:");
        let custom = self.prompter.ask("Commit message:")?;
        let message = if custom.is_empty() {
            default_message.to_string()
        } else {
            custom
        };

        output::info(&format!("Committing with message: \"{message}\""));
        self.git.commit(&message)?;
        output::success("Changes committed successfully!");

        Ok(CommitOutcome::Committed(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaintError;
    use crate::testing::{MockRunner, ScriptedPrompter};

    #[test]
    fn empty_message_keeps_default() {
        let runner = MockRunner::new();
        let git = VersionControlAgent::new(&runner);
        let mut prompter = ScriptedPrompter::new(["yes", ""]);

        let outcome = CommitController::new(&git, &mut prompter)
            .run("Updating go.mod dependencies")
            .unwrap();

        assert_eq!(
            outcome,
            CommitOutcome::Committed("Updating go.mod dependencies".to_string())
        );
        assert_eq!(runner.calls(), vec!["git commit -m Updating go.mod dependencies"]);
    }

    #[test]
    fn custom_message_replaces_default() {
        let runner = MockRunner::new();
        let git = VersionControlAgent::new(&runner);
        let mut prompter = ScriptedPrompter::new(["Y", "Bump OCP 4.19 deps"]);

        let outcome = CommitController::new(&git, &mut prompter)
            .run("Updating go.mod dependencies")
            .unwrap();

        assert_eq!(outcome, CommitOutcome::Committed("Bump OCP 4.19 deps".to_string()));
        assert_eq!(runner.calls(), vec!["git commit -m Bump OCP 4.19 deps"]);
    }

    #[test]
    fn anything_but_yes_declines() {
        for answer in ["n", "No", "", "maybe"] {
            let runner = MockRunner::new();
            let git = VersionControlAgent::new(&runner);
            let mut prompter = ScriptedPrompter::new([answer]);

            let outcome = CommitController::new(&git, &mut prompter)
                .run("Updating boilerplate dependencies")
                .unwrap();

            assert_eq!(outcome, CommitOutcome::Declined);
            assert!(runner.calls().is_empty());
        }
    }

    #[test]
    fn interrupt_during_message_prompt_aborts() {
        let runner = MockRunner::new();
        let git = VersionControlAgent::new(&runner);
        let mut prompter = ScriptedPrompter::new(["y"]);

        let err = CommitController::new(&git, &mut prompter)
            .run("Updating go.mod dependencies")
            .unwrap_err();

        assert!(matches!(err, MaintError::UserCancelled));
        assert!(runner.calls().is_empty());
    }
}
