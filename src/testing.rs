//! Test doubles for the command runner and operator prompts.

use crate::agents::command_runner::{Check, CommandRunner, CommandSpec};
use crate::agents::interaction::Prompter;
use crate::error::{MaintError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// Records every command line and answers from a script.
///
/// Unscripted commands succeed with empty output.
#[derive(Default)]
pub struct MockRunner {
    outputs: HashMap<String, String>,
    failing: HashSet<String>,
    calls: RefCell<Vec<String>>,
    pub working_dir: Option<PathBuf>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: &str, output: &str) -> Self {
        self.outputs.insert(command.to_string(), output.to_string());
        self
    }

    pub fn failing(mut self, command: &str) -> Self {
        self.failing.insert(command.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Calls whose command line starts with `prefix`
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    fn record(&self, command: &CommandSpec, check: Check) -> Result<Option<String>> {
        let line = command.to_string();
        self.calls.borrow_mut().push(line.clone());

        if self.failing.contains(&line) {
            return match check {
                Check::Strict => Err(MaintError::ExternalCommand {
                    command: line,
                    reason: "exit code 1".to_string(),
                }),
                Check::Lenient => Ok(None),
            };
        }
        Ok(Some(self.outputs.get(&line).cloned().unwrap_or_default()))
    }
}

impl CommandRunner for MockRunner {
    fn capture(&self, command: &CommandSpec, check: Check) -> Result<String> {
        Ok(self.record(command, check)?.unwrap_or_default())
    }

    fn run(&self, command: &CommandSpec, check: Check) -> Result<bool> {
        Ok(self.record(command, check)?.is_some())
    }

    fn change_dir(&mut self, dir: &Path) -> Result<()> {
        self.working_dir = Some(dir.to_path_buf());
        Ok(())
    }

    fn locate(&self, relative: &Path) -> Result<PathBuf> {
        let base = self.working_dir.clone().unwrap_or_default();
        Ok(base.join(relative))
    }
}

/// Replays queued answers; running out behaves like an interrupt
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(MaintError::UserCancelled)
    }
}
