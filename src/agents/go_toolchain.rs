use crate::agents::command_runner::{Check, CommandRunner, CommandSpec};
use crate::error::Result;
use crate::output;
use std::path::Path;

/// GoToolchainAgent drives `go`, `make` and the repository's validation harness
pub struct GoToolchainAgent<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> GoToolchainAgent<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// `go get <target>`, where target is `module` or `module@version`
    pub fn get(&self, target: &str) -> Result<()> {
        self.runner
            .run(&CommandSpec::new("go").args(["get", target]), Check::Strict)?;
        Ok(())
    }

    pub fn mod_tidy(&self) -> Result<()> {
        self.runner
            .run(&CommandSpec::new("go").args(["mod", "tidy"]), Check::Strict)?;
        Ok(())
    }

    /// Run a make target, e.g. `boilerplate-update`
    pub fn make(&self, target: &str) -> Result<()> {
        self.runner
            .run(&CommandSpec::new("make").arg(target), Check::Strict)?;
        Ok(())
    }

    /// Execute the validation harness; any non-zero exit fails the run
    pub fn validate(&self, script: &Path) -> Result<()> {
        let script = self.runner.locate(script)?;
        output::info(&format!("Using container-make script: {}", script.display()));
        self.runner.run(
            &CommandSpec::new(script.to_string_lossy().into_owned()),
            Check::Strict,
        )?;
        Ok(())
    }
}
