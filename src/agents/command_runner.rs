use crate::error::{MaintError, Result};
use crate::output;
use crate::utils::PathValidator;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

const SPINNER_TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

/// Whether a non-zero exit should abort the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Strict,
    Lenient,
}

/// An external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub echo: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            echo: true,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Do not print the command line before running it
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Executes external tools on behalf of the workflow.
///
/// Every failure of a [`Check::Strict`] invocation surfaces as
/// [`MaintError::ExternalCommand`]; lenient invocations report failure as an
/// empty string or `false`.
pub trait CommandRunner {
    /// Run the command and return its trimmed standard output
    fn capture(&self, command: &CommandSpec, check: Check) -> Result<String>;

    /// Run the command with its output forwarded to the terminal
    fn run(&self, command: &CommandSpec, check: Check) -> Result<bool>;

    /// Make `dir` the working directory for all later commands
    fn change_dir(&mut self, dir: &Path) -> Result<()>;

    /// Resolve a script path relative to the working directory
    fn locate(&self, relative: &Path) -> Result<PathBuf>;
}

/// Runs commands as real child processes
pub struct SystemCommandRunner {
    working_dir: PathBuf,
}

impl SystemCommandRunner {
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Result<Self> {
        let working_dir = PathValidator::validate_working_dir(working_dir)?;
        Ok(Self { working_dir })
    }

    fn command(&self, spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command.current_dir(&self.working_dir).args(&spec.args);
        command
    }

    fn spinner(spec: &CommandSpec) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars(SPINNER_TICKS),
        );
        pb.set_message(format!("Running {}", spec.program));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Run `spec`, copying each line of its stdout to `sink` as it arrives
    fn stream<W: Write>(&self, spec: &CommandSpec, check: Check, sink: &mut W) -> Result<bool> {
        if spec.echo {
            output::command(&spec.to_string());
        }

        let spawned = self
            .command(spec)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                Self::failure(spec, check, format!("failed to spawn process: {e}"))?;
                return Ok(false);
            }
        };

        // pb.println is a no-op while the spinner is hidden
        let pb = Self::spinner(spec);
        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines().map_while(|line| line.ok()) {
                pb.suspend(|| writeln!(sink, "{line}"))?;
            }
        }
        let status = child.wait();
        pb.finish_and_clear();
        sink.flush()?;

        let status = match status {
            Ok(status) => status,
            Err(e) => {
                Self::failure(spec, check, format!("failed to wait for process: {e}"))?;
                return Ok(false);
            }
        };

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            Self::failure(spec, check, reason)?;
            return Ok(false);
        }

        if spec.echo {
            output::success("Command completed successfully");
        }
        Ok(true)
    }

    fn failure(spec: &CommandSpec, check: Check, reason: String) -> Result<()> {
        output::error(&format!("Command failed: {spec}: {reason}"));
        match check {
            Check::Strict => Err(MaintError::ExternalCommand {
                command: spec.to_string(),
                reason,
            }),
            Check::Lenient => Ok(()),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn capture(&self, spec: &CommandSpec, check: Check) -> Result<String> {
        if spec.echo {
            output::command(&spec.to_string());
        } else {
            output::debug(&format!("$ {spec}"));
        }

        let result = self.command(spec).stdin(Stdio::null()).output();
        let out = match result {
            Ok(out) => out,
            Err(e) => {
                Self::failure(spec, check, format!("failed to spawn process: {e}"))?;
                return Ok(String::new());
            }
        };

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            let reason = match out.status.code() {
                Some(code) => format!("exit code {code}: {stderr}"),
                None => format!("terminated by signal: {stderr}"),
            };
            Self::failure(spec, check, reason)?;
            return Ok(String::new());
        }

        let stdout = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if !stdout.is_empty() {
            output::debug(&stdout);
        }
        Ok(stdout)
    }

    fn run(&self, spec: &CommandSpec, check: Check) -> Result<bool> {
        self.stream(spec, check, &mut io::stdout())
    }

    fn change_dir(&mut self, dir: &Path) -> Result<()> {
        self.working_dir = PathValidator::validate_working_dir(dir)?;
        output::debug(&format!("Working directory: {}", self.working_dir.display()));
        Ok(())
    }

    fn locate(&self, relative: &Path) -> Result<PathBuf> {
        PathValidator::validate_script(&self.working_dir, relative)
    }
}
