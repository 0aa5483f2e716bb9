use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaintError {
    #[error("Invalid release version '{0}': expected release-<number> (e.g. release-4.19)")]
    InvalidRelease(String),

    #[error("Unrecognized release version: {release} (supported versions: {supported})")]
    UnrecognizedRelease { release: String, supported: String },

    #[error("Command '{command}' failed: {reason}")]
    ExternalCommand { command: String, reason: String },

    #[error("Not committing the changes to repository")]
    CommitDeclined,

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Coarse classification of every fatal path, used for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    Configuration,
    ExternalCommand,
    OperatorAbort,
}

impl AbortReason {
    pub fn label(self) -> &'static str {
        match self {
            AbortReason::Configuration => "Configuration error",
            AbortReason::ExternalCommand => "External command failed",
            AbortReason::OperatorAbort => "Aborted by operator",
        }
    }
}

/// Exit status after Ctrl-C, matching the shell convention for SIGINT
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

impl MaintError {
    /// Line printed right before the process exits
    pub fn abort_message(&self) -> String {
        format!("{}: {self}", self.reason().label())
    }

    pub fn reason(&self) -> AbortReason {
        match self {
            MaintError::InvalidRelease(_)
            | MaintError::UnrecognizedRelease { .. }
            | MaintError::Config(_)
            | MaintError::Toml(_) => AbortReason::Configuration,
            MaintError::ExternalCommand { .. } | MaintError::Io(_) => AbortReason::ExternalCommand,
            MaintError::CommitDeclined | MaintError::UserCancelled => AbortReason::OperatorAbort,
        }
    }
}

pub type Result<T> = std::result::Result<T, MaintError>;
