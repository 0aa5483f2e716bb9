pub mod commit;
pub mod prompter;
pub mod staging;

pub use commit::{CommitController, CommitOutcome};
pub use prompter::{Prompter, TerminalPrompter, is_affirmative};
pub use staging::StagingController;
