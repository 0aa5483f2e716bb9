pub mod command_runner;
pub mod dependency_planner;
pub mod go_toolchain;
pub mod release;
pub mod version_control;

pub mod interaction;

pub use command_runner::{CommandRunner, SystemCommandRunner};
