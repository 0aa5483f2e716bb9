use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "maintenance-update",
    about = "Automate maintenance updates across OpenShift releases: bump Go dependencies, refresh boilerplate, validate, stage and commit",
    version,
    author,
    after_help = "Examples:\n  \
        maintenance-update\n  \
        maintenance-update --release release-4.19\n  \
        maintenance-update --release release-4.19 --version-deps github.com/openshift/api github.com/custom/dependency\n  \
        maintenance-update --latest-deps github.com/openshift-online/ocm-sdk-go github.com/custom/latest-dependency"
)]
pub struct Cli {
    /// OpenShift release to pin version dependencies to (e.g. release-4.19)
    #[arg(long, value_name = "RELEASE")]
    pub release: Option<String>,

    /// Modules to update to the release version
    #[arg(long, num_args = 0.., value_name = "MODULE")]
    pub version_deps: Option<Vec<String>>,

    /// Modules to update to their latest version
    #[arg(long, num_args = 0.., value_name = "MODULE")]
    pub latest_deps: Option<Vec<String>>,

    /// Path inside the repository to update (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// TOML settings file with default dependency lists and tool locations
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
