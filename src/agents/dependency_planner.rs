use crate::agents::command_runner::CommandRunner;
use crate::agents::go_toolchain::GoToolchainAgent;
use crate::agents::release::{CONTROLLER_RUNTIME_MODULE, ReleaseVersion, supported_releases};
use crate::error::Result;
use crate::output;

/// Which version a module is moved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionPolicy {
    PinnedToRelease(ReleaseVersion),
    Latest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub module: String,
    pub policy: VersionPolicy,
}

impl DependencySpec {
    /// Argument handed to `go get`
    pub fn target(&self) -> String {
        match &self.policy {
            VersionPolicy::PinnedToRelease(release) => format!("{}@{}", self.module, release),
            VersionPolicy::Latest => self.module.clone(),
        }
    }
}

/// Turns configured module lists into ordered update operations
pub struct DependencyUpdatePlanner;

impl DependencyUpdatePlanner {
    pub fn pinned(release: &ReleaseVersion, modules: &[String]) -> Vec<DependencySpec> {
        Self::plan(modules, || VersionPolicy::PinnedToRelease(release.clone()))
    }

    pub fn latest(modules: &[String]) -> Vec<DependencySpec> {
        Self::plan(modules, || VersionPolicy::Latest)
    }

    fn plan(modules: &[String], policy: impl Fn() -> VersionPolicy) -> Vec<DependencySpec> {
        modules
            .iter()
            .map(|module| module.trim())
            .filter(|module| !module.is_empty())
            .map(|module| DependencySpec {
                module: module.to_string(),
                policy: policy(),
            })
            .collect()
    }
}

/// Executes update plans one `go get` at a time, stopping at the first failure
pub struct DependencyUpdater<'a, R: CommandRunner> {
    go: GoToolchainAgent<'a, R>,
}

impl<'a, R: CommandRunner> DependencyUpdater<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self {
            go: GoToolchainAgent::new(runner),
        }
    }

    /// Pin `modules` to `release`, then move controller-runtime to the matching version.
    ///
    /// Returns the number of `go get` operations issued.
    pub fn update_pinned(&self, release: &ReleaseVersion, modules: &[String]) -> Result<usize> {
        output::section(&format!("Updating Version Dependencies ({release})"));

        let plan = DependencyUpdatePlanner::pinned(release, modules);
        if plan.is_empty() {
            output::info("No version dependencies specified, skipping version-based updates");
            return Ok(0);
        }

        self.apply(&plan)?;
        output::success(&format!(
            "Updated {} version-based dependencies",
            plan.len()
        ));

        output::section("Updating Controller Runtime");
        let version = match release.controller_runtime_version() {
            Ok(version) => version,
            Err(err) => {
                output::error(&format!("Unrecognized release version: {release}"));
                output::info(&format!("Supported versions: {}", supported_releases()));
                return Err(err);
            }
        };

        let target = format!("{CONTROLLER_RUNTIME_MODULE}@{version}");
        output::step(1, 1, &format!("Updating {target}"));
        self.go.get(&target)?;
        output::success("Controller runtime updated successfully");

        Ok(plan.len() + 1)
    }

    /// Move `modules` to their newest versions
    pub fn update_latest(&self, modules: &[String]) -> Result<usize> {
        output::section("Updating Latest Dependencies");

        let plan = DependencyUpdatePlanner::latest(modules);
        if plan.is_empty() {
            output::info("No latest dependencies specified, skipping latest updates");
            return Ok(0);
        }

        self.apply(&plan)?;
        output::success(&format!("Updated {} latest dependencies", plan.len()));
        Ok(plan.len())
    }

    fn apply(&self, plan: &[DependencySpec]) -> Result<()> {
        output::info(&format!("Found {} dependencies to update:", plan.len()));
        for (i, spec) in plan.iter().enumerate() {
            output::item(i + 1, &spec.module);
        }
        println!();

        for (i, spec) in plan.iter().enumerate() {
            let target = spec.target();
            output::step(i + 1, plan.len(), &format!("Updating {target}"));
            self.go.get(&target)?;
        }
        Ok(())
    }
}
