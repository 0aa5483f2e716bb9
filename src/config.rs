use crate::cli::Cli;
use crate::error::{MaintError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_VERSION_DEPS: &[&str] = &[
    "github.com/openshift/api",
    "github.com/openshift/cluster-version-operator",
];

pub const DEFAULT_LATEST_DEPS: &[&str] = &[
    "github.com/openshift-online/ocm-sdk-go",
    "github.com/openshift/osde2e-common",
];

pub const DEFAULT_VALIDATION_SCRIPT: &str = "boilerplate/_lib/container-make";
pub const DEFAULT_BOILERPLATE_TARGET: &str = "boilerplate-update";

/// Locations of the opaque tools run in each phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    /// Validation harness, relative to the repository root
    pub validation_script: PathBuf,
    pub boilerplate_target: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            validation_script: PathBuf::from(DEFAULT_VALIDATION_SCRIPT),
            boilerplate_target: DEFAULT_BOILERPLATE_TARGET.to_string(),
        }
    }
}

/// Everything the workflow needs to know, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfiguration {
    pub release: Option<String>,
    pub version_deps: Vec<String>,
    pub latest_deps: Vec<String>,
    pub tools: ToolSettings,
}

impl Default for UpdateConfiguration {
    fn default() -> Self {
        Self {
            release: None,
            version_deps: owned(DEFAULT_VERSION_DEPS),
            latest_deps: owned(DEFAULT_LATEST_DEPS),
            tools: ToolSettings::default(),
        }
    }
}

/// Optional on-disk defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub version_deps: Option<Vec<String>>,
    pub latest_deps: Option<Vec<String>>,
    #[serde(default)]
    pub tools: ToolsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    pub validation_script: Option<PathBuf>,
    pub boilerplate_target: Option<String>,
}

impl SettingsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MaintError::Config(format!("Failed to read '{}': {e}", path.display()))
        })?;
        let settings: SettingsFile = toml::from_str(&content)?;

        if let Some(script) = &settings.tools.validation_script {
            if script.is_absolute() {
                return Err(MaintError::Config(format!(
                    "validation_script must be relative to the repository root, got '{}'",
                    script.display()
                )));
            }
        }
        if let Some(target) = &settings.tools.boilerplate_target {
            if target.trim().is_empty() {
                return Err(MaintError::Config(
                    "boilerplate_target must not be empty".to_string(),
                ));
            }
        }

        Ok(settings)
    }
}

impl UpdateConfiguration {
    /// Layer CLI flags over the settings file over built-in defaults
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let settings = match &cli.config {
            Some(path) => SettingsFile::load(path)?,
            None => SettingsFile::default(),
        };
        Ok(Self::from_layers(cli, settings))
    }

    fn from_layers(cli: &Cli, settings: SettingsFile) -> Self {
        let defaults = Self::default();
        Self {
            release: cli.release.clone(),
            version_deps: cli
                .version_deps
                .clone()
                .or(settings.version_deps)
                .unwrap_or(defaults.version_deps),
            latest_deps: cli
                .latest_deps
                .clone()
                .or(settings.latest_deps)
                .unwrap_or(defaults.latest_deps),
            tools: ToolSettings {
                validation_script: settings
                    .tools
                    .validation_script
                    .unwrap_or(defaults.tools.validation_script),
                boilerplate_target: settings
                    .tools
                    .boilerplate_target
                    .unwrap_or(defaults.tools.boilerplate_target),
            },
        }
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["maintenance-update"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn falls_back_to_built_in_defaults() {
        let config = UpdateConfiguration::resolve(&cli(&[])).unwrap();
        assert_eq!(config, UpdateConfiguration::default());
        assert_eq!(config.version_deps.len(), 2);
        assert_eq!(config.latest_deps.len(), 2);
    }

    #[test]
    fn cli_flags_override_settings_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maintenance.toml");
        fs::write(
            &path,
            r#"
version_deps = ["github.com/openshift/api"]
latest_deps = ["github.com/example/from-file"]

[tools]
boilerplate_target = "update-boilerplate"
"#,
        )
        .unwrap();

        let config = UpdateConfiguration::resolve(&cli(&[
            "--config",
            path.to_str().unwrap(),
            "--latest-deps",
            "mod/x",
        ]))
        .unwrap();

        assert_eq!(config.version_deps, vec!["github.com/openshift/api"]);
        assert_eq!(config.latest_deps, vec!["mod/x"]);
        assert_eq!(config.tools.boilerplate_target, "update-boilerplate");
        assert_eq!(
            config.tools.validation_script,
            PathBuf::from(DEFAULT_VALIDATION_SCRIPT)
        );
    }

    #[test]
    fn empty_flag_disables_a_list() {
        let config = UpdateConfiguration::resolve(&cli(&["--version-deps"])).unwrap();
        assert!(config.version_deps.is_empty());
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maintenance.toml");
        fs::write(&path, "releases = [\"release-4.19\"]\n").unwrap();

        let err = SettingsFile::load(&path).unwrap_err();
        assert!(matches!(err, MaintError::Toml(_)));
    }

    #[test]
    fn rejects_absolute_validation_script() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maintenance.toml");
        fs::write(&path, "[tools]\nvalidation_script = \"/usr/bin/true\"\n").unwrap();

        let err = SettingsFile::load(&path).unwrap_err();
        assert!(matches!(err, MaintError::Config(_)));
    }

    #[test]
    fn missing_settings_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let err = SettingsFile::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, MaintError::Config(_)));
    }
}
