use crate::error::{MaintError, Result};
use std::fmt;

const RELEASE_PREFIX: &str = "release-";

/// Module whose version follows the OpenShift release being targeted
pub const CONTROLLER_RUNTIME_MODULE: &str = "sigs.k8s.io/controller-runtime";

/// Known releases and the controller-runtime version each one pins
pub const CONTROLLER_RUNTIME_VERSIONS: &[(&str, &str)] = &[
    ("release-4.19", "v0.20.0"),
    ("release-4.20", "v0.21.0"),
];

/// A release identifier of the form `release-<number>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Checks the shape only; the release is not looked up anywhere.
    pub fn parse(raw: &str) -> Result<Self> {
        let Some(number) = raw.strip_prefix(RELEASE_PREFIX) else {
            return Err(MaintError::InvalidRelease(raw.to_string()));
        };

        if number.parse::<f64>().is_err() {
            return Err(MaintError::InvalidRelease(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    /// Controller-runtime version pinned for this release
    pub fn controller_runtime_version(&self) -> Result<&'static str> {
        CONTROLLER_RUNTIME_VERSIONS
            .iter()
            .find(|(release, _)| *release == self.0)
            .map(|(_, version)| *version)
            .ok_or_else(|| MaintError::UnrecognizedRelease {
                release: self.0.clone(),
                supported: supported_releases(),
            })
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn supported_releases() -> String {
    CONTROLLER_RUNTIME_VERSIONS
        .iter()
        .map(|(release, _)| *release)
        .collect::<Vec<_>>()
        .join(", ")
}
