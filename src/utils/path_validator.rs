use crate::error::{MaintError, Result};
use std::path::{Path, PathBuf};

const FORBIDDEN: &[&str] = &["/etc", "/sys", "/proc", "/dev", "/boot"];

/// Guards the directories commands run in and the scripts they execute.
pub struct PathValidator;

impl PathValidator {
    /// Canonicalises a working directory and refuses system locations.
    pub fn validate_working_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            MaintError::Config(format!("Invalid directory '{}': {e}", path.display()))
        })?;

        if !canonical.is_dir() {
            return Err(MaintError::Config(format!(
                "Path '{}' is not a directory",
                canonical.display()
            )));
        }

        for forbidden in FORBIDDEN {
            let forbidden_path = Path::new(forbidden);
            let resolved = forbidden_path
                .canonicalize()
                .unwrap_or_else(|_| forbidden_path.to_path_buf());

            if canonical.starts_with(forbidden_path) || canonical.starts_with(&resolved) {
                return Err(MaintError::Config(format!(
                    "Running inside system directory '{forbidden}' is not allowed"
                )));
            }
        }

        Ok(canonical)
    }

    /// Resolves `relative` against `base` and ensures it names a file inside `base`.
    pub fn validate_script(base: impl AsRef<Path>, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let base = base.as_ref();
        let candidate = base.join(relative.as_ref());

        let canonical_base = base.canonicalize().map_err(|e| {
            MaintError::Config(format!("Invalid base directory '{}': {e}", base.display()))
        })?;
        let canonical = candidate.canonicalize().map_err(|e| {
            MaintError::Config(format!("Script '{}' not found: {e}", candidate.display()))
        })?;

        if !canonical.starts_with(&canonical_base) {
            return Err(MaintError::Config(format!(
                "Script '{}' is outside the repository",
                candidate.display()
            )));
        }
        if !canonical.is_file() {
            return Err(MaintError::Config(format!(
                "Script '{}' is not a file",
                canonical.display()
            )));
        }

        Ok(canonical)
    }
}
