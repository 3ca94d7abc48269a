//! Application configuration for boilersmith.

use std::path::PathBuf;

use crate::error::AppError;

/// Directory below the operator's working directory that holds boilerplates.
pub const BOILERPLATES_DIR: &str = "src/boilerplates";

/// Application-wide configuration.
///
/// Every component takes paths from here instead of reading ambient process
/// state, so tests can point a run at a temporary directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory containing one subdirectory per boilerplate.
    pub boilerplates_root: PathBuf,
}

impl Config {
    /// Create a configuration with an explicit boilerplates root.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self { boilerplates_root: root.into() }
    }

    /// Resolve the boilerplates root from the current working directory.
    pub fn from_cwd() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::with_root(cwd.join(BOILERPLATES_DIR)))
    }

    /// Path the boilerplate with this name occupies (or would occupy).
    pub fn boilerplate_dir(&self, name: &str) -> PathBuf {
        self.boilerplates_root.join(name)
    }
}
