use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::errors::CreateError;

/// `<invoking directory>/<app name>`, where every project-scoped command runs
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    pub fn new(cwd: impl AsRef<Path>, app_name: &str) -> Self {
        Self(cwd.as_ref().join(app_name))
    }

    pub fn src(&self) -> PathBuf {
        self.0.join("src")
    }

    pub fn manifest(&self) -> PathBuf {
        self.0.join("package.json")
    }

    /// The generators refuse to write into an existing directory, fail before running them
    pub fn ensure_absent(&self) -> Result<(), CreateError> {
        if self.0.exists() {
            return Err(CreateError::ProjectExists(self.to_string()));
        }
        Ok(())
    }
}
