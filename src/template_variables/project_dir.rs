use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// The top-level directory the project skeleton is written into.
#[derive(Debug, PartialEq)]
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
    pub fn new(parent: &Path, folder_name: &str) -> Self {
        Self(parent.join(folder_name))
    }

    pub fn exists(&self) -> bool {
        self.0.exists()
    }

    /// Create the project directory, which must not exist yet. Whether an
    /// existing directory may be reused is decided by the caller before
    /// this is reached.
    pub fn create(&self) -> Result<()> {
        std::fs::create_dir(&self.0)
            .with_context(|| format!("cannot create project directory {}", self.0.display()))
    }
}
