use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::RuntimeVersion;

/// One shared framework installation, e.g. `Microsoft.NETCore.App` 8.0.5
/// under `<root>/shared/Microsoft.NETCore.App`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstalledFramework {
    pub name: String,
    /// The framework's parent directory; the version directory lives below it.
    pub path: PathBuf,
    /// Raw version directory name as found on disk.
    pub version: String,
}

impl InstalledFramework {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            version: version.into(),
        }
    }

    /// `None` when the directory name is not a plain `major.minor.build`.
    pub fn runtime_version(&self) -> Option<RuntimeVersion> {
        self.version.parse().ok()
    }

    pub fn install_dir(&self) -> PathBuf {
        self.path.join(&self.version)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstalledSdk {
    pub path: PathBuf,
    pub version: String,
}

impl InstalledSdk {
    pub fn new(path: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }
}

/// Snapshot of what a runtime install root offers, taken once per resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DotnetEnvironmentInfo {
    pub host_version: String,
    pub commit_hash: String,
    pub sdks: Vec<InstalledSdk>,
    pub frameworks: Vec<InstalledFramework>,
}
