use std::path::{Path, PathBuf};

pub(crate) const CORE_FRAMEWORK: &str = "Microsoft.NETCore.App";

/// Directory layout of a runtime install root such as `/usr/share/dotnet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotnetLayout {
    root: PathBuf,
}

impl DotnetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn shared_dir(&self) -> PathBuf {
        self.root.join("shared")
    }

    pub fn framework_dir(&self, name: &str) -> PathBuf {
        self.shared_dir().join(name)
    }

    pub fn sdk_dir(&self) -> PathBuf {
        self.root.join("sdk")
    }

    pub fn host_fxr_dir(&self) -> PathBuf {
        self.root.join("host").join("fxr")
    }

    /// `.version` marker of the core framework: commit hash, then version.
    pub fn core_version_file(&self, version: &str) -> PathBuf {
        self.framework_dir(CORE_FRAMEWORK)
            .join(version)
            .join(".version")
    }
}
