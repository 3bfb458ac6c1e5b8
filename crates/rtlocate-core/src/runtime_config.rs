use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{LocateError, RollForward, RuntimeVersion};

const DLL_EXTENSION: &str = "dll";
const RUNTIME_CONFIG_SUFFIX: &str = ".runtimeconfig.json";

/// A `{"name", "version"}` entry naming a shared framework.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameworkReference {
    pub name: String,
    pub version: RuntimeVersion,
}

/// The `runtimeOptions` object of a runtime config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    pub tfm: Option<String>,
    pub framework: Option<FrameworkReference>,
    pub frameworks: Option<Vec<FrameworkReference>>,
    /// Present for self-contained apps; supersedes `framework` and `frameworks`.
    pub included_frameworks: Option<Vec<FrameworkReference>>,
    pub roll_forward: Option<RollForward>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub runtime_options: RuntimeOptions,
}

impl RuntimeConfig {
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn load(path: &Path) -> Result<Self, LocateError> {
        let content = fs::read_to_string(path).map_err(|source| LocateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|err| {
            LocateError::manifest(format!(
                "failed to parse {} as a runtime config: {err}",
                path.display()
            ))
        })
    }
}

/// Maps `dir/app.dll` to `dir/app.runtimeconfig.json`.
pub fn runtime_config_path_for_dll(dll_path: &Path) -> Result<PathBuf, LocateError> {
    let invalid = || LocateError::InvalidExecutable {
        path: dll_path.to_path_buf(),
    };

    if dll_path.extension().and_then(|ext| ext.to_str()) != Some(DLL_EXTENSION) {
        return Err(invalid());
    }
    let stem = dll_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(invalid)?;
    let parent = dll_path.parent().ok_or_else(invalid)?;

    Ok(parent.join(format!("{stem}{RUNTIME_CONFIG_SUFFIX}")))
}
