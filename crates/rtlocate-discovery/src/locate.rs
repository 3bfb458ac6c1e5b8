use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use rtlocate_core::LocateError;
use tracing::debug;

use crate::layout::DotnetLayout;

pub const DOTNET_ROOT_ENV: &str = "DOTNET_ROOT";

fn dotnet_executable_name() -> &'static str {
    if cfg!(windows) {
        "dotnet.exe"
    } else {
        "dotnet"
    }
}

pub fn default_install_roots() -> Vec<PathBuf> {
    if cfg!(windows) {
        vec![
            PathBuf::from(r"C:\Program Files\dotnet"),
            PathBuf::from(r"C:\Program Files (x86)\dotnet"),
        ]
    } else if cfg!(target_os = "macos") {
        vec![PathBuf::from("/usr/local/share/dotnet")]
    } else {
        vec![
            PathBuf::from("/usr/share/dotnet"),
            PathBuf::from("/usr/lib/dotnet"),
            PathBuf::from("/usr/local/share/dotnet"),
        ]
    }
}

/// Finds the install root, trying in order: the `dotnet` executable hint
/// (symlinks resolved), `DOTNET_ROOT`, a `dotnet` on `PATH`, then
/// `fallback_roots`.
pub fn locate_dotnet_root(
    hint: Option<&Path>,
    dotnet_root: Option<&OsStr>,
    path_var: Option<&OsStr>,
    fallback_roots: &[PathBuf],
) -> Result<DotnetLayout, LocateError> {
    if let Some(executable) = hint {
        let root = root_of_executable(executable)?;
        debug!(root = %root.display(), "using install root from dotnet executable hint");
        return Ok(DotnetLayout::new(root));
    }

    if let Some(root) = dotnet_root.filter(|value| !value.is_empty()) {
        debug!(root = ?root, "using install root from {DOTNET_ROOT_ENV}");
        return Ok(DotnetLayout::new(root));
    }

    if let Some(path_var) = path_var {
        for dir in std::env::split_paths(path_var) {
            let candidate = dir.join(dotnet_executable_name());
            if !candidate.is_file() {
                continue;
            }
            if let Ok(root) = root_of_executable(&candidate) {
                debug!(root = %root.display(), "using install root from dotnet on PATH");
                return Ok(DotnetLayout::new(root));
            }
        }
    }

    fallback_roots
        .iter()
        .find(|root| root.is_dir())
        .map(|root| {
            debug!(root = %root.display(), "using default install root");
            DotnetLayout::new(root)
        })
        .ok_or_else(|| {
            LocateError::discovery(format!(
                "no dotnet installation found; pass --dotnet or set {DOTNET_ROOT_ENV}"
            ))
        })
}

fn root_of_executable(executable: &Path) -> Result<PathBuf, LocateError> {
    let resolved = fs::canonicalize(executable).map_err(|err| {
        LocateError::discovery(format!(
            "failed to resolve dotnet executable {}: {err}",
            executable.display()
        ))
    })?;
    resolved.parent().map(Path::to_path_buf).ok_or_else(|| {
        LocateError::discovery(format!(
            "dotnet executable {} has no parent directory",
            resolved.display()
        ))
    })
}
