use std::path::{Path, PathBuf};

use crate::types::{ResolvedFramework, Selection};

/// Directories to search for assemblies, highest priority first. The app's
/// own directory always leads so its private copies win.
pub fn probe_directories(app_dir: &Path, resolved: &[ResolvedFramework]) -> Vec<PathBuf> {
    let mut directories = Vec::with_capacity(resolved.len() + 1);
    directories.push(app_dir.to_path_buf());

    for framework in resolved {
        match &framework.selection {
            Selection::Framework(installed) => directories.push(installed.install_dir()),
            Selection::Absent => {}
        }
    }

    directories
}
