use std::fs;
use std::path::Path;

use rtlocate_core::{DotnetEnvironmentInfo, InstalledFramework, InstalledSdk, LocateError};
use semver::Version;
use tracing::debug;

use crate::layout::DotnetLayout;

const UNKNOWN_COMMIT: &str = "N/A";

/// Snapshot of the host, SDKs and shared frameworks under `layout`.
pub fn enumerate_environment(layout: &DotnetLayout) -> Result<DotnetEnvironmentInfo, LocateError> {
    if !layout.root().is_dir() {
        return Err(LocateError::discovery(format!(
            "install root {} is not a directory",
            layout.root().display()
        )));
    }

    let host_version = version_dirs(&layout.host_fxr_dir())?
        .pop()
        .map(|(_, name)| name)
        .ok_or_else(|| {
            LocateError::discovery(format!(
                "host resolver not found under {}",
                layout.host_fxr_dir().display()
            ))
        })?;
    let commit_hash = read_commit_hash(layout, &host_version);

    let sdks = version_dirs(&layout.sdk_dir())?
        .into_iter()
        .map(|(_, version)| InstalledSdk::new(layout.sdk_dir().join(&version), version))
        .collect();

    let mut frameworks = Vec::new();
    for name in framework_names(&layout.shared_dir())? {
        let framework_dir = layout.framework_dir(&name);
        for version in framework_version_dirs(&framework_dir)? {
            frameworks.push(InstalledFramework::new(&name, &framework_dir, version));
        }
    }

    debug!(
        root = %layout.root().display(),
        %host_version,
        frameworks = frameworks.len(),
        "enumerated runtime environment"
    );

    Ok(DotnetEnvironmentInfo {
        host_version,
        commit_hash,
        sdks,
        frameworks,
    })
}

/// Every subdirectory of a framework directory, semver-named ones first in
/// version order, the rest lexically. Whether a name is usable is decided
/// by the resolver, not here.
fn framework_version_dirs(dir: &Path) -> Result<Vec<String>, LocateError> {
    let (mut versioned, mut other): (Vec<_>, Vec<_>) = subdirectory_names(dir)?
        .into_iter()
        .map(|name| (Version::parse(&name).ok(), name))
        .partition(|(version, _)| version.is_some());
    versioned.sort();
    other.sort();
    Ok(versioned
        .into_iter()
        .chain(other)
        .map(|(_, name)| name)
        .collect())
}

fn read_commit_hash(layout: &DotnetLayout, host_version: &str) -> String {
    fs::read_to_string(layout.core_version_file(host_version))
        .ok()
        .and_then(|content| {
            content
                .lines()
                .next()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| UNKNOWN_COMMIT.to_string())
}

fn subdirectory_names(dir: &Path) -> Result<Vec<String>, LocateError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|err| {
        LocateError::discovery(format!("failed to read {}: {err}", dir.display()))
    })?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| {
            LocateError::discovery(format!("failed to read {}: {err}", dir.display()))
        })?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(names)
}

fn framework_names(shared_dir: &Path) -> Result<Vec<String>, LocateError> {
    let mut names = subdirectory_names(shared_dir)?;
    names.sort();
    Ok(names)
}

/// Version-named subdirectories of `dir`, ascending. Used for `host/fxr`
/// and `sdk`, where names that are not semantic versions (e.g.
/// `NuGetFallbackFolder`) are not installations and are skipped.
fn version_dirs(dir: &Path) -> Result<Vec<(Version, String)>, LocateError> {
    let mut versions = subdirectory_names(dir)?
        .into_iter()
        .filter_map(|name| match Version::parse(&name) {
            Ok(version) => Some((version, name)),
            Err(_) => {
                debug!(dir = %dir.display(), %name, "ignoring non-version directory");
                None
            }
        })
        .collect::<Vec<_>>();
    versions.sort();
    Ok(versions)
}
