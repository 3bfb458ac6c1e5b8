use std::path::{Path, PathBuf};

use rtlocate_core::{
    runtime_config_path_for_dll, DotnetEnvironmentInfo, LocateError, RollForward, RuntimeConfig,
    RuntimeOptions,
};
use tracing::debug;

use crate::candidates::candidate_pools;
use crate::desired::desired_frameworks;
use crate::policy::{effective_roll_forward, ensure_supported, select_candidate};
use crate::probe::probe_directories;
use crate::types::{
    DesiredFramework, DllResolution, ResolvedFramework, RollForwardOverrides, Selection,
};

/// Resolves every desired framework independently, in runtime config order.
pub fn resolve_frameworks(
    options: &RuntimeOptions,
    policy: RollForward,
    environment: &DotnetEnvironmentInfo,
) -> Result<Vec<ResolvedFramework>, LocateError> {
    ensure_supported(policy)?;
    let desired = desired_frameworks(options)?;
    resolve_desired(desired, policy, environment)
}

fn resolve_desired(
    desired: Vec<DesiredFramework>,
    policy: RollForward,
    environment: &DotnetEnvironmentInfo,
) -> Result<Vec<ResolvedFramework>, LocateError> {
    let pools = candidate_pools(&desired, &environment.frameworks);

    let mut resolved = Vec::with_capacity(desired.len());
    for entry in desired {
        let pool = pools.get(&entry.name).map(Vec::as_slice).unwrap_or_default();
        let selection = match select_candidate(policy, entry.version, pool)? {
            Some(candidate) => Selection::Framework(candidate.framework.clone()),
            None => Selection::Absent,
        };
        debug!(
            name = %entry.name,
            requested = %entry.version,
            %policy,
            candidates = pool.len(),
            selected = ?selected_version(&selection),
            "resolved framework"
        );
        resolved.push(ResolvedFramework {
            desired: entry,
            selection,
        });
    }

    Ok(resolved)
}

fn selected_version(selection: &Selection) -> Option<&str> {
    match selection {
        Selection::Framework(installed) => Some(installed.version.as_str()),
        Selection::Absent => None,
    }
}

/// Full resolution for a `.dll` entry assembly: reads its sibling runtime
/// config, takes one environment snapshot, and projects probe directories.
pub fn resolve_for_dll<F>(
    dll_path: &Path,
    overrides: &RollForwardOverrides,
    load_environment: F,
) -> Result<DllResolution, LocateError>
where
    F: FnOnce() -> Result<DotnetEnvironmentInfo, LocateError>,
{
    let dll_path = std::path::absolute(dll_path).map_err(|source| LocateError::Io {
        path: dll_path.to_path_buf(),
        source,
    })?;
    let config_path = runtime_config_path_for_dll(&dll_path)?;
    let app_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LocateError::InvalidExecutable {
            path: dll_path.clone(),
        })?;

    let config = RuntimeConfig::load(&config_path)?;
    let options = config.runtime_options;
    let roll_forward = effective_roll_forward(overrides, options.roll_forward)?;
    ensure_supported(roll_forward)?;
    let desired = desired_frameworks(&options)?;
    debug!(config = %config_path.display(), %roll_forward, "loaded runtime config");

    let environment = load_environment()?;
    let frameworks = resolve_desired(desired, roll_forward, &environment)?;
    let probe_directories = probe_directories(&app_dir, &frameworks);

    Ok(DllResolution {
        app_dir,
        roll_forward,
        frameworks,
        probe_directories,
    })
}

/// Ordered directories to search when loading assemblies for `dll_path`.
/// Earlier entries take priority when a file appears in several.
pub fn select_for_dll<F>(
    dll_path: &Path,
    overrides: &RollForwardOverrides,
    load_environment: F,
) -> Result<Vec<PathBuf>, LocateError>
where
    F: FnOnce() -> Result<DotnetEnvironmentInfo, LocateError>,
{
    Ok(resolve_for_dll(dll_path, overrides, load_environment)?.probe_directories)
}
