use std::collections::BTreeMap;

use rtlocate_core::{InstalledFramework, RuntimeVersion};
use tracing::{debug, warn};

use crate::types::DesiredFramework;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub version: RuntimeVersion,
    pub framework: &'a InstalledFramework,
}

/// Candidates per desired framework name. Every desired name has an entry,
/// empty when nothing usable is installed.
pub type CandidatePools<'a> = BTreeMap<String, Vec<Candidate<'a>>>;

/// Keeps installed frameworks that match a desired name at or above its
/// minimum version. Lower versions are dropped whatever the policy.
pub fn candidate_pools<'a>(
    desired: &[DesiredFramework],
    installed: &'a [InstalledFramework],
) -> CandidatePools<'a> {
    let mut pools: CandidatePools<'a> = desired
        .iter()
        .map(|entry| (entry.name.clone(), Vec::new()))
        .collect();

    for framework in installed {
        let Some(wanted) = desired.iter().find(|entry| entry.name == framework.name) else {
            continue;
        };
        let Some(version) = framework.runtime_version() else {
            warn!(
                name = %framework.name,
                version = %framework.version,
                "skipping installed framework with unsupported version format"
            );
            continue;
        };
        if version < wanted.version {
            debug!(
                name = %framework.name,
                %version,
                minimum = %wanted.version,
                "skipping installed framework below the requested version"
            );
            continue;
        }

        pools.entry(framework.name.clone()).or_default().push(Candidate {
            version,
            framework,
        });
    }

    pools
}
