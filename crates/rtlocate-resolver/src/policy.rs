use std::cmp::Reverse;

use rtlocate_core::{LocateError, RollForward, RuntimeVersion};

use crate::candidates::Candidate;
use crate::types::RollForwardOverrides;

pub const ROLL_FORWARD_ENV: &str = "DOTNET_ROLL_FORWARD";

/// Command line beats environment beats runtime config; `Minor` otherwise.
pub fn effective_roll_forward(
    overrides: &RollForwardOverrides,
    from_config: Option<RollForward>,
) -> Result<RollForward, LocateError> {
    if let Some(policy) = overrides.command_line {
        return Ok(policy);
    }
    if let Some(raw) = &overrides.environment {
        return raw.parse().map_err(|_| LocateError::Config {
            source_name: format!("environment variable {ROLL_FORWARD_ENV}"),
            value: raw.clone(),
        });
    }
    Ok(from_config.unwrap_or_default())
}

pub(crate) fn ensure_supported(policy: RollForward) -> Result<(), LocateError> {
    match policy {
        RollForward::Major => Err(LocateError::UnsupportedPolicy(policy)),
        RollForward::Minor
        | RollForward::LatestPatch
        | RollForward::LatestMinor
        | RollForward::LatestMajor
        | RollForward::Disable => Ok(()),
    }
}

/// Picks at most one candidate from a pool that already excludes versions
/// below `desired`.
pub fn select_candidate<'a>(
    policy: RollForward,
    desired: RuntimeVersion,
    pool: &[Candidate<'a>],
) -> Result<Option<Candidate<'a>>, LocateError> {
    let selected = match policy {
        RollForward::Minor => highest_at_requested_minor(desired, pool)
            .or_else(|| lowest_higher_minor(desired, pool)),
        RollForward::LatestPatch => highest_at_requested_minor(desired, pool),
        RollForward::LatestMinor => pool
            .iter()
            .filter(|candidate| candidate.version.same_major(&desired))
            .max_by_key(|candidate| candidate.version),
        RollForward::LatestMajor => pool.iter().max_by_key(|candidate| candidate.version),
        RollForward::Disable => pool.iter().find(|candidate| candidate.version == desired),
        RollForward::Major => return Err(LocateError::UnsupportedPolicy(policy)),
    };

    Ok(selected.copied())
}

fn highest_at_requested_minor<'p, 'a>(
    desired: RuntimeVersion,
    pool: &'p [Candidate<'a>],
) -> Option<&'p Candidate<'a>> {
    pool.iter()
        .filter(|candidate| candidate.version.same_feature_band(&desired))
        .max_by_key(|candidate| candidate.version)
}

// Smallest minor bump wins; within that minor, the newest build.
fn lowest_higher_minor<'p, 'a>(
    desired: RuntimeVersion,
    pool: &'p [Candidate<'a>],
) -> Option<&'p Candidate<'a>> {
    pool.iter()
        .filter(|candidate| {
            candidate.version.same_major(&desired) && candidate.version.minor > desired.minor
        })
        .min_by_key(|candidate| (candidate.version.minor, Reverse(candidate.version.build)))
}
