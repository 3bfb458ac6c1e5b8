mod candidates;
mod desired;
mod policy;
mod probe;
mod resolve;
mod types;

pub use candidates::{candidate_pools, Candidate, CandidatePools};
pub use desired::desired_frameworks;
pub use policy::{effective_roll_forward, select_candidate, ROLL_FORWARD_ENV};
pub use probe::probe_directories;
pub use resolve::{resolve_for_dll, resolve_frameworks, select_for_dll};
pub use types::{
    DesiredFramework, DllResolution, ResolvedFramework, RollForwardOverrides, Selection,
};
