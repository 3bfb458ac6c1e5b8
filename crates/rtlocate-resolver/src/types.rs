use std::path::PathBuf;

use rtlocate_core::{InstalledFramework, RollForward, RuntimeVersion};

/// A framework the app asks for, at a minimum version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredFramework {
    pub name: String,
    pub version: RuntimeVersion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Framework(InstalledFramework),
    /// Nothing installed satisfies the requirement; the app may still be
    /// self-contained, so this is not an error.
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFramework {
    pub desired: DesiredFramework,
    pub selection: Selection,
}

/// Policy overrides that outrank the runtime config's own `rollForward`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollForwardOverrides {
    /// Already-parsed command line value; highest precedence.
    pub command_line: Option<RollForward>,
    /// Raw environment value, parsed on use.
    pub environment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DllResolution {
    pub app_dir: PathBuf,
    pub roll_forward: RollForward,
    pub frameworks: Vec<ResolvedFramework>,
    pub probe_directories: Vec<PathBuf>,
}
