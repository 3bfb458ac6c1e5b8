mod environment;
mod error;
mod roll_forward;
mod runtime_config;
mod version;

pub use environment::{DotnetEnvironmentInfo, InstalledFramework, InstalledSdk};
pub use error::LocateError;
pub use roll_forward::RollForward;
pub use runtime_config::{
    runtime_config_path_for_dll, FrameworkReference, RuntimeConfig, RuntimeOptions,
};
pub use version::{ParseRuntimeVersionError, RuntimeVersion};
