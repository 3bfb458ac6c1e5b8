use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A runtime version triple. Ordering is lexicographic on
/// `(major, minor, build)`; pre-release and revision parts are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuntimeVersion {
    pub major: u64,
    pub minor: u64,
    pub build: u64,
}

impl RuntimeVersion {
    pub const fn new(major: u64, minor: u64, build: u64) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    pub fn same_major(&self, other: &Self) -> bool {
        self.major == other.major
    }

    pub fn same_feature_band(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRuntimeVersionError {
    input: String,
}

impl fmt::Display for ParseRuntimeVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid runtime version '{}': expected major.minor or major.minor.build",
            self.input
        )
    }
}

impl std::error::Error for ParseRuntimeVersionError {}

impl FromStr for RuntimeVersion {
    type Err = ParseRuntimeVersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRuntimeVersionError {
            input: input.to_string(),
        };

        let parts = input.trim().split('.').collect::<Vec<_>>();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let mut numbers = [0_u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl TryFrom<String> for RuntimeVersion {
    type Error = ParseRuntimeVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuntimeVersion> for String {
    fn from(value: RuntimeVersion) -> Self {
        value.to_string()
    }
}
