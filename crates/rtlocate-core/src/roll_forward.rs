use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a framework requirement may be satisfied by a newer installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RollForward {
    /// Highest patch at the requested minor; otherwise the lowest higher minor.
    #[default]
    Minor,
    /// Roll to a higher major when nothing matches. Not supported.
    Major,
    /// Highest patch at exactly the requested major and minor.
    LatestPatch,
    /// Highest minor at the requested major, even if the requested minor exists.
    LatestMinor,
    /// Highest version overall, even if the requested version exists.
    LatestMajor,
    /// Exact version only.
    Disable,
}

impl RollForward {
    pub const ALL: [RollForward; 6] = [
        Self::Minor,
        Self::Major,
        Self::LatestPatch,
        Self::LatestMinor,
        Self::LatestMajor,
        Self::Disable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Major => "Major",
            Self::LatestPatch => "LatestPatch",
            Self::LatestMinor => "LatestMinor",
            Self::LatestMajor => "LatestMajor",
            Self::Disable => "Disable",
        }
    }
}

impl fmt::Display for RollForward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollForward {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!(
                    "unknown roll-forward policy '{input}'; supported: Minor, Major, LatestPatch, LatestMinor, LatestMajor, Disable"
                )
            })
    }
}

impl TryFrom<String> for RollForward {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RollForward> for String {
    fn from(value: RollForward) -> Self {
        value.as_str().to_string()
    }
}
