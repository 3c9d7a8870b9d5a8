//! Duty status enum as the single source of truth for status wire strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four mutually exclusive duty states of a driver during any given hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    /// All variants in display-rank order (the row ordering of the paper grid).
    pub const ALL: [Self; 4] = [
        Self::OffDuty,
        Self::SleeperBerth,
        Self::Driving,
        Self::OnDutyNotDriving,
    ];

    /// Fixed row rank for rendering. Presentation-only; carries no semantics.
    #[must_use]
    pub const fn display_rank(self) -> u8 {
        match self {
            Self::OffDuty => 0,
            Self::SleeperBerth => 1,
            Self::Driving => 2,
            Self::OnDutyNotDriving => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OffDuty => "off_duty",
            Self::SleeperBerth => "sleeper",
            Self::Driving => "driving",
            Self::OnDutyNotDriving => "on_duty",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DutyStatus {
    type Err = UnknownDutyStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off_duty" => Ok(Self::OffDuty),
            "sleeper" | "sleeper_berth" => Ok(Self::SleeperBerth),
            "driving" => Ok(Self::Driving),
            "on_duty" => Ok(Self::OnDutyNotDriving),
            _ => Err(UnknownDutyStatus(s.to_string())),
        }
    }
}

impl Serialize for DutyStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DutyStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown duty status strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDutyStatus(String);

impl fmt::Display for UnknownDutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown duty status: {}", self.0)
    }
}

impl std::error::Error for UnknownDutyStatus {}
