//! Shared primitive types used across the generator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sequential record identifier, 1-based.
pub type RecordId = u64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanType {
    Basic,
    Standard,
    Premium,
}

impl PlanType {
    /// Fixed order used for weights and lookup tables.
    pub const ALL: [PlanType; 3] = [PlanType::Basic, PlanType::Standard, PlanType::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Standard => "STANDARD",
            Self::Premium => "PREMIUM",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BASIC" => Ok(Self::Basic),
            "STANDARD" => Ok(Self::Standard),
            "PREMIUM" => Ok(Self::Premium),
            other => Err(format!("unknown plan type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceType {
    Mobile,
    Web,
    Both,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [DeviceType::Mobile, DeviceType::Web, DeviceType::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "MOBILE",
            Self::Web => "WEB",
            Self::Both => "BOTH",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_type_parses_case_insensitively() {
        assert_eq!(" premium ".parse::<PlanType>(), Ok(PlanType::Premium));
        assert_eq!("Basic".parse::<PlanType>(), Ok(PlanType::Basic));
        assert!("GOLD".parse::<PlanType>().is_err());
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(0.456), 0.46);
        assert_eq!(round2(119.999), 120.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
