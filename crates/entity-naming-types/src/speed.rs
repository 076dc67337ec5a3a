//! Ethernet link speeds.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Link speed of an Ethernet port.
///
/// Mirrors the OpenConfig `ETHERNET_SPEED` identity set. `Unset` and
/// `SpeedUnknown` are placeholders and are rejected when naming a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EthernetSpeed {
    #[default]
    #[serde(rename = "UNSET")]
    Unset,
    #[serde(rename = "SPEED_10MB")]
    Speed10Mb,
    #[serde(rename = "SPEED_100MB")]
    Speed100Mb,
    #[serde(rename = "SPEED_1GB")]
    Speed1Gb,
    #[serde(rename = "SPEED_2500MB")]
    Speed2500Mb,
    #[serde(rename = "SPEED_5GB")]
    Speed5Gb,
    #[serde(rename = "SPEED_10GB")]
    Speed10Gb,
    #[serde(rename = "SPEED_25GB")]
    Speed25Gb,
    #[serde(rename = "SPEED_40GB")]
    Speed40Gb,
    #[serde(rename = "SPEED_50GB")]
    Speed50Gb,
    #[serde(rename = "SPEED_100GB")]
    Speed100Gb,
    #[serde(rename = "SPEED_200GB")]
    Speed200Gb,
    #[serde(rename = "SPEED_400GB")]
    Speed400Gb,
    #[serde(rename = "SPEED_600GB")]
    Speed600Gb,
    #[serde(rename = "SPEED_800GB")]
    Speed800Gb,
    #[serde(rename = "SPEED_UNKNOWN")]
    SpeedUnknown,
}

impl EthernetSpeed {
    const ALL: [EthernetSpeed; 16] = [
        EthernetSpeed::Unset,
        EthernetSpeed::Speed10Mb,
        EthernetSpeed::Speed100Mb,
        EthernetSpeed::Speed1Gb,
        EthernetSpeed::Speed2500Mb,
        EthernetSpeed::Speed5Gb,
        EthernetSpeed::Speed10Gb,
        EthernetSpeed::Speed25Gb,
        EthernetSpeed::Speed40Gb,
        EthernetSpeed::Speed50Gb,
        EthernetSpeed::Speed100Gb,
        EthernetSpeed::Speed200Gb,
        EthernetSpeed::Speed400Gb,
        EthernetSpeed::Speed600Gb,
        EthernetSpeed::Speed800Gb,
        EthernetSpeed::SpeedUnknown,
    ];

    /// Returns the OpenConfig identifier (e.g., `SPEED_100GB`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            EthernetSpeed::Unset => "UNSET",
            EthernetSpeed::Speed10Mb => "SPEED_10MB",
            EthernetSpeed::Speed100Mb => "SPEED_100MB",
            EthernetSpeed::Speed1Gb => "SPEED_1GB",
            EthernetSpeed::Speed2500Mb => "SPEED_2500MB",
            EthernetSpeed::Speed5Gb => "SPEED_5GB",
            EthernetSpeed::Speed10Gb => "SPEED_10GB",
            EthernetSpeed::Speed25Gb => "SPEED_25GB",
            EthernetSpeed::Speed40Gb => "SPEED_40GB",
            EthernetSpeed::Speed50Gb => "SPEED_50GB",
            EthernetSpeed::Speed100Gb => "SPEED_100GB",
            EthernetSpeed::Speed200Gb => "SPEED_200GB",
            EthernetSpeed::Speed400Gb => "SPEED_400GB",
            EthernetSpeed::Speed600Gb => "SPEED_600GB",
            EthernetSpeed::Speed800Gb => "SPEED_800GB",
            EthernetSpeed::SpeedUnknown => "SPEED_UNKNOWN",
        }
    }

    /// Returns true unless this is one of the `UNSET`/`SPEED_UNKNOWN` placeholders.
    pub const fn is_known(&self) -> bool {
        !matches!(self, EthernetSpeed::Unset | EthernetSpeed::SpeedUnknown)
    }
}

impl fmt::Display for EthernetSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EthernetSpeed {
    type Err = ParseError;

    /// Parses an OpenConfig identifier; the `SPEED_` prefix is optional
    /// (`"100GB"` and `"SPEED_100GB"` are equivalent).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        EthernetSpeed::ALL
            .into_iter()
            .find(|speed| {
                let id = speed.as_str();
                id == upper || id.strip_prefix("SPEED_") == Some(upper.as_str())
            })
            .ok_or_else(|| ParseError::InvalidEthernetSpeed(s.to_string()))
    }
}
