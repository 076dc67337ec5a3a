//! Network device vendor tags.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supplier of a network device.
///
/// Used only as a dispatch key when selecting a naming strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vendor {
    Arista,
    Cisco,
    Juniper,
    Nokia,
    Ciena,
}

impl Vendor {
    /// Every known vendor, in declaration order.
    pub const ALL: [Vendor; 5] = [
        Vendor::Arista,
        Vendor::Cisco,
        Vendor::Juniper,
        Vendor::Nokia,
        Vendor::Ciena,
    ];

    /// Returns the vendor's proper name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Vendor::Arista => "Arista",
            Vendor::Cisco => "Cisco",
            Vendor::Juniper => "Juniper",
            Vendor::Nokia => "Nokia",
            Vendor::Ciena => "Ciena",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vendor::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::InvalidVendor(s.to_string()))
    }
}
