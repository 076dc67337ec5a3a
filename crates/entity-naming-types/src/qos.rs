//! Common QoS classes.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven common QoS classes.
///
/// Ordering follows priority: `NC1` sorts first, `BE0` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QosClass {
    /// Network control.
    NC1,
    /// Assured forwarding, class 4.
    AF4,
    /// Assured forwarding, class 3.
    AF3,
    /// Assured forwarding, class 2.
    AF2,
    /// Assured forwarding, class 1.
    AF1,
    /// Best effort, class 1.
    BE1,
    /// Best effort, class 0.
    BE0,
}

impl QosClass {
    /// All classes in priority order.
    pub const ALL: [QosClass; 7] = [
        QosClass::NC1,
        QosClass::AF4,
        QosClass::AF3,
        QosClass::AF2,
        QosClass::AF1,
        QosClass::BE1,
        QosClass::BE0,
    ];

    /// Returns the class tag (e.g., `"AF4"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            QosClass::NC1 => "NC1",
            QosClass::AF4 => "AF4",
            QosClass::AF3 => "AF3",
            QosClass::AF2 => "AF2",
            QosClass::AF1 => "AF1",
            QosClass::BE1 => "BE1",
            QosClass::BE0 => "BE0",
        }
    }
}

impl fmt::Display for QosClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QosClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QosClass::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::InvalidQosClass(s.to_string()))
    }
}
