//! Port channelization state.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a port is channelized, and whether it could be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortChannelState {
    /// The port can be channelized but is not (default).
    #[default]
    Unchannelized,
    /// The port is channelized.
    Channelized,
    /// The port cannot be channelized.
    Unchannelizable,
}

impl PortChannelState {
    /// Returns true if the port is channelized.
    pub const fn is_channelized(&self) -> bool {
        matches!(self, PortChannelState::Channelized)
    }

    /// Returns true if the port is, or could be, channelized.
    pub const fn is_channelizable(&self) -> bool {
        !matches!(self, PortChannelState::Unchannelizable)
    }
}

impl fmt::Display for PortChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortChannelState::Unchannelized => write!(f, "unchannelized"),
            PortChannelState::Channelized => write!(f, "channelized"),
            PortChannelState::Unchannelizable => write!(f, "unchannelizable"),
        }
    }
}

impl FromStr for PortChannelState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unchannelized" => Ok(PortChannelState::Unchannelized),
            "channelized" => Ok(PortChannelState::Channelized),
            "unchannelizable" => Ok(PortChannelState::Unchannelizable),
            _ => Err(ParseError::InvalidPortChannelState(s.to_string())),
        }
    }
}
