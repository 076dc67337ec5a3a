//! Vendor-neutral value types for network entity naming.
//!
//! This crate provides the small, strongly-typed vocabulary that callers use
//! to describe a device and its hardware entities before asking for a
//! vendor-native name:
//!
//! - [`Vendor`]: Network device suppliers with a naming strategy
//! - [`EthernetSpeed`]: OpenConfig `ETHERNET_SPEED` identities
//! - [`PortChannelState`]: Whether a port is (or can be) channelized
//! - [`QosClass`]: The seven common QoS classes

mod port;
mod qos;
mod speed;
mod vendor;

pub use port::PortChannelState;
pub use qos::QosClass;
pub use speed::EthernetSpeed;
pub use vendor::Vendor;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid vendor: {0}")]
    InvalidVendor(String),

    #[error("invalid ethernet speed: {0}")]
    InvalidEthernetSpeed(String),

    #[error("invalid port channel state: {0}")]
    InvalidPortChannelState(String),

    #[error("invalid QoS class: {0}")]
    InvalidQosClass(String),
}
