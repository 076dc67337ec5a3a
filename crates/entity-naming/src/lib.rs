//! Vendor-native names for network device entities.
//!
//! Given a vendor, an optional hardware model and a zero-based index (or a
//! port description), this crate returns the identifier that vendor's
//! operating system uses for the entity, or an error if no such entity can
//! exist:
//!
//! - loopback, aggregate (LAG) and aggregate member interfaces
//! - physical ports, including channelized ports
//! - linecards, controller cards and fabric cards
//! - queue names for the seven common QoS classes
//!
//! # Architecture
//!
//! ```text
//! caller
//!   │
//!   ▼
//! EntityNamer ──> index / PortParams / QosParams validation
//!   │
//!   ▼
//! NamerRegistry ──> Box<dyn Namer> for (vendor, hardware model)
//!   │
//!   ▼
//! AristaNamer | CiscoNamer | JuniperNamer | NokiaNamer | CienaNamer
//! ```
//!
//! Every call is a pure function of its inputs. The crate-level functions
//! use a process-wide [`EntityNamer`] over [`NamerRegistry::builtin`];
//! build an [`EntityNamer`] directly to supply a different registry.
//!
//! # Example
//!
//! ```
//! use entity_naming::{DeviceParams, EthernetSpeed, PortChannelState, PortParams, Vendor};
//!
//! let device = DeviceParams::new(Vendor::Cisco);
//! let port = PortParams {
//!     slot_index: 1,
//!     port_index: 3,
//!     channel_state: PortChannelState::Unchannelized,
//!     speed: EthernetSpeed::Speed100Gb,
//!     ..Default::default()
//! };
//! assert_eq!(entity_naming::port(&device, &port).unwrap(), "HundredGigE0/1/0/3");
//! ```

pub mod error;
mod facade;
pub mod namer;
mod params;
mod registry;
pub mod vendor;

#[cfg(test)]
mod testing;

use once_cell::sync::Lazy;

pub use entity_naming_types::{EthernetSpeed, ParseError, PortChannelState, QosClass, Vendor};
pub use error::{NamingError, NamingResult};
#[allow(deprecated)]
pub use facade::CommonTrafficQueueNames;
pub use facade::{CommonQosQueueNames, EntityNamer};
pub use namer::{
    CommonQosQueues, EntityKind, Namer, ValidatedPortParams, ValidatedQosParams,
};
pub use params::{normalize_port_params, normalize_qos_params, DeviceParams, PortParams, QosParams};
pub use registry::{NamerFactory, NamerRegistry};

static DEFAULT_NAMER: Lazy<EntityNamer> = Lazy::new(EntityNamer::default);

/// Name of the loopback interface with the given zero-based index.
pub fn loopback_interface(device: &DeviceParams, index: i64) -> NamingResult<String> {
    DEFAULT_NAMER.loopback_interface(device, index)
}

/// Name of the aggregate interface with the given zero-based index.
pub fn aggregate_interface(device: &DeviceParams, index: i64) -> NamingResult<String> {
    DEFAULT_NAMER.aggregate_interface(device, index)
}

/// Name of the member interface bound to the aggregate interface with the
/// given zero-based index.
pub fn aggregate_member_interface(device: &DeviceParams, index: i64) -> NamingResult<String> {
    DEFAULT_NAMER.aggregate_member_interface(device, index)
}

/// Name of the linecard with the given index.
pub fn linecard(device: &DeviceParams, index: i64) -> NamingResult<String> {
    DEFAULT_NAMER.linecard(device, index)
}

/// Name of the controller card with the given index.
pub fn controller_card(device: &DeviceParams, index: i64) -> NamingResult<String> {
    DEFAULT_NAMER.controller_card(device, index)
}

/// Name of the fabric with the given index.
pub fn fabric(device: &DeviceParams, index: i64) -> NamingResult<String> {
    DEFAULT_NAMER.fabric(device, index)
}

/// Name of the physical port described by `pp`.
pub fn port(device: &DeviceParams, pp: &PortParams) -> NamingResult<String> {
    DEFAULT_NAMER.port(device, pp)
}

/// Queue names for the common QoS classes.
pub fn common_qos_queues(device: &DeviceParams, qos: &QosParams) -> NamingResult<CommonQosQueueNames> {
    DEFAULT_NAMER.common_qos_queues(device, qos)
}

/// Queue names for the common traffic classes.
#[deprecated(note = "use `common_qos_queues`")]
#[allow(deprecated)]
pub fn common_traffic_queues(device: &DeviceParams) -> NamingResult<CommonTrafficQueueNames> {
    DEFAULT_NAMER.common_traffic_queues(device)
}
