//! The per-vendor naming strategy trait and its validated inputs.

use entity_naming_types::{EthernetSpeed, Vendor};
use std::fmt;

use crate::error::{NamingError, NamingResult};

/// Kind of hardware entity being named, used in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Loopback,
    Aggregate,
    Linecard,
    ControllerCard,
    Fabric,
    Port,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Loopback => "loopback",
            EntityKind::Aggregate => "aggregate",
            EntityKind::Linecard => "linecard",
            EntityKind::ControllerCard => "controller card",
            EntityKind::Fabric => "fabric",
            EntityKind::Port => "port",
        };
        write!(f, "{}", s)
    }
}

/// Port parameters after normalization.
///
/// Strategies may rely on:
/// - `slot_index` is `None` exactly when the device is fixed form factor
/// - `channel_index` is `Some` exactly when the port is channelized
/// - `speed` is never `UNSET` or `SPEED_UNKNOWN`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatedPortParams {
    pub slot_index: Option<u64>,
    pub pic_index: u64,
    pub port_index: u64,
    pub channel_index: Option<u64>,
    /// False only for unchannelizable ports.
    pub channelizable: bool,
    pub speed: EthernetSpeed,
}

/// QoS parameters after normalization.
///
/// Carried through to every strategy; no current vendor's queue names
/// depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatedQosParams {
    pub num_strict_priority: u64,
    pub num_weighted_round_robin: u64,
}

/// Vendor queue names for the seven common QoS classes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonQosQueues {
    pub nc1: String,
    pub af4: String,
    pub af3: String,
    pub af2: String,
    pub af1: String,
    pub be1: String,
    pub be0: String,
}

impl CommonQosQueues {
    /// Builds the queue set from names listed in class priority order
    /// (NC1, AF4, AF3, AF2, AF1, BE1, BE0).
    pub fn from_ordered(names: [&str; 7]) -> Self {
        let [nc1, af4, af3, af2, af1, be1, be0] = names.map(str::to_string);
        Self {
            nc1,
            af4,
            af3,
            af2,
            af1,
            be1,
            be0,
        }
    }
}

/// Strategy for naming the entities of one vendor's devices.
///
/// Index arguments are zero-based and have already been checked to be
/// non-negative; port and QoS arguments have already been normalized.
/// Implementations must be pure: the same inputs always produce the same
/// result.
pub trait Namer: Send + Sync {
    /// Name of the loopback interface with the given index.
    fn loopback_interface(&self, index: u64) -> NamingResult<String>;

    /// Name of the aggregate (LAG) interface with the given index.
    fn aggregate_interface(&self, index: u64) -> NamingResult<String>;

    /// Name of the member interface bound to the aggregate with the given index.
    fn aggregate_member_interface(&self, index: u64) -> NamingResult<String>;

    /// Name of the linecard component with the given index.
    fn linecard(&self, index: u64) -> NamingResult<String>;

    /// Name of the controller card component with the given index.
    fn controller_card(&self, index: u64) -> NamingResult<String>;

    /// Name of the fabric component with the given index.
    fn fabric(&self, index: u64) -> NamingResult<String>;

    /// Name of the physical port described by `params`.
    fn port(&self, params: &ValidatedPortParams) -> NamingResult<String>;

    /// Returns true if the device has no removable slots.
    fn is_fixed_form_factor(&self) -> bool;

    /// Queue names for the common QoS classes.
    fn common_qos_queues(&self, params: &ValidatedQosParams) -> NamingResult<CommonQosQueues>;
}

/// Fails with [`NamingError::IndexExceeded`] if `index > max`.
pub(crate) fn check_max(vendor: Vendor, entity: EntityKind, max: u64, index: u64) -> NamingResult<()> {
    if index > max {
        return Err(NamingError::exceeded(vendor, entity, max, index));
    }
    Ok(())
}
