//! Entity-kind entry points.

use entity_naming_types::QosClass;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::NamingResult;
use crate::namer::{CommonQosQueues, Namer, ValidatedQosParams};
use crate::params::{
    non_negative, normalize_port_params, normalize_qos_params, DeviceParams, PortParams,
    QosParams,
};
use crate::registry::NamerRegistry;

/// Queue names for the common QoS classes, looked up by class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonQosQueueNames {
    name_by_class: BTreeMap<QosClass, String>,
}

impl CommonQosQueueNames {
    /// Returns the queue name for `class`.
    pub fn name(&self, class: QosClass) -> &str {
        self.name_by_class
            .get(&class)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Iterates over (class, queue name) pairs in class priority order.
    pub fn iter(&self) -> impl Iterator<Item = (QosClass, &str)> {
        self.name_by_class
            .iter()
            .map(|(class, name)| (*class, name.as_str()))
    }
}

impl From<CommonQosQueues> for CommonQosQueueNames {
    fn from(q: CommonQosQueues) -> Self {
        let name_by_class = BTreeMap::from([
            (QosClass::NC1, q.nc1),
            (QosClass::AF4, q.af4),
            (QosClass::AF3, q.af3),
            (QosClass::AF2, q.af2),
            (QosClass::AF1, q.af1),
            (QosClass::BE1, q.be1),
            (QosClass::BE0, q.be0),
        ]);
        Self { name_by_class }
    }
}

impl fmt::Display for CommonQosQueueNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (class, name) in self.iter() {
            writeln!(f, "  {}: {}", class, name)?;
        }
        write!(f, "}}")
    }
}

/// Names of the common traffic class queues, as plain fields.
#[deprecated(note = "use `CommonQosQueueNames` via `common_qos_queues`")]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonTrafficQueueNames {
    pub nc1: String,
    pub af4: String,
    pub af3: String,
    pub af2: String,
    pub af1: String,
    pub be1: String,
    pub be0: String,
}

/// Resolves vendor strategies and validates inputs before naming.
///
/// Every entry point rejects negative indices before a strategy is
/// resolved; errors from the strategy are returned unchanged.
///
/// # Example
///
/// ```
/// use entity_naming::{DeviceParams, EntityNamer, Vendor};
///
/// let namer = EntityNamer::default();
/// let device = DeviceParams::new(Vendor::Arista);
/// assert_eq!(namer.aggregate_interface(&device, 0).unwrap(), "Port-Channel1");
/// assert!(namer.aggregate_interface(&device, -1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EntityNamer {
    registry: Arc<NamerRegistry>,
}

impl Default for EntityNamer {
    fn default() -> Self {
        Self::new(NamerRegistry::builtin())
    }
}

impl EntityNamer {
    /// Creates a facade over `registry`.
    pub fn new(registry: NamerRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    /// Creates a facade sharing an existing registry.
    pub fn from_shared(registry: Arc<NamerRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &NamerRegistry {
        &self.registry
    }

    fn name_indexed<F>(&self, device: &DeviceParams, index: i64, name: F) -> NamingResult<String>
    where
        F: FnOnce(&dyn Namer, u64) -> NamingResult<String>,
    {
        let index = non_negative("interface index", index)?;
        let namer = self.registry.resolve(device)?;
        name(namer.as_ref(), index)
    }

    /// Name of the loopback interface with the given zero-based index.
    pub fn loopback_interface(&self, device: &DeviceParams, index: i64) -> NamingResult<String> {
        self.name_indexed(device, index, |n, i| n.loopback_interface(i))
    }

    /// Name of the aggregate interface with the given zero-based index.
    pub fn aggregate_interface(&self, device: &DeviceParams, index: i64) -> NamingResult<String> {
        self.name_indexed(device, index, |n, i| n.aggregate_interface(i))
    }

    /// Name of the member interface bound to the aggregate interface with
    /// the given zero-based index.
    pub fn aggregate_member_interface(
        &self,
        device: &DeviceParams,
        index: i64,
    ) -> NamingResult<String> {
        self.name_indexed(device, index, |n, i| n.aggregate_member_interface(i))
    }

    /// Name of the linecard with the given index.
    pub fn linecard(&self, device: &DeviceParams, index: i64) -> NamingResult<String> {
        self.name_indexed(device, index, |n, i| n.linecard(i))
    }

    /// Name of the controller card with the given index.
    pub fn controller_card(&self, device: &DeviceParams, index: i64) -> NamingResult<String> {
        self.name_indexed(device, index, |n, i| n.controller_card(i))
    }

    /// Name of the fabric with the given index.
    pub fn fabric(&self, device: &DeviceParams, index: i64) -> NamingResult<String> {
        self.name_indexed(device, index, |n, i| n.fabric(i))
    }

    /// Name of the physical port described by `pp`.
    pub fn port(&self, device: &DeviceParams, pp: &PortParams) -> NamingResult<String> {
        let namer = self.registry.resolve(device)?;
        let npp = normalize_port_params(pp, namer.is_fixed_form_factor())?;
        namer.port(&npp)
    }

    /// Queue names for the common QoS classes.
    pub fn common_qos_queues(
        &self,
        device: &DeviceParams,
        qos: &QosParams,
    ) -> NamingResult<CommonQosQueueNames> {
        let nqp = normalize_qos_params(qos)?;
        let namer = self.registry.resolve(device)?;
        Ok(namer.common_qos_queues(&nqp)?.into())
    }

    /// Queue names for the common traffic classes.
    #[deprecated(note = "use `common_qos_queues`")]
    #[allow(deprecated)]
    pub fn common_traffic_queues(
        &self,
        device: &DeviceParams,
    ) -> NamingResult<CommonTrafficQueueNames> {
        let namer = self.registry.resolve(device)?;
        let q = namer.common_qos_queues(&ValidatedQosParams::default())?;
        Ok(CommonTrafficQueueNames {
            nc1: q.nc1,
            af4: q.af4,
            af3: q.af3,
            af2: q.af2,
            af1: q.af1,
            be1: q.be1,
            be0: q.be0,
        })
    }
}
