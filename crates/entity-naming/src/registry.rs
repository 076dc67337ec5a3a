//! Vendor to strategy dispatch.

use entity_naming_types::Vendor;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::error::{NamingError, NamingResult};
use crate::namer::Namer;
use crate::params::DeviceParams;
use crate::vendor::{AristaNamer, CienaNamer, CiscoNamer, JuniperNamer, NokiaNamer};

/// Builds a strategy for a hardware model string.
pub type NamerFactory = Arc<dyn Fn(&str) -> Box<dyn Namer> + Send + Sync>;

/// Table of strategy constructors keyed by vendor.
///
/// The table is read-only once built; resolving a device constructs a fresh
/// strategy carrying the device's hardware model. Tests build their own
/// table (see [`NamerRegistry::with_namer`]) instead of mutating a shared one.
#[derive(Clone, Default)]
pub struct NamerRegistry {
    factories: HashMap<Vendor, NamerFactory>,
}

impl NamerRegistry {
    /// Creates a registry with no vendors.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in vendor strategy.
    pub fn builtin() -> Self {
        Self::empty()
            .with_namer(Vendor::Arista, |hwm| Box::new(AristaNamer::new(hwm)))
            .with_namer(Vendor::Cisco, |hwm| Box::new(CiscoNamer::new(hwm)))
            .with_namer(Vendor::Juniper, |hwm| Box::new(JuniperNamer::new(hwm)))
            .with_namer(Vendor::Nokia, |hwm| Box::new(NokiaNamer::new(hwm)))
            .with_namer(Vendor::Ciena, |hwm| Box::new(CienaNamer::new(hwm)))
    }

    /// Adds (or replaces) the strategy constructor for `vendor`.
    pub fn with_namer<F>(mut self, vendor: Vendor, factory: F) -> Self
    where
        F: Fn(&str) -> Box<dyn Namer> + Send + Sync + 'static,
    {
        self.factories.insert(vendor, Arc::new(factory));
        self
    }

    /// Returns true if a strategy is registered for `vendor`.
    pub fn contains(&self, vendor: Vendor) -> bool {
        self.factories.contains_key(&vendor)
    }

    /// Returns the registered vendors in declaration order.
    pub fn vendors(&self) -> Vec<Vendor> {
        let mut vendors: Vec<Vendor> = self.factories.keys().copied().collect();
        vendors.sort();
        vendors
    }

    /// Constructs the strategy for `device`.
    pub fn resolve(&self, device: &DeviceParams) -> NamingResult<Box<dyn Namer>> {
        let factory = self
            .factories
            .get(&device.vendor)
            .ok_or(NamingError::UnknownVendor {
                vendor: device.vendor,
            })?;
        debug!(
            vendor = %device.vendor,
            hardware_model = %device.hardware_model,
            "resolved namer"
        );
        Ok(factory(&device.hardware_model))
    }
}

impl fmt::Debug for NamerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamerRegistry")
            .field("vendors", &self.vendors())
            .finish()
    }
}
