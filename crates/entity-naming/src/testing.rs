//! Closure-backed [`Namer`] for exercising the facade without a real vendor.

use entity_naming_types::Vendor;
use std::sync::Arc;

use crate::error::NamingResult;
use crate::namer::{CommonQosQueues, Namer, ValidatedPortParams, ValidatedQosParams};
use crate::registry::NamerRegistry;

type IndexedFn = Arc<dyn Fn(u64) -> NamingResult<String> + Send + Sync>;
type PortFn = Arc<dyn Fn(&ValidatedPortParams) -> NamingResult<String> + Send + Sync>;

#[derive(Clone)]
pub(crate) struct FakeNamer {
    /// Backs all six index-based operations.
    pub indexed: IndexedFn,
    pub port: PortFn,
    pub fixed_form_factor: bool,
}

impl FakeNamer {
    /// Echoes its inputs: `fake<index>` and `port slot=<slot> port=<port>`.
    pub fn echo() -> Self {
        Self {
            indexed: Arc::new(|index: u64| -> NamingResult<String> {
                Ok(format!("fake{}", index))
            }),
            port: Arc::new(|pp: &ValidatedPortParams| -> NamingResult<String> {
                Ok(format!("port slot={:?} port={}", pp.slot_index, pp.port_index))
            }),
            fixed_form_factor: false,
        }
    }

    pub fn indexed<F>(f: F) -> Self
    where
        F: Fn(u64) -> NamingResult<String> + Send + Sync + 'static,
    {
        Self {
            indexed: Arc::new(f),
            ..Self::echo()
        }
    }

    /// A registry whose only strategy is this fake, under `vendor`.
    pub fn into_registry(self, vendor: Vendor) -> NamerRegistry {
        NamerRegistry::empty().with_namer(vendor, move |_| Box::new(self.clone()))
    }
}

impl Namer for FakeNamer {
    fn loopback_interface(&self, index: u64) -> NamingResult<String> {
        (self.indexed)(index)
    }

    fn aggregate_interface(&self, index: u64) -> NamingResult<String> {
        (self.indexed)(index)
    }

    fn aggregate_member_interface(&self, index: u64) -> NamingResult<String> {
        (self.indexed)(index)
    }

    fn linecard(&self, index: u64) -> NamingResult<String> {
        (self.indexed)(index)
    }

    fn controller_card(&self, index: u64) -> NamingResult<String> {
        (self.indexed)(index)
    }

    fn fabric(&self, index: u64) -> NamingResult<String> {
        (self.indexed)(index)
    }

    fn port(&self, params: &ValidatedPortParams) -> NamingResult<String> {
        (self.port)(params)
    }

    fn is_fixed_form_factor(&self) -> bool {
        self.fixed_form_factor
    }

    fn common_qos_queues(&self, _params: &ValidatedQosParams) -> NamingResult<CommonQosQueues> {
        Ok(CommonQosQueues::from_ordered([
            "q-nc1", "q-af4", "q-af3", "q-af2", "q-af1", "q-be1", "q-be0",
        ]))
    }
}
