//! Error types for entity naming.
//!
//! Errors fall into three groups, each with a classification helper:
//!
//! - input errors: the caller passed a value that can never be valid
//!   (negative index, placeholder speed, inconsistent slot/channel fields)
//! - range errors: the value is well-formed but outside what the vendor
//!   (or hardware model) supports
//! - configuration errors: no strategy, or no rule, for the requested
//!   vendor, hardware model or link speed

use entity_naming_types::{EthernetSpeed, Vendor};
use thiserror::Error;

use crate::namer::EntityKind;

/// Result type alias for naming operations.
pub type NamingResult<T> = Result<T, NamingError>;

/// Errors that can occur while naming an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// An index or count was negative.
    #[error("{field} cannot be negative: {value}")]
    NegativeIndex {
        /// Human-readable name of the field (e.g., "slot index").
        field: &'static str,
        /// The offending value.
        value: i64,
    },

    /// A non-zero slot index was given for a fixed form factor device.
    #[error("cannot have a non-zero slot index on a fixed form factor device, got {slot_index}")]
    SlotOnFixedFormFactor {
        /// The offending slot index.
        slot_index: i64,
    },

    /// A non-zero channel index was given for a port that is not channelized.
    #[error("cannot have a non-zero channel index with an unchannelized port, got {channel_index}")]
    ChannelOnUnchannelizedPort {
        /// The offending channel index.
        channel_index: i64,
    },

    /// The port speed was `UNSET` or `SPEED_UNKNOWN`.
    #[error("port speed cannot be unset or unknown, got {speed}")]
    UnknownSpeed {
        /// The placeholder speed.
        speed: EthernetSpeed,
    },

    /// The index is larger than the vendor supports.
    #[error("{vendor} {entity} index cannot exceed {max}, got {index}")]
    IndexExceeded {
        vendor: Vendor,
        entity: EntityKind,
        max: u64,
        index: u64,
    },

    /// The index is smaller than the vendor supports.
    #[error("{vendor} {entity} index must be at least {min}, got {index}")]
    IndexBelowMinimum {
        vendor: Vendor,
        entity: EntityKind,
        min: u64,
        index: u64,
    },

    /// The derived slot is not populated by this entity on this hardware model.
    #[error("{vendor} {entity} slot index for {model} must be in [{allowed}], got {slot}")]
    SlotNotAllowed {
        vendor: Vendor,
        entity: EntityKind,
        model: &'static str,
        /// Allowed slots, rendered (e.g., "1-6,10,11").
        allowed: &'static str,
        slot: u64,
    },

    /// The entity kind does not exist on this hardware model.
    #[error("{vendor} {entity} is not supported for {model}")]
    EntityNotSupported {
        vendor: Vendor,
        entity: EntityKind,
        model: &'static str,
    },

    /// The port cannot be named because it is unchannelizable.
    #[error("{vendor} port cannot be unchannelizable")]
    Unchannelizable { vendor: Vendor },

    /// The vendor has no naming rule for this link speed.
    #[error("{vendor} port speed {speed} is not supported (supported: {supported})")]
    UnsupportedSpeed {
        vendor: Vendor,
        speed: EthernetSpeed,
        supported: &'static str,
    },

    /// The hardware model string is not recognized by the vendor strategy.
    #[error("unsupported hardware model: {model} (supported: {supported})")]
    UnsupportedHardwareModel {
        model: String,
        supported: &'static str,
    },

    /// No strategy is registered for the vendor.
    #[error("no namer for vendor {vendor}")]
    UnknownVendor { vendor: Vendor },

    /// Free-form failure reported by a strategy.
    #[error("{message}")]
    Namer { message: String },
}

impl NamingError {
    /// Creates a negative index error.
    pub fn negative(field: &'static str, value: i64) -> Self {
        Self::NegativeIndex { field, value }
    }

    /// Creates an index exceeded error.
    pub fn exceeded(vendor: Vendor, entity: EntityKind, max: u64, index: u64) -> Self {
        Self::IndexExceeded {
            vendor,
            entity,
            max,
            index,
        }
    }

    /// Creates an unsupported hardware model error.
    pub fn unsupported_model(model: impl Into<String>, supported: &'static str) -> Self {
        Self::UnsupportedHardwareModel {
            model: model.into(),
            supported,
        }
    }

    /// Creates a free-form strategy error.
    pub fn namer(message: impl Into<String>) -> Self {
        Self::Namer {
            message: message.into(),
        }
    }

    /// Returns true if the caller supplied a value that can never be valid.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NamingError::NegativeIndex { .. }
                | NamingError::SlotOnFixedFormFactor { .. }
                | NamingError::ChannelOnUnchannelizedPort { .. }
                | NamingError::UnknownSpeed { .. }
                | NamingError::Unchannelizable { .. }
        )
    }

    /// Returns true if the value is outside the vendor's supported range.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            NamingError::IndexExceeded { .. }
                | NamingError::IndexBelowMinimum { .. }
                | NamingError::SlotNotAllowed { .. }
                | NamingError::EntityNotSupported { .. }
        )
    }

    /// Returns true if no rule exists for the vendor, model or speed.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            NamingError::UnknownVendor { .. }
                | NamingError::UnsupportedHardwareModel { .. }
                | NamingError::UnsupportedSpeed { .. }
        )
    }
}
