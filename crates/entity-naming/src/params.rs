//! Caller-facing parameters and their normalization.
//!
//! Callers describe devices, ports and QoS layouts with loosely-typed,
//! signed fields (these structs are what ends up in JSON/YAML device
//! descriptions). Before any vendor logic runs they are checked and
//! converted into the strictly-typed [`ValidatedPortParams`] and
//! [`ValidatedQosParams`].

use entity_naming_types::{EthernetSpeed, PortChannelState, Vendor};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{NamingError, NamingResult};
use crate::namer::{ValidatedPortParams, ValidatedQosParams};

/// Identifies a network device: who made it and which model it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceParams {
    pub vendor: Vendor,
    /// Vendor-interpreted model string; empty selects the vendor default.
    #[serde(default)]
    pub hardware_model: String,
}

impl DeviceParams {
    /// Creates device parameters with the vendor's default hardware model.
    pub fn new(vendor: Vendor) -> Self {
        Self {
            vendor,
            hardware_model: String::new(),
        }
    }

    /// Sets the hardware model.
    pub fn with_hardware_model(mut self, model: impl Into<String>) -> Self {
        self.hardware_model = model.into();
        self
    }
}

impl From<Vendor> for DeviceParams {
    fn from(vendor: Vendor) -> Self {
        DeviceParams::new(vendor)
    }
}

impl fmt::Display for DeviceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{vendor: {}, hardware_model: {:?}}}",
            self.vendor, self.hardware_model
        )
    }
}

/// Describes a physical port.
///
/// All indices are zero-based. `slot_index` is ignored (and must be zero)
/// on fixed form factor devices; `channel_index` is ignored (and must be
/// zero) unless `channel_state` is [`PortChannelState::Channelized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortParams {
    pub slot_index: i64,
    pub pic_index: i64,
    pub port_index: i64,
    pub channel_index: i64,
    pub channel_state: PortChannelState,
    pub speed: EthernetSpeed,
}

impl fmt::Display for PortParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{slot: {}, pic: {}, port: {}, channel: {}, channel_state: {}, speed: {}}}",
            self.slot_index,
            self.pic_index,
            self.port_index,
            self.channel_index,
            self.channel_state,
            self.speed
        )
    }
}

/// Describes a QoS scheduler layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QosParams {
    pub num_strict_priority: i64,
    pub num_weighted_round_robin: i64,
}

/// Converts a signed value into an unsigned one, naming `field` on failure.
pub(crate) fn non_negative(field: &'static str, value: i64) -> NamingResult<u64> {
    u64::try_from(value).map_err(|_| NamingError::negative(field, value))
}

/// Validates `pp` for a device that is (or is not) fixed form factor.
///
/// Checks are applied in order and the first violation is reported.
pub fn normalize_port_params(
    pp: &PortParams,
    fixed_form_factor: bool,
) -> NamingResult<ValidatedPortParams> {
    let slot_index = non_negative("slot index", pp.slot_index)?;
    let pic_index = non_negative("pic index", pp.pic_index)?;
    let port_index = non_negative("port index", pp.port_index)?;
    let channel_index = non_negative("channel index", pp.channel_index)?;

    if slot_index > 0 && fixed_form_factor {
        return Err(NamingError::SlotOnFixedFormFactor {
            slot_index: pp.slot_index,
        });
    }
    if channel_index > 0 && !pp.channel_state.is_channelized() {
        return Err(NamingError::ChannelOnUnchannelizedPort {
            channel_index: pp.channel_index,
        });
    }
    if !pp.speed.is_known() {
        return Err(NamingError::UnknownSpeed { speed: pp.speed });
    }

    let slot_index = if fixed_form_factor {
        debug!("dropping slot index for fixed form factor device");
        None
    } else {
        Some(slot_index)
    };

    Ok(ValidatedPortParams {
        slot_index,
        pic_index,
        port_index,
        channel_index: pp.channel_state.is_channelized().then_some(channel_index),
        channelizable: pp.channel_state.is_channelizable(),
        speed: pp.speed,
    })
}

/// Validates QoS counts.
pub fn normalize_qos_params(qos: &QosParams) -> NamingResult<ValidatedQosParams> {
    Ok(ValidatedQosParams {
        num_strict_priority: non_negative("strict priority count", qos.num_strict_priority)?,
        num_weighted_round_robin: non_negative(
            "weighted round robin count",
            qos.num_weighted_round_robin,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn port(speed: EthernetSpeed) -> PortParams {
        PortParams {
            speed,
            ..Default::default()
        }
    }

    #[test]
    fn test_modular_unchannelized() {
        let pp = PortParams {
            slot_index: 2,
            pic_index: 1,
            port_index: 7,
            ..port(EthernetSpeed::Speed100Gb)
        };
        assert_eq!(
            normalize_port_params(&pp, false).unwrap(),
            ValidatedPortParams {
                slot_index: Some(2),
                pic_index: 1,
                port_index: 7,
                channel_index: None,
                channelizable: true,
                speed: EthernetSpeed::Speed100Gb,
            }
        );
    }

    #[test]
    fn test_fixed_form_factor_drops_slot() {
        let npp = normalize_port_params(&port(EthernetSpeed::Speed10Gb), true).unwrap();
        assert_eq!(npp.slot_index, None);
    }

    #[test]
    fn test_channelized_keeps_channel() {
        let pp = PortParams {
            channel_index: 3,
            channel_state: PortChannelState::Channelized,
            ..port(EthernetSpeed::Speed400Gb)
        };
        let npp = normalize_port_params(&pp, false).unwrap();
        assert_eq!(npp.channel_index, Some(3));
        assert!(npp.channelizable);

        // Channel zero on a channelized port is still present.
        let pp = PortParams {
            channel_index: 0,
            ..pp
        };
        assert_eq!(normalize_port_params(&pp, false).unwrap().channel_index, Some(0));
    }

    #[test]
    fn test_unchannelizable() {
        let pp = PortParams {
            channel_state: PortChannelState::Unchannelizable,
            ..port(EthernetSpeed::Speed1Gb)
        };
        let npp = normalize_port_params(&pp, false).unwrap();
        assert_eq!(npp.channel_index, None);
        assert!(!npp.channelizable);
    }

    #[test]
    fn test_bad_params() {
        let speed = EthernetSpeed::Speed1Gb;
        let cases: Vec<(&str, PortParams, bool, &str)> = vec![
            (
                "negative slot",
                PortParams { slot_index: -1, ..port(speed) },
                false,
                "slot index cannot be negative",
            ),
            (
                "negative pic",
                PortParams { pic_index: -2, ..port(speed) },
                false,
                "pic index cannot be negative",
            ),
            (
                "negative port",
                PortParams { port_index: -3, ..port(speed) },
                false,
                "port index cannot be negative",
            ),
            (
                "negative channel",
                PortParams { channel_index: -4, ..port(speed) },
                false,
                "channel index cannot be negative",
            ),
            (
                "non-zero slot on fixed form factor",
                PortParams { slot_index: 1, ..port(speed) },
                true,
                "non-zero slot",
            ),
            (
                "non-zero channel on unchannelized port",
                PortParams { channel_index: 1, ..port(speed) },
                true,
                "non-zero channel",
            ),
            (
                "non-zero channel on unchannelizable port",
                PortParams {
                    channel_index: 1,
                    channel_state: PortChannelState::Unchannelizable,
                    ..port(speed)
                },
                false,
                "non-zero channel",
            ),
            ("unset speed", port(EthernetSpeed::Unset), false, "unset or unknown"),
            (
                "unknown speed",
                port(EthernetSpeed::SpeedUnknown),
                false,
                "unset or unknown",
            ),
        ];
        for (desc, pp, fixed_form_factor, want_err) in cases {
            let err = normalize_port_params(&pp, fixed_form_factor).unwrap_err();
            assert!(err.is_input_error(), "{}: {}", desc, err);
            assert!(
                err.to_string().contains(want_err),
                "{}: got {}, want substring {:?}",
                desc,
                err,
                want_err
            );
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let pp = PortParams {
            slot_index: -1,
            port_index: -1,
            ..port(EthernetSpeed::Unset)
        };
        assert_eq!(
            normalize_port_params(&pp, true),
            Err(NamingError::negative("slot index", -1))
        );
    }

    #[test]
    fn test_qos_params() {
        let qos = QosParams {
            num_strict_priority: 2,
            num_weighted_round_robin: 5,
        };
        assert_eq!(
            normalize_qos_params(&qos).unwrap(),
            ValidatedQosParams {
                num_strict_priority: 2,
                num_weighted_round_robin: 5,
            }
        );

        let err = normalize_qos_params(&QosParams {
            num_weighted_round_robin: -1,
            ..qos
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "weighted round robin count cannot be negative: -1"
        );
    }

    #[test]
    fn test_port_params_from_json() {
        let pp: PortParams = serde_json::from_str(
            r#"{"slot_index": 1, "port_index": 3, "channel_state": "unchannelizable", "speed": "SPEED_100GB"}"#,
        )
        .unwrap();
        assert_eq!(
            pp,
            PortParams {
                slot_index: 1,
                port_index: 3,
                channel_state: PortChannelState::Unchannelizable,
                speed: EthernetSpeed::Speed100Gb,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_device_params_default_model() {
        let dp: DeviceParams = serde_json::from_str(r#"{"vendor": "Ciena"}"#).unwrap();
        assert_eq!(dp, DeviceParams::new(Vendor::Ciena));
        assert_eq!(
            DeviceParams::new(Vendor::Ciena).with_hardware_model("WR7").to_string(),
            "{vendor: Ciena, hardware_model: \"WR7\"}"
        );
    }
}
