//! Typed schemas for the Supermicro Redfish resource surface.
//!
//! All types match the JSON returned by the BMC's `/redfish/v1/` endpoints.
//! Wire names are PascalCase via `#[serde(rename_all = "PascalCase")]`, with
//! explicit renames where the protocol uses all-caps acronyms (`UUID`,
//! `NTPEnable`, `FQDN`, ...).
//!
//! Required fields are plain struct fields; everything the vendor may omit
//! is `Option<T>` + `#[serde(default)]` — absence stays visible to the
//! caller, never silently defaulted. Numeric readings keep the remote unit,
//! carried by the field name (`ReadingCelsius`, `ReadingVolts`,
//! `PowerConsumedWatts`). Undocumented fields land in `extra`; embedded
//! vendor `Oem` blocks are preserved as generic key-value maps.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::Error;

// ── Resource kinds ───────────────────────────────────────────────────

/// Which resource a fetch or mapping error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ServiceRoot,
    System,
    Chassis,
    Thermal,
    Power,
    Manager,
    NetworkProtocol,
    FanMode,
    Ntp,
    Lldp,
    Snooping,
    License,
    Session,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ServiceRoot => "ServiceRoot",
            Self::System => "System",
            Self::Chassis => "Chassis",
            Self::Thermal => "Thermal",
            Self::Power => "Power",
            Self::Manager => "Manager",
            Self::NetworkProtocol => "NetworkProtocol",
            Self::FanMode => "FanMode",
            Self::Ntp => "NTP",
            Self::Lldp => "LLDP",
            Self::Snooping => "Snooping",
            Self::License => "License",
            Self::Session => "Session",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Decoding ─────────────────────────────────────────────────────────

/// Map raw JSON into a typed resource.
///
/// A missing required field becomes [`Error::MissingField`] naming the
/// field; any other shape mismatch becomes [`Error::Schema`]. Never
/// returns a partially-populated value.
pub(crate) fn decode<T: DeserializeOwned>(kind: ResourceKind, value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| {
        let message = e.to_string();
        match missing_field_name(&message) {
            Some(field) => Error::MissingField {
                resource: kind,
                field,
            },
            None => Error::Schema {
                resource: kind,
                message,
            },
        }
    })
}

// serde_json reports absent required fields as "missing field `Name`".
fn missing_field_name(message: &str) -> Option<String> {
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_owned())
}

// ── Shared shapes ────────────────────────────────────────────────────

/// Redfish status composite. All members advisory — a resource or
/// sensor with a non-OK (or absent) health is still fully representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub health_rollup: Option<String>,
}

impl Status {
    /// Convenience: health present and `"OK"`.
    pub fn is_ok(&self) -> bool {
        self.health.as_deref() == Some("OK")
    }
}

/// Generic vendor-extension block. Keys under `Oem` are not exhaustively
/// specified by the vendor, so they are preserved rather than dropped.
pub type Oem = serde_json::Map<String, Value>;

// ── Service root ─────────────────────────────────────────────────────

/// From `GET /redfish/v1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRoot {
    pub name: String,
    #[serde(default)]
    pub redfish_version: Option<String>,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ── ComputerSystem ───────────────────────────────────────────────────

/// From `GET /redfish/v1/Systems/1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputerSystem {
    pub id: String,
    pub name: String,
    pub status: Status,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub power_state: Option<String>,
    #[serde(default)]
    pub bios_version: Option<String>,
    #[serde(default, rename = "IndicatorLED")]
    pub indicator_led: Option<String>,
    #[serde(default)]
    pub processor_summary: Option<ProcessorSummary>,
    #[serde(default)]
    pub memory_summary: Option<MemorySummary>,
    #[serde(default)]
    pub boot: Option<Boot>,
    #[serde(default)]
    pub actions: Option<SystemActions>,
    #[serde(default)]
    pub oem: Oem,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Aggregate processor inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorSummary {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
}

/// Aggregate memory inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemorySummary {
    #[serde(default, rename = "TotalSystemMemoryGiB")]
    pub total_system_memory_gib: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
}

/// Boot-override configuration — a mutable sub-resource of System,
/// written via `RedfishClient::set_boot_override`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Boot {
    #[serde(default)]
    pub boot_source_override_target: Option<String>,
    #[serde(default)]
    pub boot_source_override_enabled: Option<String>,
    /// Closed set of valid override targets, advertised by the BMC.
    #[serde(
        default,
        rename = "BootSourceOverrideTarget@Redfish.AllowableValues"
    )]
    pub allowable_values: Vec<String>,
}

/// The `Actions` block of a System resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemActions {
    #[serde(default, rename = "#ComputerSystem.Reset")]
    pub reset: Option<ResetAction>,
}

/// An advertised reset action with its closed set of reset types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetAction {
    #[serde(default, rename = "ResetType@Redfish.AllowableValues")]
    pub allowable_values: Vec<String>,
    #[serde(default)]
    pub target: Option<String>,
}

// ── Chassis ──────────────────────────────────────────────────────────

/// From `GET /redfish/v1/Chassis/1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Chassis {
    pub id: String,
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub chassis_type: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub power_state: Option<String>,
    #[serde(default, rename = "IndicatorLED")]
    pub indicator_led: Option<String>,
    #[serde(default)]
    pub physical_security: Option<PhysicalSecurity>,
    #[serde(default)]
    pub oem: Oem,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Chassis intrusion sensor state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicalSecurity {
    #[serde(default)]
    pub intrusion_sensor: Option<String>,
    #[serde(default)]
    pub intrusion_sensor_number: Option<i64>,
}

// ── Thermal ──────────────────────────────────────────────────────────

/// From `GET /redfish/v1/Chassis/1/Thermal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Thermal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub temperatures: Vec<Temperature>,
    #[serde(default)]
    pub fans: Vec<Fan>,
    #[serde(default)]
    pub oem: Oem,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Temperature sensor reading, in Celsius as declared by the field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Temperature {
    pub member_id: String,
    pub name: String,
    #[serde(default)]
    pub reading_celsius: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub lower_threshold_critical: Option<f64>,
    #[serde(default)]
    pub upper_threshold_critical: Option<f64>,
    #[serde(default)]
    pub physical_context: Option<String>,
}

/// Fan tachometer reading (RPM).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fan {
    pub member_id: String,
    pub name: String,
    #[serde(default)]
    pub reading: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub lower_threshold_critical: Option<f64>,
    #[serde(default)]
    pub upper_threshold_critical: Option<f64>,
}

// ── Power ────────────────────────────────────────────────────────────

/// From `GET /redfish/v1/Chassis/1/Power`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Power {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub power_control: Vec<PowerControl>,
    #[serde(default)]
    pub voltages: Vec<Voltage>,
    #[serde(default)]
    pub power_supplies: Vec<PowerSupply>,
    #[serde(default)]
    pub oem: Oem,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Power domain consumption/capacity, in Watts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerControl {
    pub member_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub power_consumed_watts: Option<f64>,
    #[serde(default)]
    pub power_capacity_watts: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub power_metrics: Option<PowerMetrics>,
}

/// Interval min/max/average consumption, in Watts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerMetrics {
    #[serde(default)]
    pub min_consumed_watts: Option<f64>,
    #[serde(default)]
    pub max_consumed_watts: Option<f64>,
    #[serde(default)]
    pub average_consumed_watts: Option<f64>,
}

/// Voltage sensor reading, in Volts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voltage {
    pub member_id: String,
    pub name: String,
    #[serde(default)]
    pub reading_volts: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub lower_threshold_critical: Option<f64>,
    #[serde(default)]
    pub upper_threshold_critical: Option<f64>,
}

/// Power supply unit inventory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerSupply {
    pub member_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub power_supply_type: Option<String>,
    #[serde(default)]
    pub power_capacity_watts: Option<f64>,
}

// ── Manager ──────────────────────────────────────────────────────────

/// From `GET /redfish/v1/Managers/1` — the BMC itself.
///
/// Timestamps (`DateTime`, `LastResetTime`) are kept as the ISO 8601
/// strings the BMC sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manager {
    pub id: String,
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub manager_type: Option<String>,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub date_time_local_offset: Option<String>,
    #[serde(default)]
    pub last_reset_time: Option<String>,
    #[serde(default)]
    pub power_state: Option<String>,
    #[serde(default)]
    pub actions: Option<ManagerActions>,
    #[serde(default)]
    pub oem: Oem,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The `Actions` block of a Manager resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerActions {
    #[serde(default, rename = "#Manager.Reset")]
    pub reset: Option<ResetAction>,
}

// ── NetworkProtocol ──────────────────────────────────────────────────

/// From `GET /redfish/v1/Managers/1/NetworkProtocol`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkProtocol {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default, rename = "FQDN")]
    pub fqdn: Option<String>,
    #[serde(default, rename = "HTTP")]
    pub http: Option<ProtocolSetting>,
    #[serde(default, rename = "HTTPS")]
    pub https: Option<ProtocolSetting>,
    #[serde(default, rename = "SSH")]
    pub ssh: Option<ProtocolSetting>,
    #[serde(default, rename = "IPMI")]
    pub ipmi: Option<ProtocolSetting>,
    #[serde(default, rename = "SNMP")]
    pub snmp: Option<ProtocolSetting>,
    #[serde(default, rename = "KVMIP")]
    pub kvm_ip: Option<ProtocolSetting>,
    #[serde(default)]
    pub virtual_media: Option<ProtocolSetting>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Per-protocol enablement and port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProtocolSetting {
    #[serde(default)]
    pub protocol_enabled: Option<bool>,
    #[serde(default)]
    pub port: Option<u16>,
}

// ── OEM config endpoints ─────────────────────────────────────────────
//
// Supermicro-specific singletons under /Managers/1/Oem/Supermicro/.
// Small, stable shapes, so they get typed schemas (unlike embedded Oem
// blocks, which stay generic).

/// Fan control mode — from the OEM `FanMode` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanMode {
    #[serde(rename = "Mode")]
    pub mode: String,
    /// Closed set of valid modes, advertised alongside the field.
    #[serde(default, rename = "Mode@Redfish.AllowableValues")]
    pub allowable_values: Vec<String>,
}

/// NTP client configuration — from the OEM `NTP` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NtpConfig {
    #[serde(rename = "NTPEnable")]
    pub enabled: bool,
    #[serde(default, rename = "PrimaryNTPServer")]
    pub primary_server: Option<String>,
    #[serde(default, rename = "SecondaryNTPServer")]
    pub secondary_server: Option<String>,
}

/// LLDP enablement — from the OEM `LLDP` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LldpConfig {
    #[serde(rename = "LLDPEnabled")]
    pub enabled: bool,
}

/// BIOS POST-code snooping — from the OEM `Snooping` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Snooping {
    pub post_code: String,
}

/// From the OEM `LicenseManager/QueryLicense` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LicenseCollection {
    pub licenses: Vec<License>,
}

/// A single activated license.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    #[serde(rename = "LicenseID")]
    pub license_id: String,
    #[serde(default, rename = "LicenseType")]
    pub license_type: Option<String>,
    #[serde(default, rename = "LicenseStatus")]
    pub license_status: Option<String>,
}

// ── Write payloads ───────────────────────────────────────────────────

/// Tri-state boot-override enablement. The wire value is a string, not
/// a bool: `Once` arms the override for the next boot only,
/// `Continuous` until explicitly disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootOverrideEnabled {
    Disabled,
    Once,
    Continuous,
}

impl BootOverrideEnabled {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Once => "Once",
            Self::Continuous => "Continuous",
        }
    }
}
