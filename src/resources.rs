// Resource getters
//
// One method per resource kind: fetch the well-known path, map into the
// typed schema. Every getter returns a read-only snapshot; nothing is
// cached between calls.

use crate::client::{paths, RedfishClient};
use crate::error::Error;
use crate::models::{
    Chassis, ComputerSystem, FanMode, LicenseCollection, LldpConfig, Manager, NetworkProtocol,
    NtpConfig, Power, ResourceKind, ServiceRoot, Snooping, Thermal,
};

impl RedfishClient {
    /// Fetch the service root (`/redfish/v1`).
    pub async fn get_service_root(&self) -> Result<ServiceRoot, Error> {
        self.get_resource(ResourceKind::ServiceRoot, paths::SERVICE_ROOT)
            .await
    }

    /// Fetch the computer system resource: inventory, power state, boot
    /// configuration, and advertised reset types.
    pub async fn get_system(&self) -> Result<ComputerSystem, Error> {
        self.get_resource(ResourceKind::System, paths::SYSTEM).await
    }

    /// Fetch the chassis resource: enclosure inventory and intrusion state.
    pub async fn get_chassis(&self) -> Result<Chassis, Error> {
        self.get_resource(ResourceKind::Chassis, paths::CHASSIS).await
    }

    /// Fetch thermal sensors (temperatures and fans).
    pub async fn get_thermal(&self) -> Result<Thermal, Error> {
        self.get_resource(ResourceKind::Thermal, paths::THERMAL).await
    }

    /// Fetch power sensors (consumption, voltages, PSUs).
    pub async fn get_power(&self) -> Result<Power, Error> {
        self.get_resource(ResourceKind::Power, paths::POWER).await
    }

    /// Fetch the manager resource — the BMC itself.
    pub async fn get_manager(&self) -> Result<Manager, Error> {
        self.get_resource(ResourceKind::Manager, paths::MANAGER).await
    }

    /// Fetch the manager's network protocol configuration.
    pub async fn get_network_protocol(&self) -> Result<NetworkProtocol, Error> {
        self.get_resource(ResourceKind::NetworkProtocol, paths::NETWORK_PROTOCOL)
            .await
    }

    /// Fetch the OEM fan control mode and its allowable values.
    pub async fn get_fan_mode(&self) -> Result<FanMode, Error> {
        self.get_resource(ResourceKind::FanMode, paths::FAN_MODE).await
    }

    /// Fetch the OEM NTP configuration.
    pub async fn get_ntp(&self) -> Result<NtpConfig, Error> {
        self.get_resource(ResourceKind::Ntp, paths::NTP).await
    }

    /// Fetch the OEM LLDP configuration.
    pub async fn get_lldp(&self) -> Result<LldpConfig, Error> {
        self.get_resource(ResourceKind::Lldp, paths::LLDP).await
    }

    /// Fetch the OEM POST-code snooping state.
    pub async fn get_snooping(&self) -> Result<Snooping, Error> {
        self.get_resource(ResourceKind::Snooping, paths::SNOOPING).await
    }

    /// Fetch activated OEM licenses.
    pub async fn get_licenses(&self) -> Result<LicenseCollection, Error> {
        self.get_resource(ResourceKind::License, paths::LICENSES).await
    }
}
