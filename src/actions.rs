// Mutating operations
//
// The only write patterns in the client: action POSTs to a resource's
// `Actions` sub-path, and config PATCHes to the resource itself. Where
// the BMC advertises an allowable-values set, the requested value is
// checked against it before any request is sent — an out-of-set value
// is a client-side contract violation, not a server round-trip.

use reqwest::Method;
use serde_json::json;

use crate::client::{paths, RedfishClient};
use crate::error::Error;
use crate::models::{BootOverrideEnabled, ResetAction};

const SYSTEM_RESET: &str = "ComputerSystem.Reset";
const MANAGER_RESET: &str = "Manager.Reset";

impl RedfishClient {
    // ── Reset actions ────────────────────────────────────────────────

    /// Reset the host system (`#ComputerSystem.Reset`).
    ///
    /// `reset_type` must be one of the values the System resource
    /// advertises under `ResetType@Redfish.AllowableValues`
    /// (e.g. `"On"`, `"ForceOff"`, `"GracefulShutdown"`).
    pub async fn reset_system(&self, reset_type: &str) -> Result<(), Error> {
        let system = self.get_system().await?;
        let reset = system.actions.as_ref().and_then(|a| a.reset.as_ref());
        self.post_reset(SYSTEM_RESET, paths::SYSTEM, reset, reset_type)
            .await
    }

    /// Reset the BMC itself (`#Manager.Reset`).
    pub async fn reset_manager(&self, reset_type: &str) -> Result<(), Error> {
        let manager = self.get_manager().await?;
        let reset = manager.actions.as_ref().and_then(|a| a.reset.as_ref());
        self.post_reset(MANAGER_RESET, paths::MANAGER, reset, reset_type)
            .await
    }

    async fn post_reset(
        &self,
        action: &'static str,
        resource_path: &str,
        reset: Option<&ResetAction>,
        reset_type: &str,
    ) -> Result<(), Error> {
        let allowed = reset.map(|r| r.allowable_values.as_slice()).unwrap_or(&[]);
        if !allowed.iter().any(|v| v == reset_type) {
            return Err(Error::ValueNotAllowed {
                action,
                value: reset_type.to_owned(),
                allowed: allowed.to_vec(),
            });
        }

        // Prefer the advertised target; derive from the resource path
        // when the BMC omits it.
        let target = match reset.and_then(|r| r.target.clone()) {
            Some(target) => target,
            None => format!("{resource_path}/Actions/{action}"),
        };

        self.write(action, Method::POST, &target, &json!({ "ResetType": reset_type }))
            .await
    }

    // ── Boot override ────────────────────────────────────────────────

    /// Set the boot-source override on the System resource.
    ///
    /// `target` must be one of the values advertised under
    /// `BootSourceOverrideTarget@Redfish.AllowableValues` (e.g. `"Pxe"`,
    /// `"BiosSetup"`). The override is written as a PATCH of the `Boot`
    /// sub-object.
    pub async fn set_boot_override(
        &self,
        target: &str,
        enabled: BootOverrideEnabled,
    ) -> Result<(), Error> {
        let system = self.get_system().await?;
        let allowed = system
            .boot
            .map(|b| b.allowable_values)
            .unwrap_or_default();
        if !allowed.iter().any(|v| v == target) {
            return Err(Error::ValueNotAllowed {
                action: "BootSourceOverride",
                value: target.to_owned(),
                allowed,
            });
        }

        let body = json!({
            "Boot": {
                "BootSourceOverrideTarget": target,
                "BootSourceOverrideEnabled": enabled.as_str(),
            }
        });
        self.write("BootSourceOverride", Method::PATCH, paths::SYSTEM, &body)
            .await
    }

    // ── OEM configuration ────────────────────────────────────────────

    /// Set the fan control mode.
    ///
    /// `mode` must be one of the values the FanMode endpoint advertises
    /// (e.g. `"Standard"`, `"FullSpeed"`, `"Optimal"`, `"HeavyIO"`).
    pub async fn set_fan_mode(&self, mode: &str) -> Result<(), Error> {
        let current = self.get_fan_mode().await?;
        if !current.allowable_values.iter().any(|v| v == mode) {
            return Err(Error::ValueNotAllowed {
                action: "FanMode.Mode",
                value: mode.to_owned(),
                allowed: current.allowable_values,
            });
        }

        self.write(
            "FanMode.Mode",
            Method::PATCH,
            paths::FAN_MODE,
            &json!({ "Mode": mode }),
        )
        .await
    }

    /// Configure the BMC's NTP client. `None` leaves a server field
    /// untouched on the BMC.
    pub async fn set_ntp(
        &self,
        enabled: bool,
        primary: Option<&str>,
        secondary: Option<&str>,
    ) -> Result<(), Error> {
        let mut body = json!({ "NTPEnable": enabled });
        if let Some(primary) = primary {
            body["PrimaryNTPServer"] = json!(primary);
        }
        if let Some(secondary) = secondary {
            body["SecondaryNTPServer"] = json!(secondary);
        }

        self.write("NTP", Method::PATCH, paths::NTP, &body).await
    }

    /// Enable or disable LLDP on the BMC's network interface.
    pub async fn set_lldp(&self, enabled: bool) -> Result<(), Error> {
        self.write(
            "LLDP",
            Method::PATCH,
            paths::LLDP,
            &json!({ "LLDPEnabled": enabled }),
        )
        .await
    }
}
