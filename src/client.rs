// Redfish HTTP client core
//
// Wraps `reqwest::Client` with session-token authentication, well-known
// path construction, and one-shot re-authentication on 401. Resource
// getters and mutating operations are implemented as inherent methods in
// separate files (`resources.rs`, `actions.rs`) to keep this module
// focused on transport mechanics.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::models::{self, ResourceKind};
use crate::session::Session;
use crate::transport::TransportConfig;

/// Well-known resource paths on the Supermicro BMC.
pub(crate) mod paths {
    pub const SERVICE_ROOT: &str = "/redfish/v1";
    pub const SESSIONS: &str = "/redfish/v1/SessionService/Sessions";
    pub const SYSTEM: &str = "/redfish/v1/Systems/1";
    pub const CHASSIS: &str = "/redfish/v1/Chassis/1";
    pub const THERMAL: &str = "/redfish/v1/Chassis/1/Thermal";
    pub const POWER: &str = "/redfish/v1/Chassis/1/Power";
    pub const MANAGER: &str = "/redfish/v1/Managers/1";
    pub const NETWORK_PROTOCOL: &str = "/redfish/v1/Managers/1/NetworkProtocol";
    pub const FAN_MODE: &str = "/redfish/v1/Managers/1/Oem/Supermicro/FanMode";
    pub const NTP: &str = "/redfish/v1/Managers/1/Oem/Supermicro/NTP";
    pub const LLDP: &str = "/redfish/v1/Managers/1/Oem/Supermicro/LLDP";
    pub const SNOOPING: &str = "/redfish/v1/Managers/1/Oem/Supermicro/Snooping";
    pub const LICENSES: &str = "/redfish/v1/Managers/1/Oem/Supermicro/LicenseManager/QueryLicense";
}

const AUTH_HEADER: &str = "X-Auth-Token";

/// Async client for a Supermicro BMC's Redfish service.
///
/// Authenticates lazily on first use: the session slot lives behind a
/// `tokio::sync::Mutex` and the login handshake runs while the lock is
/// held, so any number of concurrent first callers produce exactly one
/// session-creation request. Every resource call re-uses the session
/// until it expires or the BMC answers 401, at which point the client
/// re-authenticates once and retries the original call once.
pub struct RedfishClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
    session: tokio::sync::Mutex<Option<Session>>,
}

impl RedfishClient {
    /// Create a client from a base URL (e.g. `https://192.168.1.100`)
    /// and credentials. Does not authenticate — the session handshake
    /// happens on the first resource call, or via an explicit getter.
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url,
            username: username.into(),
            password,
            session: tokio::sync::Mutex::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this when the caller manages transport policy itself (tests,
    /// shared connection pools).
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            username: username.into(),
            password,
            session: tokio::sync::Mutex::new(None),
        }
    }

    /// The BMC base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Perform the session-creation handshake.
    ///
    /// `POST /redfish/v1/SessionService/Sessions` with the credentials;
    /// the token comes back in the `X-Auth-Token` header and the new
    /// session resource's path in `Location`. `SessionTimeout` in the
    /// body, when present, drives proactive expiry.
    async fn login(&self) -> Result<Session, Error> {
        let url = self.base_url.join(paths::SESSIONS)?;
        debug!("creating session at {url}");

        let body = serde_json::json!({
            "UserName": self.username,
            "Password": self.password.expose_secret(),
        });

        let resp = self.http.post(url).json(&body).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(Error::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                resource: ResourceKind::Session,
            });
        }

        let token = header_value(&resp, AUTH_HEADER)
            .ok_or(Error::MalformedSessionResponse { missing: AUTH_HEADER })?;
        let location = header_value(&resp, "Location")
            .ok_or(Error::MalformedSessionResponse { missing: "Location" })?;

        // The timeout is informational; a missing or unparseable body is fine.
        let timeout_secs = resp
            .text()
            .await
            .ok()
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .and_then(|v| v.get("SessionTimeout").and_then(Value::as_u64));

        debug!(?timeout_secs, "session established");
        Ok(Session::new(token, location, timeout_secs))
    }

    /// Return a valid auth token, authenticating if necessary.
    ///
    /// The lock is held across the handshake — concurrent first callers
    /// queue here and all observe the single session the winner created.
    async fn ensure_session(&self) -> Result<String, Error> {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_ref() {
            if !session.is_expired() {
                return Ok(session.token.clone());
            }
            debug!("session timeout elapsed, re-authenticating");
        }
        let session = self.login().await?;
        let token = session.token.clone();
        *guard = Some(session);
        Ok(token)
    }

    /// Drop the local session so the next call re-authenticates.
    async fn invalidate_session(&self) {
        *self.session.lock().await = None;
    }

    /// End the session: DELETE the remote session resource and clear
    /// local state.
    ///
    /// The local session is cleared before the remote delete, so a
    /// refused delete never leaves a stale token behind — it leaks a
    /// session object on the BMC (which ages out via `SessionTimeout`)
    /// and surfaces to the caller as [`Error::ActionRejected`].
    pub async fn logout(&self) -> Result<(), Error> {
        let Some(session) = self.session.lock().await.take() else {
            return Ok(());
        };

        let url = self.base_url.join(&session.location)?;
        debug!("deleting session at {url}");

        let resp = self
            .http
            .delete(url)
            .header(AUTH_HEADER, &session.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "session delete refused by BMC");
            let raw = resp.text().await.unwrap_or_default();
            return Err(Error::ActionRejected {
                action: "Session.Delete",
                status: status.as_u16(),
                reason: rejection_reason(status, &raw),
            });
        }
        Ok(())
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a resource path and return the parsed JSON body.
    ///
    /// On 401 the session is invalidated, re-established once, and the
    /// GET retried once; a second 401 surfaces as-is.
    pub(crate) async fn get_value(
        &self,
        kind: ResourceKind,
        path: &str,
    ) -> Result<Value, Error> {
        let token = self.ensure_session().await?;
        match self.try_get(kind, path, &token).await {
            Err(Error::HttpStatus { status: 401, .. }) => {
                debug!(resource = %kind, "401 from BMC, re-authenticating once");
                self.invalidate_session().await;
                let token = self.ensure_session().await?;
                self.try_get(kind, path, &token).await
            }
            other => other,
        }
    }

    async fn try_get(&self, kind: ResourceKind, path: &str, token: &str) -> Result<Value, Error> {
        let url = self.base_url.join(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).header(AUTH_HEADER, token).send().await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                resource: kind,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::MalformedPayload {
            resource: kind,
            message: e.to_string(),
            body,
        })
    }

    /// Fetch a resource and map it into its typed schema.
    pub(crate) async fn get_resource<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        path: &str,
    ) -> Result<T, Error> {
        let value = self.get_value(kind, path).await?;
        models::decode(kind, value)
    }

    /// Send a mutating request (action POST or config PATCH).
    ///
    /// 200/202/204 count as success. Any other status is a rejection,
    /// with the reason pulled from the Redfish error body when present.
    /// 401 gets the same one-shot re-auth + retry as fetches.
    pub(crate) async fn write(
        &self,
        action: &'static str,
        method: Method,
        path: &str,
        body: &Value,
    ) -> Result<(), Error> {
        let token = self.ensure_session().await?;
        match self.try_write(action, method.clone(), path, body, &token).await {
            Err(Error::ActionRejected { status: 401, .. }) => {
                debug!(action, "401 from BMC, re-authenticating once");
                self.invalidate_session().await;
                let token = self.ensure_session().await?;
                self.try_write(action, method, path, body, &token).await
            }
            other => other,
        }
    }

    async fn try_write(
        &self,
        action: &'static str,
        method: Method,
        path: &str,
        body: &Value,
        token: &str,
    ) -> Result<(), Error> {
        let url = self.base_url.join(path)?;
        debug!("{method} {url}");

        let resp = self
            .http
            .request(method, url)
            .header(AUTH_HEADER, token)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let raw = resp.text().await.unwrap_or_default();
        Err(Error::ActionRejected {
            action,
            status: status.as_u16(),
            reason: rejection_reason(status, &raw),
        })
    }
}

fn header_value(resp: &reqwest::Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Pull a human-readable reason out of a Redfish error body:
/// `{ "error": { "message": "..." } }`, falling back to the raw body,
/// falling back to the status line.
fn rejection_reason(status: reqwest::StatusCode, raw: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        if let Some(message) = value
            .pointer("/error/message")
            .or_else(|| value.pointer("/error/Message"))
            .and_then(Value::as_str)
        {
            return message.to_owned();
        }
    }
    if raw.is_empty() {
        status.to_string()
    } else {
        raw.to_owned()
    }
}
