use thiserror::Error;

use crate::models::ResourceKind;

/// Top-level error type for the `supermicro-redfish` crate.
///
/// Covers every failure mode across the client's surfaces: session
/// authentication, resource fetching, JSON-to-model mapping, and action
/// invocation. Variants carry the originating resource kind or action
/// name so callers can tell *which* call failed without string parsing.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected by the BMC (HTTP 401/403 on session creation).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session creation succeeded but a required response header was absent.
    #[error("Malformed session response: missing {missing} header")]
    MalformedSessionResponse { missing: &'static str },

    // ── Fetch ───────────────────────────────────────────────────────
    /// Non-200 status on a resource GET.
    #[error("{resource} fetch failed (HTTP {status})")]
    HttpStatus { status: u16, resource: ResourceKind },

    /// Response body was not parseable JSON.
    #[error("{resource} returned malformed payload: {message}")]
    MalformedPayload {
        resource: ResourceKind,
        message: String,
        body: String,
    },

    // ── Mapping ─────────────────────────────────────────────────────
    /// A required field was absent from a resource payload.
    #[error("{resource} payload missing required field `{field}`")]
    MissingField {
        resource: ResourceKind,
        field: String,
    },

    /// Payload was valid JSON but did not match the resource schema.
    #[error("{resource} payload did not match schema: {message}")]
    Schema {
        resource: ResourceKind,
        message: String,
    },

    // ── Actions ─────────────────────────────────────────────────────
    /// The requested value is not in the resource's advertised
    /// allowable-values set. Detected locally; no request was sent.
    #[error("value {value:?} not allowed for {action} (allowed: {allowed:?})")]
    ValueNotAllowed {
        action: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    /// The BMC rejected the action or configuration write.
    #[error("{action} rejected (HTTP {status}): {reason}")]
    ActionRejected {
        action: &'static str,
        status: u16,
        reason: String,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS configuration or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),
}

impl Error {
    /// Returns `true` if this error indicates the session is no longer
    /// usable and re-authentication might resolve it.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::HttpStatus { status: 401, .. }
        )
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this error was detected locally, before any
    /// request reached the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::ValueNotAllowed { .. } | Self::MissingField { .. } | Self::Schema { .. }
        )
    }
}
