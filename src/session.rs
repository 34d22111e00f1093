// Session state for the Redfish session-token auth flow.
//
// A session is created by POSTing credentials to the session collection;
// the BMC answers with an opaque token (X-Auth-Token header) and the new
// session resource's path (Location header). The token rides on every
// subsequent request. `SessionTimeout` from the handshake body, when
// present, drives proactive re-authentication before the BMC would
// start answering 401.

use std::time::{Duration, Instant};

/// An authenticated session with the BMC.
///
/// Owned by [`RedfishClient`](crate::RedfishClient) behind a mutex; a
/// `None` slot means unauthenticated. Read-many by concurrent calls,
/// replaced whole on (re-)authentication — never mutated in place, so a
/// reader can never observe a half-updated token.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque auth token from the `X-Auth-Token` response header.
    pub token: String,
    /// Path of the session resource (from the `Location` header),
    /// used to DELETE the remote session on logout.
    pub location: String,
    /// Idle timeout advertised in the handshake body, if any.
    pub timeout: Option<Duration>,
    created: Instant,
}

impl Session {
    pub fn new(token: String, location: String, timeout_secs: Option<u64>) -> Self {
        Self {
            token,
            location,
            timeout: timeout_secs.map(Duration::from_secs),
            created: Instant::now(),
        }
    }

    /// Whether the advertised `SessionTimeout` has elapsed.
    ///
    /// A session with no advertised timeout never proactively expires;
    /// it is only invalidated by a 401 from the BMC.
    pub fn is_expired(&self) -> bool {
        match self.timeout {
            Some(timeout) => self.created.elapsed() >= timeout,
            None => false,
        }
    }
}
