// supermicro-redfish: Async Rust client for the Supermicro BMC Redfish API

pub mod error;
pub mod models;
pub mod session;
pub mod transport;

mod actions;
mod client;
mod resources;

pub use client::RedfishClient;
pub use error::Error;
pub use session::Session;
pub use transport::{TlsMode, TransportConfig};
