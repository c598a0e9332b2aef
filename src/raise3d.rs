//! Client for the printer's local HTTP API (`http://<addr>/v1/`).

pub use self::api::*;
pub use self::client::Client;
pub use self::client_builder::ClientBuilder;
pub use self::signature::{signature, timestamp_millis};
pub use self::transport::{HttpTransport, Transport};

mod api;
mod client;
mod client_builder;
mod signature;
mod status;
mod transport;

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    pub password: Option<String>,
    /// Request timeout in seconds. Unset leaves the HTTP client's default.
    pub timeout: Option<u64>,
}
