//! Client configuration.
//!
//! Deserializable description of a client: credentials, optional service
//! root override, optional request timeout. Format-agnostic; the embedding
//! application picks the on-disk representation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::{Client, DEFAULT_BASE_URL};
use crate::error::Result;
use crate::transport::HttpTransport;

/// Configuration for constructing a [`Client`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// FlightAware account name.
    pub username: String,

    /// FlightXML API key.
    pub api_key: String,

    /// Service root override.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds, applied at the transport layer.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Client<HttpTransport> {
    /// Build a client from a configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let transport = match config.timeout_secs {
            Some(secs) => HttpTransport::with_timeout(Duration::from_secs(secs))?,
            None => HttpTransport::new(),
        };
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Client::with_transport(
            config.username,
            config.api_key,
            base_url,
            transport,
        ))
    }
}
