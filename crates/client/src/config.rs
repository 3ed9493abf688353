//! Client configuration.

use std::time::Duration;

use geometry::NegotiationConfig;
use grpc::ConnectionConfig;
use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// How long [`crate::GeometryClient::connect`] waits for the server to report
/// healthy before negotiating.
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to open a session.
///
/// Deserializes from a partial document; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Host, port, message size and transport timeouts.
    pub connection: ConnectionConfig,
    /// Requested protocol version and probe timeout.
    pub negotiation: NegotiationConfig,
    /// Seconds to wait for the server's health service to report `SERVING`.
    pub health_timeout_secs: f64,
}

impl ClientConfig {
    /// Configuration for `host:port` with every other value defaulted.
    pub fn for_endpoint(host: impl Into<String>, port: u16) -> Self {
        Self {
            connection: ConnectionConfig {
                host: host.into(),
                port,
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }

    /// `http://host:port`.
    pub fn endpoint_uri(&self) -> String {
        self.connection.uri()
    }

    /// The health wait as a [`Duration`].
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidConfig`] unless the value is a positive, finite
    /// number of seconds.
    pub fn health_timeout(&self) -> Result<Duration, ClientError> {
        let secs = self.health_timeout_secs;
        if !(secs.is_finite() && secs > 0.0) {
            return Err(ClientError::invalid(
                "health_timeout_secs",
                format!("must be a positive number of seconds, got {secs}"),
            ));
        }
        Duration::try_from_secs_f64(secs)
            .map_err(|e| ClientError::invalid("health_timeout_secs", e.to_string()))
    }

    /// Checks every value before any connection is attempted.
    ///
    /// # Errors
    ///
    /// The first offending field, as [`ClientError::InvalidConfig`], or
    /// [`ClientError::Negotiation`] for an unusable probe timeout.
    pub fn validate(&self) -> Result<(), ClientError> {
        let c = &self.connection;
        if c.host.trim().is_empty() {
            return Err(ClientError::invalid("host", "must not be empty"));
        }
        if c.port == 0 {
            return Err(ClientError::invalid("port", "must not be 0"));
        }
        if c.max_message_size == 0 {
            return Err(ClientError::invalid("max_message_size", "must be positive"));
        }
        if c.connect_timeout.is_zero() {
            return Err(ClientError::invalid("connect_timeout", "must be positive"));
        }
        if c.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ClientError::invalid("request_timeout", "must be positive when set"));
        }
        self.negotiation.probe_timeout()?;
        self.health_timeout()?;
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            negotiation: NegotiationConfig::default(),
            health_timeout_secs: DEFAULT_HEALTH_TIMEOUT.as_secs_f64(),
        }
    }
}
