//! The `Connection` port and its tonic implementation.
//!
//! Adapters never see a tonic client type. They hand a method path and an
//! encoded request to [`Connection::unary`] and get the encoded response back,
//! which keeps them testable against an in-memory connection.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use geometry::RemoteStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::codec::RawCodec;

/// Default cap on encoded message size in either direction: 256 MiB.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 256 * 1024 * 1024;

/// Default time allowed for establishing the channel.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures raised by a [`Connection`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-OK gRPC status.
    #[error("server returned {}: {}", .0.code(), .0.message())]
    Status(#[from] tonic::Status),

    /// The channel could not be established or broke mid-call.
    #[error("transport failure: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// The configured host and port do not form a valid URI.
    #[error("invalid endpoint '{uri}': {reason}")]
    InvalidEndpoint { uri: String, reason: String },

    /// A client-side deadline elapsed before the server answered.
    #[error("no answer within {0:?}")]
    Timeout(Duration),

    /// The server answered, but the payload is not the expected message.
    #[error("undecodable response from {method}")]
    Malformed {
        method: &'static str,
        #[source]
        source: prost::DecodeError,
    },
}

impl TransportError {
    /// Classifies this failure as a transport-neutral [`RemoteStatus`].
    pub fn status(&self) -> RemoteStatus {
        match self {
            TransportError::Status(status) => remote_status(status.code()),
            TransportError::Transport(_) | TransportError::InvalidEndpoint { .. } => {
                RemoteStatus::TransportFailure
            }
            TransportError::Timeout(_) => RemoteStatus::DeadlineExceeded,
            TransportError::Malformed { .. } => RemoteStatus::DataLoss,
        }
    }

    /// Human-readable description without the status prefix.
    pub fn detail(&self) -> String {
        match self {
            TransportError::Status(status) => status.message().to_string(),
            TransportError::Malformed { method, source } => format!("{method}: {source}"),
            other => other.to_string(),
        }
    }
}

/// Maps a tonic status code onto the domain status set.
pub fn remote_status(code: tonic::Code) -> RemoteStatus {
    use tonic::Code;
    match code {
        Code::Cancelled => RemoteStatus::Cancelled,
        Code::InvalidArgument => RemoteStatus::InvalidArgument,
        Code::DeadlineExceeded => RemoteStatus::DeadlineExceeded,
        Code::NotFound => RemoteStatus::NotFound,
        Code::AlreadyExists => RemoteStatus::AlreadyExists,
        Code::PermissionDenied => RemoteStatus::PermissionDenied,
        Code::ResourceExhausted => RemoteStatus::ResourceExhausted,
        Code::FailedPrecondition => RemoteStatus::FailedPrecondition,
        Code::Aborted => RemoteStatus::Aborted,
        Code::OutOfRange => RemoteStatus::OutOfRange,
        Code::Unimplemented => RemoteStatus::Unimplemented,
        Code::Internal => RemoteStatus::Internal,
        Code::Unavailable => RemoteStatus::Unavailable,
        Code::DataLoss => RemoteStatus::DataLoss,
        Code::Unauthenticated => RemoteStatus::Unauthenticated,
        // `Unknown`, and `Ok`, which never reaches an error path.
        _ => RemoteStatus::Unknown,
    }
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// An open channel to one geometry server endpoint.
///
/// Owned by the caller. Adapters and probes share it read-only and never
/// close it.
#[async_trait]
pub trait Connection: Send + Sync + std::fmt::Debug {
    /// Issues one unary call.
    ///
    /// `method` is the full gRPC path (`/package.Service/Method`). `timeout`
    /// overrides the connection's default deadline for this call only.
    async fn unary(
        &self,
        method: &'static str,
        request: Bytes,
        timeout: Option<Duration>,
    ) -> Result<Bytes, TransportError>;

    /// The endpoint this connection talks to, for diagnostics.
    fn endpoint(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Transport settings for a [`GrpcConnection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    /// Largest encoded message accepted or sent, in bytes.
    pub max_message_size: usize,
    /// Time allowed for the initial connect.
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
    /// Deadline attached to every call that does not set its own.
    #[serde(with = "optional_duration_secs")]
    pub request_timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// `http://host:port`. IPv6 literals are bracketed.
    pub fn uri(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("http://[{}]:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 50051,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: None,
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

mod optional_duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&d.as_secs_f64()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Option::<f64>::deserialize(d)?
            .map(|secs| Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom))
            .transpose()
    }
}

// ---------------------------------------------------------------------------
// tonic implementation
// ---------------------------------------------------------------------------

/// A [`Connection`] over a tonic [`Channel`].
#[derive(Debug, Clone)]
pub struct GrpcConnection {
    channel: Channel,
    endpoint: String,
    max_message_size: usize,
    request_timeout: Option<Duration>,
}

impl GrpcConnection {
    /// Opens a channel to `config.uri()`.
    ///
    /// # Errors
    ///
    /// [`TransportError::InvalidEndpoint`] for an unusable host/port and
    /// [`TransportError::Transport`] if the server cannot be reached within
    /// the connect timeout.
    #[tracing::instrument(level = "debug", skip(config), fields(uri = %config.uri()))]
    pub async fn connect(config: &ConnectionConfig) -> Result<Self, TransportError> {
        let uri = config.uri();
        let endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| TransportError::InvalidEndpoint {
                uri: uri.clone(),
                reason: e.to_string(),
            })?
            .connect_timeout(config.connect_timeout);

        debug!("opening gRPC channel");
        let channel = endpoint.connect().await?;
        info!(%uri, "connected to geometry server");

        Ok(Self::from_channel(channel, uri, config))
    }

    /// Wraps a channel the caller already opened.
    pub fn from_channel(
        channel: Channel,
        endpoint: impl Into<String>,
        config: &ConnectionConfig,
    ) -> Self {
        Self {
            channel,
            endpoint: endpoint.into(),
            max_message_size: config.max_message_size,
            request_timeout: config.request_timeout,
        }
    }
}

#[async_trait]
impl Connection for GrpcConnection {
    async fn unary(
        &self,
        method: &'static str,
        request: Bytes,
        timeout: Option<Duration>,
    ) -> Result<Bytes, TransportError> {
        let mut grpc = tonic::client::Grpc::new(self.channel.clone())
            .max_decoding_message_size(self.max_message_size)
            .max_encoding_message_size(self.max_message_size);
        grpc.ready().await?;

        let mut request = tonic::Request::new(request);
        if let Some(deadline) = timeout.or(self.request_timeout) {
            request.set_timeout(deadline);
        }

        let response = grpc
            .unary(request, PathAndQuery::from_static(method), RawCodec)
            .await?;
        Ok(response.into_inner())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthCheckResponse;
    use prost::Message;

    #[test]
    fn default_config_targets_local_server() {
        let config = ConnectionConfig::default();
        assert_eq!(config.uri(), "http://localhost:50051");
        assert_eq!(config.max_message_size, 256 * 1024 * 1024);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        let config = ConnectionConfig {
            host: "::1".to_string(),
            port: 7000,
            ..ConnectionConfig::default()
        };
        assert_eq!(config.uri(), "http://[::1]:7000");
    }

    #[test]
    fn status_codes_map_onto_domain_statuses() {
        let err = TransportError::Status(tonic::Status::not_found("no such body"));
        assert_eq!(err.status(), RemoteStatus::NotFound);
        assert_eq!(err.detail(), "no such body");

        let err = TransportError::Timeout(Duration::from_secs(1));
        assert_eq!(err.status(), RemoteStatus::DeadlineExceeded);

        let source = HealthCheckResponse::decode(&b"\xff"[..]).unwrap_err();
        let err = TransportError::Malformed {
            method: "/m",
            source,
        };
        assert_eq!(err.status(), RemoteStatus::DataLoss);
        assert!(err.detail().starts_with("/m: "));

        assert_eq!(
            remote_status(tonic::Code::Unavailable),
            RemoteStatus::Unavailable
        );
        assert_eq!(remote_status(tonic::Code::Ok), RemoteStatus::Unknown);
    }

    #[test]
    fn config_round_trips_through_json_seconds() {
        let json = r#"{"host":"cad01","connect_timeout":2.5,"request_timeout":30.0}"#;
        let config: ConnectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.host, "cad01");
        assert_eq!(config.port, 50051);
        assert_eq!(config.connect_timeout, Duration::from_millis(2500));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }
}
