//! Standard gRPC health checking (`grpc.health.v1.Health/Check`).
//!
//! Used to wait for a freshly started server before negotiating a protocol
//! version. It says nothing about which geometry protocol the server speaks.

use std::time::Duration;

use bytes::Bytes;
use prost::Message;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::connection::{Connection, TransportError};

pub const HEALTH_CHECK: &str = "/grpc.health.v1.Health/Check";

const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckRequest {
    /// Empty asks about the server as a whole.
    #[prost(string, tag = "1")]
    pub service: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckResponse {
    #[prost(enumeration = "ServingStatus", tag = "1")]
    pub status: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ServingStatus {
    Unknown = 0,
    Serving = 1,
    NotServing = 2,
    ServiceUnknown = 3,
}

/// Asks the server for its overall serving status once.
///
/// # Errors
///
/// The call's [`TransportError`], [`TransportError::Timeout`] when no answer
/// arrives within `timeout`, or [`TransportError::Malformed`] when the answer
/// is not a health response.
pub async fn check_health(
    connection: &dyn Connection,
    timeout: Duration,
) -> Result<ServingStatus, TransportError> {
    let request = HealthCheckRequest::default();
    let call = connection.unary(
        HEALTH_CHECK,
        Bytes::from(request.encode_to_vec()),
        Some(timeout),
    );
    let bytes = tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| TransportError::Timeout(timeout))??;
    let response =
        HealthCheckResponse::decode(bytes).map_err(|source| TransportError::Malformed {
            method: HEALTH_CHECK,
            source,
        })?;
    Ok(ServingStatus::try_from(response.status).unwrap_or(ServingStatus::Unknown))
}

/// Polls [`check_health`] until the server reports `SERVING`.
///
/// A server that does not implement the health service (`UNIMPLEMENTED`) is
/// reachable and counts as ready.
///
/// # Errors
///
/// [`TransportError::Timeout`] if the server is not ready within `timeout`.
#[tracing::instrument(
    level = "debug",
    skip(connection),
    fields(endpoint = connection.endpoint())
)]
pub async fn wait_until_healthy(
    connection: &dyn Connection,
    timeout: Duration,
) -> Result<(), TransportError> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            warn!(?timeout, "server did not become healthy in time");
            return Err(TransportError::Timeout(timeout));
        }

        match check_health(connection, remaining).await {
            Ok(ServingStatus::Serving) => {
                info!("server is serving");
                return Ok(());
            }
            Ok(status) => debug!(?status, "server not serving yet"),
            Err(TransportError::Status(status)) if status.code() == tonic::Code::Unimplemented => {
                debug!("server has no health service; treating it as ready");
                return Ok(());
            }
            Err(err) => debug!(error = %err, "health check failed"),
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        tokio::time::sleep(POLL_INTERVAL.min(remaining)).await;
    }
}
