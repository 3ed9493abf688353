//! Capability probe: does the server answer a version's health call?

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use geometry::{CapabilityProbe, ProtocolVersion};
use prost::Message;
use tracing::debug;

use crate::connection::{Connection, TransportError};
use crate::{v0, v1};

/// Probes each protocol version through that version's own administrative
/// health call.
///
/// - v0: `Admin/Health`; healthy iff a decodable response arrives.
/// - v1: `AdminService/GetServiceStatus`; healthy iff it decodes and reports
///   `healthy`.
///
/// Every failure (status, transport, decode, timeout) means "not supported".
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthProbe;

async fn exchange<Req, Resp>(
    connection: &dyn Connection,
    path: &'static str,
    request: &Req,
    timeout: Duration,
) -> Result<Resp, TransportError>
where
    Req: Message,
    Resp: Message + Default,
{
    let call = connection.unary(path, Bytes::from(request.encode_to_vec()), Some(timeout));
    let bytes = tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| TransportError::Timeout(timeout))??;
    Resp::decode(bytes).map_err(|source| TransportError::Malformed {
        method: path,
        source,
    })
}

#[async_trait]
impl CapabilityProbe<dyn Connection> for HealthProbe {
    async fn probe(
        &self,
        connection: &(dyn Connection + 'static),
        version: ProtocolVersion,
        timeout: Duration,
    ) -> bool {
        let outcome = match version {
            ProtocolVersion::V0 => exchange::<_, v0::messages::HealthResponse>(
                connection,
                v0::admin::HEALTH.path,
                &v0::messages::Empty {},
                timeout,
            )
            .await
            .map(|_| true),
            ProtocolVersion::V1 => exchange::<_, v1::messages::ServiceStatusResponse>(
                connection,
                v1::admin::GET_SERVICE_STATUS.path,
                &v1::messages::Empty {},
                timeout,
            )
            .await
            .map(|status| status.healthy),
        };

        match outcome {
            Ok(healthy) => {
                debug!(%version, healthy, "probe answered");
                healthy
            }
            Err(reason) => {
                debug!(%version, %reason, "probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::negotiation::resolve;
    use geometry::{NegotiationError, VersionRequest};
    use std::sync::Arc;

    const T: Duration = Duration::from_millis(200);

    fn v0_healthy(conn: &ScriptedConnection) {
        conn.respond(
            v0::admin::HEALTH.path,
            &v0::messages::HealthResponse {
                message: "ok".to_string(),
            },
        );
    }

    fn v1_status(conn: &ScriptedConnection, healthy: bool) {
        conn.respond(
            v1::admin::GET_SERVICE_STATUS.path,
            &v1::messages::ServiceStatusResponse { healthy },
        );
    }

    #[tokio::test]
    async fn v0_is_healthy_when_health_answers() {
        let conn = ScriptedConnection::new();
        v0_healthy(&conn);
        assert!(HealthProbe.probe(&conn, ProtocolVersion::V0, T).await);
        assert_eq!(conn.calls()[0].timeout, Some(T));
    }

    #[tokio::test]
    async fn v1_requires_healthy_flag() {
        let conn = ScriptedConnection::new();
        v1_status(&conn, false);
        assert!(!HealthProbe.probe(&conn, ProtocolVersion::V1, T).await);
        v1_status(&conn, true);
        assert!(HealthProbe.probe(&conn, ProtocolVersion::V1, T).await);
    }

    #[tokio::test]
    async fn failures_are_swallowed() {
        let conn = ScriptedConnection::new();
        conn.fail(v0::admin::HEALTH.path, tonic::Code::Unavailable, "down");
        assert!(!HealthProbe.probe(&conn, ProtocolVersion::V0, T).await);

        // Field 1 as a length-delimited string is not a bool.
        conn.respond_raw(v1::admin::GET_SERVICE_STATUS.path, b"\x0a\x02ok");
        assert!(!HealthProbe.probe(&conn, ProtocolVersion::V1, T).await);
    }

    #[tokio::test]
    async fn hung_probe_times_out() {
        let conn = ScriptedConnection::new();
        conn.hang(v1::admin::GET_SERVICE_STATUS.path);
        let started = tokio::time::Instant::now();
        assert!(!HealthProbe.probe(&conn, ProtocolVersion::V1, T).await);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn v0_only_server_negotiates_down() {
        let conn = ScriptedConnection::new();
        v0_healthy(&conn);
        let conn: Arc<dyn Connection> = Arc::new(conn);
        let version = resolve(&HealthProbe, &*conn, VersionRequest::Auto, T)
            .await
            .unwrap();
        assert_eq!(version, ProtocolVersion::V0);

        let err = resolve(
            &HealthProbe,
            &*conn,
            VersionRequest::Exact(ProtocolVersion::V1),
            T,
        )
        .await
        .unwrap_err();
        assert_eq!(
            err,
            NegotiationError::UnsupportedRequestedVersion {
                version: ProtocolVersion::V1
            }
        );
    }
}
