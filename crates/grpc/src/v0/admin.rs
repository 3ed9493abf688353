//! `geometry.v0.Admin`.

use async_trait::async_trait;
use geometry::services::{AdminService, BackendInfo, LogFile, ServerVersion};
use geometry::ServiceResult;

use super::conversions::backend_type;
use super::messages as pb;
use crate::call::{call, Rpc};

/// Also the v0 capability probe.
pub const HEALTH: Rpc = Rpc::new("admin.get_service_status", "/geometry.v0.Admin/Health");
const GET_BACKEND: Rpc = Rpc::new("admin.get_backend", "/geometry.v0.Admin/GetBackend");
const GET_LOGS: Rpc = Rpc::new("admin.get_logs", "/geometry.v0.Admin/GetLogs");

adapter! {
    /// Administrative calls on a v0 server.
    AdminV0, V0
}

#[async_trait]
impl AdminService for AdminV0 {
    async fn get_backend(&self) -> ServiceResult<BackendInfo> {
        let r: pb::BackendInfoResponse = call(&*self.connection, GET_BACKEND, &pb::Empty {}).await?;
        Ok(BackendInfo {
            backend_type: backend_type(r.backend_type),
            version: ServerVersion {
                major: r.major_release,
                minor: r.minor_release,
                service_pack: r.service_pack,
            },
            api_build: r.api_server_build_info,
            product_build: r.product_build_info,
        })
    }

    /// v0 health carries no status flag; an answer means healthy.
    async fn get_service_status(&self) -> ServiceResult<bool> {
        let _: pb::HealthResponse = call(&*self.connection, HEALTH, &pb::Empty {}).await?;
        Ok(true)
    }

    async fn get_logs(&self, all_logs: bool) -> ServiceResult<Vec<LogFile>> {
        let r: pb::LogsResponse =
            call(&*self.connection, GET_LOGS, &pb::LogsRequest { all_logs }).await?;

        // Reassemble chunks per file, keeping first-seen file order.
        let mut files: Vec<(String, Vec<u8>)> = Vec::new();
        for chunk in r.chunks {
            match files.iter_mut().find(|(name, _)| *name == chunk.log_name) {
                Some((_, data)) => data.extend_from_slice(&chunk.log_chunk),
                None => files.push((chunk.log_name, chunk.log_chunk)),
            }
        }
        Ok(files
            .into_iter()
            .map(|(name, data)| LogFile {
                name,
                contents: String::from_utf8_lossy(&data).into_owned(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::services::BackendType;
    use geometry::{RemoteStatus, ServiceAdapter, ServiceError};
    use std::sync::Arc;

    fn adapter() -> (Arc<ScriptedConnection>, AdminV0) {
        let conn = Arc::new(ScriptedConnection::new());
        (conn.clone(), AdminV0::new(conn))
    }

    #[tokio::test]
    async fn backend_codes_are_decoded() {
        let (conn, admin) = adapter();
        conn.respond(
            GET_BACKEND.path,
            &pb::BackendInfoResponse {
                backend_type: 3,
                major_release: 24,
                minor_release: 2,
                service_pack: 1,
                api_server_build_info: "api-77".to_string(),
                product_build_info: "prod-12".to_string(),
            },
        );
        let info = admin.get_backend().await.unwrap();
        assert_eq!(info.backend_type, BackendType::LinuxService);
        assert_eq!(info.version.to_string(), "24.2.1");
        assert_eq!(info.api_build, "api-77");
        assert_eq!(admin.protocol_version(), geometry::ProtocolVersion::V0);
    }

    #[tokio::test]
    async fn log_chunks_are_joined_per_file() {
        let (conn, admin) = adapter();
        let chunk = |name: &str, data: &str| pb::LogChunk {
            log_name: name.to_string(),
            log_chunk: data.as_bytes().to_vec(),
        };
        conn.respond(
            GET_LOGS.path,
            &pb::LogsResponse {
                chunks: vec![
                    chunk("a.log", "one "),
                    chunk("b.log", "x"),
                    chunk("a.log", "two"),
                ],
            },
        );
        let logs = admin.get_logs(true).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].name, "a.log");
        assert_eq!(logs[0].contents, "one two");
        assert_eq!(
            conn.last_request::<pb::LogsRequest>(GET_LOGS.path),
            Some(pb::LogsRequest { all_logs: true })
        );
    }

    #[tokio::test]
    async fn status_errors_become_remote_operation_errors() {
        let (conn, admin) = adapter();
        conn.fail(
            GET_BACKEND.path,
            tonic::Code::Unavailable,
            "server restarting",
        );
        let err = admin.get_backend().await.unwrap_err();
        assert_eq!(err.remote_status(), Some(RemoteStatus::Unavailable));
        match err {
            ServiceError::Remote(remote) => {
                assert_eq!(remote.operation, "admin.get_backend");
                assert_eq!(remote.message, "server restarting");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
