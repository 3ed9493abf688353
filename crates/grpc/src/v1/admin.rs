//! `geometry.v1.AdminService`.

use async_trait::async_trait;
use geometry::services::{AdminService, BackendInfo, LogFile, ServerVersion};
use geometry::ServiceResult;

use super::conversions::backend_type;
use super::messages as pb;
use crate::call::{call, required, Rpc};

/// Also the v1 capability probe.
pub const GET_SERVICE_STATUS: Rpc = Rpc::new(
    "admin.get_service_status",
    "/geometry.v1.AdminService/GetServiceStatus",
);
const GET_BACKEND: Rpc = Rpc::new("admin.get_backend", "/geometry.v1.AdminService/GetBackend");
const GET_LOGS: Rpc = Rpc::new("admin.get_logs", "/geometry.v1.AdminService/GetLogs");

adapter! {
    /// Administrative calls on a v1 server.
    AdminV1, V1
}

#[async_trait]
impl AdminService for AdminV1 {
    async fn get_backend(&self) -> ServiceResult<BackendInfo> {
        let r: pb::BackendResponse = call(&*self.connection, GET_BACKEND, &pb::Empty {}).await?;
        let version = required(r.version, GET_BACKEND, "version")?;
        Ok(BackendInfo {
            backend_type: backend_type(&r.backend_type),
            version: ServerVersion {
                major: version.major,
                minor: version.minor,
                service_pack: version.service_pack,
            },
            api_build: r.api_server_build_info,
            product_build: r.product_build_info,
        })
    }

    async fn get_service_status(&self) -> ServiceResult<bool> {
        let r: pb::ServiceStatusResponse =
            call(&*self.connection, GET_SERVICE_STATUS, &pb::Empty {}).await?;
        Ok(r.healthy)
    }

    /// v1 servers send each log file whole, already decoded.
    async fn get_logs(&self, all_logs: bool) -> ServiceResult<Vec<LogFile>> {
        let r: pb::LogsResponse =
            call(&*self.connection, GET_LOGS, &pb::LogsRequest { all_logs }).await?;
        Ok(r.logs
            .into_iter()
            .map(|log| LogFile {
                name: log.name,
                contents: log.content,
            })
            .collect())
    }
}
