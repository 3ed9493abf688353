//! `geometry.v1.DesignsService` and `geometry.v1.PartsService`.

use async_trait::async_trait;
use geometry::entities::DesignInfo;
use geometry::services::{DesignService, ExportFormat, PartService};
use geometry::{DesignId, RemoteStatus, ServiceError, ServiceResult};

use super::conversions::{design_from, ensure_success, entity, export_format};
use super::messages as pb;
use crate::call::{call, Rpc};

const NEW: Rpc = Rpc::new("designs.new_design", "/geometry.v1.DesignsService/New");
const OPEN: Rpc = Rpc::new("designs.open", "/geometry.v1.DesignsService/Open");
const CLOSE: Rpc = Rpc::new("designs.close", "/geometry.v1.DesignsService/Close");
const GET_ACTIVE: Rpc = Rpc::new(
    "designs.get_active",
    "/geometry.v1.DesignsService/GetActive",
);
const SAVE_AS: Rpc = Rpc::new("designs.save_as", "/geometry.v1.DesignsService/SaveAs");
const DOWNLOAD_EXPORT: Rpc = Rpc::new(
    "designs.download_export",
    "/geometry.v1.DesignsService/DownloadExportFile",
);
const INSERT: Rpc = Rpc::new("designs.insert", "/geometry.v1.DesignsService/Insert");
const PART_EXPORT: Rpc = Rpc::new("parts.export", "/geometry.v1.PartsService/Export");

adapter! {
    /// Document operations on a v1 server.
    DesignsV1, V1
}

adapter! {
    PartsV1, V1
}

fn filepath(path: &str) -> pb::FilePathRequest {
    pb::FilePathRequest {
        filepath: path.to_string(),
    }
}

#[async_trait]
impl DesignService for DesignsV1 {
    async fn new_design(&self, name: &str) -> ServiceResult<DesignInfo> {
        let request = pb::NameRequest {
            name: name.to_string(),
        };
        let design = call(&*self.connection, NEW, &request).await?;
        design_from(design, NEW)
    }

    async fn open(&self, server_path: &str) -> ServiceResult<DesignInfo> {
        let design = call(&*self.connection, OPEN, &filepath(server_path)).await?;
        design_from(design, OPEN)
    }

    async fn close(&self, design: &DesignId) -> ServiceResult<()> {
        let r = call(&*self.connection, CLOSE, &entity(design.as_str())).await?;
        ensure_success(r, CLOSE)
    }

    /// v1 servers answer `NOT_FOUND` when no design is open.
    async fn get_active(&self) -> ServiceResult<Option<DesignInfo>> {
        match call(&*self.connection, GET_ACTIVE, &pb::Empty {}).await {
            Ok(design) => design_from(design, GET_ACTIVE).map(Some),
            Err(err) if err.remote_status() == Some(RemoteStatus::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn save_as(&self, server_path: &str) -> ServiceResult<()> {
        let r = call(&*self.connection, SAVE_AS, &filepath(server_path)).await?;
        ensure_success(r, SAVE_AS)
    }

    async fn download_export(&self, format: ExportFormat) -> ServiceResult<Vec<u8>> {
        let request = pb::ExportRequest {
            format: export_format(format),
        };
        let r: pb::ExportResponse = call(&*self.connection, DOWNLOAD_EXPORT, &request).await?;
        if r.data.is_empty() {
            return Err(ServiceError::malformed(DOWNLOAD_EXPORT.operation, "empty export payload"));
        }
        Ok(r.data)
    }

    async fn insert(&self, server_path: &str) -> ServiceResult<()> {
        let r = call(&*self.connection, INSERT, &filepath(server_path)).await?;
        ensure_success(r, INSERT)
    }
}

#[async_trait]
impl PartService for PartsV1 {
    async fn export(&self, format: ExportFormat) -> ServiceResult<Vec<u8>> {
        let request = pb::ExportRequest {
            format: export_format(format),
        };
        let r: pb::ExportResponse = call(&*self.connection, PART_EXPORT, &request).await?;
        Ok(r.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use std::sync::Arc;

    fn design(id: &str) -> pb::Design {
        pb::Design {
            id: Some(entity(id)),
            name: "bracket".to_string(),
            main_part_id: Some(entity("root")),
        }
    }

    #[tokio::test]
    async fn open_returns_the_design_in_one_call() {
        let conn = Arc::new(ScriptedConnection::new());
        let designs = DesignsV1::new(conn.clone());
        conn.respond(OPEN.path, &design("d-1"));
        let info = designs.open("/data/bracket.scdocx").await.unwrap();
        assert_eq!(info.id.as_str(), "d-1");
        assert_eq!(conn.methods(), vec![OPEN.path]);
    }

    #[tokio::test]
    async fn not_found_means_no_active_design() {
        let conn = Arc::new(ScriptedConnection::new());
        let designs = DesignsV1::new(conn.clone());
        conn.fail(GET_ACTIVE.path, tonic::Code::NotFound, "no active design");
        assert_eq!(designs.get_active().await.unwrap(), None);

        conn.fail(GET_ACTIVE.path, tonic::Code::Internal, "boom");
        let err = designs.get_active().await.unwrap_err();
        assert_eq!(err.remote_status(), Some(RemoteStatus::Internal));
    }

    #[tokio::test]
    async fn export_formats_are_named() {
        let conn = Arc::new(ScriptedConnection::new());
        let parts = PartsV1::new(conn.clone());
        conn.respond(
            PART_EXPORT.path,
            &pb::ExportResponse {
                data: vec![1, 2, 3],
            },
        );
        assert_eq!(
            parts.export(ExportFormat::Iges).await.unwrap(),
            vec![1, 2, 3]
        );
        let sent: pb::ExportRequest = conn.last_request(PART_EXPORT.path).unwrap();
        assert_eq!(sent.format, "PARTEXPORTFORMAT_IGES");
    }

    #[tokio::test]
    async fn refused_save_is_operation_failed() {
        let conn = Arc::new(ScriptedConnection::new());
        let designs = DesignsV1::new(conn.clone());
        conn.respond(
            SAVE_AS.path,
            &pb::CommandResponse {
                success: false,
                message: "read-only location".to_string(),
            },
        );
        let err = designs.save_as("/ro/out.scdocx").await.unwrap_err();
        assert!(matches!(err, ServiceError::OperationFailed { .. }));
    }
}
