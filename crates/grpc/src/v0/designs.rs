//! `geometry.v0.Designs` and `geometry.v0.Parts`.

use async_trait::async_trait;
use geometry::entities::DesignInfo;
use geometry::services::{DesignService, ExportFormat, PartService};
use geometry::{DesignId, ServiceError, ServiceResult};

use super::conversions::{design_from, export_format};
use super::messages as pb;
use crate::call::{call, Rpc};

const NEW: Rpc = Rpc::new("designs.new_design", "/geometry.v0.Designs/New");
const OPEN: Rpc = Rpc::new("designs.open", "/geometry.v0.Designs/Open");
const CLOSE: Rpc = Rpc::new("designs.close", "/geometry.v0.Designs/Close");
const GET_ACTIVE: Rpc = Rpc::new("designs.get_active", "/geometry.v0.Designs/GetActive");
const SAVE_AS: Rpc = Rpc::new("designs.save_as", "/geometry.v0.Designs/SaveAs");
const DOWNLOAD_EXPORT: Rpc = Rpc::new(
    "designs.download_export",
    "/geometry.v0.Designs/DownloadExportFile",
);
const INSERT: Rpc = Rpc::new("designs.insert", "/geometry.v0.Designs/Insert");
const PART_EXPORT: Rpc = Rpc::new("parts.export", "/geometry.v0.Parts/Export");

adapter! {
    /// Document operations on a v0 server.
    DesignsV0, V0
}

adapter! {
    /// Active-part export on a v0 server.
    PartsV0, V0
}

fn filepath(path: &str) -> pb::FilePathRequest {
    pb::FilePathRequest {
        filepath: path.to_string(),
    }
}

#[async_trait]
impl DesignService for DesignsV0 {
    async fn new_design(&self, name: &str) -> ServiceResult<DesignInfo> {
        let request = pb::NameRequest {
            name: name.to_string(),
        };
        let design = call(&*self.connection, NEW, &request).await?;
        design_from(design).ok_or_else(|| ServiceError::malformed(NEW.operation, "empty design id"))
    }

    /// Open does not return the design on this generation; it is read back
    /// with `GetActive`.
    async fn open(&self, server_path: &str) -> ServiceResult<DesignInfo> {
        let _: pb::Empty = call(&*self.connection, OPEN, &filepath(server_path)).await?;
        self.get_active()
            .await?
            .ok_or_else(|| ServiceError::malformed(OPEN.operation, "no active design after open"))
    }

    async fn close(&self, design: &DesignId) -> ServiceResult<()> {
        let request = pb::EntityIdentifier {
            id: design.as_str().to_string(),
        };
        let _: pb::Empty = call(&*self.connection, CLOSE, &request).await?;
        Ok(())
    }

    async fn get_active(&self) -> ServiceResult<Option<DesignInfo>> {
        let design = call(&*self.connection, GET_ACTIVE, &pb::Empty {}).await?;
        Ok(design_from(design))
    }

    async fn save_as(&self, server_path: &str) -> ServiceResult<()> {
        let _: pb::Empty = call(&*self.connection, SAVE_AS, &filepath(server_path)).await?;
        Ok(())
    }

    async fn download_export(&self, format: ExportFormat) -> ServiceResult<Vec<u8>> {
        let request = pb::ExportRequest {
            format: export_format(format),
        };
        let r: pb::ExportResponse = call(&*self.connection, DOWNLOAD_EXPORT, &request).await?;
        Ok(r.data)
    }

    async fn insert(&self, server_path: &str) -> ServiceResult<()> {
        let _: pb::Empty = call(&*self.connection, INSERT, &filepath(server_path)).await?;
        Ok(())
    }
}

#[async_trait]
impl PartService for PartsV0 {
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
            id: id.to_string(),
            name: "bracket".to_string(),
            main_part_id: "root".to_string(),
        }
    }

    #[tokio::test]
    async fn open_reads_back_the_active_design() {
        let conn = Arc::new(ScriptedConnection::new());
        let designs = DesignsV0::new(conn.clone());
        conn.respond(OPEN.path, &pb::Empty {});
        conn.respond(GET_ACTIVE.path, &design("d-9"));

        let info = designs.open("/data/bracket.scdocx").await.unwrap();
        assert_eq!(info.id.as_str(), "d-9");
        assert_eq!(info.main_part.as_ref().map(|c| c.as_str()), Some("root"));
        assert_eq!(conn.methods(), vec![OPEN.path, GET_ACTIVE.path]);
        let sent: pb::FilePathRequest = conn.last_request(OPEN.path).unwrap();
        assert_eq!(sent.filepath, "/data/bracket.scdocx");
    }

    #[tokio::test]
    async fn no_active_design_is_none() {
        let conn = Arc::new(ScriptedConnection::new());
        let designs = DesignsV0::new(conn.clone());
        conn.respond(GET_ACTIVE.path, &pb::Design::default());
        assert_eq!(designs.get_active().await.unwrap(), None);
    }

    #[tokio::test]
    async fn export_formats_are_numeric() {
        let conn = Arc::new(ScriptedConnection::new());
        let parts = PartsV0::new(conn.clone());
        conn.respond(
            PART_EXPORT.path,
            &pb::ExportResponse {
                data: b"ISO-10303-21;".to_vec(),
            },
        );
        let data = parts.export(ExportFormat::Step).await.unwrap();
        assert_eq!(data, b"ISO-10303-21;");
        let sent: pb::ExportRequest = conn.last_request(PART_EXPORT.path).unwrap();
        assert_eq!(sent.format, 4);
    }
}
