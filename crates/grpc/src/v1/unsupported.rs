//! `geometry.v1.UnsupportedService`.

use async_trait::async_trait;
use geometry::services::{ExportIdEntry, ImportIdMapping, ImportIdType, UnsupportedService};
use geometry::ServiceResult;

use super::conversions::{ensure_success, import_id_type};
use super::messages as pb;
use crate::call::{call, Rpc};

const GET_IMPORT_ID_MAP: Rpc = Rpc::new(
    "unsupported.get_import_id_map",
    "/geometry.v1.UnsupportedService/GetImportIdMap",
);
const SET_EXPORT_IDS: Rpc = Rpc::new(
    "unsupported.set_export_ids",
    "/geometry.v1.UnsupportedService/SetExportIds",
);

adapter! {
    UnsupportedV1, V1
}

#[async_trait]
impl UnsupportedService for UnsupportedV1 {
    /// Entries keep the server's order.
    async fn get_import_id_map(
        &self,
        id_type: ImportIdType,
    ) -> ServiceResult<Vec<ImportIdMapping>> {
        let request = pb::ImportIdRequest {
            id_type: import_id_type(id_type),
        };
        let r: pb::ImportIdResponse = call(&*self.connection, GET_IMPORT_ID_MAP, &request).await?;
        Ok(r.id_map
            .into_iter()
            .map(|e| ImportIdMapping {
                import_id: e.import_id,
                moniker: e.moniker,
            })
            .collect())
    }

    async fn set_export_ids(&self, entries: &[ExportIdEntry]) -> ServiceResult<()> {
        let request = pb::SetExportIdsRequest {
            export_data: entries
                .iter()
                .map(|e| pb::ExportIdData {
                    moniker: e.moniker.clone(),
                    id_type: import_id_type(e.id_type),
                    value: e.value.clone(),
                })
                .collect(),
        };
        let r = call(&*self.connection, SET_EXPORT_IDS, &request).await?;
        ensure_success(r, SET_EXPORT_IDS)
    }
}
