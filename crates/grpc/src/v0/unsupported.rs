//! `geometry.v0.Unsupported`: import and export id bookkeeping.

use async_trait::async_trait;
use geometry::services::{ExportIdEntry, ImportIdMapping, ImportIdType, UnsupportedService};
use geometry::ServiceResult;

use super::conversions::import_id_type;
use super::messages as pb;
use crate::call::{call, Rpc};

const GET_IMPORT_ID_MAP: Rpc = Rpc::new(
    "unsupported.get_import_id_map",
    "/geometry.v0.Unsupported/GetImportIdMap",
);
const SET_EXPORT_IDS: Rpc = Rpc::new(
    "unsupported.set_export_ids",
    "/geometry.v0.Unsupported/SetExportIds",
);

adapter! {
    UnsupportedV0, V0
}

#[async_trait]
impl UnsupportedService for UnsupportedV0 {
    async fn get_import_id_map(
        &self,
        id_type: ImportIdType,
    ) -> ServiceResult<Vec<ImportIdMapping>> {
        let request = pb::ImportIdRequest {
            id_type: import_id_type(id_type),
        };
        let r: pb::ImportIdResponse = call(&*self.connection, GET_IMPORT_ID_MAP, &request).await?;
        let mut mappings: Vec<_> = r
            .id_map
            .into_iter()
            .map(|(import_id, moniker)| ImportIdMapping { import_id, moniker })
            .collect();
        // Map iteration order is unspecified on the wire.
        mappings.sort_by(|a, b| a.import_id.cmp(&b.import_id));
        Ok(mappings)
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
        let _: pb::Empty = call(&*self.connection, SET_EXPORT_IDS, &request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[tokio::test]
    async fn import_map_is_sorted_by_import_id() {
        let conn = Arc::new(ScriptedConnection::new());
        let unsupported = UnsupportedV0::new(conn.clone());
        let id_map = HashMap::from([
            ("z-2".to_string(), "/m2".to_string()),
            ("a-1".to_string(), "/m1".to_string()),
        ]);
        conn.respond(GET_IMPORT_ID_MAP.path, &pb::ImportIdResponse { id_map });
        let mappings = unsupported
            .get_import_id_map(ImportIdType::Face)
            .await
            .unwrap();
        assert_eq!(mappings[0].import_id, "a-1");
        assert_eq!(mappings[1].moniker, "/m2");
        let sent: pb::ImportIdRequest = conn.last_request(GET_IMPORT_ID_MAP.path).unwrap();
        assert_eq!(sent.id_type, 2);
    }
}
