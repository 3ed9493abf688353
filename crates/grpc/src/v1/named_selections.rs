//! `geometry.v1.NamedSelectionsService`.

use async_trait::async_trait;
use geometry::entities::{NamedSelectionInfo, SelectionMembers};
use geometry::services::NamedSelectionService;
use geometry::{NamedSelectionId, ServiceResult};

use super::conversions::{ensure_success, entity, named_selection_from, selection_members};
use super::messages as pb;
use crate::call::{call, Rpc};

const GET: Rpc = Rpc::new(
    "named_selections.get",
    "/geometry.v1.NamedSelectionsService/Get",
);
const CREATE: Rpc = Rpc::new(
    "named_selections.create",
    "/geometry.v1.NamedSelectionsService/Create",
);
const DELETE: Rpc = Rpc::new(
    "named_selections.delete",
    "/geometry.v1.NamedSelectionsService/Delete",
);
const DELETE_BY_NAME: Rpc = Rpc::new(
    "named_selections.delete_by_name",
    "/geometry.v1.NamedSelectionsService/DeleteByName",
);

adapter! {
    NamedSelectionsV1, V1
}

#[async_trait]
impl NamedSelectionService for NamedSelectionsV1 {
    async fn get(&self, selection: &NamedSelectionId) -> ServiceResult<NamedSelectionInfo> {
        let r = call(&*self.connection, GET, &entity(selection.as_str())).await?;
        named_selection_from(r, GET)
    }

    async fn create(
        &self,
        name: &str,
        members: &SelectionMembers,
    ) -> ServiceResult<NamedSelectionInfo> {
        let request = pb::CreateNamedSelectionRequest {
            name: name.to_string(),
            members: Some(selection_members(members)),
        };
        let r = call(&*self.connection, CREATE, &request).await?;
        named_selection_from(r, CREATE)
    }

    async fn delete(&self, selection: &NamedSelectionId) -> ServiceResult<()> {
        let r = call(&*self.connection, DELETE, &entity(selection.as_str())).await?;
        ensure_success(r, DELETE)
    }

    async fn delete_by_name(&self, name: &str) -> ServiceResult<()> {
        let request = pb::NameRequest {
            name: name.to_string(),
        };
        let r = call(&*self.connection, DELETE_BY_NAME, &request).await?;
        ensure_success(r, DELETE_BY_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::{BodyId, EdgeId};
    use std::sync::Arc;

    #[tokio::test]
    async fn members_travel_grouped_by_kind() {
        let conn = Arc::new(ScriptedConnection::new());
        let selections = NamedSelectionsV1::new(conn.clone());
        let members = SelectionMembers {
            bodies: vec![BodyId::new("b-1").unwrap()],
            edges: vec![EdgeId::new("e-1").unwrap()],
            ..SelectionMembers::default()
        };
        conn.respond(
            CREATE.path,
            &pb::NamedSelection {
                id: Some(entity("ns-1")),
                name: "rim".to_string(),
                members: Some(selection_members(&members)),
            },
        );
        let info = selections.create("rim", &members).await.unwrap();
        assert_eq!(info.members, members);
        let sent: pb::CreateNamedSelectionRequest = conn.last_request(CREATE.path).unwrap();
        let sent = sent.members.unwrap();
        assert_eq!(sent.edges, vec![entity("e-1")]);
        assert!(sent.faces.is_empty());
    }

    #[tokio::test]
    async fn delete_by_name_is_a_real_call() {
        let conn = Arc::new(ScriptedConnection::new());
        let selections = NamedSelectionsV1::new(conn.clone());
        conn.respond(
            DELETE_BY_NAME.path,
            &pb::CommandResponse {
                success: true,
                message: String::new(),
            },
        );
        selections.delete_by_name("rim").await.unwrap();
        let sent: pb::NameRequest = conn.last_request(DELETE_BY_NAME.path).unwrap();
        assert_eq!(sent.name, "rim");
    }
}
