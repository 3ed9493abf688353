//! `geometry.v0.NamedSelections`.

use async_trait::async_trait;
use geometry::entities::{NamedSelectionInfo, SelectionMembers};
use geometry::services::NamedSelectionService;
use geometry::{NamedSelectionId, ProtocolVersion, ServiceError, ServiceKind, ServiceResult};

use super::conversions::{named_selection_from, selection_members};
use super::messages as pb;
use crate::call::{call, Rpc};

const GET: Rpc = Rpc::new("named_selections.get", "/geometry.v0.NamedSelections/Get");
const CREATE: Rpc = Rpc::new(
    "named_selections.create",
    "/geometry.v0.NamedSelections/Create",
);
const DELETE: Rpc = Rpc::new(
    "named_selections.delete",
    "/geometry.v0.NamedSelections/Delete",
);

adapter! {
    NamedSelectionsV0, V0
}

fn entity(selection: &NamedSelectionId) -> pb::EntityIdentifier {
    pb::EntityIdentifier {
        id: selection.as_str().to_string(),
    }
}

#[async_trait]
impl NamedSelectionService for NamedSelectionsV0 {
    async fn get(&self, selection: &NamedSelectionId) -> ServiceResult<NamedSelectionInfo> {
        let r = call(&*self.connection, GET, &entity(selection)).await?;
        named_selection_from(r, GET)
    }

    async fn create(
        &self,
        name: &str,
        members: &SelectionMembers,
    ) -> ServiceResult<NamedSelectionInfo> {
        let request = pb::CreateNamedSelectionRequest {
            name: name.to_string(),
            members: selection_members(members),
        };
        let r = call(&*self.connection, CREATE, &request).await?;
        named_selection_from(r, CREATE)
    }

    async fn delete(&self, selection: &NamedSelectionId) -> ServiceResult<()> {
        let _: pb::Empty = call(&*self.connection, DELETE, &entity(selection)).await?;
        Ok(())
    }

    async fn delete_by_name(&self, _name: &str) -> ServiceResult<()> {
        Err(ServiceError::not_implemented(
            ServiceKind::NamedSelections,
            "delete_by_name",
            ProtocolVersion::V0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::{BodyId, FaceId};
    use std::sync::Arc;

    #[tokio::test]
    async fn members_are_sent_flat_and_returned_grouped() {
        let conn = Arc::new(ScriptedConnection::new());
        let selections = NamedSelectionsV0::new(conn.clone());
        conn.respond(
            CREATE.path,
            &pb::NamedSelection {
                id: "ns-1".to_string(),
                name: "holes".to_string(),
                bodies: vec!["b-1".to_string()],
                faces: vec!["f-1".to_string(), "f-2".to_string()],
                ..Default::default()
            },
        );
        let members = SelectionMembers {
            bodies: vec![BodyId::new("b-1").unwrap()],
            faces: vec![FaceId::new("f-1").unwrap(), FaceId::new("f-2").unwrap()],
            ..SelectionMembers::default()
        };
        let info = selections.create("holes", &members).await.unwrap();
        assert_eq!(info.members, members);

        let sent: pb::CreateNamedSelectionRequest = conn.last_request(CREATE.path).unwrap();
        assert_eq!(sent.members, vec!["b-1", "f-1", "f-2"]);
    }

    #[tokio::test]
    async fn delete_by_name_is_absent() {
        let conn = Arc::new(ScriptedConnection::new());
        let selections = NamedSelectionsV0::new(conn.clone());
        let err = selections.delete_by_name("holes").await.unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(conn.call_count(), 0);
    }
}
