//! `geometry.v0.Materials`.

use async_trait::async_trait;
use geometry::services::{Material, MaterialService};
use geometry::{MaterialName, ProtocolVersion, ServiceError, ServiceKind, ServiceResult};

use super::messages as pb;
use crate::call::{call, Rpc};

const ADD_TO_DOCUMENT: Rpc = Rpc::new(
    "materials.add_material",
    "/geometry.v0.Materials/AddToDocument",
);

adapter! {
    MaterialsV0, V0
}

#[async_trait]
impl MaterialService for MaterialsV0 {
    async fn add_material(&self, material: &Material) -> ServiceResult<()> {
        let request = pb::AddMaterialRequest {
            name: material.name.as_str().to_string(),
            properties: material
                .properties
                .iter()
                .map(|p| pb::MaterialProperty {
                    id: p.id.clone(),
                    display_name: p.display_name.clone(),
                    value: p.value,
                    units: p.units.clone(),
                })
                .collect(),
        };
        let _: pb::Empty = call(&*self.connection, ADD_TO_DOCUMENT, &request).await?;
        Ok(())
    }

    async fn remove_material(&self, _name: &MaterialName) -> ServiceResult<()> {
        Err(ServiceError::not_implemented(
            ServiceKind::Materials,
            "remove_material",
            ProtocolVersion::V0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::services::MaterialProperty;
    use std::sync::Arc;

    #[tokio::test]
    async fn add_sends_properties_and_remove_is_absent() {
        let conn = Arc::new(ScriptedConnection::new());
        let materials = MaterialsV0::new(conn.clone());
        conn.respond(ADD_TO_DOCUMENT.path, &pb::Empty {});
        let steel = Material {
            name: MaterialName::new("steel").unwrap(),
            properties: vec![MaterialProperty {
                id: "density".to_string(),
                display_name: "Density".to_string(),
                value: 7850.0,
                units: "kg m^-3".to_string(),
            }],
        };
        materials.add_material(&steel).await.unwrap();
        let sent: pb::AddMaterialRequest = conn.last_request(ADD_TO_DOCUMENT.path).unwrap();
        assert_eq!(sent.name, "steel");
        assert_eq!(sent.properties[0].value, 7850.0);

        let err = materials.remove_material(&steel.name).await.unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(conn.call_count(), 1);
    }
}
