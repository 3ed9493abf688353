//! `geometry.v1.MaterialsService`.

use async_trait::async_trait;
use geometry::services::{Material, MaterialService};
use geometry::{MaterialName, ServiceResult};

use super::conversions::ensure_success;
use super::messages as pb;
use crate::call::{call, Rpc};

const ADD_TO_DOCUMENT: Rpc = Rpc::new(
    "materials.add_material",
    "/geometry.v1.MaterialsService/AddToDocument",
);
const REMOVE_FROM_DOCUMENT: Rpc = Rpc::new(
    "materials.remove_material",
    "/geometry.v1.MaterialsService/RemoveFromDocument",
);

adapter! {
    MaterialsV1, V1
}

#[async_trait]
impl MaterialService for MaterialsV1 {
    async fn add_material(&self, material: &Material) -> ServiceResult<()> {
        let request = pb::AddMaterialRequest {
            material: Some(pb::Material {
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
            }),
        };
        let r = call(&*self.connection, ADD_TO_DOCUMENT, &request).await?;
        ensure_success(r, ADD_TO_DOCUMENT)
    }

    async fn remove_material(&self, name: &MaterialName) -> ServiceResult<()> {
        let request = pb::RemoveMaterialRequest {
            names: vec![name.as_str().to_string()],
        };
        let r = call(&*self.connection, REMOVE_FROM_DOCUMENT, &request).await?;
        ensure_success(r, REMOVE_FROM_DOCUMENT)
    }
}
