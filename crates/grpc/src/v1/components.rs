//! `geometry.v1.ComponentsService`.

use async_trait::async_trait;
use geometry::entities::ComponentInfo;
use geometry::services::{ComponentService, Placement, SharedTopology};
use geometry::{ComponentId, ServiceResult};

use super::conversions::{
    component_from, direction, ensure_success, entity, point, quantity, shared_topology,
};
use super::messages as pb;
use crate::call::{call, Rpc};

const CREATE: Rpc = Rpc::new("components.create", "/geometry.v1.ComponentsService/Create");
const SET_NAME: Rpc = Rpc::new(
    "components.set_name",
    "/geometry.v1.ComponentsService/SetName",
);
const SET_PLACEMENT: Rpc = Rpc::new(
    "components.set_placement",
    "/geometry.v1.ComponentsService/SetPlacement",
);
const SET_SHARED_TOPOLOGY: Rpc = Rpc::new(
    "components.set_shared_topology",
    "/geometry.v1.ComponentsService/SetSharedTopology",
);
const DELETE: Rpc = Rpc::new("components.delete", "/geometry.v1.ComponentsService/Delete");

adapter! {
    ComponentsV1, V1
}

fn id(component: &ComponentId) -> pb::EntityIdentifier {
    entity(component.as_str())
}

#[async_trait]
impl ComponentService for ComponentsV1 {
    async fn create(
        &self,
        name: &str,
        parent: &ComponentId,
        template: Option<&ComponentId>,
    ) -> ServiceResult<ComponentInfo> {
        let request = pb::CreateComponentRequest {
            name: name.to_string(),
            parent_id: Some(id(parent)),
            template_id: template.map(id),
        };
        let r = call(&*self.connection, CREATE, &request).await?;
        component_from(r, CREATE)
    }

    async fn set_name(&self, component: &ComponentId, name: &str) -> ServiceResult<()> {
        let request = pb::SetNameRequest {
            id: Some(id(component)),
            name: name.to_string(),
        };
        let r = call(&*self.connection, SET_NAME, &request).await?;
        ensure_success(r, SET_NAME)
    }

    /// Translation is a point-valued offset in length envelopes.
    async fn set_placement(
        &self,
        component: &ComponentId,
        placement: Placement,
    ) -> ServiceResult<()> {
        let request = pb::SetPlacementRequest {
            id: Some(id(component)),
            translation: placement.translation.map(point),
            rotation_axis_origin: placement.rotation_axis.map(|(origin, _)| point(origin)),
            rotation_axis_direction: placement.rotation_axis.map(|(_, dir)| direction(dir)),
            rotation_angle: placement.rotation_angle.map(|a| quantity(a.as_radians())),
        };
        let r = call(&*self.connection, SET_PLACEMENT, &request).await?;
        ensure_success(r, SET_PLACEMENT)
    }

    async fn set_shared_topology(
        &self,
        component: &ComponentId,
        topology: SharedTopology,
    ) -> ServiceResult<()> {
        let request = pb::SetSharedTopologyRequest {
            id: Some(id(component)),
            share_type: shared_topology(topology),
        };
        let r = call(&*self.connection, SET_SHARED_TOPOLOGY, &request).await?;
        ensure_success(r, SET_SHARED_TOPOLOGY)
    }

    async fn delete(&self, component: &ComponentId) -> ServiceResult<()> {
        let r = call(&*self.connection, DELETE, &id(component)).await?;
        ensure_success(r, DELETE)
    }
}
