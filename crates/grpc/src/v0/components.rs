//! `geometry.v0.Components`.

use async_trait::async_trait;
use geometry::entities::ComponentInfo;
use geometry::services::{ComponentService, Placement, SharedTopology};
use geometry::{ComponentId, ServiceResult};

use super::conversions::{component_from, direction, point, shared_topology};
use super::messages as pb;
use crate::call::{call, required, Rpc};

const CREATE: Rpc = Rpc::new("components.create", "/geometry.v0.Components/Create");
const SET_NAME: Rpc = Rpc::new("components.set_name", "/geometry.v0.Components/SetName");
const SET_PLACEMENT: Rpc = Rpc::new(
    "components.set_placement",
    "/geometry.v0.Components/SetPlacement",
);
const SET_SHARED_TOPOLOGY: Rpc = Rpc::new(
    "components.set_shared_topology",
    "/geometry.v0.Components/SetSharedTopology",
);
const DELETE: Rpc = Rpc::new("components.delete", "/geometry.v0.Components/Delete");

adapter! {
    ComponentsV0, V0
}

#[async_trait]
impl ComponentService for ComponentsV0 {
    async fn create(
        &self,
        name: &str,
        parent: &ComponentId,
        template: Option<&ComponentId>,
    ) -> ServiceResult<ComponentInfo> {
        let request = pb::CreateComponentRequest {
            name: name.to_string(),
            parent: parent.as_str().to_string(),
            template: template.map(|t| t.as_str().to_string()).unwrap_or_default(),
        };
        let r: pb::CreateComponentResponse = call(&*self.connection, CREATE, &request).await?;
        component_from(required(r.component, CREATE, "component")?, CREATE)
    }

    async fn set_name(&self, component: &ComponentId, name: &str) -> ServiceResult<()> {
        let request = pb::SetNameRequest {
            id: component.as_str().to_string(),
            name: name.to_string(),
        };
        let _: pb::Empty = call(&*self.connection, SET_NAME, &request).await?;
        Ok(())
    }

    async fn set_placement(
        &self,
        component: &ComponentId,
        placement: Placement,
    ) -> ServiceResult<()> {
        let request = pb::SetPlacementRequest {
            id: component.as_str().to_string(),
            translation: placement.translation.map(|t| pb::Direction {
                x: t.x,
                y: t.y,
                z: t.z,
            }),
            rotation_axis_origin: placement.rotation_axis.map(|(origin, _)| point(origin)),
            rotation_axis_direction: placement.rotation_axis.map(|(_, dir)| direction(dir)),
            rotation_angle: placement.rotation_angle.map_or(0.0, |a| a.as_radians()),
        };
        let _: pb::Empty = call(&*self.connection, SET_PLACEMENT, &request).await?;
        Ok(())
    }

    async fn set_shared_topology(
        &self,
        component: &ComponentId,
        topology: SharedTopology,
    ) -> ServiceResult<()> {
        let request = pb::SetSharedTopologyRequest {
            id: component.as_str().to_string(),
            share_type: shared_topology(topology),
        };
        let _: pb::Empty = call(&*self.connection, SET_SHARED_TOPOLOGY, &request).await?;
        Ok(())
    }

    async fn delete(&self, component: &ComponentId) -> ServiceResult<()> {
        let request = pb::EntityIdentifier {
            id: component.as_str().to_string(),
        };
        let _: pb::Empty = call(&*self.connection, DELETE, &request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::types::{Angle, Point3D, UnitVector};
    use geometry::ServiceError;
    use std::sync::Arc;

    #[tokio::test]
    async fn missing_component_in_response_is_malformed() {
        let conn = Arc::new(ScriptedConnection::new());
        let components = ComponentsV0::new(conn.clone());
        conn.respond(
            CREATE.path,
            &pb::CreateComponentResponse { component: None },
        );
        let err = components
            .create("sub", &ComponentId::new("root").unwrap(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MalformedResponse { .. }));
        let sent: pb::CreateComponentRequest = conn.last_request(CREATE.path).unwrap();
        assert_eq!(sent.template, "");
    }

    #[tokio::test]
    async fn placement_angle_is_radians() {
        let conn = Arc::new(ScriptedConnection::new());
        let components = ComponentsV0::new(conn.clone());
        conn.respond(SET_PLACEMENT.path, &pb::Empty {});
        let placement = Placement {
            translation: Some(Point3D::new(0.1, 0.0, 0.0)),
            rotation_axis: Some((Point3D::ORIGIN, UnitVector::Z)),
            rotation_angle: Angle::from_radians(std::f64::consts::PI),
        };
        components
            .set_placement(&ComponentId::new("c").unwrap(), placement)
            .await
            .unwrap();
        let sent: pb::SetPlacementRequest = conn.last_request(SET_PLACEMENT.path).unwrap();
        assert_eq!(sent.rotation_angle, std::f64::consts::PI);
        assert_eq!(
            sent.translation,
            Some(pb::Direction {
                x: 0.1,
                y: 0.0,
                z: 0.0,
            })
        );
    }
}
