//! `geometry.v1.EditToolsService`.

use async_trait::async_trait;
use geometry::services::{ChamferSpec, ModelToolsService};
use geometry::types::{Angle, Axis, Distance, UnitVector};
use geometry::{EntityRef, FaceId, ServiceResult};

use super::conversions::{angle, direction, entities, length, point, selection};
use super::messages as pb;
use crate::call::{call, Rpc};

const CHAMFER: Rpc = Rpc::new(
    "model_tools.chamfer",
    "/geometry.v1.EditToolsService/Chamfer",
);
const FILLET: Rpc = Rpc::new("model_tools.fillet", "/geometry.v1.EditToolsService/Fillet");
const FULL_FILLET: Rpc = Rpc::new(
    "model_tools.full_fillet",
    "/geometry.v1.EditToolsService/FullFillet",
);
const MOVE_TRANSLATE: Rpc = Rpc::new(
    "model_tools.move_translate",
    "/geometry.v1.EditToolsService/MoveTranslate",
);
const MOVE_ROTATE: Rpc = Rpc::new(
    "model_tools.move_rotate",
    "/geometry.v1.EditToolsService/MoveRotate",
);

adapter! {
    ModelToolsV1, V1
}

impl ModelToolsV1 {
    async fn run<M: prost::Message>(&self, rpc: Rpc, request: &M) -> ServiceResult<bool> {
        let r: pb::CommandResponse = call(&*self.connection, rpc, request).await?;
        Ok(r.success)
    }
}

#[async_trait]
impl ModelToolsService for ModelToolsV1 {
    async fn chamfer(&self, entities: &[EntityRef], spec: ChamferSpec) -> ServiceResult<bool> {
        let request = pb::ChamferRequest {
            selection: selection(entities),
            distance: length(spec.distance),
            angle: angle(spec.angle),
        };
        self.run(CHAMFER, &request).await
    }

    async fn fillet(&self, entities: &[EntityRef], radius: Distance) -> ServiceResult<bool> {
        let request = pb::FilletRequest {
            selection: selection(entities),
            radius: length(radius),
        };
        self.run(FILLET, &request).await
    }

    async fn full_fillet(&self, faces: &[FaceId]) -> ServiceResult<bool> {
        let request = pb::MultipleEntitiesRequest {
            ids: entities(faces.iter().map(FaceId::as_str)),
        };
        self.run(FULL_FILLET, &request).await
    }

    async fn move_translate(
        &self,
        entities: &[EntityRef],
        dir: UnitVector,
        distance: Distance,
    ) -> ServiceResult<bool> {
        let request = pb::MoveTranslateRequest {
            selection: selection(entities),
            direction: Some(direction(dir)),
            distance: length(distance),
        };
        self.run(MOVE_TRANSLATE, &request).await
    }

    async fn move_rotate(
        &self,
        entities: &[EntityRef],
        axis: Axis,
        rotation: Angle,
    ) -> ServiceResult<bool> {
        let request = pb::MoveRotateRequest {
            selection: selection(entities),
            axis_origin: Some(point(axis.origin)),
            axis_direction: Some(direction(axis.direction)),
            angle: angle(rotation),
        };
        self.run(MOVE_ROTATE, &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::EdgeId;
    use std::sync::Arc;

    #[tokio::test]
    async fn chamfer_angle_travels_in_radians() {
        let conn = Arc::new(ScriptedConnection::new());
        let tools = ModelToolsV1::new(conn.clone());
        conn.respond(
            CHAMFER.path,
            &pb::CommandResponse {
                success: true,
                message: String::new(),
            },
        );
        let spec = ChamferSpec {
            distance: Distance::from_millimeters(1.0).unwrap(),
            angle: Angle::from_radians(0.25).unwrap(),
        };
        let ok = tools
            .chamfer(&[EntityRef::Edge(EdgeId::new("e").unwrap())], spec)
            .await
            .unwrap();
        assert!(ok);
        let sent: pb::ChamferRequest = conn.last_request(CHAMFER.path).unwrap();
        assert_eq!(sent.angle.map(|q| q.value_in_geometry_units), Some(0.25));
        assert_eq!(
            sent.distance.map(|q| q.value_in_geometry_units),
            Some(0.001)
        );
    }
}
