//! `geometry.v0.EditTools`.

use async_trait::async_trait;
use geometry::services::{ChamferSpec, ModelToolsService};
use geometry::types::{Angle, Axis, Distance, UnitVector};
use geometry::{EntityRef, FaceId, ServiceResult};

use super::conversions::{direction, point};
use super::messages as pb;
use super::patterns::selection;
use crate::call::{call, Rpc};

const CHAMFER: Rpc = Rpc::new("model_tools.chamfer", "/geometry.v0.EditTools/Chamfer");
const FILLET: Rpc = Rpc::new("model_tools.fillet", "/geometry.v0.EditTools/Fillet");
const FULL_FILLET: Rpc = Rpc::new(
    "model_tools.full_fillet",
    "/geometry.v0.EditTools/FullFillet",
);
const MOVE_TRANSLATE: Rpc = Rpc::new(
    "model_tools.move_translate",
    "/geometry.v0.EditTools/MoveTranslate",
);
const MOVE_ROTATE: Rpc = Rpc::new(
    "model_tools.move_rotate",
    "/geometry.v0.EditTools/MoveRotate",
);

adapter! {
    ModelToolsV0, V0
}

#[async_trait]
impl ModelToolsService for ModelToolsV0 {
    async fn chamfer(&self, entities: &[EntityRef], spec: ChamferSpec) -> ServiceResult<bool> {
        let request = pb::ChamferRequest {
            ids: selection(entities),
            distance: spec.distance.as_meters(),
            angle: spec.angle.as_radians(),
        };
        let r: pb::BoolResponse = call(&*self.connection, CHAMFER, &request).await?;
        Ok(r.result)
    }

    async fn fillet(&self, entities: &[EntityRef], radius: Distance) -> ServiceResult<bool> {
        let request = pb::FilletRequest {
            ids: selection(entities),
            radius: radius.as_meters(),
        };
        let r: pb::BoolResponse = call(&*self.connection, FILLET, &request).await?;
        Ok(r.result)
    }

    async fn full_fillet(&self, faces: &[FaceId]) -> ServiceResult<bool> {
        let request = pb::SelectionRequest {
            selection: faces.iter().map(|f| f.as_str().to_string()).collect(),
        };
        let r: pb::BoolResponse = call(&*self.connection, FULL_FILLET, &request).await?;
        Ok(r.result)
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
            distance: distance.as_meters(),
        };
        let r: pb::BoolResponse = call(&*self.connection, MOVE_TRANSLATE, &request).await?;
        Ok(r.result)
    }

    async fn move_rotate(
        &self,
        entities: &[EntityRef],
        axis: Axis,
        angle: Angle,
    ) -> ServiceResult<bool> {
        let request = pb::MoveRotateRequest {
            selection: selection(entities),
            axis_origin: Some(point(axis.origin)),
            axis_direction: Some(direction(axis.direction)),
            angle: angle.as_radians(),
        };
        let r: pb::BoolResponse = call(&*self.connection, MOVE_ROTATE, &request).await?;
        Ok(r.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::EdgeId;
    use std::sync::Arc;

    #[tokio::test]
    async fn fillet_reports_server_outcome() {
        let conn = Arc::new(ScriptedConnection::new());
        let tools = ModelToolsV0::new(conn.clone());
        conn.respond(FILLET.path, &pb::BoolResponse { result: false });
        let edges = [EntityRef::Edge(EdgeId::new("e-1").unwrap())];
        let ok = tools
            .fillet(&edges, Distance::from_millimeters(2.0).unwrap())
            .await
            .unwrap();
        assert!(!ok);
        let sent: pb::FilletRequest = conn.last_request(FILLET.path).unwrap();
        assert_eq!(sent.ids, vec!["e-1"]);
        assert_eq!(sent.radius, 0.002);
    }
}
