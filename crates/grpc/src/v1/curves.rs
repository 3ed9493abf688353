//! `geometry.v1.CurvesService`. Free-standing curve operations are new in v1.

use async_trait::async_trait;
use geometry::services::{CurveService, RevolveOptions};
use geometry::types::Point3D;
use geometry::{BodyId, CurveId, ServiceError, ServiceResult};

use super::conversions::{angle, direction, entities, entity, point, point_from};
use super::messages as pb;
use crate::call::{call, Rpc};

const REVOLVE_EDGES: Rpc = Rpc::new(
    "curves.revolve_edges",
    "/geometry.v1.CurvesService/RevolveEdges",
);
const INTERSECT_CURVES: Rpc = Rpc::new(
    "curves.intersect_curves",
    "/geometry.v1.CurvesService/IntersectCurves",
);

adapter! {
    CurvesV1, V1
}

#[async_trait]
impl CurveService for CurvesV1 {
    async fn revolve_edges(
        &self,
        curves: &[CurveId],
        options: RevolveOptions,
    ) -> ServiceResult<BodyId> {
        if curves.is_empty() {
            return Err(ServiceError::invalid_argument(
                REVOLVE_EDGES.operation,
                "nothing to revolve",
            ));
        }
        let request = pb::RevolveEdgesRequest {
            curves: entities(curves.iter().map(CurveId::as_str)),
            axis_origin: Some(point(options.axis.origin)),
            axis_direction: Some(direction(options.axis.direction)),
            angle: angle(options.angle),
            symmetric: options.symmetric,
        };
        let r: pb::RevolveEdgesResponse = call(&*self.connection, REVOLVE_EDGES, &request).await?;
        r.created_body
            .and_then(|e| BodyId::new(e.id))
            .ok_or_else(|| ServiceError::malformed(REVOLVE_EDGES.operation, "missing body id"))
    }

    /// Curves that do not meet yield an empty list.
    async fn intersect_curves(
        &self,
        first: &CurveId,
        second: &CurveId,
    ) -> ServiceResult<Vec<Point3D>> {
        let request = pb::IntersectCurvesRequest {
            first: Some(entity(first.as_str())),
            second: Some(entity(second.as_str())),
        };
        let r: pb::IntersectCurvesResponse =
            call(&*self.connection, INTERSECT_CURVES, &request).await?;
        if !r.intersect {
            return Ok(Vec::new());
        }
        r.points
            .into_iter()
            .map(|p| point_from(p, INTERSECT_CURVES))
            .collect()
    }
}
