//! `geometry.v1.EdgesService`.

use async_trait::async_trait;
use geometry::entities::{Curve, FaceInfo};
use geometry::services::EdgeService;
use geometry::types::{Distance, Interval, Point3D};
use geometry::{EdgeId, ServiceResult};

use super::conversions::{curve_from, distance_from, entity, face_from, point_from};
use super::messages as pb;
use crate::call::{call, required, Rpc};

const GET_CURVE: Rpc = Rpc::new("edges.get_curve", "/geometry.v1.EdgesService/GetCurve");
const GET_LENGTH: Rpc = Rpc::new("edges.get_length", "/geometry.v1.EdgesService/GetLength");
const GET_INTERVAL: Rpc = Rpc::new(
    "edges.get_interval",
    "/geometry.v1.EdgesService/GetInterval",
);
const GET_START_AND_END_POINTS: Rpc = Rpc::new(
    "edges.get_start_and_end_points",
    "/geometry.v1.EdgesService/GetStartAndEndPoints",
);
const GET_FACES: Rpc = Rpc::new("edges.get_faces", "/geometry.v1.EdgesService/GetFaces");

adapter! {
    EdgesV1, V1
}

fn id(edge: &EdgeId) -> pb::EntityIdentifier {
    entity(edge.as_str())
}

#[async_trait]
impl EdgeService for EdgesV1 {
    async fn get_curve(&self, edge: &EdgeId) -> ServiceResult<Curve> {
        let r = call(&*self.connection, GET_CURVE, &id(edge)).await?;
        curve_from(r, GET_CURVE)
    }

    async fn get_length(&self, edge: &EdgeId) -> ServiceResult<Distance> {
        let r: pb::QuantityResponse = call(&*self.connection, GET_LENGTH, &id(edge)).await?;
        distance_from(r.value, GET_LENGTH, "length")
    }

    async fn get_interval(&self, edge: &EdgeId) -> ServiceResult<Interval> {
        let r: pb::IntervalResponse = call(&*self.connection, GET_INTERVAL, &id(edge)).await?;
        let i = required(r.interval, GET_INTERVAL, "interval")?;
        Ok(Interval {
            start: i.start,
            end: i.end,
        })
    }

    async fn get_start_and_end_points(&self, edge: &EdgeId) -> ServiceResult<(Point3D, Point3D)> {
        let rpc = GET_START_AND_END_POINTS;
        let r: pb::StartAndEndPointsResponse = call(&*self.connection, rpc, &id(edge)).await?;
        Ok((
            point_from(required(r.start, rpc, "start")?, rpc)?,
            point_from(required(r.end, rpc, "end")?, rpc)?,
        ))
    }

    async fn get_faces(&self, edge: &EdgeId) -> ServiceResult<Vec<FaceInfo>> {
        let r: pb::FacesResponse = call(&*self.connection, GET_FACES, &id(edge)).await?;
        r.faces
            .into_iter()
            .map(|f| face_from(f, GET_FACES))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use crate::v1::conversions::point;
    use std::sync::Arc;

    #[tokio::test]
    async fn end_points_take_one_call() {
        let conn = Arc::new(ScriptedConnection::new());
        let edges = EdgesV1::new(conn.clone());
        conn.respond(
            GET_START_AND_END_POINTS.path,
            &pb::StartAndEndPointsResponse {
                start: Some(point(Point3D::ORIGIN)),
                end: Some(point(Point3D::new(1.0, 0.0, 0.0))),
            },
        );
        let (start, end) = edges
            .get_start_and_end_points(&EdgeId::new("e").unwrap())
            .await
            .unwrap();
        assert_eq!(start, Point3D::ORIGIN);
        assert_eq!(end, Point3D::new(1.0, 0.0, 0.0));
        assert_eq!(conn.call_count(), 1);
    }

    #[tokio::test]
    async fn length_is_read_from_the_envelope() {
        let conn = Arc::new(ScriptedConnection::new());
        let edges = EdgesV1::new(conn.clone());
        conn.respond(
            GET_LENGTH.path,
            &pb::QuantityResponse {
                value: Some(pb::Quantity {
                    value_in_geometry_units: 0.25,
                }),
            },
        );
        let len = edges.get_length(&EdgeId::new("e").unwrap()).await.unwrap();
        assert_eq!(len.as_meters(), 0.25);
    }
}
