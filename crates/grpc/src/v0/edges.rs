//! `geometry.v0.Edges`.

use async_trait::async_trait;
use geometry::entities::{Curve, FaceInfo};
use geometry::services::EdgeService;
use geometry::types::{Distance, Interval, Point3D};
use geometry::{EdgeId, ServiceResult};

use super::conversions::{curve_from, distance_from, face_from, point_from};
use super::messages as pb;
use crate::call::{call, required, Rpc};

const GET_CURVE: Rpc = Rpc::new("edges.get_curve", "/geometry.v0.Edges/GetCurve");
const GET_LENGTH: Rpc = Rpc::new("edges.get_length", "/geometry.v0.Edges/GetLength");
const GET_INTERVAL: Rpc = Rpc::new("edges.get_interval", "/geometry.v0.Edges/GetInterval");
const GET_START_POINT: Rpc = Rpc::new(
    "edges.get_start_and_end_points",
    "/geometry.v0.Edges/GetStartPoint",
);
const GET_END_POINT: Rpc = Rpc::new(
    "edges.get_start_and_end_points",
    "/geometry.v0.Edges/GetEndPoint",
);
const GET_FACES: Rpc = Rpc::new("edges.get_faces", "/geometry.v0.Edges/GetFaces");

adapter! {
    /// Edge queries on a v0 server.
    EdgesV0, V0
}

fn entity(edge: &EdgeId) -> pb::EntityIdentifier {
    pb::EntityIdentifier {
        id: edge.as_str().to_string(),
    }
}

#[async_trait]
impl EdgeService for EdgesV0 {
    async fn get_curve(&self, edge: &EdgeId) -> ServiceResult<Curve> {
        let r = call(&*self.connection, GET_CURVE, &entity(edge)).await?;
        curve_from(r, GET_CURVE)
    }

    async fn get_length(&self, edge: &EdgeId) -> ServiceResult<Distance> {
        let r: pb::DoubleResponse = call(&*self.connection, GET_LENGTH, &entity(edge)).await?;
        distance_from(r.value, GET_LENGTH)
    }

    async fn get_interval(&self, edge: &EdgeId) -> ServiceResult<Interval> {
        let r: pb::IntervalResponse =
            call(&*self.connection, GET_INTERVAL, &entity(edge)).await?;
        Ok(Interval {
            start: r.start,
            end: r.end,
        })
    }

    /// Two calls on this generation: start point, then end point.
    async fn get_start_and_end_points(&self, edge: &EdgeId) -> ServiceResult<(Point3D, Point3D)> {
        let start: pb::PointResponse =
            call(&*self.connection, GET_START_POINT, &entity(edge)).await?;
        let end: pb::PointResponse = call(&*self.connection, GET_END_POINT, &entity(edge)).await?;
        Ok((
            point_from(required(start.point, GET_START_POINT, "point")?),
            point_from(required(end.point, GET_END_POINT, "point")?),
        ))
    }

    async fn get_faces(&self, edge: &EdgeId) -> ServiceResult<Vec<FaceInfo>> {
        let r: pb::GetFacesResponse = call(&*self.connection, GET_FACES, &entity(edge)).await?;
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
    use std::sync::Arc;

    #[tokio::test]
    async fn end_points_take_two_calls() {
        let conn = Arc::new(ScriptedConnection::new());
        let edges = EdgesV0::new(conn.clone());
        conn.respond(
            GET_START_POINT.path,
            &pb::PointResponse {
                point: Some(pb::Point {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0,
                }),
            },
        );
        conn.respond(
            GET_END_POINT.path,
            &pb::PointResponse {
                point: Some(pb::Point {
                    x: 1.0,
                    y: 0.0,
                    z: 0.0,
                }),
            },
        );
        let (start, end) = edges
            .get_start_and_end_points(&EdgeId::new("e-1").unwrap())
            .await
            .unwrap();
        assert_eq!(start, Point3D::ORIGIN);
        assert_eq!(end, Point3D::new(1.0, 0.0, 0.0));
        assert_eq!(
            conn.methods(),
            vec![GET_START_POINT.path, GET_END_POINT.path]
        );
    }

    #[tokio::test]
    async fn length_is_plain_meters() {
        let conn = Arc::new(ScriptedConnection::new());
        let edges = EdgesV0::new(conn.clone());
        conn.respond(GET_LENGTH.path, &pb::DoubleResponse { value: 0.125 });
        let length = edges.get_length(&EdgeId::new("e").unwrap()).await.unwrap();
        assert_eq!(length.as_meters(), 0.125);
    }
}
