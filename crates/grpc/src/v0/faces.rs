//! `geometry.v0.Faces`.

use async_trait::async_trait;
use geometry::entities::{EdgeInfo, Surface};
use geometry::services::FaceService;
use geometry::types::{Color, Interval, Point3D, UnitVector, UvBox};
use geometry::{FaceId, ServiceResult};

use super::conversions::{direction_from, edge_from, point_from, surface_from};
use super::messages as pb;
use crate::call::{call, required, Rpc};

const GET_SURFACE: Rpc = Rpc::new("faces.get_surface", "/geometry.v0.Faces/GetSurface");
const GET_AREA: Rpc = Rpc::new("faces.get_area", "/geometry.v0.Faces/GetArea");
const GET_EDGES: Rpc = Rpc::new("faces.get_edges", "/geometry.v0.Faces/GetEdges");
const GET_BOX_UV: Rpc = Rpc::new("faces.get_box_uv", "/geometry.v0.Faces/GetBoxUV");
const GET_NORMAL: Rpc = Rpc::new("faces.get_normal", "/geometry.v0.Faces/GetNormal");
const EVALUATE: Rpc = Rpc::new("faces.evaluate", "/geometry.v0.Faces/Evaluate");
const SET_COLOR: Rpc = Rpc::new("faces.set_color", "/geometry.v0.Faces/SetColor");

adapter! {
    /// Face queries on a v0 server.
    FacesV0, V0
}

fn entity(face: &FaceId) -> pb::EntityIdentifier {
    pb::EntityIdentifier {
        id: face.as_str().to_string(),
    }
}

fn uv(face: &FaceId, u: f64, v: f64) -> pb::UvRequest {
    pb::UvRequest {
        id: face.as_str().to_string(),
        u,
        v,
    }
}

#[async_trait]
impl FaceService for FacesV0 {
    async fn get_surface(&self, face: &FaceId) -> ServiceResult<Surface> {
        let r = call(&*self.connection, GET_SURFACE, &entity(face)).await?;
        surface_from(r, GET_SURFACE)
    }

    async fn get_area(&self, face: &FaceId) -> ServiceResult<f64> {
        let r: pb::DoubleResponse = call(&*self.connection, GET_AREA, &entity(face)).await?;
        Ok(r.value)
    }

    async fn get_edges(&self, face: &FaceId) -> ServiceResult<Vec<EdgeInfo>> {
        let r: pb::GetEdgesResponse = call(&*self.connection, GET_EDGES, &entity(face)).await?;
        r.edges
            .into_iter()
            .map(|e| edge_from(e, GET_EDGES))
            .collect()
    }

    async fn get_box_uv(&self, face: &FaceId) -> ServiceResult<UvBox> {
        let r: pb::BoxUvResponse = call(&*self.connection, GET_BOX_UV, &entity(face)).await?;
        Ok(UvBox {
            u: Interval {
                start: r.start_u,
                end: r.end_u,
            },
            v: Interval {
                start: r.start_v,
                end: r.end_v,
            },
        })
    }

    async fn get_normal(&self, face: &FaceId, u: f64, v: f64) -> ServiceResult<UnitVector> {
        let r: pb::DirectionResponse = call(&*self.connection, GET_NORMAL, &uv(face, u, v)).await?;
        direction_from(required(r.direction, GET_NORMAL, "direction")?, GET_NORMAL)
    }

    async fn evaluate(&self, face: &FaceId, u: f64, v: f64) -> ServiceResult<Point3D> {
        let r: pb::PointResponse = call(&*self.connection, EVALUATE, &uv(face, u, v)).await?;
        Ok(point_from(required(r.point, EVALUATE, "point")?))
    }

    async fn set_color(&self, face: &FaceId, color: Color) -> ServiceResult<()> {
        let request = pb::SetColorRequest {
            id: face.as_str().to_string(),
            color: color.to_hex(),
        };
        let _: pb::Empty = call(&*self.connection, SET_COLOR, &request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::ServiceError;
    use std::sync::Arc;

    #[tokio::test]
    async fn normal_is_normalized_and_required() {
        let conn = Arc::new(ScriptedConnection::new());
        let faces = FacesV0::new(conn.clone());
        let face = FaceId::new("f-1").unwrap();

        conn.respond(
            GET_NORMAL.path,
            &pb::DirectionResponse {
                direction: Some(pb::Direction {
                    x: 0.0,
                    y: 3.0,
                    z: 0.0,
                }),
            },
        );
        assert_eq!(
            faces.get_normal(&face, 0.5, 0.25).await.unwrap(),
            UnitVector::Y
        );
        let sent: pb::UvRequest = conn.last_request(GET_NORMAL.path).unwrap();
        assert_eq!((sent.id.as_str(), sent.u, sent.v), ("f-1", 0.5, 0.25));

        conn.respond(GET_NORMAL.path, &pb::DirectionResponse { direction: None });
        assert!(matches!(
            faces.get_normal(&face, 0.0, 0.0).await,
            Err(ServiceError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn uv_box_is_assembled_from_flat_fields() {
        let conn = Arc::new(ScriptedConnection::new());
        let faces = FacesV0::new(conn.clone());
        conn.respond(
            GET_BOX_UV.path,
            &pb::BoxUvResponse {
                start_u: 0.0,
                end_u: 1.0,
                start_v: -2.0,
                end_v: 2.0,
            },
        );
        let uv_box = faces.get_box_uv(&FaceId::new("f").unwrap()).await.unwrap();
        assert_eq!((uv_box.u.start, uv_box.u.end), (0.0, 1.0));
        assert_eq!((uv_box.v.start, uv_box.v.end), (-2.0, 2.0));
    }
}
