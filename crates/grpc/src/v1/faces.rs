//! `geometry.v1.FacesService`.

use async_trait::async_trait;
use geometry::entities::{EdgeInfo, Surface};
use geometry::services::FaceService;
use geometry::types::{Color, Interval, Point3D, UnitVector, UvBox};
use geometry::{FaceId, ServiceResult};

use super::conversions::{
    color, direction_from, edge_from, ensure_success, entity, point_from, surface_from, value_from,
};
use super::messages as pb;
use crate::call::{call, required, Rpc};

const GET_SURFACE: Rpc = Rpc::new("faces.get_surface", "/geometry.v1.FacesService/GetSurface");
const GET_AREA: Rpc = Rpc::new("faces.get_area", "/geometry.v1.FacesService/GetArea");
const GET_EDGES: Rpc = Rpc::new("faces.get_edges", "/geometry.v1.FacesService/GetEdges");
const GET_BOX_UV: Rpc = Rpc::new("faces.get_box_uv", "/geometry.v1.FacesService/GetBoxUV");
const GET_NORMAL: Rpc = Rpc::new("faces.get_normal", "/geometry.v1.FacesService/GetNormal");
const EVALUATE: Rpc = Rpc::new("faces.evaluate", "/geometry.v1.FacesService/Evaluate");
const SET_COLOR: Rpc = Rpc::new("faces.set_color", "/geometry.v1.FacesService/SetColor");

adapter! {
    FacesV1, V1
}

fn id(face: &FaceId) -> pb::EntityIdentifier {
    entity(face.as_str())
}

fn uv(face: &FaceId, u: f64, v: f64) -> pb::UvRequest {
    pb::UvRequest {
        id: Some(id(face)),
        u,
        v,
    }
}

fn interval(i: Option<pb::ParamInterval>, rpc: Rpc, field: &str) -> ServiceResult<Interval> {
    let i = required(i, rpc, field)?;
    Ok(Interval {
        start: i.start,
        end: i.end,
    })
}

#[async_trait]
impl FaceService for FacesV1 {
    async fn get_surface(&self, face: &FaceId) -> ServiceResult<Surface> {
        let r = call(&*self.connection, GET_SURFACE, &id(face)).await?;
        surface_from(r, GET_SURFACE)
    }

    async fn get_area(&self, face: &FaceId) -> ServiceResult<f64> {
        let r: pb::QuantityResponse = call(&*self.connection, GET_AREA, &id(face)).await?;
        value_from(r.value, GET_AREA, "area")
    }

    async fn get_edges(&self, face: &FaceId) -> ServiceResult<Vec<EdgeInfo>> {
        let r: pb::EdgesResponse = call(&*self.connection, GET_EDGES, &id(face)).await?;
        r.edges
            .into_iter()
            .map(|e| edge_from(e, GET_EDGES))
            .collect()
    }

    async fn get_box_uv(&self, face: &FaceId) -> ServiceResult<UvBox> {
        let r: pb::BoxUvResponse = call(&*self.connection, GET_BOX_UV, &id(face)).await?;
        Ok(UvBox {
            u: interval(r.u, GET_BOX_UV, "u")?,
            v: interval(r.v, GET_BOX_UV, "v")?,
        })
    }

    async fn get_normal(&self, face: &FaceId, u: f64, v: f64) -> ServiceResult<UnitVector> {
        let r: pb::DirectionResponse = call(&*self.connection, GET_NORMAL, &uv(face, u, v)).await?;
        direction_from(required(r.direction, GET_NORMAL, "direction")?, GET_NORMAL)
    }

    async fn evaluate(&self, face: &FaceId, u: f64, v: f64) -> ServiceResult<Point3D> {
        let r: pb::PointResponse = call(&*self.connection, EVALUATE, &uv(face, u, v)).await?;
        point_from(required(r.point, EVALUATE, "point")?, EVALUATE)
    }

    async fn set_color(&self, face: &FaceId, value: Color) -> ServiceResult<()> {
        let request = pb::SetColorRequest {
            id: Some(id(face)),
            color: Some(color(value)),
        };
        let r = call(&*self.connection, SET_COLOR, &request).await?;
        ensure_success(r, SET_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use crate::v1::conversions::{frame, quantity};
    use geometry::entities::SurfaceType;
    use geometry::types::Frame;
    use geometry::ServiceError;
    use std::sync::Arc;

    #[tokio::test]
    async fn surface_frame_is_taken_as_sent() {
        let conn = Arc::new(ScriptedConnection::new());
        let faces = FacesV1::new(conn.clone());
        conn.respond(
            GET_SURFACE.path,
            &pb::SurfaceResponse {
                surface_type: "SURFACETYPE_CYLINDER".to_string(),
                frame: Some(frame(Frame::world())),
                radius: Some(quantity(0.01)),
                minor_radius: None,
            },
        );
        let surface = faces.get_surface(&FaceId::new("f").unwrap()).await.unwrap();
        assert_eq!(surface.surface_type, SurfaceType::Cylinder);
        assert_eq!(surface.frame, Frame::world());
        assert_eq!(surface.radius.map(|r| r.as_meters()), Some(0.01));
        assert_eq!(surface.minor_radius, None);
    }

    #[tokio::test]
    async fn missing_uv_range_is_malformed() {
        let conn = Arc::new(ScriptedConnection::new());
        let faces = FacesV1::new(conn.clone());
        conn.respond(
            GET_BOX_UV.path,
            &pb::BoxUvResponse {
                u: Some(pb::ParamInterval {
                    start: 0.0,
                    end: 1.0,
                }),
                v: None,
            },
        );
        let err = faces
            .get_box_uv(&FaceId::new("f").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn evaluate_unwraps_quantities() {
        let conn = Arc::new(ScriptedConnection::new());
        let faces = FacesV1::new(conn.clone());
        conn.respond(
            EVALUATE.path,
            &pb::PointResponse {
                point: Some(crate::v1::conversions::point(Point3D::new(0.1, 0.2, 0.3))),
            },
        );
        let p = faces
            .evaluate(&FaceId::new("f").unwrap(), 0.5, 0.5)
            .await
            .unwrap();
        assert_eq!(p, Point3D::new(0.1, 0.2, 0.3));
        let sent: pb::UvRequest = conn.last_request(EVALUATE.path).unwrap();
        assert_eq!(sent.u, 0.5);
    }
}
