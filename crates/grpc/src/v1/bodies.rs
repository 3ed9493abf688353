//! `geometry.v1.BodiesService`.

use async_trait::async_trait;
use geometry::entities::{BodyInfo, EdgeInfo, FaceInfo};
use geometry::services::{BodyService, BooleanKind};
use geometry::types::{
    BoundingBox, Color, Distance, Point3D, SketchProfile, Tessellation, UnitVector,
};
use geometry::{BodyId, ComponentId, ServiceError, ServiceResult};

use super::conversions::{
    color, color_from, direction, edge_from, ensure_success, entities, entity, face_from,
    geometries, length, point, point_from, single_body, value_from,
};
use super::messages as pb;
use crate::call::{call, required, Rpc};

const CREATE_SPHERE_BODY: Rpc = Rpc::new(
    "bodies.create_sphere_body",
    "/geometry.v1.BodiesService/CreateSphereBody",
);
const CREATE_EXTRUDED_BODY: Rpc = Rpc::new(
    "bodies.create_extruded_body",
    "/geometry.v1.BodiesService/CreateExtrudedBody",
);
const CREATE_PLANAR_BODY: Rpc = Rpc::new(
    "bodies.create_planar_body",
    "/geometry.v1.BodiesService/CreatePlanarBody",
);
const TRANSLATE: Rpc = Rpc::new("bodies.translate", "/geometry.v1.BodiesService/Translate");
const DELETE: Rpc = Rpc::new("bodies.delete", "/geometry.v1.BodiesService/Delete");
const GET_VOLUME: Rpc = Rpc::new("bodies.get_volume", "/geometry.v1.BodiesService/GetVolume");
const GET_BOUNDING_BOX: Rpc = Rpc::new(
    "bodies.get_bounding_box",
    "/geometry.v1.BodiesService/GetBoundingBox",
);
const GET_COLOR: Rpc = Rpc::new("bodies.get_color", "/geometry.v1.BodiesService/GetColor");
const SET_COLOR: Rpc = Rpc::new("bodies.set_color", "/geometry.v1.BodiesService/SetColor");
const IS_SUPPRESSED: Rpc = Rpc::new(
    "bodies.is_suppressed",
    "/geometry.v1.BodiesService/IsSuppressed",
);
const SET_SUPPRESSED: Rpc = Rpc::new(
    "bodies.set_suppressed",
    "/geometry.v1.BodiesService/SetSuppressed",
);
const GET_FACES: Rpc = Rpc::new("bodies.get_faces", "/geometry.v1.BodiesService/GetFaces");
const GET_EDGES: Rpc = Rpc::new("bodies.get_edges", "/geometry.v1.BodiesService/GetEdges");
const BOOLEAN: Rpc = Rpc::new("bodies.boolean", "/geometry.v1.BodiesService/Boolean");
const GET_TESSELLATION: Rpc = Rpc::new(
    "bodies.get_tessellation",
    "/geometry.v1.BodiesService/GetTessellation",
);
const SHELL: Rpc = Rpc::new("bodies.shell_body", "/geometry.v1.BodiesService/Shell");

adapter! {
    /// Body operations on a v1 server.
    BodiesV1, V1
}

fn id(body: &BodyId) -> pb::EntityIdentifier {
    entity(body.as_str())
}

fn ids(bodies: &[BodyId]) -> Vec<pb::EntityIdentifier> {
    entities(bodies.iter().map(BodyId::as_str))
}

#[async_trait]
impl BodyService for BodiesV1 {
    async fn create_sphere_body(
        &self,
        name: &str,
        parent: &ComponentId,
        center: Point3D,
        radius: Distance,
    ) -> ServiceResult<BodyInfo> {
        let request = pb::CreateSphereBodyRequest {
            request_data: vec![pb::CreateSphereBodyRequestData {
                name: name.to_string(),
                parent_id: Some(entity(parent.as_str())),
                center: Some(point(center)),
                radius: length(radius),
            }],
        };
        let r = call(&*self.connection, CREATE_SPHERE_BODY, &request).await?;
        single_body(r, CREATE_SPHERE_BODY)
    }

    /// The wire distance is unsigned; a negative distance extrudes against
    /// the profile normal.
    async fn create_extruded_body(
        &self,
        name: &str,
        parent: &ComponentId,
        profile: &SketchProfile,
        distance: Distance,
    ) -> ServiceResult<BodyInfo> {
        let meters = distance.as_meters();
        let request = pb::CreateExtrudedBodyRequest {
            request_data: vec![pb::CreateExtrudedBodyRequestData {
                name: name.to_string(),
                parent_id: Some(entity(parent.as_str())),
                geometries: Some(geometries(profile)),
                distance: Some(pb::Quantity {
                    value_in_geometry_units: meters.abs(),
                }),
                direction_reversed: meters < 0.0,
            }],
        };
        let r = call(&*self.connection, CREATE_EXTRUDED_BODY, &request).await?;
        single_body(r, CREATE_EXTRUDED_BODY)
    }

    async fn create_planar_body(
        &self,
        name: &str,
        parent: &ComponentId,
        profile: &SketchProfile,
    ) -> ServiceResult<BodyInfo> {
        let request = pb::CreatePlanarBodyRequest {
            request_data: vec![pb::CreatePlanarBodyRequestData {
                name: name.to_string(),
                parent_id: Some(entity(parent.as_str())),
                geometries: Some(geometries(profile)),
            }],
        };
        let r = call(&*self.connection, CREATE_PLANAR_BODY, &request).await?;
        single_body(r, CREATE_PLANAR_BODY)
    }

    async fn translate(
        &self,
        bodies: &[BodyId],
        dir: UnitVector,
        distance: Distance,
    ) -> ServiceResult<()> {
        let request = pb::TranslateRequest {
            ids: ids(bodies),
            direction: Some(direction(dir)),
            distance: length(distance),
        };
        let r = call(&*self.connection, TRANSLATE, &request).await?;
        ensure_success(r, TRANSLATE)
    }

    async fn delete(&self, body: &BodyId) -> ServiceResult<()> {
        let r = call(&*self.connection, DELETE, &id(body)).await?;
        ensure_success(r, DELETE)
    }

    async fn get_volume(&self, body: &BodyId) -> ServiceResult<f64> {
        let r: pb::QuantityResponse = call(&*self.connection, GET_VOLUME, &id(body)).await?;
        value_from(r.value, GET_VOLUME, "volume")
    }

    async fn get_bounding_box(&self, body: &BodyId) -> ServiceResult<BoundingBox> {
        let r: pb::BoundingBoxResponse =
            call(&*self.connection, GET_BOUNDING_BOX, &id(body)).await?;
        Ok(BoundingBox {
            min: point_from(required(r.min, GET_BOUNDING_BOX, "min")?, GET_BOUNDING_BOX)?,
            max: point_from(required(r.max, GET_BOUNDING_BOX, "max")?, GET_BOUNDING_BOX)?,
        })
    }

    async fn get_color(&self, body: &BodyId) -> ServiceResult<Color> {
        let r: pb::ColorResponse = call(&*self.connection, GET_COLOR, &id(body)).await?;
        color_from(required(r.color, GET_COLOR, "color")?, GET_COLOR)
    }

    async fn set_color(&self, body: &BodyId, value: Color) -> ServiceResult<()> {
        let request = pb::SetColorRequest {
            id: Some(id(body)),
            color: Some(color(value)),
        };
        let r = call(&*self.connection, SET_COLOR, &request).await?;
        ensure_success(r, SET_COLOR)
    }

    async fn is_suppressed(&self, body: &BodyId) -> ServiceResult<bool> {
        let r: pb::BoolResponse = call(&*self.connection, IS_SUPPRESSED, &id(body)).await?;
        Ok(r.result)
    }

    async fn set_suppressed(&self, bodies: &[BodyId], suppressed: bool) -> ServiceResult<()> {
        let request = pb::SetSuppressedRequest {
            ids: ids(bodies),
            suppressed,
        };
        let r = call(&*self.connection, SET_SUPPRESSED, &request).await?;
        ensure_success(r, SET_SUPPRESSED)
    }

    async fn get_faces(&self, body: &BodyId) -> ServiceResult<Vec<FaceInfo>> {
        let r: pb::FacesResponse = call(&*self.connection, GET_FACES, &id(body)).await?;
        r.faces
            .into_iter()
            .map(|f| face_from(f, GET_FACES))
            .collect()
    }

    async fn get_edges(&self, body: &BodyId) -> ServiceResult<Vec<EdgeInfo>> {
        let r: pb::EdgesResponse = call(&*self.connection, GET_EDGES, &id(body)).await?;
        r.edges
            .into_iter()
            .map(|e| edge_from(e, GET_EDGES))
            .collect()
    }

    async fn boolean(
        &self,
        target: &BodyId,
        tools: &[BodyId],
        kind: BooleanKind,
    ) -> ServiceResult<()> {
        let request = pb::BooleanRequest {
            target: Some(id(target)),
            tool_ids: ids(tools),
            method: kind.as_str().to_string(),
        };
        let r = call(&*self.connection, BOOLEAN, &request).await?;
        ensure_success(r, BOOLEAN)
    }

    async fn get_tessellation(&self, body: &BodyId) -> ServiceResult<Tessellation> {
        let r: pb::TessellationResponse =
            call(&*self.connection, GET_TESSELLATION, &id(body)).await?;
        unpack_mesh(r)
    }

    async fn shell_body(&self, body: &BodyId, offset: Distance) -> ServiceResult<bool> {
        let request = pb::ShellRequest {
            id: Some(id(body)),
            offset: length(offset),
        };
        let r: pb::CommandResponse = call(&*self.connection, SHELL, &request).await?;
        Ok(r.success)
    }
}

/// Unpacks the flat vertex and index arrays, checking every index.
fn unpack_mesh(response: pb::TessellationResponse) -> ServiceResult<Tessellation> {
    let malformed = |reason: &str| ServiceError::malformed(GET_TESSELLATION.operation, reason);
    if response.vertices.len() % 3 != 0 {
        return Err(malformed("vertex array length is not a multiple of 3"));
    }
    if response.triangles.len() % 3 != 0 {
        return Err(malformed("index array length is not a multiple of 3"));
    }
    let vertex_count = response.vertices.len() / 3;
    if response
        .triangles
        .iter()
        .any(|&i| usize::try_from(i).map_or(true, |i| i >= vertex_count))
    {
        return Err(malformed("vertex index out of range"));
    }
    Ok(Tessellation {
        vertices: response
            .vertices
            .chunks_exact(3)
            .map(|c| Point3D::new(c[0], c[1], c[2]))
            .collect(),
        triangles: response
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect(),
    })
}
