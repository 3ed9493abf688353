//! `geometry.v0.Bodies`.

use async_trait::async_trait;
use geometry::entities::{BodyInfo, EdgeInfo, FaceInfo};
use geometry::services::{BodyService, BooleanKind};
use geometry::types::{
    BoundingBox, Color, Distance, Point3D, SketchProfile, Tessellation, UnitVector,
};
use geometry::{BodyId, ComponentId, ProtocolVersion, ServiceError, ServiceKind, ServiceResult};

use super::conversions::{body_from, direction, edge_from, face_from, geometries, point, point_from};
use super::messages as pb;
use crate::call::{call, required, Rpc};

const CREATE_SPHERE_BODY: Rpc = Rpc::new(
    "bodies.create_sphere_body",
    "/geometry.v0.Bodies/CreateSphereBody",
);
const CREATE_EXTRUDED_BODY: Rpc = Rpc::new(
    "bodies.create_extruded_body",
    "/geometry.v0.Bodies/CreateExtrudedBody",
);
const CREATE_PLANAR_BODY: Rpc = Rpc::new(
    "bodies.create_planar_body",
    "/geometry.v0.Bodies/CreatePlanarBody",
);
const TRANSLATE: Rpc = Rpc::new("bodies.translate", "/geometry.v0.Bodies/Translate");
const DELETE: Rpc = Rpc::new("bodies.delete", "/geometry.v0.Bodies/Delete");
const GET_VOLUME: Rpc = Rpc::new("bodies.get_volume", "/geometry.v0.Bodies/GetVolume");
const GET_BOUNDING_BOX: Rpc = Rpc::new(
    "bodies.get_bounding_box",
    "/geometry.v0.Bodies/GetBoundingBox",
);
const GET_COLOR: Rpc = Rpc::new("bodies.get_color", "/geometry.v0.Bodies/GetColor");
const SET_COLOR: Rpc = Rpc::new("bodies.set_color", "/geometry.v0.Bodies/SetColor");
const IS_SUPPRESSED: Rpc = Rpc::new("bodies.is_suppressed", "/geometry.v0.Bodies/IsSuppressed");
const SET_SUPPRESSED: Rpc =
    Rpc::new("bodies.set_suppressed", "/geometry.v0.Bodies/SetSuppressed");
const GET_FACES: Rpc = Rpc::new("bodies.get_faces", "/geometry.v0.Bodies/GetFaces");
const GET_EDGES: Rpc = Rpc::new("bodies.get_edges", "/geometry.v0.Bodies/GetEdges");
const BOOLEAN: Rpc = Rpc::new("bodies.boolean", "/geometry.v0.Bodies/Boolean");
const GET_TESSELLATION: Rpc = Rpc::new(
    "bodies.get_tessellation",
    "/geometry.v0.Bodies/GetTessellation",
);

adapter! {
    /// Body operations on a v0 server.
    BodiesV0, V0
}

fn entity(id: &BodyId) -> pb::EntityIdentifier {
    pb::EntityIdentifier {
        id: id.as_str().to_string(),
    }
}

fn ids(bodies: &[BodyId]) -> Vec<String> {
    bodies.iter().map(|b| b.as_str().to_string()).collect()
}

#[async_trait]
impl BodyService for BodiesV0 {
    async fn create_sphere_body(
        &self,
        name: &str,
        parent: &ComponentId,
        center: Point3D,
        radius: Distance,
    ) -> ServiceResult<BodyInfo> {
        let request = pb::CreateSphereBodyRequest {
            name: name.to_string(),
            parent: parent.as_str().to_string(),
            center: Some(point(center)),
            radius: radius.as_meters(),
        };
        let body = call(&*self.connection, CREATE_SPHERE_BODY, &request).await?;
        body_from(body, CREATE_SPHERE_BODY)
    }

    async fn create_extruded_body(
        &self,
        name: &str,
        parent: &ComponentId,
        profile: &SketchProfile,
        distance: Distance,
    ) -> ServiceResult<BodyInfo> {
        let request = pb::CreateExtrudedBodyRequest {
            name: name.to_string(),
            parent: parent.as_str().to_string(),
            geometries: Some(geometries(profile)),
            distance: distance.as_meters(),
        };
        let body = call(&*self.connection, CREATE_EXTRUDED_BODY, &request).await?;
        body_from(body, CREATE_EXTRUDED_BODY)
    }

    async fn create_planar_body(
        &self,
        name: &str,
        parent: &ComponentId,
        profile: &SketchProfile,
    ) -> ServiceResult<BodyInfo> {
        let request = pb::CreatePlanarBodyRequest {
            name: name.to_string(),
            parent: parent.as_str().to_string(),
            geometries: Some(geometries(profile)),
        };
        let body = call(&*self.connection, CREATE_PLANAR_BODY, &request).await?;
        body_from(body, CREATE_PLANAR_BODY)
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
            distance: distance.as_meters(),
        };
        let _: pb::Empty = call(&*self.connection, TRANSLATE, &request).await?;
        Ok(())
    }

    async fn delete(&self, body: &BodyId) -> ServiceResult<()> {
        let _: pb::Empty = call(&*self.connection, DELETE, &entity(body)).await?;
        Ok(())
    }

    async fn get_volume(&self, body: &BodyId) -> ServiceResult<f64> {
        let r: pb::DoubleResponse = call(&*self.connection, GET_VOLUME, &entity(body)).await?;
        Ok(r.value)
    }

    async fn get_bounding_box(&self, body: &BodyId) -> ServiceResult<BoundingBox> {
        let r: pb::BoundingBoxResponse =
            call(&*self.connection, GET_BOUNDING_BOX, &entity(body)).await?;
        Ok(BoundingBox {
            min: point_from(required(r.min, GET_BOUNDING_BOX, "min")?),
            max: point_from(required(r.max, GET_BOUNDING_BOX, "max")?),
        })
    }

    async fn get_color(&self, body: &BodyId) -> ServiceResult<Color> {
        let r: pb::ColorResponse = call(&*self.connection, GET_COLOR, &entity(body)).await?;
        Color::from_hex(&r.color).ok_or_else(|| {
            ServiceError::malformed(GET_COLOR.operation, format!("invalid color '{}'", r.color))
        })
    }

    async fn set_color(&self, body: &BodyId, color: Color) -> ServiceResult<()> {
        let request = pb::SetColorRequest {
            id: body.as_str().to_string(),
            color: color.to_hex(),
        };
        let _: pb::Empty = call(&*self.connection, SET_COLOR, &request).await?;
        Ok(())
    }

    async fn is_suppressed(&self, body: &BodyId) -> ServiceResult<bool> {
        let r: pb::BoolResponse = call(&*self.connection, IS_SUPPRESSED, &entity(body)).await?;
        Ok(r.result)
    }

    async fn set_suppressed(&self, bodies: &[BodyId], suppressed: bool) -> ServiceResult<()> {
        let request = pb::SetSuppressedRequest {
            ids: ids(bodies),
            is_suppressed: suppressed,
        };
        let _: pb::Empty = call(&*self.connection, SET_SUPPRESSED, &request).await?;
        Ok(())
    }

    async fn get_faces(&self, body: &BodyId) -> ServiceResult<Vec<FaceInfo>> {
        let r: pb::GetFacesResponse = call(&*self.connection, GET_FACES, &entity(body)).await?;
        r.faces
            .into_iter()
            .map(|f| face_from(f, GET_FACES))
            .collect()
    }

    async fn get_edges(&self, body: &BodyId) -> ServiceResult<Vec<EdgeInfo>> {
        let r: pb::GetEdgesResponse = call(&*self.connection, GET_EDGES, &entity(body)).await?;
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
            body: target.as_str().to_string(),
            tool_bodies: ids(tools),
            method: kind.as_str().to_string(),
        };
        let _: pb::Empty = call(&*self.connection, BOOLEAN, &request).await?;
        Ok(())
    }

    async fn get_tessellation(&self, body: &BodyId) -> ServiceResult<Tessellation> {
        let r: pb::GetTessellationResponse =
            call(&*self.connection, GET_TESSELLATION, &entity(body)).await?;
        merge_face_meshes(r)
    }

    async fn shell_body(&self, _body: &BodyId, _offset: Distance) -> ServiceResult<bool> {
        Err(ServiceError::not_implemented(ServiceKind::Bodies, "shell_body", ProtocolVersion::V0))
    }
}

/// Joins the per-face meshes into one, triangulating polygons as fans.
///
/// Faces are merged in id order so the result is deterministic.
fn merge_face_meshes(response: pb::GetTessellationResponse) -> ServiceResult<Tessellation> {
    let malformed = |reason: &str| ServiceError::malformed(GET_TESSELLATION.operation, reason);

    let mut faces: Vec<_> = response.face_tessellation.into_iter().collect();
    faces.sort_by(|a, b| a.0.cmp(&b.0));

    let mut mesh = Tessellation::default();
    for (_, face) in faces {
        if face.vertices.len() % 3 != 0 {
            return Err(malformed("vertex array length is not a multiple of 3"));
        }
        let base = u32::try_from(mesh.vertices.len())
            .map_err(|_| malformed("too many vertices"))?;
        let local_count = face.vertices.len() / 3;
        mesh.vertices.extend(
            face.vertices
                .chunks_exact(3)
                .map(|c| Point3D::new(c[0], c[1], c[2])),
        );

        let index = |raw: i32| -> ServiceResult<u32> {
            usize::try_from(raw)
                .ok()
                .filter(|i| *i < local_count)
                .and_then(|i| u32::try_from(i).ok())
                .map(|i| base + i)
                .ok_or_else(|| malformed("vertex index out of range"))
        };

        let mut rest = face.faces.as_slice();
        while let Some((&n, tail)) = rest.split_first() {
            let n = usize::try_from(n)
                .ok()
                .filter(|n| *n >= 3 && *n <= tail.len())
                .ok_or_else(|| malformed("invalid polygon size"))?;
            let (polygon, next) = tail.split_at(n);
            let first = index(polygon[0])?;
            for pair in polygon[1..].windows(2) {
                let triangle = [first, index(pair[0])?, index(pair[1])?];
                mesh.triangles.push(triangle);
            }
            rest = next;
        }
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn adapter() -> (Arc<ScriptedConnection>, BodiesV0) {
        let conn = Arc::new(ScriptedConnection::new());
        (conn.clone(), BodiesV0::new(conn))
    }

    fn body(id: &str) -> pb::Body {
        pb::Body {
            id: id.to_string(),
            name: "ball".to_string(),
            parent_id: "comp-1".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn sphere_is_sent_in_plain_meters() {
        let (conn, bodies) = adapter();
        conn.respond(CREATE_SPHERE_BODY.path, &body("b-1"));
        let info = bodies
            .create_sphere_body(
                "ball",
                &ComponentId::new("comp-1").unwrap(),
                Point3D::new(0.0, 0.0, 0.5),
                Distance::from_millimeters(20.0).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(info.id.as_str(), "b-1");
        assert_eq!(info.parent, ComponentId::new("comp-1"));
        assert_eq!(info.master_id, None);

        let sent: pb::CreateSphereBodyRequest =
            conn.last_request(CREATE_SPHERE_BODY.path).unwrap();
        assert_eq!(sent.parent, "comp-1");
        assert_eq!(sent.radius, 0.02);
        let center = sent.center.unwrap();
        assert_eq!((center.x, center.y, center.z), (0.0, 0.0, 0.5));
    }

    #[tokio::test]
    async fn color_travels_as_hex() {
        let (conn, bodies) = adapter();
        let id = BodyId::new("b-1").unwrap();
        conn.respond(SET_COLOR.path, &pb::Empty {});
        bodies.set_color(&id, Color::rgb(255, 0, 16)).await.unwrap();
        let sent: pb::SetColorRequest = conn.last_request(SET_COLOR.path).unwrap();
        assert_eq!(sent.color, "#FF0010FF");

        conn.respond(
            GET_COLOR.path,
            &pb::ColorResponse {
                color: "#00ff00".to_string(),
            },
        );
        assert_eq!(bodies.get_color(&id).await.unwrap(), Color::rgb(0, 255, 0));

        conn.respond(
            GET_COLOR.path,
            &pb::ColorResponse {
                color: "green".to_string(),
            },
        );
        assert!(matches!(
            bodies.get_color(&id).await,
            Err(ServiceError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn shell_body_is_not_implemented_without_network() {
        let (conn, bodies) = adapter();
        let err = bodies
            .shell_body(
                &BodyId::new("b-1").unwrap(),
                Distance::from_meters(0.001).unwrap(),
            )
            .await
            .unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(conn.call_count(), 0);
    }

    #[tokio::test]
    async fn face_meshes_are_merged_with_offsets() {
        let (conn, bodies) = adapter();
        let square = pb::FaceTessellation {
            vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            faces: vec![4, 0, 1, 2, 3],
        };
        let triangle = pb::FaceTessellation {
            vertices: vec![0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0],
            faces: vec![3, 0, 1, 2],
        };
        conn.respond(
            GET_TESSELLATION.path,
            &pb::GetTessellationResponse {
                face_tessellation: HashMap::from([
                    ("f-a".to_string(), square),
                    ("f-b".to_string(), triangle),
                ]),
            },
        );
        let mesh = bodies
            .get_tessellation(&BodyId::new("b-1").unwrap())
            .await
            .unwrap();
        assert_eq!(mesh.vertices.len(), 7);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [0, 2, 3], [4, 5, 6]]);
    }

    #[tokio::test]
    async fn bad_polygon_index_is_malformed() {
        let (conn, bodies) = adapter();
        conn.respond(
            GET_TESSELLATION.path,
            &pb::GetTessellationResponse {
                face_tessellation: HashMap::from([(
                    "f".to_string(),
                    pb::FaceTessellation {
                        vertices: vec![0.0; 9],
                        faces: vec![3, 0, 1, 7],
                    },
                )]),
            },
        );
        let err = bodies
            .get_tessellation(&BodyId::new("b-1").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn suppression_is_one_flag_for_many_bodies() {
        let (conn, bodies) = adapter();
        conn.respond(SET_SUPPRESSED.path, &pb::Empty {});
        let ids = [BodyId::new("a").unwrap(), BodyId::new("b").unwrap()];
        bodies.set_suppressed(&ids, true).await.unwrap();
        let sent: pb::SetSuppressedRequest = conn.last_request(SET_SUPPRESSED.path).unwrap();
        assert_eq!(sent.ids, vec!["a", "b"]);
        assert!(sent.is_suppressed);
    }
}
