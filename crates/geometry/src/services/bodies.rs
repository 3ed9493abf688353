//! Body creation, transformation and queries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::entities::{BodyInfo, EdgeInfo, FaceInfo};
use crate::types::{BoundingBox, Color, Distance, Point3D, SketchProfile, Tessellation, UnitVector};
use crate::{BodyId, ComponentId, ServiceResult};

/// Boolean operation between a target body and tool bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanKind {
    Unite,
    Subtract,
    Intersect,
}

impl BooleanKind {
    /// Operation name as used on the wire by both protocol generations.
    pub fn as_str(self) -> &'static str {
        match self {
            BooleanKind::Unite => "unite",
            BooleanKind::Subtract => "subtract",
            BooleanKind::Intersect => "intersect",
        }
    }
}

#[async_trait]
pub trait BodyService: ServiceAdapter {
    /// Creates a solid sphere in `parent`.
    async fn create_sphere_body(
        &self,
        name: &str,
        parent: &ComponentId,
        center: Point3D,
        radius: Distance,
    ) -> ServiceResult<BodyInfo>;

    /// Extrudes a closed profile along its plane normal by `distance`.
    /// A negative distance extrudes the opposite way.
    async fn create_extruded_body(
        &self,
        name: &str,
        parent: &ComponentId,
        profile: &SketchProfile,
        distance: Distance,
    ) -> ServiceResult<BodyInfo>;

    /// Creates a planar surface body bounded by a closed profile.
    async fn create_planar_body(
        &self,
        name: &str,
        parent: &ComponentId,
        profile: &SketchProfile,
    ) -> ServiceResult<BodyInfo>;

    /// Translates bodies along `direction` by `distance`.
    async fn translate(
        &self,
        bodies: &[BodyId],
        direction: UnitVector,
        distance: Distance,
    ) -> ServiceResult<()>;

    async fn delete(&self, body: &BodyId) -> ServiceResult<()>;

    /// Volume in cubic meters.
    async fn get_volume(&self, body: &BodyId) -> ServiceResult<f64>;

    async fn get_bounding_box(&self, body: &BodyId) -> ServiceResult<BoundingBox>;

    async fn get_color(&self, body: &BodyId) -> ServiceResult<Color>;

    async fn set_color(&self, body: &BodyId, color: Color) -> ServiceResult<()>;

    async fn is_suppressed(&self, body: &BodyId) -> ServiceResult<bool>;

    async fn set_suppressed(&self, bodies: &[BodyId], suppressed: bool) -> ServiceResult<()>;

    async fn get_faces(&self, body: &BodyId) -> ServiceResult<Vec<FaceInfo>>;

    async fn get_edges(&self, body: &BodyId) -> ServiceResult<Vec<EdgeInfo>>;

    /// Combines `tools` into `target`. The tool bodies are consumed.
    async fn boolean(
        &self,
        target: &BodyId,
        tools: &[BodyId],
        kind: BooleanKind,
    ) -> ServiceResult<()>;

    /// Returns the server-computed triangle mesh of a body.
    async fn get_tessellation(&self, body: &BodyId) -> ServiceResult<Tessellation>;

    /// Hollows a solid to a shell of `offset` thickness. Returns `true` on success.
    async fn shell_body(&self, body: &BodyId, offset: Distance) -> ServiceResult<bool>;
}
