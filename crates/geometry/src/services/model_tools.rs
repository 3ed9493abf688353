//! Direct-modeling tools: fillet, chamfer, move.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::types::{Angle, Axis, Distance, UnitVector};
use crate::{EntityRef, FaceId, ServiceResult};

/// Chamfer geometry: setback distance and the angle of the chamfer face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChamferSpec {
    pub distance: Distance,
    pub angle: Angle,
}

#[async_trait]
pub trait ModelToolsService: ServiceAdapter {
    /// Chamfers edges or faces. Returns `true` on success.
    async fn chamfer(&self, selection: &[EntityRef], spec: ChamferSpec) -> ServiceResult<bool>;

    /// Rounds edges or faces with a constant radius. Returns `true` on success.
    async fn fillet(&self, selection: &[EntityRef], radius: Distance) -> ServiceResult<bool>;

    /// Replaces each face with a full round. Returns `true` on success.
    async fn full_fillet(&self, faces: &[FaceId]) -> ServiceResult<bool>;

    async fn move_translate(
        &self,
        selection: &[EntityRef],
        direction: UnitVector,
        distance: Distance,
    ) -> ServiceResult<bool>;

    async fn move_rotate(
        &self,
        selection: &[EntityRef],
        axis: Axis,
        angle: Angle,
    ) -> ServiceResult<bool>;
}
