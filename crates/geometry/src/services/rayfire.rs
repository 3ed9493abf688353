//! Ray casting against bodies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::types::{Distance, Point3D, UnitVector};
use crate::{BodyId, FaceId, ServiceResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3D,
    pub direction: UnitVector,
}

/// Where a ray hit a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Index of the ray in the request.
    pub ray_index: usize,
    pub face: FaceId,
    pub point: Point3D,
    pub normal: UnitVector,
}

#[async_trait]
pub trait RayfireService: ServiceAdapter {
    /// Fires rays at a body and returns every hit within `max_distance`.
    async fn fire_rays(
        &self,
        body: &BodyId,
        rays: &[Ray],
        max_distance: Distance,
    ) -> ServiceResult<Vec<RayHit>>;

    /// Like [`fire_rays`](Self::fire_rays), but hits are sorted by ray index
    /// and then by distance along the ray.
    async fn fire_ordered_rays(
        &self,
        body: &BodyId,
        rays: &[Ray],
        max_distance: Distance,
    ) -> ServiceResult<Vec<RayHit>>;
}
