//! Operations on free-standing design curves.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::types::{Angle, Axis, Point3D};
use crate::{BodyId, CurveId, ServiceResult};

/// Parameters of a revolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevolveOptions {
    pub axis: Axis,
    pub angle: Angle,
    /// Revolve half the angle to each side of the profile.
    pub symmetric: bool,
}

#[async_trait]
pub trait CurveService: ServiceAdapter {
    /// Revolves curves into a surface body.
    async fn revolve_edges(
        &self,
        curves: &[CurveId],
        options: RevolveOptions,
    ) -> ServiceResult<BodyId>;

    /// Intersection points of two curves.
    async fn intersect_curves(
        &self,
        first: &CurveId,
        second: &CurveId,
    ) -> ServiceResult<Vec<Point3D>>;
}
