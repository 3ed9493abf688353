//! `geometry.v0.Rayfire`. Only v0 servers expose ray casting.

use async_trait::async_trait;
use geometry::services::{Ray, RayHit, RayfireService};
use geometry::types::Distance;
use geometry::{BodyId, FaceId, ServiceError, ServiceResult};

use super::conversions::{direction, direction_from, point, point_from};
use super::messages as pb;
use crate::call::{call, required, Rpc};

const FIRE: Rpc = Rpc::new("rayfire.fire_rays", "/geometry.v0.Rayfire/Fire");
const FIRE_ORDERED: Rpc = Rpc::new(
    "rayfire.fire_ordered_rays",
    "/geometry.v0.Rayfire/FireOrdered",
);

adapter! {
    RayfireV0, V0
}

impl RayfireV0 {
    async fn fire(
        &self,
        rpc: Rpc,
        body: &BodyId,
        rays: &[Ray],
        max_distance: Distance,
    ) -> ServiceResult<Vec<RayHit>> {
        let request = pb::FireRaysRequest {
            body: body.as_str().to_string(),
            rays: rays
                .iter()
                .map(|r| pb::Ray {
                    origin: Some(point(r.origin)),
                    direction: Some(direction(r.direction)),
                })
                .collect(),
            max_distance: max_distance.as_meters(),
        };
        let response: pb::FireRaysResponse = call(&*self.connection, rpc, &request).await?;
        response
            .hits
            .into_iter()
            .map(|hit| hit_from(hit, rays.len(), rpc))
            .collect()
    }
}

fn hit_from(hit: pb::RayHit, ray_count: usize, rpc: Rpc) -> ServiceResult<RayHit> {
    let ray_index = usize::try_from(hit.ray_index)
        .ok()
        .filter(|i| *i < ray_count)
        .ok_or_else(|| {
            ServiceError::malformed(
                rpc.operation,
                format!(
                    "ray index {} out of range for {ray_count} rays",
                    hit.ray_index
                ),
            )
        })?;
    Ok(RayHit {
        ray_index,
        face: FaceId::new(hit.face)
            .ok_or_else(|| ServiceError::malformed(rpc.operation, "empty face id"))?,
        point: point_from(required(hit.point, rpc, "point")?),
        normal: direction_from(required(hit.normal, rpc, "normal")?, rpc)?,
    })
}

#[async_trait]
impl RayfireService for RayfireV0 {
    async fn fire_rays(
        &self,
        body: &BodyId,
        rays: &[Ray],
        max_distance: Distance,
    ) -> ServiceResult<Vec<RayHit>> {
        self.fire(FIRE, body, rays, max_distance).await
    }

    async fn fire_ordered_rays(
        &self,
        body: &BodyId,
        rays: &[Ray],
        max_distance: Distance,
    ) -> ServiceResult<Vec<RayHit>> {
        self.fire(FIRE_ORDERED, body, rays, max_distance).await
    }
}
