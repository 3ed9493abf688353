//! `geometry.v1.CoordinateSystemService`.

use async_trait::async_trait;
use geometry::entities::CoordinateSystemInfo;
use geometry::services::CoordinateSystemService;
use geometry::types::Frame;
use geometry::{ComponentId, ServiceError, ServiceResult};

use super::conversions::{coordinate_system_from, entity, frame};
use super::messages as pb;
use crate::call::{call, Rpc};

const CREATE: Rpc = Rpc::new(
    "coordinate_systems.create",
    "/geometry.v1.CoordinateSystemService/Create",
);

adapter! {
    CoordinateSystemsV1, V1
}

#[async_trait]
impl CoordinateSystemService for CoordinateSystemsV1 {
    async fn create(
        &self,
        parent: &ComponentId,
        name: &str,
        placement: Frame,
    ) -> ServiceResult<CoordinateSystemInfo> {
        let request = pb::CreateCoordinateSystemRequest {
            request_data: vec![pb::CreateCoordinateSystemRequestData {
                parent_id: Some(entity(parent.as_str())),
                name: name.to_string(),
                frame: Some(frame(placement)),
            }],
        };
        let r: pb::CreateCoordinateSystemResponse =
            call(&*self.connection, CREATE, &request).await?;
        let created = r
            .coordinate_systems
            .into_iter()
            .next()
            .ok_or_else(|| {
                ServiceError::malformed(CREATE.operation, "no coordinate system created")
            })?;
        coordinate_system_from(created, CREATE)
    }
}
