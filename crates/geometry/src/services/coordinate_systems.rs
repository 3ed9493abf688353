//! Coordinate system creation.

use async_trait::async_trait;

use super::ServiceAdapter;
use crate::entities::CoordinateSystemInfo;
use crate::types::Frame;
use crate::{ComponentId, ServiceResult};

#[async_trait]
pub trait CoordinateSystemService: ServiceAdapter {
    async fn create(
        &self,
        parent: &ComponentId,
        name: &str,
        frame: Frame,
    ) -> ServiceResult<CoordinateSystemInfo>;
}
