//! Measurements between entities.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::types::Distance;
use crate::{EntityRef, ServiceResult};

/// The minimum gap between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub distance: Distance,
}

#[async_trait]
pub trait MeasurementToolsService: ServiceAdapter {
    async fn min_distance_between_objects(
        &self,
        first: &EntityRef,
        second: &EntityRef,
    ) -> ServiceResult<Gap>;
}
