//! Assembly tree: components and their placement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::entities::ComponentInfo;
use crate::types::{Angle, Point3D, UnitVector};
use crate::{ComponentId, ServiceResult};

/// How bodies of a component share topology at their interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedTopology {
    None,
    Share,
    Merge,
    Groups,
}

/// A rigid placement relative to the parent component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub translation: Option<Point3D>,
    pub rotation_axis: Option<(Point3D, UnitVector)>,
    pub rotation_angle: Option<Angle>,
}

#[async_trait]
pub trait ComponentService: ServiceAdapter {
    /// Creates a component under `parent`, optionally instancing `template`.
    async fn create(
        &self,
        name: &str,
        parent: &ComponentId,
        template: Option<&ComponentId>,
    ) -> ServiceResult<ComponentInfo>;

    async fn set_name(&self, component: &ComponentId, name: &str) -> ServiceResult<()>;

    async fn set_placement(&self, component: &ComponentId, placement: Placement)
        -> ServiceResult<()>;

    async fn set_shared_topology(
        &self,
        component: &ComponentId,
        topology: SharedTopology,
    ) -> ServiceResult<()>;

    async fn delete(&self, component: &ComponentId) -> ServiceResult<()>;
}
