//! Miscellaneous design commands.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::entities::BodyInfo;
use crate::types::SketchProfile;
use crate::{ComponentId, ServiceResult};

/// Options for lofting between profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoftOptions {
    /// Close the loft back onto the first profile.
    pub periodic: bool,
    /// Use straight (ruled) sections between profiles.
    pub ruled: bool,
}

#[async_trait]
pub trait CommandService: ServiceAdapter {
    /// Stamps an export identifier onto the entity with this moniker.
    async fn set_export_id(&self, moniker: &str, value: &str) -> ServiceResult<()>;

    /// Creates a body by lofting through two or more profiles.
    async fn create_body_from_loft(
        &self,
        name: &str,
        parent: &ComponentId,
        profiles: &[SketchProfile],
        options: LoftOptions,
    ) -> ServiceResult<BodyInfo>;
}
