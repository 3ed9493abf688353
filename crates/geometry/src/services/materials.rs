//! Materials registered in the active design.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::{MaterialName, ServiceResult};

/// One physical property of a material (density, Poisson's ratio, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperty {
    /// Server property key (e.g. `"Density"`).
    pub id: String,
    pub display_name: String,
    pub value: f64,
    /// Unit label as understood by the server (e.g. `"kg m^-3"`).
    pub units: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: MaterialName,
    pub properties: Vec<MaterialProperty>,
}

#[async_trait]
pub trait MaterialService: ServiceAdapter {
    async fn add_material(&self, material: &Material) -> ServiceResult<()>;

    async fn remove_material(&self, name: &MaterialName) -> ServiceResult<()>;
}
