//! Driving dimensions (design parameters).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::{ParameterId, ServiceResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionType {
    Linear,
    Angular,
    Unknown,
}

/// A driving dimension. `value` is in meters for linear dimensions and
/// radians for angular ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParameterId,
    pub name: String,
    pub dimension_type: DimensionType,
    pub value: f64,
}

/// Outcome of updating a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterUpdateStatus {
    Success,
    /// The update failed and the model was restored.
    FailedToUpdate,
    /// The update failed and the model could not be restored.
    FailedToRestore,
    /// Other parameters constrain this one.
    ConstrainedParameters,
    Unknown,
}

#[async_trait]
pub trait DrivingDimensionService: ServiceAdapter {
    async fn get_all_parameters(&self) -> ServiceResult<Vec<Parameter>>;

    async fn set_dimension_value(&self, parameter: &Parameter)
        -> ServiceResult<ParameterUpdateStatus>;
}
