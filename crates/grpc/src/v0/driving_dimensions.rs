//! `geometry.v0.DrivingDimensions`.

use async_trait::async_trait;
use geometry::services::{DrivingDimensionService, Parameter, ParameterUpdateStatus};
use geometry::ServiceResult;

use super::conversions::{driving_dimension, parameter_from, update_status};
use super::messages as pb;
use crate::call::{call, Rpc};

const GET_ALL: Rpc = Rpc::new(
    "driving_dimensions.get_all_parameters",
    "/geometry.v0.DrivingDimensions/GetAll",
);
const UPDATE: Rpc = Rpc::new(
    "driving_dimensions.set_dimension_value",
    "/geometry.v0.DrivingDimensions/UpdateDimension",
);

adapter! {
    DrivingDimensionsV0, V0
}

#[async_trait]
impl DrivingDimensionService for DrivingDimensionsV0 {
    async fn get_all_parameters(&self) -> ServiceResult<Vec<Parameter>> {
        let r: pb::GetAllParametersResponse =
            call(&*self.connection, GET_ALL, &pb::Empty {}).await?;
        r.driving_dimensions
            .into_iter()
            .map(|d| parameter_from(d, GET_ALL))
            .collect()
    }

    async fn set_dimension_value(
        &self,
        parameter: &Parameter,
    ) -> ServiceResult<ParameterUpdateStatus> {
        let request = pb::SetDimensionValueRequest {
            driving_dimension: Some(driving_dimension(parameter)),
        };
        let r: pb::SetDimensionValueResponse = call(&*self.connection, UPDATE, &request).await?;
        Ok(update_status(r.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::services::DimensionType;
    use geometry::ParameterId;
    use std::sync::Arc;

    #[tokio::test]
    async fn constrained_update_is_reported() {
        let conn = Arc::new(ScriptedConnection::new());
        let dims = DrivingDimensionsV0::new(conn.clone());
        conn.respond(UPDATE.path, &pb::SetDimensionValueResponse { status: 4 });
        let parameter = Parameter {
            id: ParameterId::new("p-1").unwrap(),
            name: "width".to_string(),
            dimension_type: DimensionType::Linear,
            value: 0.02,
        };
        let status = dims.set_dimension_value(&parameter).await.unwrap();
        assert_eq!(status, ParameterUpdateStatus::ConstrainedParameters);
        let sent: pb::SetDimensionValueRequest = conn.last_request(UPDATE.path).unwrap();
        let sent = sent.driving_dimension.unwrap();
        assert_eq!(sent.dimension_type, 1);
        assert_eq!(sent.dimension_value, 0.02);
    }

    #[tokio::test]
    async fn empty_parameter_id_is_malformed() {
        let conn = Arc::new(ScriptedConnection::new());
        let dims = DrivingDimensionsV0::new(conn.clone());
        conn.respond(
            GET_ALL.path,
            &pb::GetAllParametersResponse {
                driving_dimensions: vec![pb::DrivingDimension::default()],
            },
        );
        assert!(dims.get_all_parameters().await.is_err());
    }
}
