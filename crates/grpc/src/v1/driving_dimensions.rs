//! `geometry.v1.DrivingDimensionsService`.

use async_trait::async_trait;
use geometry::services::{DrivingDimensionService, Parameter, ParameterUpdateStatus};
use geometry::ServiceResult;

use super::conversions::{driving_dimension, parameter_from, update_status};
use super::messages as pb;
use crate::call::{call, Rpc};

const GET_ALL: Rpc = Rpc::new(
    "driving_dimensions.get_all_parameters",
    "/geometry.v1.DrivingDimensionsService/GetAllParameters",
);
const UPDATE: Rpc = Rpc::new(
    "driving_dimensions.set_dimension_value",
    "/geometry.v1.DrivingDimensionsService/UpdateParameter",
);

adapter! {
    DrivingDimensionsV1, V1
}

#[async_trait]
impl DrivingDimensionService for DrivingDimensionsV1 {
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
        Ok(update_status(&r.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use crate::v1::conversions::{entity, quantity};
    use geometry::services::DimensionType;
    use std::sync::Arc;

    #[tokio::test]
    async fn parameters_unwrap_value_envelopes() {
        let conn = Arc::new(ScriptedConnection::new());
        let dims = DrivingDimensionsV1::new(conn.clone());
        conn.respond(
            GET_ALL.path,
            &pb::GetAllParametersResponse {
                driving_dimensions: vec![pb::DrivingDimension {
                    id: Some(entity("p-1")),
                    name: "angle".to_string(),
                    dimension_type: "DIMENSIONTYPE_ANGULAR".to_string(),
                    dimension_value: Some(quantity(0.75)),
                }],
            },
        );
        let params = dims.get_all_parameters().await.unwrap();
        assert_eq!(params[0].dimension_type, DimensionType::Angular);
        assert_eq!(params[0].value, 0.75);

        conn.respond(
            UPDATE.path,
            &pb::SetDimensionValueResponse {
                status: "UPDATESTATUS_SUCCESS".to_string(),
            },
        );
        let status = dims.set_dimension_value(&params[0]).await.unwrap();
        assert_eq!(status, ParameterUpdateStatus::Success);
    }
}
