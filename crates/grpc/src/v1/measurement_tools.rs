//! `geometry.v1.MeasureToolsService`. Any entity kind can be measured.

use async_trait::async_trait;
use geometry::services::{Gap, MeasurementToolsService};
use geometry::{EntityRef, ServiceResult};

use super::conversions::{distance_from, entity};
use super::messages as pb;
use crate::call::{call, Rpc};

const MIN_DISTANCE: Rpc = Rpc::new(
    "measurement_tools.min_distance_between_objects",
    "/geometry.v1.MeasureToolsService/MinDistanceBetweenObjects",
);

adapter! {
    MeasurementToolsV1, V1
}

#[async_trait]
impl MeasurementToolsService for MeasurementToolsV1 {
    async fn min_distance_between_objects(
        &self,
        first: &EntityRef,
        second: &EntityRef,
    ) -> ServiceResult<Gap> {
        let request = pb::MinDistanceRequest {
            selection: vec![entity(first.as_str()), entity(second.as_str())],
        };
        let r: pb::MinDistanceResponse = call(&*self.connection, MIN_DISTANCE, &request).await?;
        Ok(Gap {
            distance: distance_from(r.distance, MIN_DISTANCE, "distance")?,
        })
    }
}
