//! `geometry.v0.MeasureTools`.

use async_trait::async_trait;
use geometry::services::{Gap, MeasurementToolsService};
use geometry::{EntityRef, ServiceError, ServiceResult};

use super::conversions::distance_from;
use super::messages as pb;
use crate::call::{call, Rpc};

const MIN_DISTANCE: Rpc = Rpc::new(
    "measurement_tools.min_distance_between_objects",
    "/geometry.v0.MeasureTools/MinDistanceBetweenObjects",
);

adapter! {
    MeasurementToolsV0, V0
}

fn body_id(entity: &EntityRef) -> ServiceResult<String> {
    match entity {
        EntityRef::Body(id) => Ok(id.as_str().to_string()),
        other => Err(ServiceError::invalid_argument(
            MIN_DISTANCE.operation,
            format!(
                "only bodies can be measured on this server, got '{}'",
                other.as_str()
            ),
        )),
    }
}

#[async_trait]
impl MeasurementToolsService for MeasurementToolsV0 {
    async fn min_distance_between_objects(
        &self,
        first: &EntityRef,
        second: &EntityRef,
    ) -> ServiceResult<Gap> {
        let request = pb::MinDistanceRequest {
            bodies: vec![body_id(first)?, body_id(second)?],
        };
        let r: pb::MinDistanceResponse = call(&*self.connection, MIN_DISTANCE, &request).await?;
        Ok(Gap {
            distance: distance_from(r.distance, MIN_DISTANCE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::{BodyId, FaceId};
    use std::sync::Arc;

    #[tokio::test]
    async fn bodies_are_measured() {
        let conn = Arc::new(ScriptedConnection::new());
        let tools = MeasurementToolsV0::new(conn.clone());
        conn.respond(
            MIN_DISTANCE.path,
            &pb::MinDistanceResponse { distance: 0.004 },
        );
        let gap = tools
            .min_distance_between_objects(
                &EntityRef::Body(BodyId::new("a").unwrap()),
                &EntityRef::Body(BodyId::new("b").unwrap()),
            )
            .await
            .unwrap();
        assert_eq!(gap.distance.as_meters(), 0.004);
    }

    #[tokio::test]
    async fn faces_cannot_be_measured() {
        let conn = Arc::new(ScriptedConnection::new());
        let tools = MeasurementToolsV0::new(conn.clone());
        let err = tools
            .min_distance_between_objects(
                &EntityRef::Face(FaceId::new("f").unwrap()),
                &EntityRef::Body(BodyId::new("b").unwrap()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument { .. }));
        assert_eq!(conn.call_count(), 0);
    }
}
