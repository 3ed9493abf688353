//! `geometry.v0.Patterns`.

use async_trait::async_trait;
use geometry::services::{CircularPatternSpec, FillPatternSpec, LinearPatternSpec, PatternService};
use geometry::{EntityRef, ServiceError, ServiceResult};

use super::messages as pb;
use crate::call::{call, Rpc};

const CREATE_LINEAR: Rpc = Rpc::new(
    "patterns.create_linear_pattern",
    "/geometry.v0.Patterns/CreateLinearPattern",
);
const MODIFY_LINEAR: Rpc = Rpc::new(
    "patterns.modify_linear_pattern",
    "/geometry.v0.Patterns/ModifyLinearPattern",
);
const CREATE_CIRCULAR: Rpc = Rpc::new(
    "patterns.create_circular_pattern",
    "/geometry.v0.Patterns/CreateCircularPattern",
);
const CREATE_FILL: Rpc = Rpc::new(
    "patterns.create_fill_pattern",
    "/geometry.v0.Patterns/CreateFillPattern",
);
const UPDATE_FILL: Rpc = Rpc::new(
    "patterns.update_fill_pattern",
    "/geometry.v0.Patterns/UpdateFillPattern",
);

adapter! {
    PatternsV0, V0
}

pub(crate) fn selection(entities: &[EntityRef]) -> Vec<String> {
    entities.iter().map(|e| e.as_str().to_string()).collect()
}

/// Counts are `int32` on the wire.
fn count(rpc: Rpc, value: u32) -> ServiceResult<i32> {
    i32::try_from(value).map_err(|_| {
        ServiceError::invalid_argument(rpc.operation, format!("count {value} too large"))
    })
}

#[async_trait]
impl PatternService for PatternsV0 {
    async fn create_linear_pattern(&self, spec: &LinearPatternSpec) -> ServiceResult<bool> {
        let request = pb::LinearPatternRequest {
            selection: selection(&spec.selection),
            linear_direction: spec.direction.as_str().to_string(),
            count_x: count(CREATE_LINEAR, spec.count_x)?,
            pitch_x: spec.pitch_x.as_meters(),
            two_dimensional: spec.two_dimensional,
            count_y: count(CREATE_LINEAR, spec.count_y)?,
            pitch_y: spec.pitch_y.as_meters(),
        };
        let r: pb::BoolResponse = call(&*self.connection, CREATE_LINEAR, &request).await?;
        Ok(r.result)
    }

    async fn modify_linear_pattern(&self, spec: &LinearPatternSpec) -> ServiceResult<bool> {
        let request = pb::ModifyLinearPatternRequest {
            selection: selection(&spec.selection),
            count_x: count(MODIFY_LINEAR, spec.count_x)?,
            pitch_x: spec.pitch_x.as_meters(),
            count_y: count(MODIFY_LINEAR, spec.count_y)?,
            pitch_y: spec.pitch_y.as_meters(),
        };
        let r: pb::BoolResponse = call(&*self.connection, MODIFY_LINEAR, &request).await?;
        Ok(r.result)
    }

    async fn create_circular_pattern(&self, spec: &CircularPatternSpec) -> ServiceResult<bool> {
        let request = pb::CircularPatternRequest {
            selection: selection(&spec.selection),
            circular_axis: spec.axis.as_str().to_string(),
            circular_count: count(CREATE_CIRCULAR, spec.circular_count)?,
            circular_angle: spec.circular_angle.as_radians(),
            two_dimensional: spec.radial_count.is_some(),
            linear_count: count(CREATE_CIRCULAR, spec.radial_count.unwrap_or(0))?,
            linear_pitch: spec.radial_pitch.map_or(0.0, |p| p.as_meters()),
        };
        let r: pb::BoolResponse = call(&*self.connection, CREATE_CIRCULAR, &request).await?;
        Ok(r.result)
    }

    async fn create_fill_pattern(&self, spec: &FillPatternSpec) -> ServiceResult<bool> {
        let request = pb::FillPatternRequest {
            selection: selection(&spec.selection),
            region: spec.region.as_str().to_string(),
            linear_direction: spec.direction.as_str().to_string(),
            margin: spec.margin.as_meters(),
            x_spacing: spec.x_spacing.as_meters(),
            y_spacing: spec.y_spacing.as_meters(),
            row_x_offset: spec.row_x_offset.as_meters(),
            row_y_offset: spec.row_y_offset.as_meters(),
        };
        let r: pb::BoolResponse = call(&*self.connection, CREATE_FILL, &request).await?;
        Ok(r.result)
    }

    async fn update_fill_pattern(&self, entities: &[EntityRef]) -> ServiceResult<bool> {
        let request = pb::SelectionRequest {
            selection: selection(entities),
        };
        let r: pb::BoolResponse = call(&*self.connection, UPDATE_FILL, &request).await?;
        Ok(r.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::types::{Angle, Distance};
    use geometry::{BodyId, EdgeId};
    use std::sync::Arc;

    #[tokio::test]
    async fn circular_pattern_with_radial_rows_is_two_dimensional() {
        let conn = Arc::new(ScriptedConnection::new());
        let patterns = PatternsV0::new(conn.clone());
        conn.respond(CREATE_CIRCULAR.path, &pb::BoolResponse { result: true });
        let spec = CircularPatternSpec {
            selection: vec![EntityRef::Body(BodyId::new("b-1").unwrap())],
            axis: EdgeId::new("e-axis").unwrap(),
            circular_count: 6,
            circular_angle: Angle::from_radians(1.0).unwrap(),
            radial_count: Some(2),
            radial_pitch: Distance::from_meters(0.01),
        };
        assert!(patterns.create_circular_pattern(&spec).await.unwrap());

        let sent: pb::CircularPatternRequest = conn.last_request(CREATE_CIRCULAR.path).unwrap();
        assert!(sent.two_dimensional);
        assert_eq!(sent.linear_count, 2);
        assert_eq!(sent.circular_axis, "e-axis");
        assert_eq!(sent.selection, vec!["b-1"]);
    }

    #[tokio::test]
    async fn oversized_count_is_rejected_locally() {
        let conn = Arc::new(ScriptedConnection::new());
        let patterns = PatternsV0::new(conn.clone());
        let spec = LinearPatternSpec {
            selection: vec![],
            direction: EdgeId::new("e").unwrap(),
            count_x: u32::MAX,
            pitch_x: Distance::zero(),
            two_dimensional: false,
            count_y: 1,
            pitch_y: Distance::zero(),
        };
        let err = patterns.create_linear_pattern(&spec).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument { .. }));
        assert_eq!(conn.call_count(), 0);
    }
}
