//! `geometry.v1.PatternsService`.

use async_trait::async_trait;
use geometry::services::{CircularPatternSpec, FillPatternSpec, LinearPatternSpec, PatternService};
use geometry::{EntityRef, ServiceResult};

use super::conversions::{angle, entity, length, selection};
use super::messages as pb;
use crate::call::{call, Rpc};

const CREATE_LINEAR: Rpc = Rpc::new(
    "patterns.create_linear_pattern",
    "/geometry.v1.PatternsService/CreateLinearPattern",
);
const MODIFY_LINEAR: Rpc = Rpc::new(
    "patterns.modify_linear_pattern",
    "/geometry.v1.PatternsService/ModifyLinearPattern",
);
const CREATE_CIRCULAR: Rpc = Rpc::new(
    "patterns.create_circular_pattern",
    "/geometry.v1.PatternsService/CreateCircularPattern",
);
const CREATE_FILL: Rpc = Rpc::new(
    "patterns.create_fill_pattern",
    "/geometry.v1.PatternsService/CreateFillPattern",
);
const UPDATE_FILL: Rpc = Rpc::new(
    "patterns.update_fill_pattern",
    "/geometry.v1.PatternsService/UpdateFillPattern",
);

adapter! {
    PatternsV1, V1
}

fn linear(spec: &LinearPatternSpec) -> pb::LinearPatternRequest {
    pb::LinearPatternRequest {
        selection: selection(&spec.selection),
        linear_direction: Some(entity(spec.direction.as_str())),
        count_x: spec.count_x,
        pitch_x: length(spec.pitch_x),
        two_dimensional: spec.two_dimensional,
        count_y: spec.count_y,
        pitch_y: length(spec.pitch_y),
    }
}

#[async_trait]
impl PatternService for PatternsV1 {
    async fn create_linear_pattern(&self, spec: &LinearPatternSpec) -> ServiceResult<bool> {
        let r: pb::CommandResponse =
            call(&*self.connection, CREATE_LINEAR, &linear(spec)).await?;
        Ok(r.success)
    }

    /// Same request shape as create; the server matches the existing pattern
    /// by its selection.
    async fn modify_linear_pattern(&self, spec: &LinearPatternSpec) -> ServiceResult<bool> {
        let r: pb::CommandResponse =
            call(&*self.connection, MODIFY_LINEAR, &linear(spec)).await?;
        Ok(r.success)
    }

    async fn create_circular_pattern(&self, spec: &CircularPatternSpec) -> ServiceResult<bool> {
        let request = pb::CircularPatternRequest {
            selection: selection(&spec.selection),
            circular_axis: Some(entity(spec.axis.as_str())),
            circular_count: spec.circular_count,
            circular_angle: angle(spec.circular_angle),
            radial_count: spec.radial_count,
            radial_pitch: spec.radial_pitch.and_then(length),
        };
        let r: pb::CommandResponse = call(&*self.connection, CREATE_CIRCULAR, &request).await?;
        Ok(r.success)
    }

    async fn create_fill_pattern(&self, spec: &FillPatternSpec) -> ServiceResult<bool> {
        let request = pb::FillPatternRequest {
            selection: selection(&spec.selection),
            region: Some(entity(spec.region.as_str())),
            linear_direction: Some(entity(spec.direction.as_str())),
            margin: length(spec.margin),
            x_spacing: length(spec.x_spacing),
            y_spacing: length(spec.y_spacing),
            row_x_offset: length(spec.row_x_offset),
            row_y_offset: length(spec.row_y_offset),
        };
        let r: pb::CommandResponse = call(&*self.connection, CREATE_FILL, &request).await?;
        Ok(r.success)
    }

    async fn update_fill_pattern(&self, entities: &[EntityRef]) -> ServiceResult<bool> {
        let request = pb::MultipleEntitiesRequest {
            ids: selection(entities),
        };
        let r: pb::CommandResponse = call(&*self.connection, UPDATE_FILL, &request).await?;
        Ok(r.success)
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
    async fn circular_pattern_without_radial_rows_omits_them() {
        let conn = Arc::new(ScriptedConnection::new());
        let patterns = PatternsV1::new(conn.clone());
        conn.respond(
            CREATE_CIRCULAR.path,
            &pb::CommandResponse {
                success: true,
                message: String::new(),
            },
        );
        let spec = CircularPatternSpec {
            selection: vec![EntityRef::Body(BodyId::new("b").unwrap())],
            axis: EdgeId::new("e-axis").unwrap(),
            circular_count: 8,
            circular_angle: Angle::from_radians(2.0).unwrap(),
            radial_count: None,
            radial_pitch: None,
        };
        assert!(patterns.create_circular_pattern(&spec).await.unwrap());
        let sent: pb::CircularPatternRequest = conn.last_request(CREATE_CIRCULAR.path).unwrap();
        assert_eq!(sent.radial_count, None);
        assert_eq!(sent.radial_pitch, None);
        assert_eq!(sent.circular_count, 8);
    }

    #[tokio::test]
    async fn refused_pattern_is_false() {
        let conn = Arc::new(ScriptedConnection::new());
        let patterns = PatternsV1::new(conn.clone());
        conn.respond(
            CREATE_LINEAR.path,
            &pb::CommandResponse {
                success: false,
                message: "pitch too small".to_string(),
            },
        );
        let spec = LinearPatternSpec {
            selection: vec![EntityRef::Body(BodyId::new("b").unwrap())],
            direction: EdgeId::new("e").unwrap(),
            count_x: 4,
            pitch_x: Distance::from_millimeters(0.001).unwrap(),
            two_dimensional: false,
            count_y: 1,
            pitch_y: Distance::zero(),
        };
        assert!(!patterns.create_linear_pattern(&spec).await.unwrap());
    }
}
