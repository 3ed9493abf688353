//! Linear, circular and fill patterns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::types::{Angle, Distance};
use crate::{EdgeId, EntityRef, FaceId, ServiceResult};

/// A one- or two-dimensional linear pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPatternSpec {
    pub selection: Vec<EntityRef>,
    /// Linear edge giving the first pattern direction.
    pub direction: EdgeId,
    pub count_x: u32,
    pub pitch_x: Distance,
    /// When `false`, `count_y` and `pitch_y` are ignored.
    pub two_dimensional: bool,
    pub count_y: u32,
    pub pitch_y: Distance,
}

/// A circular pattern around an axis edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularPatternSpec {
    pub selection: Vec<EntityRef>,
    pub axis: EdgeId,
    pub circular_count: u32,
    /// Total angle the instances are spread over.
    pub circular_angle: Angle,
    /// Add concentric rings (two-dimensional pattern).
    pub radial_count: Option<u32>,
    pub radial_pitch: Option<Distance>,
}

/// A pattern that fills a face region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPatternSpec {
    pub selection: Vec<EntityRef>,
    pub region: FaceId,
    pub direction: EdgeId,
    pub margin: Distance,
    pub x_spacing: Distance,
    pub y_spacing: Distance,
    pub row_x_offset: Distance,
    pub row_y_offset: Distance,
}

#[async_trait]
pub trait PatternService: ServiceAdapter {
    /// Every operation returns `true` if the server applied the pattern.
    async fn create_linear_pattern(&self, spec: &LinearPatternSpec) -> ServiceResult<bool>;

    /// Changes the counts and pitches of an existing linear pattern. `selection`
    /// must contain one member of the pattern.
    async fn modify_linear_pattern(&self, spec: &LinearPatternSpec) -> ServiceResult<bool>;

    async fn create_circular_pattern(&self, spec: &CircularPatternSpec) -> ServiceResult<bool>;

    async fn create_fill_pattern(&self, spec: &FillPatternSpec) -> ServiceResult<bool>;

    /// Recomputes fill patterns whose region or members changed.
    async fn update_fill_pattern(&self, selection: &[EntityRef]) -> ServiceResult<bool>;
}
