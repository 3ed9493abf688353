//! Edge queries.

use async_trait::async_trait;

use super::ServiceAdapter;
use crate::entities::{Curve, FaceInfo};
use crate::types::{Distance, Interval, Point3D};
use crate::{EdgeId, ServiceResult};

#[async_trait]
pub trait EdgeService: ServiceAdapter {
    async fn get_curve(&self, edge: &EdgeId) -> ServiceResult<Curve>;

    async fn get_length(&self, edge: &EdgeId) -> ServiceResult<Distance>;

    /// Parameter interval of the edge on its curve.
    async fn get_interval(&self, edge: &EdgeId) -> ServiceResult<Interval>;

    /// Start and end points, in edge orientation.
    async fn get_start_and_end_points(&self, edge: &EdgeId) -> ServiceResult<(Point3D, Point3D)>;

    /// Faces adjacent to the edge.
    async fn get_faces(&self, edge: &EdgeId) -> ServiceResult<Vec<FaceInfo>>;
}
