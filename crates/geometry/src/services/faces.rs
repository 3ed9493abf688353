//! Face queries and evaluation.

use async_trait::async_trait;

use super::ServiceAdapter;
use crate::entities::{EdgeInfo, Surface};
use crate::types::{Color, Point3D, UnitVector, UvBox};
use crate::{FaceId, ServiceResult};

#[async_trait]
pub trait FaceService: ServiceAdapter {
    async fn get_surface(&self, face: &FaceId) -> ServiceResult<Surface>;

    /// Area in square meters.
    async fn get_area(&self, face: &FaceId) -> ServiceResult<f64>;

    async fn get_edges(&self, face: &FaceId) -> ServiceResult<Vec<EdgeInfo>>;

    /// Parameter-space bounds of the face.
    async fn get_box_uv(&self, face: &FaceId) -> ServiceResult<UvBox>;

    /// Face normal at parameter `(u, v)`, honouring face orientation.
    async fn get_normal(&self, face: &FaceId, u: f64, v: f64) -> ServiceResult<UnitVector>;

    /// Point on the face at parameter `(u, v)`.
    async fn evaluate(&self, face: &FaceId, u: f64, v: f64) -> ServiceResult<Point3D>;

    async fn set_color(&self, face: &FaceId, color: Color) -> ServiceResult<()>;
}
