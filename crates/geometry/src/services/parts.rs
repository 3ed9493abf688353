//! Part export.

use async_trait::async_trait;

use super::designs::ExportFormat;
use super::ServiceAdapter;
use crate::ServiceResult;

#[async_trait]
pub trait PartService: ServiceAdapter {
    /// Exports the active part and returns the file contents.
    async fn export(&self, format: ExportFormat) -> ServiceResult<Vec<u8>>;
}
