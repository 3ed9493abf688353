//! Named selections.

use async_trait::async_trait;

use super::ServiceAdapter;
use crate::entities::{NamedSelectionInfo, SelectionMembers};
use crate::{NamedSelectionId, ServiceResult};

#[async_trait]
pub trait NamedSelectionService: ServiceAdapter {
    async fn get(&self, selection: &NamedSelectionId) -> ServiceResult<NamedSelectionInfo>;

    async fn create(
        &self,
        name: &str,
        members: &SelectionMembers,
    ) -> ServiceResult<NamedSelectionInfo>;

    async fn delete(&self, selection: &NamedSelectionId) -> ServiceResult<()>;

    async fn delete_by_name(&self, name: &str) -> ServiceResult<()>;
}
