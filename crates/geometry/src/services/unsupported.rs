//! Escape hatch for server features with no stable contract yet.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::ServiceResult;

/// Which kind of imported entity an import-id map covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportIdType {
    Component,
    Body,
    Face,
    Edge,
}

/// Maps an identifier from an imported file to the server moniker it became.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportIdMapping {
    pub import_id: String,
    pub moniker: String,
}

/// An export identifier to stamp onto an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportIdEntry {
    pub moniker: String,
    pub id_type: ImportIdType,
    pub value: String,
}

#[async_trait]
pub trait UnsupportedService: ServiceAdapter {
    async fn get_import_id_map(&self, id_type: ImportIdType)
        -> ServiceResult<Vec<ImportIdMapping>>;

    async fn set_export_ids(&self, entries: &[ExportIdEntry]) -> ServiceResult<()>;
}
