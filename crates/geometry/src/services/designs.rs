//! Design (document) lifecycle and file exchange.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::entities::DesignInfo;
use crate::{DesignId, ServiceResult};

/// File formats the server can export a design to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Scdocx,
    ParasolidText,
    ParasolidBinary,
    Fmd,
    Step,
    Iges,
    Pmdb,
}

impl ExportFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Scdocx => "scdocx",
            ExportFormat::ParasolidText => "x_t",
            ExportFormat::ParasolidBinary => "x_b",
            ExportFormat::Fmd => "fmd",
            ExportFormat::Step => "stp",
            ExportFormat::Iges => "igs",
            ExportFormat::Pmdb => "pmdb",
        }
    }
}

#[async_trait]
pub trait DesignService: ServiceAdapter {
    /// Creates a new empty design and makes it active.
    async fn new_design(&self, name: &str) -> ServiceResult<DesignInfo>;

    /// Opens a file that already exists on the server's file system.
    async fn open(&self, server_path: &str) -> ServiceResult<DesignInfo>;

    async fn close(&self, design: &DesignId) -> ServiceResult<()>;

    /// Returns the active design, or `None` if no design is open.
    async fn get_active(&self) -> ServiceResult<Option<DesignInfo>>;

    /// Saves the active design to a server-side path.
    async fn save_as(&self, server_path: &str) -> ServiceResult<()>;

    /// Exports the active design and returns the file contents.
    async fn download_export(&self, format: ExportFormat) -> ServiceResult<Vec<u8>>;

    /// Inserts a server-side file into the active design as a new component.
    async fn insert(&self, server_path: &str) -> ServiceResult<()>;
}
