//! Administrative queries: backend identity, health, server logs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::ServiceResult;

/// The product hosting the geometry service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendType {
    Discovery,
    SpaceClaim,
    WindowsService,
    LinuxService,
    CoreService,
    Unknown,
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BackendType::Discovery => "Discovery",
            BackendType::SpaceClaim => "SpaceClaim",
            BackendType::WindowsService => "Geometry Service (Windows)",
            BackendType::LinuxService => "Geometry Service (Linux)",
            BackendType::CoreService => "Core Geometry Service",
            BackendType::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Product version reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub service_pack: u32,
}

impl std::fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.service_pack)
    }
}

/// Identity of the backend a session is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendInfo {
    pub backend_type: BackendType,
    pub version: ServerVersion,
    /// Build identifier of the API server layer. Empty when not reported.
    pub api_build: String,
    /// Build identifier of the hosting product. Empty when not reported.
    pub product_build: String,
}

/// One server-side log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFile {
    pub name: String,
    pub contents: String,
}

#[async_trait]
pub trait AdminService: ServiceAdapter {
    /// Returns the backend's product type and version.
    async fn get_backend(&self) -> ServiceResult<BackendInfo>;

    /// Returns `true` if the service reports itself healthy.
    async fn get_service_status(&self) -> ServiceResult<bool>;

    /// Fetches server logs. With `all_logs == false` only the current
    /// session's log is returned.
    async fn get_logs(&self, all_logs: bool) -> ServiceResult<Vec<LogFile>>;
}
