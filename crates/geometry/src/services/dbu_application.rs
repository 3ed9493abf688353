//! Server-side script execution.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceAdapter;
use crate::ServiceResult;

/// A script to run on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRequest {
    /// Path of the script on the server's file system.
    pub script_path: String,
    pub arguments: BTreeMap<String, String>,
    /// Scripting API version the script targets; `None` for the server default.
    pub api_version: Option<u32>,
}

/// Result of a script run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptOutcome {
    pub success: bool,
    /// Values the script returned.
    pub values: BTreeMap<String, String>,
    /// Server message, typically a failure description. Empty on success.
    pub message: String,
}

#[async_trait]
pub trait DbuApplicationService: ServiceAdapter {
    async fn run_script(&self, request: &ScriptRequest) -> ServiceResult<ScriptOutcome>;
}
