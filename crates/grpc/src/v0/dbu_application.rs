//! `geometry.v0.DbuApplication`: server-side script execution.

use async_trait::async_trait;
use geometry::services::{DbuApplicationService, ScriptOutcome, ScriptRequest};
use geometry::{ServiceError, ServiceResult};

use super::messages as pb;
use crate::call::{call, Rpc};

const RUN_SCRIPT: Rpc = Rpc::new(
    "dbu_application.run_script",
    "/geometry.v0.DbuApplication/RunScript",
);

adapter! {
    /// Script execution on a v0 server. `api_version: None` is sent as 0,
    /// which lets the server pick its default scripting API.
    DbuApplicationV0, V0
}

#[async_trait]
impl DbuApplicationService for DbuApplicationV0 {
    async fn run_script(&self, request: &ScriptRequest) -> ServiceResult<ScriptOutcome> {
        let api_version = match request.api_version {
            None => 0,
            Some(v) => i32::try_from(v).map_err(|_| {
                ServiceError::invalid_argument(RUN_SCRIPT.operation, "api version out of range")
            })?,
        };
        let wire = pb::RunScriptRequest {
            script_path: request.script_path.clone(),
            script_args: request
                .arguments
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            api_version,
        };
        let r: pb::RunScriptResponse = call(&*self.connection, RUN_SCRIPT, &wire).await?;
        Ok(ScriptOutcome {
            success: r.success,
            values: r.values.into_iter().collect(),
            message: r.message,
        })
    }
}
