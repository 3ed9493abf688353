//! `geometry.v1.DbuApplicationService`.

use async_trait::async_trait;
use geometry::services::{DbuApplicationService, ScriptOutcome, ScriptRequest};
use geometry::ServiceResult;

use super::messages as pb;
use crate::call::{call, Rpc};

const RUN_SCRIPT: Rpc = Rpc::new(
    "dbu_application.run_script",
    "/geometry.v1.DbuApplicationService/RunScript",
);

adapter! {
    /// Script execution on a v1 server. An unset api version is left off the
    /// wire.
    DbuApplicationV1, V1
}

#[async_trait]
impl DbuApplicationService for DbuApplicationV1 {
    async fn run_script(&self, request: &ScriptRequest) -> ServiceResult<ScriptOutcome> {
        let wire = pb::RunScriptRequest {
            script_path: request.script_path.clone(),
            script_args: request
                .arguments
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            api_version: request.api_version,
        };
        let r: pb::RunScriptResponse = call(&*self.connection, RUN_SCRIPT, &wire).await?;
        Ok(ScriptOutcome {
            success: r.success,
            values: r.values.into_iter().collect(),
            message: r.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    #[tokio::test]
    async fn failed_script_is_an_outcome_not_an_error() {
        let conn = Arc::new(ScriptedConnection::new());
        let dbu = DbuApplicationV1::new(conn.clone());
        conn.respond(
            RUN_SCRIPT.path,
            &pb::RunScriptResponse {
                success: false,
                message: "NameError: body".to_string(),
                values: Default::default(),
            },
        );
        let request = ScriptRequest {
            script_path: "/scripts/broken.py".to_string(),
            arguments: BTreeMap::new(),
            api_version: Some(251),
        };
        let outcome = dbu.run_script(&request).await.unwrap();
        assert!(!outcome.success);
        assert!(outcome.message.contains("NameError"));
        let sent: pb::RunScriptRequest = conn.last_request(RUN_SCRIPT.path).unwrap();
        assert_eq!(sent.api_version, Some(251));
    }
}
