//! `geometry.v0.Commands`.

use async_trait::async_trait;
use geometry::entities::BodyInfo;
use geometry::services::{CommandService, LoftOptions};
use geometry::types::SketchProfile;
use geometry::{ComponentId, ServiceError, ServiceResult};

use super::conversions::{body_from, geometries};
use super::messages as pb;
use crate::call::{call, Rpc};

const SET_EXPORT_ID: Rpc = Rpc::new(
    "commands.set_export_id",
    "/geometry.v0.Commands/SetExportId",
);
const CREATE_BODY_FROM_LOFT: Rpc = Rpc::new(
    "commands.create_body_from_loft",
    "/geometry.v0.Commands/CreateBodyFromLoft",
);

adapter! {
    CommandsV0, V0
}

#[async_trait]
impl CommandService for CommandsV0 {
    async fn set_export_id(&self, moniker: &str, value: &str) -> ServiceResult<()> {
        let request = pb::SetExportIdRequest {
            moniker: moniker.to_string(),
            value: value.to_string(),
        };
        let _: pb::Empty = call(&*self.connection, SET_EXPORT_ID, &request).await?;
        Ok(())
    }

    async fn create_body_from_loft(
        &self,
        name: &str,
        parent: &ComponentId,
        profiles: &[SketchProfile],
        options: LoftOptions,
    ) -> ServiceResult<BodyInfo> {
        if profiles.len() < 2 {
            return Err(ServiceError::invalid_argument(
                CREATE_BODY_FROM_LOFT.operation,
                "a loft needs at least two profiles",
            ));
        }
        let request = pb::LoftRequest {
            name: name.to_string(),
            parent: parent.as_str().to_string(),
            profiles: profiles.iter().map(geometries).collect(),
            periodic: options.periodic,
            ruled: options.ruled,
        };
        let body = call(&*self.connection, CREATE_BODY_FROM_LOFT, &request).await?;
        body_from(body, CREATE_BODY_FROM_LOFT)
    }
}
