//! `geometry.v1.CommandsService`.
//!
//! Export ids moved to the unsupported service in this generation, so
//! `set_export_id` is absent here.

use async_trait::async_trait;
use geometry::entities::BodyInfo;
use geometry::services::{CommandService, LoftOptions};
use geometry::types::SketchProfile;
use geometry::{ComponentId, ProtocolVersion, ServiceError, ServiceKind, ServiceResult};

use super::conversions::{entity, geometries, single_body};
use super::messages as pb;
use crate::call::{call, Rpc};

const CREATE_BODY_FROM_LOFT: Rpc = Rpc::new(
    "commands.create_body_from_loft",
    "/geometry.v1.CommandsService/CreateBodyFromLoftWithGuides",
);

adapter! {
    CommandsV1, V1
}

#[async_trait]
impl CommandService for CommandsV1 {
    async fn set_export_id(&self, _moniker: &str, _value: &str) -> ServiceResult<()> {
        Err(ServiceError::not_implemented(
            ServiceKind::Commands,
            "set_export_id",
            ProtocolVersion::V1,
        ))
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
            request_data: vec![pb::LoftRequestData {
                name: name.to_string(),
                parent_id: Some(entity(parent.as_str())),
                profiles: profiles.iter().map(geometries).collect(),
                periodic: options.periodic,
                ruled: options.ruled,
            }],
        };
        let r = call(&*self.connection, CREATE_BODY_FROM_LOFT, &request).await?;
        single_body(r, CREATE_BODY_FROM_LOFT)
    }
}
