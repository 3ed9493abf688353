//! `geometry.v0.CoordinateSystems`.

use async_trait::async_trait;
use geometry::entities::CoordinateSystemInfo;
use geometry::services::CoordinateSystemService;
use geometry::types::Frame;
use geometry::{ComponentId, ServiceResult};

use super::conversions::{coordinate_system_from, frame};
use super::messages as pb;
use crate::call::{call, Rpc};

const CREATE: Rpc = Rpc::new(
    "coordinate_systems.create",
    "/geometry.v0.CoordinateSystems/Create",
);

adapter! {
    CoordinateSystemsV0, V0
}

#[async_trait]
impl CoordinateSystemService for CoordinateSystemsV0 {
    async fn create(
        &self,
        parent: &ComponentId,
        name: &str,
        placement: Frame,
    ) -> ServiceResult<CoordinateSystemInfo> {
        let request = pb::CreateCoordinateSystemRequest {
            parent: parent.as_str().to_string(),
            name: name.to_string(),
            frame: Some(frame(placement)),
        };
        let r = call(&*self.connection, CREATE, &request).await?;
        coordinate_system_from(r, CREATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use std::sync::Arc;

    #[tokio::test]
    async fn created_frame_is_read_back() {
        let conn = Arc::new(ScriptedConnection::new());
        let systems = CoordinateSystemsV0::new(conn.clone());
        conn.respond(
            CREATE.path,
            &pb::CoordinateSystem {
                id: "cs-1".to_string(),
                name: "datum".to_string(),
                frame: Some(frame(Frame::world())),
            },
        );
        let info = systems
            .create(&ComponentId::new("root").unwrap(), "datum", Frame::world())
            .await
            .unwrap();
        assert_eq!(info.id.as_str(), "cs-1");
        assert_eq!(info.frame, Frame::world());
        let sent: pb::CreateCoordinateSystemRequest = conn.last_request(CREATE.path).unwrap();
        assert_eq!(sent.parent, "root");
    }
}
