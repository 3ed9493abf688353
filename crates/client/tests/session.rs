//! End-to-end session behaviour over a scripted server.

use std::sync::Arc;

use client::{ClientError, GeometryClient};
use geometry::services::BackendType;
use geometry::{
    NegotiationConfig, NegotiationError, ProtocolVersion, RegistryError, ServiceError,
    ServiceKind, VersionRequest,
};
use grpc::testing::ScriptedConnection;
use grpc::{v0, v1, Connection};

const V1_STATUS: &str = "/geometry.v1.AdminService/GetServiceStatus";
const V0_HEALTH: &str = "/geometry.v0.Admin/Health";

fn serving_v0(conn: &ScriptedConnection) {
    conn.respond(V0_HEALTH, &v0::messages::HealthResponse::default());
}

fn serving_v1(conn: &ScriptedConnection) {
    conn.respond(
        V1_STATUS,
        &v1::messages::ServiceStatusResponse { healthy: true },
    );
}

async fn session(
    conn: &Arc<ScriptedConnection>,
    request: VersionRequest,
) -> Result<GeometryClient, ClientError> {
    let negotiation = NegotiationConfig {
        request,
        ..NegotiationConfig::default()
    };
    let connection: Arc<dyn Connection> = conn.clone();
    GeometryClient::with_connection(connection, &negotiation).await
}

#[tokio::test]
async fn auto_prefers_the_newest_healthy_version() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v0(&conn);
    serving_v1(&conn);

    let client = session(&conn, VersionRequest::Auto).await.unwrap();
    assert_eq!(client.version(), ProtocolVersion::V1);
    assert_eq!(conn.methods(), vec![V1_STATUS]);
}

#[tokio::test]
async fn auto_falls_back_to_v0_after_one_failed_probe() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v0(&conn);

    let client = session(&conn, VersionRequest::Auto).await.unwrap();
    assert_eq!(client.version(), ProtocolVersion::V0);
    assert_eq!(conn.methods(), vec![V1_STATUS, V0_HEALTH]);
}

#[tokio::test]
async fn exact_request_never_falls_back() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v0(&conn);

    let err = session(&conn, VersionRequest::Exact(ProtocolVersion::V1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Negotiation(NegotiationError::UnsupportedRequestedVersion {
            version: ProtocolVersion::V1
        })
    ));
    assert_eq!(conn.methods(), vec![V1_STATUS]);
}

#[tokio::test]
async fn silent_server_has_no_supported_version() {
    let conn = Arc::new(ScriptedConnection::new());
    let err = session(&conn, VersionRequest::Auto).await.unwrap_err();
    match err {
        ClientError::Negotiation(NegotiationError::NoSupportedVersion { attempted }) => {
            assert_eq!(attempted, vec![ProtocolVersion::V1, ProtocolVersion::V0]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn services_are_built_once_per_session() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v1(&conn);
    let client = session(&conn, VersionRequest::Auto).await.unwrap();

    let first = client.get_service("bodies").unwrap();
    let second = client.get_service("bodies").unwrap();
    assert!(first.ptr_eq(&second));
    assert_eq!(client.registry().cached_count(), 1);

    let typed_a = client.bodies().unwrap();
    let typed_b = client.bodies().unwrap();
    assert!(Arc::ptr_eq(&typed_a, &typed_b));
}

#[tokio::test]
async fn curves_are_unavailable_on_v0() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v0(&conn);
    let client = session(&conn, VersionRequest::Auto).await.unwrap();

    let err = client.curves().unwrap_err();
    assert!(matches!(
        err,
        RegistryError::UnsupportedServiceForVersion {
            service: ServiceKind::Curves,
            version: ProtocolVersion::V0
        }
    ));
    assert!(!client.registry().is_cached(ServiceKind::Curves));
    assert!(!client.available_services().contains(&ServiceKind::Curves));
    assert!(client.available_services().contains(&ServiceKind::Rayfire));
}

#[tokio::test]
async fn unknown_service_names_are_rejected() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v1(&conn);
    let client = session(&conn, VersionRequest::Auto).await.unwrap();

    assert!(matches!(
        client.get_service("sketches"),
        Err(RegistryError::UnknownService { .. })
    ));
}

#[tokio::test]
async fn v0_stub_makes_no_network_call() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v0(&conn);
    let client = session(&conn, VersionRequest::Auto).await.unwrap();
    let before = conn.call_count();

    let body = geometry::BodyId::new("b-1").unwrap();
    let offset = geometry::types::Distance::from_millimeters(1.0).unwrap();
    let err = client
        .bodies()
        .unwrap()
        .shell_body(&body, offset)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotImplementedInThisVersion { .. }));
    assert_eq!(conn.call_count(), before);
}

#[tokio::test]
async fn backend_info_over_v1() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v1(&conn);
    conn.respond(
        "/geometry.v1.AdminService/GetBackend",
        &v1::messages::BackendResponse {
            backend_type: "BACKENDTYPE_LINUX_SERVICE".to_string(),
            version: Some(v1::messages::ServerVersion {
                major: 25,
                minor: 2,
                service_pack: 0,
            }),
            api_server_build_info: "api-1234".to_string(),
            product_build_info: "core-5678".to_string(),
        },
    );
    let client = session(&conn, VersionRequest::Auto).await.unwrap();

    let info = client.backend_info().await.unwrap();
    assert_eq!(info.backend_type, BackendType::LinuxService);
    assert_eq!(info.version.to_string(), "25.2.0");
    assert!(client.is_healthy().await.unwrap());
}

#[tokio::test]
async fn remote_failures_surface_as_service_errors() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v1(&conn);
    conn.fail(
        "/geometry.v1.AdminService/GetLogs",
        tonic::Code::PermissionDenied,
        "logs are restricted",
    );
    let client = session(&conn, VersionRequest::Auto).await.unwrap();

    match client.logs(true).await.unwrap_err() {
        ClientError::Service(err) => {
            assert_eq!(
                err.remote_status(),
                Some(geometry::RemoteStatus::PermissionDenied)
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn sessions_get_distinct_ids() {
    let conn = Arc::new(ScriptedConnection::new());
    serving_v1(&conn);
    let a = session(&conn, VersionRequest::Auto).await.unwrap();
    let b = session(&conn, VersionRequest::Auto).await.unwrap();
    assert_ne!(a.session_id(), b.session_id());
    assert_eq!(a.endpoint(), "scripted://geometry");
}
