//! One negotiated session with a geometry server.

use std::sync::Arc;

use geometry::negotiation::resolve_with_config;
use geometry::services::{
    AdminService, BackendInfo, BodyService, CommandService, ComponentService,
    CoordinateSystemService, CurveService, DbuApplicationService, DesignService,
    DrivingDimensionService, EdgeService, FaceService, LogFile, MaterialService,
    MeasurementToolsService, ModelToolsService, NamedSelectionService, PartService,
    PatternService, RayfireService, UnsupportedService,
};
use geometry::types::Timestamp;
use geometry::{
    NegotiationConfig, ProtocolVersion, RegistryError, ServiceHandle, ServiceKind,
    ServiceRegistry, SessionId,
};
use grpc::{service_table, wait_until_healthy, Connection, GrpcConnection, HealthProbe};
use tracing::info;

use crate::config::ClientConfig;
use crate::errors::ClientError;

macro_rules! service_accessors {
    ($($accessor:ident => $contract:ident;)*) => {
        $(
            #[doc = concat!("The `", stringify!($accessor), "` service.")]
            pub fn $accessor(&self) -> Result<Arc<dyn $contract>, RegistryError> {
                self.registry.$accessor()
            }
        )*
    };
}

/// A connected, version-negotiated client.
///
/// Adapters are built on first use and shared afterwards; the client is cheap
/// to share behind an [`Arc`].
#[derive(Debug)]
pub struct GeometryClient {
    session_id: SessionId,
    connected_at: Timestamp,
    registry: ServiceRegistry<dyn Connection>,
}

impl GeometryClient {
    /// Connects to `config.endpoint_uri()`, waits until the server reports
    /// healthy and negotiates a protocol version.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidConfig`] before any I/O, then
    /// [`ClientError::Connect`], [`ClientError::Unhealthy`] or
    /// [`ClientError::Negotiation`] depending on which step fails.
    #[tracing::instrument(skip(config), fields(endpoint = %config.endpoint_uri()))]
    pub async fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let endpoint = config.endpoint_uri();

        let connection = GrpcConnection::connect(&config.connection)
            .await
            .map_err(|source| ClientError::Connect {
                endpoint: endpoint.clone(),
                source: Box::new(source),
            })?;
        let connection: Arc<dyn Connection> = Arc::new(connection);

        wait_until_healthy(&*connection, config.health_timeout()?)
            .await
            .map_err(|source| ClientError::Unhealthy {
                endpoint,
                source: Box::new(source),
            })?;

        Self::with_connection(connection, &config.negotiation).await
    }

    /// Negotiates over a connection the caller already holds.
    ///
    /// No health wait is performed.
    ///
    /// # Errors
    ///
    /// [`ClientError::Negotiation`] if no acceptable version answers.
    #[tracing::instrument(
        skip(connection, negotiation),
        fields(endpoint = connection.endpoint(), session_id = tracing::field::Empty)
    )]
    pub async fn with_connection(
        connection: Arc<dyn Connection>,
        negotiation: &NegotiationConfig,
    ) -> Result<Self, ClientError> {
        let session_id = SessionId::new_random();
        tracing::Span::current().record("session_id", tracing::field::display(session_id));

        let version = resolve_with_config(&HealthProbe, &*connection, negotiation).await?;
        let registry = ServiceRegistry::new(connection, version, Arc::new(service_table()));
        info!(%session_id, %version, "geometry session established");

        Ok(Self {
            session_id,
            connected_at: Timestamp::now(),
            registry,
        })
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// When negotiation finished.
    pub fn connected_at(&self) -> Timestamp {
        self.connected_at
    }

    pub fn version(&self) -> ProtocolVersion {
        self.registry.version()
    }

    pub fn endpoint(&self) -> &str {
        self.registry.connection().endpoint()
    }

    pub fn registry(&self) -> &ServiceRegistry<dyn Connection> {
        &self.registry
    }

    /// Services the negotiated version provides, in stable order.
    pub fn available_services(&self) -> Vec<ServiceKind> {
        self.registry.available_services()
    }

    /// Looks a service up by its snake-case name.
    ///
    /// # Errors
    ///
    /// See [`ServiceRegistry::get_service`].
    pub fn get_service(&self, name: &str) -> Result<ServiceHandle, RegistryError> {
        self.registry.get_service(name)
    }

    service_accessors! {
        admin => AdminService;
        bodies => BodyService;
        faces => FaceService;
        edges => EdgeService;
        designs => DesignService;
        curves => CurveService;
        coordinate_systems => CoordinateSystemService;
        named_selections => NamedSelectionService;
        patterns => PatternService;
        materials => MaterialService;
        measurement_tools => MeasurementToolsService;
        model_tools => ModelToolsService;
        components => ComponentService;
        commands => CommandService;
        rayfire => RayfireService;
        unsupported => UnsupportedService;
        parts => PartService;
        driving_dimensions => DrivingDimensionService;
        dbu_application => DbuApplicationService;
    }

    /// Backend kind, version and build identifiers.
    ///
    /// # Errors
    ///
    /// [`ClientError::Service`] if the server call fails.
    pub async fn backend_info(&self) -> Result<BackendInfo, ClientError> {
        Ok(self.admin()?.get_backend().await?)
    }

    /// Asks the server's administrative service whether it is healthy.
    ///
    /// # Errors
    ///
    /// [`ClientError::Service`] if the call itself fails.
    pub async fn is_healthy(&self) -> Result<bool, ClientError> {
        Ok(self.admin()?.get_service_status().await?)
    }

    /// Server log files; only the current one unless `all_logs`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Service`] if the server call fails.
    pub async fn logs(&self, all_logs: bool) -> Result<Vec<LogFile>, ClientError> {
        Ok(self.admin()?.get_logs(all_logs).await?)
    }
}
