//! Service registry: one stable facade over whichever protocol version backs
//! a session.
//!
//! A [`ServiceTable`] is static data mapping `(ServiceKind, ProtocolVersion)`
//! to an adapter constructor. A [`ServiceRegistry`] binds a table to one
//! connection and one negotiated version, builds adapters on first use and
//! hands out the same instance on every later request.
//!
//! Adding a protocol generation is a matter of registering more rows; nothing
//! here changes.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::RegistryError;
use crate::services::{
    AdminService, BodyService, CommandService, ComponentService, CoordinateSystemService,
    CurveService, DbuApplicationService, DesignService, DrivingDimensionService, EdgeService,
    FaceService, MaterialService, MeasurementToolsService, ModelToolsService,
    NamedSelectionService, PartService, PatternService, RayfireService, UnsupportedService,
};
use crate::ProtocolVersion;

// ---------------------------------------------------------------------------
// Macro generating ServiceKind, ServiceHandle and the typed registry accessors
// from one list, so the three can never drift apart.
// ---------------------------------------------------------------------------
macro_rules! logical_services {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident => $name:literal, $accessor:ident, $contract:ident;
        )*
    ) => {
        /// A logical service: a named family of operations independent of
        /// wire version.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum ServiceKind {
            $(
                $(#[$attr])*
                $variant,
            )*
        }

        impl ServiceKind {
            /// Every logical service.
            pub const ALL: &'static [ServiceKind] = &[$(ServiceKind::$variant,)*];

            /// Stable snake-case name (`"bodies"`, `"named_selections"`, …).
            pub fn name(self) -> &'static str {
                match self {
                    $(ServiceKind::$variant => $name,)*
                }
            }

            /// Looks up a service by name, ignoring ASCII case and accepting
            /// `-` in place of `_`.
            pub fn from_name(name: &str) -> Option<Self> {
                let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
                match normalized.as_str() {
                    $($name => Some(ServiceKind::$variant),)*
                    _ => None,
                }
            }
        }

        /// A constructed adapter, tagged with the logical service it implements.
        #[derive(Debug, Clone)]
        pub enum ServiceHandle {
            $($variant(Arc<dyn $contract>),)*
        }

        impl ServiceHandle {
            /// The logical service this adapter implements.
            pub fn kind(&self) -> ServiceKind {
                match self {
                    $(ServiceHandle::$variant(_) => ServiceKind::$variant,)*
                }
            }

            /// The protocol version the adapter speaks.
            pub fn protocol_version(&self) -> ProtocolVersion {
                match self {
                    $(ServiceHandle::$variant(s) => s.protocol_version(),)*
                }
            }

            /// Returns `true` if both handles share one adapter instance.
            pub fn ptr_eq(&self, other: &ServiceHandle) -> bool {
                match (self, other) {
                    $(
                        (ServiceHandle::$variant(a), ServiceHandle::$variant(b)) => {
                            Arc::ptr_eq(a, b)
                        }
                    )*
                    _ => false,
                }
            }
        }

        impl<C: ?Sized> ServiceRegistry<C> {
            $(
                #[doc = concat!("Returns the `", $name, "` adapter, building it on first use.")]
                ///
                /// # Errors
                ///
                /// See [`ServiceRegistry::get`].
                pub fn $accessor(&self) -> Result<Arc<dyn $contract>, RegistryError> {
                    match self.get(ServiceKind::$variant)? {
                        ServiceHandle::$variant(service) => Ok(service),
                        other => Err(RegistryError::ConstructorMismatch {
                            expected: ServiceKind::$variant,
                            actual: other.kind(),
                        }),
                    }
                }
            )*
        }
    };
}

logical_services! {
    Admin => "admin", admin, AdminService;
    Bodies => "bodies", bodies, BodyService;
    Faces => "faces", faces, FaceService;
    Edges => "edges", edges, EdgeService;
    Designs => "designs", designs, DesignService;
    /// Free-standing curve operations.
    Curves => "curves", curves, CurveService;
    CoordinateSystems => "coordinate_systems", coordinate_systems, CoordinateSystemService;
    NamedSelections => "named_selections", named_selections, NamedSelectionService;
    Patterns => "patterns", patterns, PatternService;
    Materials => "materials", materials, MaterialService;
    MeasurementTools => "measurement_tools", measurement_tools, MeasurementToolsService;
    /// Fillet, chamfer and move.
    ModelTools => "model_tools", model_tools, ModelToolsService;
    Components => "components", components, ComponentService;
    Commands => "commands", commands, CommandService;
    /// Ray casting.
    Rayfire => "rayfire", rayfire, RayfireService;
    /// Escape hatch for features without a stable contract.
    Unsupported => "unsupported", unsupported, UnsupportedService;
    Parts => "parts", parts, PartService;
    DrivingDimensions => "driving_dimensions", driving_dimensions, DrivingDimensionService;
    /// Server-side script execution.
    DbuApplication => "dbu_application", dbu_application, DbuApplicationService;
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ServiceTable
// ---------------------------------------------------------------------------

/// Builds one adapter bound to a shared connection.
pub type ServiceConstructor<C> = fn(&Arc<C>) -> ServiceHandle;

/// Static `(service, version) → constructor` data.
pub struct ServiceTable<C: ?Sized> {
    constructors: HashMap<(ServiceKind, ProtocolVersion), ServiceConstructor<C>>,
}

impl<C: ?Sized> ServiceTable<C> {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers (or replaces) the constructor for `kind` under `version`.
    pub fn register(
        &mut self,
        kind: ServiceKind,
        version: ProtocolVersion,
        constructor: ServiceConstructor<C>,
    ) -> &mut Self {
        self.constructors.insert((kind, version), constructor);
        self
    }

    /// Returns the constructor for `(kind, version)`, if registered.
    pub fn constructor(
        &self,
        kind: ServiceKind,
        version: ProtocolVersion,
    ) -> Option<ServiceConstructor<C>> {
        self.constructors.get(&(kind, version)).copied()
    }

    pub fn supports(&self, kind: ServiceKind, version: ProtocolVersion) -> bool {
        self.constructors.contains_key(&(kind, version))
    }

    /// Versions for which `kind` is registered, ascending.
    pub fn versions_for(&self, kind: ServiceKind) -> Vec<ProtocolVersion> {
        ProtocolVersion::ALL
            .iter()
            .copied()
            .filter(|v| self.supports(kind, *v))
            .collect()
    }

    /// Services registered for `version`, in [`ServiceKind::ALL`] order.
    pub fn services_for(&self, version: ProtocolVersion) -> Vec<ServiceKind> {
        ServiceKind::ALL
            .iter()
            .copied()
            .filter(|k| self.supports(*k, version))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<C: ?Sized> Default for ServiceTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> std::fmt::Debug for ServiceTable<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rows: Vec<_> = self.constructors.keys().collect();
        rows.sort();
        f.debug_struct("ServiceTable").field("rows", &rows).finish()
    }
}

// ---------------------------------------------------------------------------
// ServiceRegistry
// ---------------------------------------------------------------------------

/// Lazily built, memoized adapters for one connection and one negotiated
/// protocol version.
///
/// The cache is guarded by a mutex held across construction, so concurrent
/// callers still observe exactly one adapter per service. Constructors only
/// wrap the shared connection and never block.
pub struct ServiceRegistry<C: ?Sized> {
    connection: Arc<C>,
    version: ProtocolVersion,
    table: Arc<ServiceTable<C>>,
    cache: Mutex<HashMap<ServiceKind, ServiceHandle>>,
}

impl<C: ?Sized> ServiceRegistry<C> {
    pub fn new(connection: Arc<C>, version: ProtocolVersion, table: Arc<ServiceTable<C>>) -> Self {
        Self {
            connection,
            version,
            table,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The negotiated protocol version this registry is bound to.
    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// The shared connection every adapter uses.
    pub fn connection(&self) -> &Arc<C> {
        &self.connection
    }

    /// Services available for the bound version.
    pub fn available_services(&self) -> Vec<ServiceKind> {
        self.table.services_for(self.version)
    }

    /// Looks a service up by name and returns its adapter.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownService`] if `name` is not a logical service,
    /// otherwise as [`ServiceRegistry::get`].
    pub fn get_service(&self, name: &str) -> Result<ServiceHandle, RegistryError> {
        let kind = ServiceKind::from_name(name).ok_or_else(|| RegistryError::UnknownService {
            name: name.to_string(),
        })?;
        self.get(kind)
    }

    /// Returns the adapter for `kind`, constructing and caching it on first use.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownService`] if no version registers `kind`.
    /// - [`RegistryError::UnsupportedServiceForVersion`] if other versions do,
    ///   but not the bound one.
    /// - [`RegistryError::ConstructorMismatch`] if the registered constructor
    ///   builds an adapter for another service.
    ///
    /// Nothing is cached on error.
    pub fn get(&self, kind: ServiceKind) -> Result<ServiceHandle, RegistryError> {
        let mut cache = self.cache.lock();
        if let Some(handle) = cache.get(&kind) {
            return Ok(handle.clone());
        }

        let Some(constructor) = self.table.constructor(kind, self.version) else {
            return Err(if self.table.versions_for(kind).is_empty() {
                RegistryError::UnknownService {
                    name: kind.name().to_string(),
                }
            } else {
                RegistryError::UnsupportedServiceForVersion {
                    service: kind,
                    version: self.version,
                }
            });
        };

        let handle = constructor(&self.connection);
        if handle.kind() != kind {
            return Err(RegistryError::ConstructorMismatch {
                expected: kind,
                actual: handle.kind(),
            });
        }

        debug!(service = %kind, version = %self.version, "constructed service adapter");
        cache.insert(kind, handle.clone());
        Ok(handle)
    }

    /// Returns `true` if the adapter for `kind` has already been built.
    pub fn is_cached(&self, kind: ServiceKind) -> bool {
        self.cache.lock().contains_key(&kind)
    }

    /// Number of adapters built so far.
    pub fn cached_count(&self) -> usize {
        self.cache.lock().len()
    }
}

impl<C: ?Sized> std::fmt::Debug for ServiceRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cached: Vec<_> = self.cache.lock().keys().copied().collect();
        cached.sort();
        f.debug_struct("ServiceRegistry")
            .field("version", &self.version)
            .field("cached", &cached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BodyInfo;
    use crate::services::{BackendInfo, LogFile, ServiceAdapter};
    use crate::types::{
        BoundingBox, Color, Distance, Point3D, SketchProfile, Tessellation, UnitVector,
    };
    use crate::{BodyId, ComponentId, ServiceError, ServiceResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Connection stand-in that counts adapter constructions.
    #[derive(Default)]
    struct Conn {
        built: AtomicUsize,
    }

    #[derive(Debug)]
    struct StubAdmin(ProtocolVersion);

    impl ServiceAdapter for StubAdmin {
        fn protocol_version(&self) -> ProtocolVersion {
            self.0
        }
    }

    #[async_trait]
    impl AdminService for StubAdmin {
        async fn get_backend(&self) -> ServiceResult<BackendInfo> {
            Err(ServiceError::not_implemented(ServiceKind::Admin, "get_backend", self.0))
        }
        async fn get_service_status(&self) -> ServiceResult<bool> {
            Ok(true)
        }
        async fn get_logs(&self, _all_logs: bool) -> ServiceResult<Vec<LogFile>> {
            Ok(Vec::new())
        }
    }

    #[derive(Debug)]
    struct StubBodies(ProtocolVersion);

    impl ServiceAdapter for StubBodies {
        fn protocol_version(&self) -> ProtocolVersion {
            self.0
        }
    }

    macro_rules! not_implemented {
        ($self:ident, $op:literal) => {
            Err(ServiceError::not_implemented(ServiceKind::Bodies, $op, $self.0))
        };
    }

    #[async_trait]
    impl BodyService for StubBodies {
        async fn create_sphere_body(
            &self,
            _: &str,
            _: &ComponentId,
            _: Point3D,
            _: Distance,
        ) -> ServiceResult<BodyInfo> {
            not_implemented!(self, "create_sphere_body")
        }
        async fn create_extruded_body(
            &self,
            _: &str,
            _: &ComponentId,
            _: &SketchProfile,
            _: Distance,
        ) -> ServiceResult<BodyInfo> {
            not_implemented!(self, "create_extruded_body")
        }
        async fn create_planar_body(
            &self,
            _: &str,
            _: &ComponentId,
            _: &SketchProfile,
        ) -> ServiceResult<BodyInfo> {
            not_implemented!(self, "create_planar_body")
        }
        async fn translate(&self, _: &[BodyId], _: UnitVector, _: Distance) -> ServiceResult<()> {
            not_implemented!(self, "translate")
        }
        async fn delete(&self, _: &BodyId) -> ServiceResult<()> {
            not_implemented!(self, "delete")
        }
        async fn get_volume(&self, _: &BodyId) -> ServiceResult<f64> {
            not_implemented!(self, "get_volume")
        }
        async fn get_bounding_box(&self, _: &BodyId) -> ServiceResult<BoundingBox> {
            not_implemented!(self, "get_bounding_box")
        }
        async fn get_color(&self, _: &BodyId) -> ServiceResult<Color> {
            not_implemented!(self, "get_color")
        }
        async fn set_color(&self, _: &BodyId, _: Color) -> ServiceResult<()> {
            not_implemented!(self, "set_color")
        }
        async fn is_suppressed(&self, _: &BodyId) -> ServiceResult<bool> {
            not_implemented!(self, "is_suppressed")
        }
        async fn set_suppressed(&self, _: &[BodyId], _: bool) -> ServiceResult<()> {
            not_implemented!(self, "set_suppressed")
        }
        async fn get_faces(&self, _: &BodyId) -> ServiceResult<Vec<crate::entities::FaceInfo>> {
            not_implemented!(self, "get_faces")
        }
        async fn get_edges(&self, _: &BodyId) -> ServiceResult<Vec<crate::entities::EdgeInfo>> {
            not_implemented!(self, "get_edges")
        }
        async fn boolean(
            &self,
            _: &BodyId,
            _: &[BodyId],
            _: crate::services::BooleanKind,
        ) -> ServiceResult<()> {
            not_implemented!(self, "boolean")
        }
        async fn get_tessellation(&self, _: &BodyId) -> ServiceResult<Tessellation> {
            not_implemented!(self, "get_tessellation")
        }
        async fn shell_body(&self, _: &BodyId, _: Distance) -> ServiceResult<bool> {
            not_implemented!(self, "shell_body")
        }
    }

    fn admin_v0(c: &Arc<Conn>) -> ServiceHandle {
        c.built.fetch_add(1, Ordering::SeqCst);
        ServiceHandle::Admin(Arc::new(StubAdmin(ProtocolVersion::V0)))
    }

    fn admin_v1(c: &Arc<Conn>) -> ServiceHandle {
        c.built.fetch_add(1, Ordering::SeqCst);
        ServiceHandle::Admin(Arc::new(StubAdmin(ProtocolVersion::V1)))
    }

    fn bodies_v0(c: &Arc<Conn>) -> ServiceHandle {
        c.built.fetch_add(1, Ordering::SeqCst);
        ServiceHandle::Bodies(Arc::new(StubBodies(ProtocolVersion::V0)))
    }

    /// Registered under `curves` for v1 only.
    fn curves_v1(c: &Arc<Conn>) -> ServiceHandle {
        c.built.fetch_add(1, Ordering::SeqCst);
        ServiceHandle::Admin(Arc::new(StubAdmin(ProtocolVersion::V1)))
    }

    /// Deliberately builds the wrong kind.
    fn broken_faces(_: &Arc<Conn>) -> ServiceHandle {
        ServiceHandle::Admin(Arc::new(StubAdmin(ProtocolVersion::V0)))
    }

    fn table() -> Arc<ServiceTable<Conn>> {
        let mut table: ServiceTable<Conn> = ServiceTable::new();
        table
            .register(ServiceKind::Admin, ProtocolVersion::V0, admin_v0)
            .register(ServiceKind::Admin, ProtocolVersion::V1, admin_v1)
            .register(ServiceKind::Bodies, ProtocolVersion::V0, bodies_v0)
            .register(ServiceKind::Curves, ProtocolVersion::V1, curves_v1)
            .register(ServiceKind::Faces, ProtocolVersion::V0, broken_faces);
        Arc::new(table)
    }

    fn registry(version: ProtocolVersion) -> (Arc<Conn>, ServiceRegistry<Conn>) {
        let conn = Arc::new(Conn::default());
        let registry = ServiceRegistry::new(Arc::clone(&conn), version, table());
        (conn, registry)
    }

    #[test]
    fn service_names_round_trip() {
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(
            ServiceKind::from_name("Named-Selections"),
            Some(ServiceKind::NamedSelections)
        );
        assert_eq!(ServiceKind::from_name("gizmos"), None);
        assert_eq!(ServiceKind::ALL.len(), 19);
    }

    #[test]
    fn get_service_memoizes() {
        let (conn, registry) = registry(ProtocolVersion::V0);
        let first = registry.get_service("bodies").unwrap();
        let second = registry.get_service("bodies").unwrap();
        assert!(first.ptr_eq(&second));
        assert_eq!(conn.built.load(Ordering::SeqCst), 1);
        assert_eq!(registry.cached_count(), 1);
        assert!(!registry.is_cached(ServiceKind::Admin));
    }

    #[test]
    fn typed_accessor_shares_the_cached_instance() {
        let (_conn, registry) = registry(ProtocolVersion::V0);
        let by_name = registry.get_service("bodies").unwrap();
        let typed = registry.bodies().unwrap();
        match by_name {
            ServiceHandle::Bodies(b) => assert!(Arc::ptr_eq(&b, &typed)),
            other => panic!("unexpected handle {other:?}"),
        }
        assert_eq!(typed.protocol_version(), ProtocolVersion::V0);
    }

    #[test]
    fn unsupported_for_version_leaves_no_cache_entry() {
        let (conn, registry) = registry(ProtocolVersion::V0);
        let err = registry.get_service("curves").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnsupportedServiceForVersion {
                service: ServiceKind::Curves,
                version: ProtocolVersion::V0
            }
        );
        assert!(!registry.is_cached(ServiceKind::Curves));
        assert_eq!(conn.built.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unknown_names_and_unregistered_kinds() {
        let (_conn, registry) = registry(ProtocolVersion::V1);
        assert_eq!(
            registry.get_service("gizmos").unwrap_err(),
            RegistryError::UnknownService {
                name: "gizmos".to_string()
            }
        );
        assert_eq!(
            registry.get(ServiceKind::Rayfire).unwrap_err(),
            RegistryError::UnknownService {
                name: "rayfire".to_string()
            }
        );
    }

    #[test]
    fn constructor_mismatch_is_reported_and_not_cached() {
        let (_conn, registry) = registry(ProtocolVersion::V0);
        assert_eq!(
            registry.faces().unwrap_err(),
            RegistryError::ConstructorMismatch {
                expected: ServiceKind::Faces,
                actual: ServiceKind::Admin
            }
        );
        assert_eq!(registry.cached_count(), 0);

        let (_conn, registry) = self::registry(ProtocolVersion::V1);
        assert!(matches!(
            registry.curves(),
            Err(RegistryError::ConstructorMismatch { .. })
        ));
    }

    #[test]
    fn table_queries() {
        let table = table();
        assert_eq!(
            table.versions_for(ServiceKind::Admin),
            ProtocolVersion::ALL.to_vec()
        );
        assert_eq!(
            table.versions_for(ServiceKind::Curves),
            vec![ProtocolVersion::V1]
        );
        assert_eq!(
            table.services_for(ProtocolVersion::V1),
            vec![ServiceKind::Admin, ServiceKind::Curves]
        );
        assert_eq!(table.len(), 5);
    }

    #[tokio::test]
    async fn stubbed_operation_reports_not_implemented() {
        let (_conn, registry) = registry(ProtocolVersion::V0);
        let bodies = registry.bodies().unwrap();
        let body = BodyId::new("b1").unwrap();
        let err = bodies
            .shell_body(&body, Distance::zero())
            .await
            .unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn concurrent_callers_share_one_adapter() {
        let (conn, registry) = registry(ProtocolVersion::V1);
        let registry = Arc::new(registry);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.admin().unwrap())
            })
            .collect();
        let admins: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(admins.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(conn.built.load(Ordering::SeqCst), 1);
    }
}
