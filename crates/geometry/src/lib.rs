//! Domain core of the geometry kernel client.
//!
//! The remote geometry service speaks several generations of wire protocol.
//! This crate decides which one a session uses and hides the difference from
//! everything above it:
//!
//! 1. [`ProtocolVersion`] enumerates the generations and orders them.
//! 2. [`negotiation::resolve`] asks a [`CapabilityProbe`] which generation the
//!    server answers on, newest first, or validates an explicit request.
//! 3. [`ServiceRegistry`] binds a connection and the negotiated version to a
//!    [`ServiceTable`] and lazily builds one adapter per logical service.
//! 4. The traits in [`services`] are the contracts every adapter fulfils.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! The transport, the probes and the version-specific adapters live in the
//! `grpc` crate.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`version`] | `ProtocolVersion`, `VersionRequest` |
//! | [`negotiation`] | `CapabilityProbe` port, resolver, `NegotiationConfig` |
//! | [`registry`] | `ServiceKind`, `ServiceHandle`, `ServiceTable`, `ServiceRegistry` |
//! | [`services`] | One contract trait per logical service |
//! | [`identifiers`] | Newtype entity identifiers |
//! | [`types`] | Measures, points, frames, profiles |
//! | [`entities`] | Descriptors of server-side entities |
//! | [`errors`] | Error taxonomy |

pub mod entities;
pub mod errors;
pub mod identifiers;
pub mod negotiation;
pub mod registry;
pub mod services;
pub mod types;
pub mod version;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{
    GeometryError, NegotiationError, RegistryError, RemoteOperationError, RemoteStatus,
    ServiceError, ServiceResult, VersionError,
};
pub use identifiers::{
    BeamId, BodyId, ComponentId, CoordinateSystemId, CurveId, DesignId, DesignPointId, EdgeId,
    EntityRef, FaceId, MaterialName, NamedSelectionId, ParameterId, SessionId,
};
pub use negotiation::{CapabilityProbe, NegotiationConfig, DEFAULT_PROBE_TIMEOUT};
pub use registry::{ServiceConstructor, ServiceHandle, ServiceKind, ServiceRegistry, ServiceTable};
pub use services::ServiceAdapter;
pub use version::{ProtocolVersion, VersionRequest};
