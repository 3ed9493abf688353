//! Abstract service contracts.
//!
//! One trait per logical sub-service. Every protocol-version adapter
//! implements every operation of the traits it is registered for; an
//! operation that a wire generation genuinely lacks returns
//! [`ServiceError::NotImplementedInThisVersion`](crate::ServiceError::NotImplementedInThisVersion)
//! without touching the network.
//!
//! The contracts are stateless: each call is one independent request/response.
//! Cross-call state such as "the active design" belongs to the caller.
//!
//! | Module | Trait |
//! |--------|-------|
//! | [`admin`] | [`AdminService`] |
//! | [`bodies`] | [`BodyService`] |
//! | [`faces`] | [`FaceService`] |
//! | [`edges`] | [`EdgeService`] |
//! | [`designs`] | [`DesignService`] |
//! | [`curves`] | [`CurveService`] |
//! | [`coordinate_systems`] | [`CoordinateSystemService`] |
//! | [`named_selections`] | [`NamedSelectionService`] |
//! | [`patterns`] | [`PatternService`] |
//! | [`materials`] | [`MaterialService`] |
//! | [`measurement_tools`] | [`MeasurementToolsService`] |
//! | [`model_tools`] | [`ModelToolsService`] |
//! | [`components`] | [`ComponentService`] |
//! | [`commands`] | [`CommandService`] |
//! | [`rayfire`] | [`RayfireService`] |
//! | [`unsupported`] | [`UnsupportedService`] |
//! | [`parts`] | [`PartService`] |
//! | [`driving_dimensions`] | [`DrivingDimensionService`] |
//! | [`dbu_application`] | [`DbuApplicationService`] |

use crate::ProtocolVersion;

pub mod admin;
pub mod bodies;
pub mod commands;
pub mod components;
pub mod coordinate_systems;
pub mod curves;
pub mod dbu_application;
pub mod designs;
pub mod driving_dimensions;
pub mod edges;
pub mod faces;
pub mod materials;
pub mod measurement_tools;
pub mod model_tools;
pub mod named_selections;
pub mod parts;
pub mod patterns;
pub mod rayfire;
pub mod unsupported;

pub use admin::{AdminService, BackendInfo, BackendType, LogFile, ServerVersion};
pub use bodies::{BodyService, BooleanKind};
pub use commands::{CommandService, LoftOptions};
pub use components::{ComponentService, Placement, SharedTopology};
pub use coordinate_systems::CoordinateSystemService;
pub use curves::{CurveService, RevolveOptions};
pub use dbu_application::{DbuApplicationService, ScriptOutcome, ScriptRequest};
pub use designs::{DesignService, ExportFormat};
pub use driving_dimensions::{
    DimensionType, DrivingDimensionService, Parameter, ParameterUpdateStatus,
};
pub use edges::EdgeService;
pub use faces::FaceService;
pub use materials::{Material, MaterialProperty, MaterialService};
pub use measurement_tools::{Gap, MeasurementToolsService};
pub use model_tools::{ChamferSpec, ModelToolsService};
pub use named_selections::NamedSelectionService;
pub use parts::PartService;
pub use patterns::{CircularPatternSpec, FillPatternSpec, LinearPatternSpec, PatternService};
pub use rayfire::{Ray, RayHit, RayfireService};
pub use unsupported::{ExportIdEntry, ImportIdMapping, ImportIdType, UnsupportedService};

/// Behaviour shared by every service adapter, regardless of contract.
pub trait ServiceAdapter: Send + Sync + std::fmt::Debug {
    /// The wire protocol generation this adapter speaks.
    fn protocol_version(&self) -> ProtocolVersion;
}
