//! The v1 wire generation (`geometry.v1.*`).
//!
//! v1 wraps every physical value in a `Quantity` envelope carrying geometry
//! units, identifies entities with `EntityIdentifier` messages and names enum
//! members as strings. Creation calls are batched and mutations answer with a
//! `CommandResponse`. Curve operations are new here; ray casting was dropped.

use geometry::ServiceTable;

use crate::Connection;

pub mod conversions;
pub mod messages;

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
pub mod patterns;
pub mod unsupported;

pub use admin::AdminV1;
pub use bodies::BodiesV1;
pub use commands::CommandsV1;
pub use components::ComponentsV1;
pub use coordinate_systems::CoordinateSystemsV1;
pub use curves::CurvesV1;
pub use dbu_application::DbuApplicationV1;
pub use designs::{DesignsV1, PartsV1};
pub use driving_dimensions::DrivingDimensionsV1;
pub use edges::EdgesV1;
pub use faces::FacesV1;
pub use materials::MaterialsV1;
pub use measurement_tools::MeasurementToolsV1;
pub use model_tools::ModelToolsV1;
pub use named_selections::NamedSelectionsV1;
pub use patterns::PatternsV1;
pub use unsupported::UnsupportedV1;

/// Adds every v1 adapter to `table`.
pub fn register(table: &mut ServiceTable<dyn Connection>) {
    register_adapters! {
        table, V1;
        Admin => AdminV1,
        Bodies => BodiesV1,
        Faces => FacesV1,
        Edges => EdgesV1,
        Designs => DesignsV1,
        Curves => CurvesV1,
        CoordinateSystems => CoordinateSystemsV1,
        NamedSelections => NamedSelectionsV1,
        Patterns => PatternsV1,
        Materials => MaterialsV1,
        MeasurementTools => MeasurementToolsV1,
        ModelTools => ModelToolsV1,
        Components => ComponentsV1,
        Commands => CommandsV1,
        Unsupported => UnsupportedV1,
        Parts => PartsV1,
        DrivingDimensions => DrivingDimensionsV1,
        DbuApplication => DbuApplicationV1,
    }
}
