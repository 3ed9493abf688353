//! The v0 wire generation (`geometry.v0.*`).
//!
//! v0 servers speak plain doubles in meters and radians, identify entities by
//! bare strings, encode enums as integers and colors as `#RRGGBBAA` strings.
//! Free-standing curve operations do not exist in this generation; ray casting
//! exists only here.

use geometry::ServiceTable;

use crate::Connection;

pub mod conversions;
pub mod messages;

pub mod admin;
pub mod bodies;
pub mod commands;
pub mod components;
pub mod coordinate_systems;
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
pub mod rayfire;
pub mod unsupported;

pub use admin::AdminV0;
pub use bodies::BodiesV0;
pub use commands::CommandsV0;
pub use components::ComponentsV0;
pub use coordinate_systems::CoordinateSystemsV0;
pub use dbu_application::DbuApplicationV0;
pub use designs::{DesignsV0, PartsV0};
pub use driving_dimensions::DrivingDimensionsV0;
pub use edges::EdgesV0;
pub use faces::FacesV0;
pub use materials::MaterialsV0;
pub use measurement_tools::MeasurementToolsV0;
pub use model_tools::ModelToolsV0;
pub use named_selections::NamedSelectionsV0;
pub use patterns::PatternsV0;
pub use rayfire::RayfireV0;
pub use unsupported::UnsupportedV0;

/// Adds every v0 adapter to `table`.
pub fn register(table: &mut ServiceTable<dyn Connection>) {
    register_adapters! {
        table, V0;
        Admin => AdminV0,
        Bodies => BodiesV0,
        Faces => FacesV0,
        Edges => EdgesV0,
        Designs => DesignsV0,
        CoordinateSystems => CoordinateSystemsV0,
        NamedSelections => NamedSelectionsV0,
        Patterns => PatternsV0,
        Materials => MaterialsV0,
        MeasurementTools => MeasurementToolsV0,
        ModelTools => ModelToolsV0,
        Components => ComponentsV0,
        Commands => CommandsV0,
        Rayfire => RayfireV0,
        Unsupported => UnsupportedV0,
        Parts => PartsV0,
        DrivingDimensions => DrivingDimensionsV0,
        DbuApplication => DbuApplicationV0,
    }
}
