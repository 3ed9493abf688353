//! Wire messages of the `geometry.v0` package.
//!
//! Lengths are plain doubles in meters, angles plain doubles in radians,
//! identifiers bare strings and colors `#RRGGBBAA` strings.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntityIdentifier {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Direction {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Frame {
    #[prost(message, optional, tag = "1")]
    pub origin: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub dir_x: Option<Direction>,
    #[prost(message, optional, tag = "3")]
    pub dir_y: Option<Direction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Line {
    #[prost(message, optional, tag = "1")]
    pub start: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub end: Option<Point>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Arc {
    #[prost(message, optional, tag = "1")]
    pub center: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub start: Option<Point>,
    #[prost(message, optional, tag = "3")]
    pub end: Option<Point>,
    #[prost(message, optional, tag = "4")]
    pub axis: Option<Direction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Circle {
    #[prost(message, optional, tag = "1")]
    pub center: Option<Point>,
    #[prost(double, tag = "2")]
    pub radius: f64,
}

/// A closed planar profile.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Geometries {
    #[prost(message, optional, tag = "1")]
    pub plane: Option<Frame>,
    #[prost(message, repeated, tag = "2")]
    pub lines: Vec<Line>,
    #[prost(message, repeated, tag = "3")]
    pub arcs: Vec<Arc>,
    #[prost(message, repeated, tag = "4")]
    pub circles: Vec<Circle>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Body {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub master_id: String,
    #[prost(string, tag = "4")]
    pub parent_id: String,
    #[prost(bool, tag = "5")]
    pub is_surface: bool,
}

/// `surface_type`: 0 unknown, 1 plane, 2 cylinder, 3 cone, 4 torus, 5 sphere, 6 nurbs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Face {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int32, tag = "2")]
    pub surface_type: i32,
    #[prost(bool, tag = "3")]
    pub is_reversed: bool,
}

/// `curve_type`: 0 unknown, 1 line, 2 circle, 3 ellipse, 4 nurbs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Edge {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int32, tag = "2")]
    pub curve_type: i32,
    #[prost(bool, tag = "3")]
    pub is_reversed: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFacesResponse {
    #[prost(message, repeated, tag = "1")]
    pub faces: Vec<Face>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEdgesResponse {
    #[prost(message, repeated, tag = "1")]
    pub edges: Vec<Edge>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetColorRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub color: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PointResponse {
    #[prost(message, optional, tag = "1")]
    pub point: Option<Point>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DoubleResponse {
    #[prost(double, tag = "1")]
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthResponse {
    #[prost(string, tag = "1")]
    pub message: String,
}

/// `backend_type`: 0 Discovery, 1 SpaceClaim, 2 Windows service, 3 Linux
/// service, 4 core service.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BackendInfoResponse {
    #[prost(int32, tag = "1")]
    pub backend_type: i32,
    #[prost(uint32, tag = "2")]
    pub major_release: u32,
    #[prost(uint32, tag = "3")]
    pub minor_release: u32,
    #[prost(uint32, tag = "4")]
    pub service_pack: u32,
    #[prost(string, tag = "5")]
    pub api_server_build_info: String,
    #[prost(string, tag = "6")]
    pub product_build_info: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsRequest {
    #[prost(bool, tag = "1")]
    pub all_logs: bool,
}

/// One log file arrives in one or more chunks, in order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogChunk {
    #[prost(string, tag = "1")]
    pub log_name: String,
    #[prost(bytes = "vec", tag = "2")]
    pub log_chunk: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsResponse {
    #[prost(message, repeated, tag = "1")]
    pub chunks: Vec<LogChunk>,
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSphereBodyRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub parent: String,
    #[prost(message, optional, tag = "3")]
    pub center: Option<Point>,
    #[prost(double, tag = "4")]
    pub radius: f64,
}

/// A negative `distance` extrudes against the plane normal.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateExtrudedBodyRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub parent: String,
    #[prost(message, optional, tag = "3")]
    pub geometries: Option<Geometries>,
    #[prost(double, tag = "4")]
    pub distance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatePlanarBodyRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub parent: String,
    #[prost(message, optional, tag = "3")]
    pub geometries: Option<Geometries>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TranslateRequest {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub direction: Option<Direction>,
    #[prost(double, tag = "3")]
    pub distance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoundingBoxResponse {
    #[prost(message, optional, tag = "1")]
    pub min: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub max: Option<Point>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColorResponse {
    #[prost(string, tag = "1")]
    pub color: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSuppressedRequest {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
    #[prost(bool, tag = "2")]
    pub is_suppressed: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BooleanRequest {
    #[prost(string, tag = "1")]
    pub body: String,
    #[prost(string, repeated, tag = "2")]
    pub tool_bodies: Vec<String>,
    #[prost(string, tag = "3")]
    pub method: String,
}

/// Per-face mesh. `faces` is a flat `[n, i0, .., in-1, n, ..]` polygon list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FaceTessellation {
    #[prost(double, repeated, tag = "1")]
    pub vertices: Vec<f64>,
    #[prost(int32, repeated, tag = "2")]
    pub faces: Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTessellationResponse {
    #[prost(map = "string, message", tag = "1")]
    pub face_tessellation: HashMap<String, FaceTessellation>,
}

// ---------------------------------------------------------------------------
// Faces
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SurfaceResponse {
    #[prost(int32, tag = "1")]
    pub surface_type: i32,
    #[prost(message, optional, tag = "2")]
    pub origin: Option<Point>,
    #[prost(message, optional, tag = "3")]
    pub reference: Option<Direction>,
    #[prost(message, optional, tag = "4")]
    pub axis: Option<Direction>,
    #[prost(double, tag = "5")]
    pub radius: f64,
    #[prost(double, tag = "6")]
    pub minor_radius: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoxUvResponse {
    #[prost(double, tag = "1")]
    pub start_u: f64,
    #[prost(double, tag = "2")]
    pub end_u: f64,
    #[prost(double, tag = "3")]
    pub start_v: f64,
    #[prost(double, tag = "4")]
    pub end_v: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UvRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(double, tag = "2")]
    pub u: f64,
    #[prost(double, tag = "3")]
    pub v: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectionResponse {
    #[prost(message, optional, tag = "1")]
    pub direction: Option<Direction>,
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CurveResponse {
    #[prost(int32, tag = "1")]
    pub curve_type: i32,
    #[prost(message, optional, tag = "2")]
    pub origin: Option<Point>,
    #[prost(message, optional, tag = "3")]
    pub axis: Option<Direction>,
    #[prost(double, tag = "4")]
    pub radius: f64,
    #[prost(double, tag = "5")]
    pub minor_radius: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntervalResponse {
    #[prost(double, tag = "1")]
    pub start: f64,
    #[prost(double, tag = "2")]
    pub end: f64,
}

// ---------------------------------------------------------------------------
// Designs and parts
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NameRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilePathRequest {
    #[prost(string, tag = "1")]
    pub filepath: String,
}

/// An empty `id` means no design is open.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Design {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub main_part_id: String,
}

/// `format`: 0 scdocx, 1 Parasolid text, 2 Parasolid binary, 3 fmd, 4 STEP,
/// 5 IGES, 6 pmdb.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportRequest {
    #[prost(int32, tag = "1")]
    pub format: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Coordinate systems, named selections, components
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCoordinateSystemRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub frame: Option<Frame>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoordinateSystem {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub frame: Option<Frame>,
}

/// Members are a flat list; the server sorts them by entity kind.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNamedSelectionRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, repeated, tag = "2")]
    pub members: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NamedSelection {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, repeated, tag = "3")]
    pub bodies: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub faces: Vec<String>,
    #[prost(string, repeated, tag = "5")]
    pub edges: Vec<String>,
    #[prost(string, repeated, tag = "6")]
    pub beams: Vec<String>,
    #[prost(string, repeated, tag = "7")]
    pub design_points: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateComponentRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub parent: String,
    #[prost(string, tag = "3")]
    pub template: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Component {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub template_id: String,
    #[prost(string, tag = "4")]
    pub parent_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateComponentResponse {
    #[prost(message, optional, tag = "1")]
    pub component: Option<Component>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetNameRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
}

/// Absent messages leave the corresponding part of the placement unchanged.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetPlacementRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub translation: Option<Direction>,
    #[prost(message, optional, tag = "3")]
    pub rotation_axis_origin: Option<Point>,
    #[prost(message, optional, tag = "4")]
    pub rotation_axis_direction: Option<Direction>,
    #[prost(double, tag = "5")]
    pub rotation_angle: f64,
}

/// `share_type`: 0 none, 1 share, 2 merge, 3 groups.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSharedTopologyRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int32, tag = "2")]
    pub share_type: i32,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LinearPatternRequest {
    #[prost(string, repeated, tag = "1")]
    pub selection: Vec<String>,
    #[prost(string, tag = "2")]
    pub linear_direction: String,
    #[prost(int32, tag = "3")]
    pub count_x: i32,
    #[prost(double, tag = "4")]
    pub pitch_x: f64,
    #[prost(bool, tag = "5")]
    pub two_dimensional: bool,
    #[prost(int32, tag = "6")]
    pub count_y: i32,
    #[prost(double, tag = "7")]
    pub pitch_y: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModifyLinearPatternRequest {
    #[prost(string, repeated, tag = "1")]
    pub selection: Vec<String>,
    #[prost(int32, tag = "2")]
    pub count_x: i32,
    #[prost(double, tag = "3")]
    pub pitch_x: f64,
    #[prost(int32, tag = "4")]
    pub count_y: i32,
    #[prost(double, tag = "5")]
    pub pitch_y: f64,
}

/// `linear_count` of zero means a single ring.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CircularPatternRequest {
    #[prost(string, repeated, tag = "1")]
    pub selection: Vec<String>,
    #[prost(string, tag = "2")]
    pub circular_axis: String,
    #[prost(int32, tag = "3")]
    pub circular_count: i32,
    #[prost(double, tag = "4")]
    pub circular_angle: f64,
    #[prost(bool, tag = "5")]
    pub two_dimensional: bool,
    #[prost(int32, tag = "6")]
    pub linear_count: i32,
    #[prost(double, tag = "7")]
    pub linear_pitch: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FillPatternRequest {
    #[prost(string, repeated, tag = "1")]
    pub selection: Vec<String>,
    #[prost(string, tag = "2")]
    pub region: String,
    #[prost(string, tag = "3")]
    pub linear_direction: String,
    #[prost(double, tag = "4")]
    pub margin: f64,
    #[prost(double, tag = "5")]
    pub x_spacing: f64,
    #[prost(double, tag = "6")]
    pub y_spacing: f64,
    #[prost(double, tag = "7")]
    pub row_x_offset: f64,
    #[prost(double, tag = "8")]
    pub row_y_offset: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectionRequest {
    #[prost(string, repeated, tag = "1")]
    pub selection: Vec<String>,
}

// ---------------------------------------------------------------------------
// Materials, measurement, model tools
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MaterialProperty {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub display_name: String,
    #[prost(double, tag = "3")]
    pub value: f64,
    #[prost(string, tag = "4")]
    pub units: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddMaterialRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub properties: Vec<MaterialProperty>,
}

/// Only bodies can be measured on this generation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MinDistanceRequest {
    #[prost(string, repeated, tag = "1")]
    pub bodies: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MinDistanceResponse {
    #[prost(double, tag = "1")]
    pub distance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChamferRequest {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
    #[prost(double, tag = "2")]
    pub distance: f64,
    #[prost(double, tag = "3")]
    pub angle: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilletRequest {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
    #[prost(double, tag = "2")]
    pub radius: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoveTranslateRequest {
    #[prost(string, repeated, tag = "1")]
    pub selection: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub direction: Option<Direction>,
    #[prost(double, tag = "3")]
    pub distance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoveRotateRequest {
    #[prost(string, repeated, tag = "1")]
    pub selection: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub axis_origin: Option<Point>,
    #[prost(message, optional, tag = "3")]
    pub axis_direction: Option<Direction>,
    #[prost(double, tag = "4")]
    pub angle: f64,
}

// ---------------------------------------------------------------------------
// Commands, rayfire, unsupported
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetExportIdRequest {
    #[prost(string, tag = "1")]
    pub moniker: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoftRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub parent: String,
    #[prost(message, repeated, tag = "3")]
    pub profiles: Vec<Geometries>,
    #[prost(bool, tag = "4")]
    pub periodic: bool,
    #[prost(bool, tag = "5")]
    pub ruled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Ray {
    #[prost(message, optional, tag = "1")]
    pub origin: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub direction: Option<Direction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FireRaysRequest {
    #[prost(string, tag = "1")]
    pub body: String,
    #[prost(message, repeated, tag = "2")]
    pub rays: Vec<Ray>,
    #[prost(double, tag = "3")]
    pub max_distance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RayHit {
    #[prost(int32, tag = "1")]
    pub ray_index: i32,
    #[prost(string, tag = "2")]
    pub face: String,
    #[prost(message, optional, tag = "3")]
    pub point: Option<Point>,
    #[prost(message, optional, tag = "4")]
    pub normal: Option<Direction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FireRaysResponse {
    #[prost(message, repeated, tag = "1")]
    pub hits: Vec<RayHit>,
}

/// `id_type`: 0 component, 1 body, 2 face, 3 edge.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImportIdRequest {
    #[prost(int32, tag = "1")]
    pub id_type: i32,
}

/// Keyed by import id, valued by moniker.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImportIdResponse {
    #[prost(map = "string, string", tag = "1")]
    pub id_map: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportIdData {
    #[prost(string, tag = "1")]
    pub moniker: String,
    #[prost(int32, tag = "2")]
    pub id_type: i32,
    #[prost(string, tag = "3")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetExportIdsRequest {
    #[prost(message, repeated, tag = "1")]
    pub export_data: Vec<ExportIdData>,
}

// ---------------------------------------------------------------------------
// Driving dimensions, scripts
// ---------------------------------------------------------------------------

/// `dimension_type`: 0 unknown, 1 linear, 2 angular.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DrivingDimension {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub dimension_type: i32,
    #[prost(double, tag = "4")]
    pub dimension_value: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAllParametersResponse {
    #[prost(message, repeated, tag = "1")]
    pub driving_dimensions: Vec<DrivingDimension>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetDimensionValueRequest {
    #[prost(message, optional, tag = "1")]
    pub driving_dimension: Option<DrivingDimension>,
}

/// `status`: 0 unknown, 1 success, 2 failed to update, 3 failed to restore,
/// 4 constrained parameters.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetDimensionValueResponse {
    #[prost(int32, tag = "1")]
    pub status: i32,
}

/// `api_version` of zero selects the server's default scripting API.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RunScriptRequest {
    #[prost(string, tag = "1")]
    pub script_path: String,
    #[prost(map = "string, string", tag = "2")]
    pub script_args: HashMap<String, String>,
    #[prost(int32, tag = "3")]
    pub api_version: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RunScriptResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(map = "string, string", tag = "3")]
    pub values: HashMap<String, String>,
}
