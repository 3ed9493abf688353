//! Wire messages of the `geometry.v1` package.
//!
//! Lengths and angles travel in a [`Quantity`] envelope expressed in geometry
//! units (meters, radians). Entities are referenced through
//! [`EntityIdentifier`] messages, enumerations are strings, colors are RGBA
//! structs and most mutations answer with a [`CommandResponse`].

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Quantity {
    #[prost(double, tag = "1")]
    pub value_in_geometry_units: f64,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct EntityIdentifier {
    #[prost(string, tag = "1")]
    pub id: String,
}

/// Outcome of a command the server executed.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommandResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolResponse {
    #[prost(bool, tag = "1")]
    pub result: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MultipleEntitiesRequest {
    #[prost(message, repeated, tag = "1")]
    pub ids: Vec<EntityIdentifier>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(message, optional, tag = "1")]
    pub x: Option<Quantity>,
    #[prost(message, optional, tag = "2")]
    pub y: Option<Quantity>,
    #[prost(message, optional, tag = "3")]
    pub z: Option<Quantity>,
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
    #[prost(message, optional, tag = "2")]
    pub radius: Option<Quantity>,
}

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

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Color {
    #[prost(uint32, tag = "1")]
    pub r: u32,
    #[prost(uint32, tag = "2")]
    pub g: u32,
    #[prost(uint32, tag = "3")]
    pub b: u32,
    #[prost(uint32, tag = "4")]
    pub a: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Body {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub master_id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "4")]
    pub parent_id: Option<EntityIdentifier>,
    #[prost(bool, tag = "5")]
    pub is_surface: bool,
}

/// Bodies created by a batched create request, in request order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateBodiesResponse {
    #[prost(message, repeated, tag = "1")]
    pub bodies: Vec<Body>,
}

/// `surface_type` is e.g. `"SURFACETYPE_PLANE"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Face {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub surface_type: String,
    #[prost(bool, tag = "3")]
    pub is_reversed: bool,
}

/// `curve_type` is e.g. `"CURVETYPE_LINE"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Edge {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub curve_type: String,
    #[prost(bool, tag = "3")]
    pub is_reversed: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FacesResponse {
    #[prost(message, repeated, tag = "1")]
    pub faces: Vec<Face>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EdgesResponse {
    #[prost(message, repeated, tag = "1")]
    pub edges: Vec<Edge>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuantityResponse {
    #[prost(message, optional, tag = "1")]
    pub value: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PointResponse {
    #[prost(message, optional, tag = "1")]
    pub point: Option<Point>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectionResponse {
    #[prost(message, optional, tag = "1")]
    pub direction: Option<Direction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetColorRequest {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub color: Option<Color>,
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceStatusResponse {
    #[prost(bool, tag = "1")]
    pub healthy: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerVersion {
    #[prost(uint32, tag = "1")]
    pub major: u32,
    #[prost(uint32, tag = "2")]
    pub minor: u32,
    #[prost(uint32, tag = "3")]
    pub service_pack: u32,
}

/// `backend_type` is e.g. `"BACKENDTYPE_LINUX_SERVICE"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BackendResponse {
    #[prost(string, tag = "1")]
    pub backend_type: String,
    #[prost(message, optional, tag = "2")]
    pub version: Option<ServerVersion>,
    #[prost(string, tag = "3")]
    pub api_server_build_info: String,
    #[prost(string, tag = "4")]
    pub product_build_info: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsRequest {
    #[prost(bool, tag = "1")]
    pub all_logs: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogFile {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub content: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsResponse {
    #[prost(message, repeated, tag = "1")]
    pub logs: Vec<LogFile>,
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSphereBodyRequestData {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub parent_id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "3")]
    pub center: Option<Point>,
    #[prost(message, optional, tag = "4")]
    pub radius: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSphereBodyRequest {
    #[prost(message, repeated, tag = "1")]
    pub request_data: Vec<CreateSphereBodyRequestData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateExtrudedBodyRequestData {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub parent_id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "3")]
    pub geometries: Option<Geometries>,
    /// Always non-negative; the sign lives in `direction_reversed`.
    #[prost(message, optional, tag = "4")]
    pub distance: Option<Quantity>,
    #[prost(bool, tag = "5")]
    pub direction_reversed: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateExtrudedBodyRequest {
    #[prost(message, repeated, tag = "1")]
    pub request_data: Vec<CreateExtrudedBodyRequestData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatePlanarBodyRequestData {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub parent_id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "3")]
    pub geometries: Option<Geometries>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatePlanarBodyRequest {
    #[prost(message, repeated, tag = "1")]
    pub request_data: Vec<CreatePlanarBodyRequestData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TranslateRequest {
    #[prost(message, repeated, tag = "1")]
    pub ids: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub direction: Option<Direction>,
    #[prost(message, optional, tag = "3")]
    pub distance: Option<Quantity>,
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
    #[prost(message, optional, tag = "1")]
    pub color: Option<Color>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSuppressedRequest {
    #[prost(message, repeated, tag = "1")]
    pub ids: Vec<EntityIdentifier>,
    #[prost(bool, tag = "2")]
    pub suppressed: bool,
}

/// `method` is `"unite"`, `"subtract"` or `"intersect"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BooleanRequest {
    #[prost(message, optional, tag = "1")]
    pub target: Option<EntityIdentifier>,
    #[prost(message, repeated, tag = "2")]
    pub tool_ids: Vec<EntityIdentifier>,
    #[prost(string, tag = "3")]
    pub method: String,
}

/// One merged mesh per body: packed xyz vertex triples in meters and packed
/// vertex-index triples.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TessellationResponse {
    #[prost(double, repeated, tag = "1")]
    pub vertices: Vec<f64>,
    #[prost(uint32, repeated, tag = "2")]
    pub triangles: Vec<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShellRequest {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub offset: Option<Quantity>,
}

// ---------------------------------------------------------------------------
// Faces and edges
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SurfaceResponse {
    #[prost(string, tag = "1")]
    pub surface_type: String,
    #[prost(message, optional, tag = "2")]
    pub frame: Option<Frame>,
    #[prost(message, optional, tag = "3")]
    pub radius: Option<Quantity>,
    #[prost(message, optional, tag = "4")]
    pub minor_radius: Option<Quantity>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ParamInterval {
    #[prost(double, tag = "1")]
    pub start: f64,
    #[prost(double, tag = "2")]
    pub end: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoxUvResponse {
    #[prost(message, optional, tag = "1")]
    pub u: Option<ParamInterval>,
    #[prost(message, optional, tag = "2")]
    pub v: Option<ParamInterval>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UvRequest {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(double, tag = "2")]
    pub u: f64,
    #[prost(double, tag = "3")]
    pub v: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CurveResponse {
    #[prost(string, tag = "1")]
    pub curve_type: String,
    #[prost(message, optional, tag = "2")]
    pub origin: Option<Point>,
    #[prost(message, optional, tag = "3")]
    pub axis: Option<Direction>,
    #[prost(message, optional, tag = "4")]
    pub radius: Option<Quantity>,
    #[prost(message, optional, tag = "5")]
    pub minor_radius: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntervalResponse {
    #[prost(message, optional, tag = "1")]
    pub interval: Option<ParamInterval>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartAndEndPointsResponse {
    #[prost(message, optional, tag = "1")]
    pub start: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub end: Option<Point>,
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

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Design {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub main_part_id: Option<EntityIdentifier>,
}

/// `format` is e.g. `"PARTEXPORTFORMAT_STEP"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportRequest {
    #[prost(string, tag = "1")]
    pub format: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Curves
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RevolveEdgesRequest {
    #[prost(message, repeated, tag = "1")]
    pub curves: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub axis_origin: Option<Point>,
    #[prost(message, optional, tag = "3")]
    pub axis_direction: Option<Direction>,
    #[prost(message, optional, tag = "4")]
    pub angle: Option<Quantity>,
    #[prost(bool, tag = "5")]
    pub symmetric: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RevolveEdgesResponse {
    #[prost(message, optional, tag = "1")]
    pub created_body: Option<EntityIdentifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntersectCurvesRequest {
    #[prost(message, optional, tag = "1")]
    pub first: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub second: Option<EntityIdentifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntersectCurvesResponse {
    #[prost(bool, tag = "1")]
    pub intersect: bool,
    #[prost(message, repeated, tag = "2")]
    pub points: Vec<Point>,
}

// ---------------------------------------------------------------------------
// Coordinate systems, named selections, components
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCoordinateSystemRequestData {
    #[prost(message, optional, tag = "1")]
    pub parent_id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub frame: Option<Frame>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCoordinateSystemRequest {
    #[prost(message, repeated, tag = "1")]
    pub request_data: Vec<CreateCoordinateSystemRequestData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoordinateSystem {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub frame: Option<Frame>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCoordinateSystemResponse {
    #[prost(message, repeated, tag = "1")]
    pub coordinate_systems: Vec<CoordinateSystem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectionMembers {
    #[prost(message, repeated, tag = "1")]
    pub bodies: Vec<EntityIdentifier>,
    #[prost(message, repeated, tag = "2")]
    pub faces: Vec<EntityIdentifier>,
    #[prost(message, repeated, tag = "3")]
    pub edges: Vec<EntityIdentifier>,
    #[prost(message, repeated, tag = "4")]
    pub beams: Vec<EntityIdentifier>,
    #[prost(message, repeated, tag = "5")]
    pub design_points: Vec<EntityIdentifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNamedSelectionRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub members: Option<SelectionMembers>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NamedSelection {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub members: Option<SelectionMembers>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateComponentRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub parent_id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "3")]
    pub template_id: Option<EntityIdentifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Component {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub template_id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "4")]
    pub parent_id: Option<EntityIdentifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetNameRequest {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetPlacementRequest {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub translation: Option<Point>,
    #[prost(message, optional, tag = "3")]
    pub rotation_axis_origin: Option<Point>,
    #[prost(message, optional, tag = "4")]
    pub rotation_axis_direction: Option<Direction>,
    #[prost(message, optional, tag = "5")]
    pub rotation_angle: Option<Quantity>,
}

/// `share_type` is e.g. `"SHARETYPE_MERGE"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSharedTopologyRequest {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub share_type: String,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LinearPatternRequest {
    #[prost(message, repeated, tag = "1")]
    pub selection: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub linear_direction: Option<EntityIdentifier>,
    #[prost(uint32, tag = "3")]
    pub count_x: u32,
    #[prost(message, optional, tag = "4")]
    pub pitch_x: Option<Quantity>,
    #[prost(bool, tag = "5")]
    pub two_dimensional: bool,
    #[prost(uint32, tag = "6")]
    pub count_y: u32,
    #[prost(message, optional, tag = "7")]
    pub pitch_y: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CircularPatternRequest {
    #[prost(message, repeated, tag = "1")]
    pub selection: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub circular_axis: Option<EntityIdentifier>,
    #[prost(uint32, tag = "3")]
    pub circular_count: u32,
    #[prost(message, optional, tag = "4")]
    pub circular_angle: Option<Quantity>,
    #[prost(uint32, optional, tag = "5")]
    pub radial_count: Option<u32>,
    #[prost(message, optional, tag = "6")]
    pub radial_pitch: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FillPatternRequest {
    #[prost(message, repeated, tag = "1")]
    pub selection: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub region: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "3")]
    pub linear_direction: Option<EntityIdentifier>,
    #[prost(message, optional, tag = "4")]
    pub margin: Option<Quantity>,
    #[prost(message, optional, tag = "5")]
    pub x_spacing: Option<Quantity>,
    #[prost(message, optional, tag = "6")]
    pub y_spacing: Option<Quantity>,
    #[prost(message, optional, tag = "7")]
    pub row_x_offset: Option<Quantity>,
    #[prost(message, optional, tag = "8")]
    pub row_y_offset: Option<Quantity>,
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
pub struct Material {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub properties: Vec<MaterialProperty>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddMaterialRequest {
    #[prost(message, optional, tag = "1")]
    pub material: Option<Material>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveMaterialRequest {
    #[prost(string, repeated, tag = "1")]
    pub names: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MinDistanceRequest {
    #[prost(message, repeated, tag = "1")]
    pub selection: Vec<EntityIdentifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MinDistanceResponse {
    #[prost(message, optional, tag = "1")]
    pub distance: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChamferRequest {
    #[prost(message, repeated, tag = "1")]
    pub selection: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub distance: Option<Quantity>,
    #[prost(message, optional, tag = "3")]
    pub angle: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilletRequest {
    #[prost(message, repeated, tag = "1")]
    pub selection: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub radius: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoveTranslateRequest {
    #[prost(message, repeated, tag = "1")]
    pub selection: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub direction: Option<Direction>,
    #[prost(message, optional, tag = "3")]
    pub distance: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoveRotateRequest {
    #[prost(message, repeated, tag = "1")]
    pub selection: Vec<EntityIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub axis_origin: Option<Point>,
    #[prost(message, optional, tag = "3")]
    pub axis_direction: Option<Direction>,
    #[prost(message, optional, tag = "4")]
    pub angle: Option<Quantity>,
}

// ---------------------------------------------------------------------------
// Commands and unsupported
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoftRequestData {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub parent_id: Option<EntityIdentifier>,
    #[prost(message, repeated, tag = "3")]
    pub profiles: Vec<Geometries>,
    #[prost(bool, tag = "4")]
    pub periodic: bool,
    #[prost(bool, tag = "5")]
    pub ruled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoftRequest {
    #[prost(message, repeated, tag = "1")]
    pub request_data: Vec<LoftRequestData>,
}

/// `id_type` is e.g. `"IDTYPE_FACE"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImportIdRequest {
    #[prost(string, tag = "1")]
    pub id_type: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImportIdEntry {
    #[prost(string, tag = "1")]
    pub import_id: String,
    #[prost(string, tag = "2")]
    pub moniker: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImportIdResponse {
    #[prost(message, repeated, tag = "1")]
    pub id_map: Vec<ImportIdEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportIdData {
    #[prost(string, tag = "1")]
    pub moniker: String,
    #[prost(string, tag = "2")]
    pub id_type: String,
    #[prost(string, tag = "3")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetExportIdsRequest {
    #[prost(message, repeated, tag = "1")]
    pub export_data: Vec<ExportIdData>,
}

// ---------------------------------------------------------------------------
// Driving dimensions and scripts
// ---------------------------------------------------------------------------

/// `dimension_type` is e.g. `"DIMENSIONTYPE_LINEAR"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DrivingDimension {
    #[prost(message, optional, tag = "1")]
    pub id: Option<EntityIdentifier>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub dimension_type: String,
    #[prost(message, optional, tag = "4")]
    pub dimension_value: Option<Quantity>,
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

/// `status` is e.g. `"UPDATESTATUS_SUCCESS"`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetDimensionValueResponse {
    #[prost(string, tag = "1")]
    pub status: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RunScriptRequest {
    #[prost(string, tag = "1")]
    pub script_path: String,
    #[prost(map = "string, string", tag = "2")]
    pub script_args: HashMap<String, String>,
    #[prost(uint32, optional, tag = "3")]
    pub api_version: Option<u32>,
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
