//! Domain ↔ `geometry.v1` message conversions.

use geometry::entities::{
    BodyInfo, ComponentInfo, CoordinateSystemInfo, Curve, CurveType, DesignInfo, EdgeInfo,
    FaceInfo, NamedSelectionInfo, SelectionMembers, Surface, SurfaceType,
};
use geometry::services::{
    BackendType, DimensionType, ExportFormat, ImportIdType, Parameter, ParameterUpdateStatus,
    SharedTopology,
};
use geometry::types::{
    Angle, Color, Distance, Frame, Point3D, SketchProfile, SketchSegment, UnitVector,
};
use geometry::{
    BeamId, BodyId, ComponentId, CoordinateSystemId, DesignId, DesignPointId, EdgeId, EntityRef,
    FaceId, NamedSelectionId, ParameterId, ServiceError, ServiceResult,
};

use super::messages as pb;
use crate::call::{required, Rpc};

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

pub fn quantity(value: f64) -> pb::Quantity {
    pb::Quantity {
        value_in_geometry_units: value,
    }
}

pub fn length(d: Distance) -> Option<pb::Quantity> {
    Some(quantity(d.as_meters()))
}

pub fn angle(a: Angle) -> Option<pb::Quantity> {
    Some(quantity(a.as_radians()))
}

/// Reads a required envelope. An absent quantity is malformed, not zero.
pub fn value_from(q: Option<pb::Quantity>, rpc: Rpc, field: &str) -> ServiceResult<f64> {
    Ok(required(q, rpc, field)?.value_in_geometry_units)
}

pub fn distance_from(q: Option<pb::Quantity>, rpc: Rpc, field: &str) -> ServiceResult<Distance> {
    Distance::from_meters(value_from(q, rpc, field)?)
        .ok_or_else(|| ServiceError::malformed(rpc.operation, format!("non-finite '{field}'")))
}

/// Radii are optional on this generation; an absent envelope means none.
fn radius_from(q: Option<pb::Quantity>) -> Option<Distance> {
    q.and_then(|q| Distance::from_meters(q.value_in_geometry_units))
}

pub fn entity(id: &str) -> pb::EntityIdentifier {
    pb::EntityIdentifier { id: id.to_string() }
}

pub fn entities<'a, I>(ids: I) -> Vec<pb::EntityIdentifier>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter().map(entity).collect()
}

pub fn selection(refs: &[EntityRef]) -> Vec<pb::EntityIdentifier> {
    entities(refs.iter().map(EntityRef::as_str))
}

fn id<T>(
    raw: Option<pb::EntityIdentifier>,
    parse: fn(String) -> Option<T>,
    rpc: Rpc,
    what: &str,
) -> ServiceResult<T> {
    raw.and_then(|e| parse(e.id))
        .ok_or_else(|| ServiceError::malformed(rpc.operation, format!("missing {what} id")))
}

fn optional_id<T>(raw: Option<pb::EntityIdentifier>, parse: fn(String) -> Option<T>) -> Option<T> {
    raw.and_then(|e| parse(e.id))
}

/// Checks a command outcome; a refused command becomes
/// [`ServiceError::OperationFailed`].
pub fn ensure_success(response: pb::CommandResponse, rpc: Rpc) -> ServiceResult<()> {
    if response.success {
        Ok(())
    } else {
        Err(ServiceError::operation_failed(rpc.operation, response.message))
    }
}

// ---------------------------------------------------------------------------
// Geometry primitives
// ---------------------------------------------------------------------------

pub fn point(p: Point3D) -> pb::Point {
    pb::Point {
        x: Some(quantity(p.x)),
        y: Some(quantity(p.y)),
        z: Some(quantity(p.z)),
    }
}

pub fn point_from(p: pb::Point, rpc: Rpc) -> ServiceResult<Point3D> {
    Ok(Point3D::new(
        value_from(p.x, rpc, "point.x")?,
        value_from(p.y, rpc, "point.y")?,
        value_from(p.z, rpc, "point.z")?,
    ))
}

pub fn direction(d: UnitVector) -> pb::Direction {
    pb::Direction {
        x: d.x(),
        y: d.y(),
        z: d.z(),
    }
}

pub fn direction_from(d: pb::Direction, rpc: Rpc) -> ServiceResult<UnitVector> {
    UnitVector::new(d.x, d.y, d.z)
        .ok_or_else(|| ServiceError::malformed(rpc.operation, "zero-length direction"))
}

pub fn frame(f: Frame) -> pb::Frame {
    pb::Frame {
        origin: Some(point(f.origin)),
        dir_x: Some(direction(f.dir_x)),
        dir_y: Some(direction(f.dir_y)),
    }
}

pub fn frame_from(f: pb::Frame, rpc: Rpc) -> ServiceResult<Frame> {
    Ok(Frame {
        origin: point_from(required(f.origin, rpc, "frame.origin")?, rpc)?,
        dir_x: direction_from(required(f.dir_x, rpc, "frame.dir_x")?, rpc)?,
        dir_y: direction_from(required(f.dir_y, rpc, "frame.dir_y")?, rpc)?,
    })
}

pub fn color(c: Color) -> pb::Color {
    pb::Color {
        r: u32::from(c.r),
        g: u32::from(c.g),
        b: u32::from(c.b),
        a: u32::from(c.a),
    }
}

pub fn color_from(c: pb::Color, rpc: Rpc) -> ServiceResult<Color> {
    let channel = |v: u32| {
        u8::try_from(v).map_err(|_| {
            ServiceError::malformed(rpc.operation, format!("color channel {v} exceeds 255"))
        })
    };
    Ok(Color {
        r: channel(c.r)?,
        g: channel(c.g)?,
        b: channel(c.b)?,
        a: channel(c.a)?,
    })
}

pub fn geometries(profile: &SketchProfile) -> pb::Geometries {
    let mut out = pb::Geometries {
        plane: Some(frame(profile.plane)),
        ..Default::default()
    };
    for segment in &profile.segments {
        match *segment {
            SketchSegment::Line { start, end } => out.lines.push(pb::Line {
                start: Some(point(start)),
                end: Some(point(end)),
            }),
            SketchSegment::Arc {
                center,
                start,
                end,
                axis,
            } => out.arcs.push(pb::Arc {
                center: Some(point(center)),
                start: Some(point(start)),
                end: Some(point(end)),
                axis: Some(direction(axis)),
            }),
            SketchSegment::Circle { center, radius } => out.circles.push(pb::Circle {
                center: Some(point(center)),
                radius: length(radius),
            }),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

pub fn body_from(b: pb::Body, rpc: Rpc) -> ServiceResult<BodyInfo> {
    Ok(BodyInfo {
        id: id(b.id, BodyId::new, rpc, "body")?,
        name: b.name,
        master_id: optional_id(b.master_id, BodyId::new),
        parent: optional_id(b.parent_id, ComponentId::new),
        is_surface: b.is_surface,
    })
}

/// Takes the single body a one-element batch produced.
pub fn single_body(r: pb::CreateBodiesResponse, rpc: Rpc) -> ServiceResult<BodyInfo> {
    let mut bodies = r.bodies.into_iter();
    match (bodies.next(), bodies.next()) {
        (Some(body), None) => body_from(body, rpc),
        (None, _) => Err(ServiceError::malformed(rpc.operation, "no body created")),
        (Some(_), Some(_)) => Err(ServiceError::malformed(
            rpc.operation,
            "more bodies than requested",
        )),
    }
}

pub fn surface_type(name: &str) -> SurfaceType {
    match name {
        "SURFACETYPE_PLANE" => SurfaceType::Plane,
        "SURFACETYPE_CYLINDER" => SurfaceType::Cylinder,
        "SURFACETYPE_CONE" => SurfaceType::Cone,
        "SURFACETYPE_TORUS" => SurfaceType::Torus,
        "SURFACETYPE_SPHERE" => SurfaceType::Sphere,
        "SURFACETYPE_NURBS" => SurfaceType::Nurbs,
        _ => SurfaceType::Unknown,
    }
}

pub fn curve_type(name: &str) -> CurveType {
    match name {
        "CURVETYPE_LINE" => CurveType::Line,
        "CURVETYPE_CIRCLE" => CurveType::Circle,
        "CURVETYPE_ELLIPSE" => CurveType::Ellipse,
        "CURVETYPE_NURBS" => CurveType::Nurbs,
        _ => CurveType::Unknown,
    }
}

pub fn face_from(f: pb::Face, rpc: Rpc) -> ServiceResult<FaceInfo> {
    Ok(FaceInfo {
        id: id(f.id, FaceId::new, rpc, "face")?,
        surface_type: surface_type(&f.surface_type),
        is_reversed: f.is_reversed,
    })
}

pub fn edge_from(e: pb::Edge, rpc: Rpc) -> ServiceResult<EdgeInfo> {
    Ok(EdgeInfo {
        id: id(e.id, EdgeId::new, rpc, "edge")?,
        curve_type: curve_type(&e.curve_type),
        is_reversed: e.is_reversed,
    })
}

pub fn surface_from(s: pb::SurfaceResponse, rpc: Rpc) -> ServiceResult<Surface> {
    Ok(Surface {
        surface_type: surface_type(&s.surface_type),
        frame: frame_from(required(s.frame, rpc, "frame")?, rpc)?,
        radius: radius_from(s.radius),
        minor_radius: radius_from(s.minor_radius),
    })
}

pub fn curve_from(c: pb::CurveResponse, rpc: Rpc) -> ServiceResult<Curve> {
    Ok(Curve {
        curve_type: curve_type(&c.curve_type),
        origin: point_from(required(c.origin, rpc, "origin")?, rpc)?,
        axis: c.axis.and_then(|d| UnitVector::new(d.x, d.y, d.z)),
        radius: radius_from(c.radius),
        minor_radius: radius_from(c.minor_radius),
    })
}

pub fn design_from(d: pb::Design, rpc: Rpc) -> ServiceResult<DesignInfo> {
    Ok(DesignInfo {
        id: id(d.id, DesignId::new, rpc, "design")?,
        name: d.name,
        main_part: optional_id(d.main_part_id, ComponentId::new),
    })
}

pub fn coordinate_system_from(
    c: pb::CoordinateSystem,
    rpc: Rpc,
) -> ServiceResult<CoordinateSystemInfo> {
    Ok(CoordinateSystemInfo {
        id: id(c.id, CoordinateSystemId::new, rpc, "coordinate system")?,
        name: c.name,
        frame: frame_from(required(c.frame, rpc, "frame")?, rpc)?,
    })
}

pub fn selection_members(members: &SelectionMembers) -> pb::SelectionMembers {
    pb::SelectionMembers {
        bodies: entities(members.bodies.iter().map(BodyId::as_str)),
        faces: entities(members.faces.iter().map(FaceId::as_str)),
        edges: entities(members.edges.iter().map(EdgeId::as_str)),
        beams: entities(members.beams.iter().map(BeamId::as_str)),
        design_points: entities(members.design_points.iter().map(DesignPointId::as_str)),
    }
}

pub fn named_selection_from(n: pb::NamedSelection, rpc: Rpc) -> ServiceResult<NamedSelectionInfo> {
    fn ids<T>(raw: Vec<pb::EntityIdentifier>, parse: fn(String) -> Option<T>) -> Vec<T> {
        raw.into_iter().filter_map(|e| parse(e.id)).collect()
    }
    let members = n.members.unwrap_or_default();
    Ok(NamedSelectionInfo {
        id: id(n.id, NamedSelectionId::new, rpc, "named selection")?,
        name: n.name,
        members: SelectionMembers {
            bodies: ids(members.bodies, BodyId::new),
            faces: ids(members.faces, FaceId::new),
            edges: ids(members.edges, EdgeId::new),
            beams: ids(members.beams, BeamId::new),
            design_points: ids(members.design_points, DesignPointId::new),
        },
    })
}

pub fn component_from(c: pb::Component, rpc: Rpc) -> ServiceResult<ComponentInfo> {
    Ok(ComponentInfo {
        id: id(c.id, ComponentId::new, rpc, "component")?,
        name: c.name,
        template: optional_id(c.template_id, ComponentId::new),
        parent: optional_id(c.parent_id, ComponentId::new),
    })
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

pub fn backend_type(name: &str) -> BackendType {
    match name {
        "BACKENDTYPE_DISCOVERY" => BackendType::Discovery,
        "BACKENDTYPE_SPACECLAIM" => BackendType::SpaceClaim,
        "BACKENDTYPE_WINDOWS_SERVICE" => BackendType::WindowsService,
        "BACKENDTYPE_LINUX_SERVICE" => BackendType::LinuxService,
        "BACKENDTYPE_CORE_SERVICE" => BackendType::CoreService,
        _ => BackendType::Unknown,
    }
}

pub fn export_format(format: ExportFormat) -> String {
    let name = match format {
        ExportFormat::Scdocx => "PARTEXPORTFORMAT_SCDOCX",
        ExportFormat::ParasolidText => "PARTEXPORTFORMAT_PARASOLID_TEXT",
        ExportFormat::ParasolidBinary => "PARTEXPORTFORMAT_PARASOLID_BINARY",
        ExportFormat::Fmd => "PARTEXPORTFORMAT_FMD",
        ExportFormat::Step => "PARTEXPORTFORMAT_STEP",
        ExportFormat::Iges => "PARTEXPORTFORMAT_IGES",
        ExportFormat::Pmdb => "PARTEXPORTFORMAT_PMDB",
    };
    name.to_string()
}

pub fn shared_topology(topology: SharedTopology) -> String {
    let name = match topology {
        SharedTopology::None => "SHARETYPE_NONE",
        SharedTopology::Share => "SHARETYPE_SHARE",
        SharedTopology::Merge => "SHARETYPE_MERGE",
        SharedTopology::Groups => "SHARETYPE_GROUPS",
    };
    name.to_string()
}

pub fn import_id_type(id_type: ImportIdType) -> String {
    let name = match id_type {
        ImportIdType::Component => "IDTYPE_COMPONENT",
        ImportIdType::Body => "IDTYPE_BODY",
        ImportIdType::Face => "IDTYPE_FACE",
        ImportIdType::Edge => "IDTYPE_EDGE",
    };
    name.to_string()
}

fn dimension_type(name: &str) -> DimensionType {
    match name {
        "DIMENSIONTYPE_LINEAR" => DimensionType::Linear,
        "DIMENSIONTYPE_ANGULAR" => DimensionType::Angular,
        _ => DimensionType::Unknown,
    }
}

fn dimension_type_name(dimension_type: DimensionType) -> String {
    let name = match dimension_type {
        DimensionType::Linear => "DIMENSIONTYPE_LINEAR",
        DimensionType::Angular => "DIMENSIONTYPE_ANGULAR",
        DimensionType::Unknown => "DIMENSIONTYPE_UNKNOWN",
    };
    name.to_string()
}

pub fn parameter_from(d: pb::DrivingDimension, rpc: Rpc) -> ServiceResult<Parameter> {
    Ok(Parameter {
        id: id(d.id, ParameterId::new, rpc, "parameter")?,
        name: d.name,
        dimension_type: dimension_type(&d.dimension_type),
        value: value_from(d.dimension_value, rpc, "dimension_value")?,
    })
}

pub fn driving_dimension(p: &Parameter) -> pb::DrivingDimension {
    pb::DrivingDimension {
        id: Some(entity(p.id.as_str())),
        name: p.name.clone(),
        dimension_type: dimension_type_name(p.dimension_type),
        dimension_value: Some(quantity(p.value)),
    }
}

pub fn update_status(name: &str) -> ParameterUpdateStatus {
    match name {
        "UPDATESTATUS_SUCCESS" => ParameterUpdateStatus::Success,
        "UPDATESTATUS_FAILED_TO_UPDATE" => ParameterUpdateStatus::FailedToUpdate,
        "UPDATESTATUS_FAILED_TO_RESTORE" => ParameterUpdateStatus::FailedToRestore,
        "UPDATESTATUS_CONSTRAINED_PARAMETERS" => ParameterUpdateStatus::ConstrainedParameters,
        _ => ParameterUpdateStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RPC: Rpc = Rpc::new("test.op", "/geometry.v1.Test/Op");

    #[test]
    fn missing_coordinate_envelope_is_malformed() {
        let p = pb::Point {
            x: Some(quantity(1.0)),
            y: None,
            z: Some(quantity(0.0)),
        };
        let err = point_from(p, RPC).unwrap_err();
        assert!(matches!(err, ServiceError::MalformedResponse { .. }));
    }

    #[test]
    fn color_channels_are_range_checked() {
        let wire = |r, g, b, a| pb::Color { r, g, b, a };
        let ok = color_from(wire(255, 0, 10, 255), RPC).unwrap();
        assert_eq!(ok, Color::rgb(255, 0, 10));
        assert!(color_from(wire(256, 0, 0, 0), RPC).is_err());
    }

    #[test]
    fn refused_command_becomes_operation_failed() {
        let refused = pb::CommandResponse {
            success: false,
            message: "body is locked".to_string(),
        };
        match ensure_success(refused, RPC).unwrap_err() {
            ServiceError::OperationFailed { operation, message } => {
                assert_eq!(operation, "test.op");
                assert_eq!(message, "body is locked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn single_body_rejects_empty_and_extra_results() {
        let body = pb::Body {
            id: Some(entity("b-1")),
            ..Default::default()
        };
        let one = pb::CreateBodiesResponse {
            bodies: vec![body.clone()],
        };
        assert_eq!(single_body(one, RPC).unwrap().id.as_str(), "b-1");
        assert!(single_body(pb::CreateBodiesResponse::default(), RPC).is_err());
        let two = pb::CreateBodiesResponse {
            bodies: vec![body.clone(), body],
        };
        assert!(single_body(two, RPC).is_err());
    }

    #[test]
    fn enum_names_round_the_known_values() {
        assert_eq!(surface_type("SURFACETYPE_TORUS"), SurfaceType::Torus);
        assert_eq!(surface_type("SURFACETYPE_BSPLINE"), SurfaceType::Unknown);
        assert_eq!(
            backend_type("BACKENDTYPE_CORE_SERVICE"),
            BackendType::CoreService
        );
        assert_eq!(export_format(ExportFormat::Step), "PARTEXPORTFORMAT_STEP");
        assert_eq!(
            update_status("UPDATESTATUS_CONSTRAINED_PARAMETERS"),
            ParameterUpdateStatus::ConstrainedParameters
        );
    }
}
