//! Domain ↔ `geometry.v0` message conversions.

use geometry::entities::{
    BodyInfo, ComponentInfo, CoordinateSystemInfo, Curve, CurveType, DesignInfo, EdgeInfo,
    FaceInfo, NamedSelectionInfo, SelectionMembers, Surface, SurfaceType,
};
use geometry::services::{
    BackendType, DimensionType, ExportFormat, ImportIdType, Parameter, ParameterUpdateStatus,
    SharedTopology,
};
use geometry::types::{Distance, Frame, Point3D, SketchProfile, SketchSegment, UnitVector};
use geometry::{
    BodyId, ComponentId, CoordinateSystemId, DesignId, EdgeId, FaceId, NamedSelectionId,
    ParameterId, ServiceError, ServiceResult,
};

use super::messages as pb;
use crate::call::{required, Rpc};

// ---------------------------------------------------------------------------
// Geometry primitives
// ---------------------------------------------------------------------------

pub fn point(p: Point3D) -> pb::Point {
    pb::Point {
        x: p.x,
        y: p.y,
        z: p.z,
    }
}

pub fn point_from(p: pb::Point) -> Point3D {
    Point3D::new(p.x, p.y, p.z)
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
        origin: point_from(required(f.origin, rpc, "frame.origin")?),
        dir_x: direction_from(required(f.dir_x, rpc, "frame.dir_x")?, rpc)?,
        dir_y: direction_from(required(f.dir_y, rpc, "frame.dir_y")?, rpc)?,
    })
}

pub fn distance_from(meters: f64, rpc: Rpc) -> ServiceResult<Distance> {
    Distance::from_meters(meters)
        .ok_or_else(|| ServiceError::malformed(rpc.operation, "non-finite length"))
}

/// Zero encodes "absent" for radii on this generation.
fn radius_from(meters: f64) -> Option<Distance> {
    if meters > 0.0 {
        Distance::from_meters(meters)
    } else {
        None
    }
}

fn cross(a: UnitVector, b: UnitVector) -> Option<UnitVector> {
    UnitVector::new(
        a.y() * b.z() - a.z() * b.y(),
        a.z() * b.x() - a.x() * b.z(),
        a.x() * b.y() - a.y() * b.x(),
    )
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
                radius: radius.as_meters(),
            }),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

fn id<T>(raw: String, parse: fn(String) -> Option<T>, rpc: Rpc, what: &str) -> ServiceResult<T> {
    parse(raw).ok_or_else(|| ServiceError::malformed(rpc.operation, format!("empty {what} id")))
}

pub fn body_from(b: pb::Body, rpc: Rpc) -> ServiceResult<BodyInfo> {
    Ok(BodyInfo {
        id: id(b.id, BodyId::new, rpc, "body")?,
        name: b.name,
        master_id: BodyId::new(b.master_id),
        parent: ComponentId::new(b.parent_id),
        is_surface: b.is_surface,
    })
}

pub fn surface_type(code: i32) -> SurfaceType {
    match code {
        1 => SurfaceType::Plane,
        2 => SurfaceType::Cylinder,
        3 => SurfaceType::Cone,
        4 => SurfaceType::Torus,
        5 => SurfaceType::Sphere,
        6 => SurfaceType::Nurbs,
        _ => SurfaceType::Unknown,
    }
}

pub fn curve_type(code: i32) -> CurveType {
    match code {
        1 => CurveType::Line,
        2 => CurveType::Circle,
        3 => CurveType::Ellipse,
        4 => CurveType::Nurbs,
        _ => CurveType::Unknown,
    }
}

pub fn face_from(f: pb::Face, rpc: Rpc) -> ServiceResult<FaceInfo> {
    Ok(FaceInfo {
        id: id(f.id, FaceId::new, rpc, "face")?,
        surface_type: surface_type(f.surface_type),
        is_reversed: f.is_reversed,
    })
}

pub fn edge_from(e: pb::Edge, rpc: Rpc) -> ServiceResult<EdgeInfo> {
    Ok(EdgeInfo {
        id: id(e.id, EdgeId::new, rpc, "edge")?,
        curve_type: curve_type(e.curve_type),
        is_reversed: e.is_reversed,
    })
}

/// The surface frame is built from the reference direction (x) and the
/// surface axis (z).
pub fn surface_from(s: pb::SurfaceResponse, rpc: Rpc) -> ServiceResult<Surface> {
    let dir_x = direction_from(required(s.reference, rpc, "reference")?, rpc)?;
    let axis = direction_from(required(s.axis, rpc, "axis")?, rpc)?;
    let dir_y = cross(axis, dir_x)
        .ok_or_else(|| ServiceError::malformed(rpc.operation, "reference parallel to axis"))?;
    Ok(Surface {
        surface_type: surface_type(s.surface_type),
        frame: Frame {
            origin: point_from(required(s.origin, rpc, "origin")?),
            dir_x,
            dir_y,
        },
        radius: radius_from(s.radius),
        minor_radius: radius_from(s.minor_radius),
    })
}

pub fn curve_from(c: pb::CurveResponse, rpc: Rpc) -> ServiceResult<Curve> {
    Ok(Curve {
        curve_type: curve_type(c.curve_type),
        origin: point_from(required(c.origin, rpc, "origin")?),
        axis: c.axis.and_then(|d| UnitVector::new(d.x, d.y, d.z)),
        radius: radius_from(c.radius),
        minor_radius: radius_from(c.minor_radius),
    })
}

pub fn design_from(d: pb::Design) -> Option<DesignInfo> {
    Some(DesignInfo {
        id: DesignId::new(d.id)?,
        name: d.name,
        main_part: ComponentId::new(d.main_part_id),
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

pub fn named_selection_from(n: pb::NamedSelection, rpc: Rpc) -> ServiceResult<NamedSelectionInfo> {
    fn ids<T>(raw: Vec<String>, parse: fn(String) -> Option<T>) -> Vec<T> {
        raw.into_iter().filter_map(parse).collect()
    }
    Ok(NamedSelectionInfo {
        id: id(n.id, NamedSelectionId::new, rpc, "named selection")?,
        name: n.name,
        members: SelectionMembers {
            bodies: ids(n.bodies, BodyId::new),
            faces: ids(n.faces, FaceId::new),
            edges: ids(n.edges, EdgeId::new),
            beams: ids(n.beams, geometry::BeamId::new),
            design_points: ids(n.design_points, geometry::DesignPointId::new),
        },
    })
}

/// Flattens members into the single id list this generation accepts.
pub fn selection_members(members: &SelectionMembers) -> Vec<String> {
    let mut out = Vec::with_capacity(members.len());
    out.extend(members.bodies.iter().map(ToString::to_string));
    out.extend(members.faces.iter().map(ToString::to_string));
    out.extend(members.edges.iter().map(ToString::to_string));
    out.extend(members.beams.iter().map(ToString::to_string));
    out.extend(members.design_points.iter().map(ToString::to_string));
    out
}

pub fn component_from(c: pb::Component, rpc: Rpc) -> ServiceResult<ComponentInfo> {
    Ok(ComponentInfo {
        id: id(c.id, ComponentId::new, rpc, "component")?,
        name: c.name,
        template: ComponentId::new(c.template_id),
        parent: ComponentId::new(c.parent_id),
    })
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

pub fn backend_type(code: i32) -> BackendType {
    match code {
        0 => BackendType::Discovery,
        1 => BackendType::SpaceClaim,
        2 => BackendType::WindowsService,
        3 => BackendType::LinuxService,
        4 => BackendType::CoreService,
        _ => BackendType::Unknown,
    }
}

pub fn export_format(format: ExportFormat) -> i32 {
    match format {
        ExportFormat::Scdocx => 0,
        ExportFormat::ParasolidText => 1,
        ExportFormat::ParasolidBinary => 2,
        ExportFormat::Fmd => 3,
        ExportFormat::Step => 4,
        ExportFormat::Iges => 5,
        ExportFormat::Pmdb => 6,
    }
}

pub fn shared_topology(topology: SharedTopology) -> i32 {
    match topology {
        SharedTopology::None => 0,
        SharedTopology::Share => 1,
        SharedTopology::Merge => 2,
        SharedTopology::Groups => 3,
    }
}

pub fn import_id_type(id_type: ImportIdType) -> i32 {
    match id_type {
        ImportIdType::Component => 0,
        ImportIdType::Body => 1,
        ImportIdType::Face => 2,
        ImportIdType::Edge => 3,
    }
}

fn dimension_type(code: i32) -> DimensionType {
    match code {
        1 => DimensionType::Linear,
        2 => DimensionType::Angular,
        _ => DimensionType::Unknown,
    }
}

fn dimension_type_code(dimension_type: DimensionType) -> i32 {
    match dimension_type {
        DimensionType::Unknown => 0,
        DimensionType::Linear => 1,
        DimensionType::Angular => 2,
    }
}

pub fn parameter_from(d: pb::DrivingDimension, rpc: Rpc) -> ServiceResult<Parameter> {
    Ok(Parameter {
        id: id(d.id, ParameterId::new, rpc, "parameter")?,
        name: d.name,
        dimension_type: dimension_type(d.dimension_type),
        value: d.dimension_value,
    })
}

pub fn driving_dimension(p: &Parameter) -> pb::DrivingDimension {
    pb::DrivingDimension {
        id: p.id.as_str().to_string(),
        name: p.name.clone(),
        dimension_type: dimension_type_code(p.dimension_type),
        dimension_value: p.value,
    }
}

pub fn update_status(code: i32) -> ParameterUpdateStatus {
    match code {
        1 => ParameterUpdateStatus::Success,
        2 => ParameterUpdateStatus::FailedToUpdate,
        3 => ParameterUpdateStatus::FailedToRestore,
        4 => ParameterUpdateStatus::ConstrainedParameters,
        _ => ParameterUpdateStatus::Unknown,
    }
}
