//! Descriptors of server-side entities as returned by the service contracts.
//!
//! These are snapshots: the server owns the entities, and a descriptor may be
//! stale as soon as another call modifies the design.

use serde::{Deserialize, Serialize};

use crate::types::{Distance, Frame, Point3D, UnitVector};
use crate::{
    BeamId, BodyId, ComponentId, CoordinateSystemId, DesignId, DesignPointId, EdgeId, FaceId,
    NamedSelectionId,
};

/// A body as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyInfo {
    pub id: BodyId,
    pub name: String,
    /// The master body for instanced bodies; `None` for masters themselves.
    pub master_id: Option<BodyId>,
    pub parent: Option<ComponentId>,
    /// `true` for open surface bodies, `false` for closed solids.
    pub is_surface: bool,
}

// ---------------------------------------------------------------------------
// Faces and surfaces
// ---------------------------------------------------------------------------

/// Underlying surface geometry class of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    Plane,
    Cylinder,
    Cone,
    Torus,
    Sphere,
    Nurbs,
    Unknown,
}

/// A face as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceInfo {
    pub id: FaceId,
    pub surface_type: SurfaceType,
    /// `true` if the face normal opposes the surface normal.
    pub is_reversed: bool,
}

/// Analytic description of a face's surface.
///
/// Which optional fields are populated depends on `surface_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub surface_type: SurfaceType,
    pub frame: Frame,
    /// Cylinder, cone base, sphere radius; torus major radius.
    pub radius: Option<Distance>,
    /// Torus minor radius.
    pub minor_radius: Option<Distance>,
}

// ---------------------------------------------------------------------------
// Edges and curves
// ---------------------------------------------------------------------------

/// Underlying curve geometry class of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    Line,
    Circle,
    Ellipse,
    Nurbs,
    Unknown,
}

/// An edge as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeInfo {
    pub id: EdgeId,
    pub curve_type: CurveType,
    pub is_reversed: bool,
}

/// Analytic description of an edge's curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub curve_type: CurveType,
    pub origin: Point3D,
    /// Line direction or circle/ellipse axis.
    pub axis: Option<UnitVector>,
    /// Circle radius or ellipse major radius.
    pub radius: Option<Distance>,
    /// Ellipse minor radius.
    pub minor_radius: Option<Distance>,
}

// ---------------------------------------------------------------------------
// Documents and assembly structure
// ---------------------------------------------------------------------------

/// An open design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignInfo {
    pub id: DesignId,
    pub name: String,
    /// Root component of the design, when the server reports it.
    pub main_part: Option<ComponentId>,
}

/// A component in the assembly tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub id: ComponentId,
    pub name: String,
    /// The component this one instances, if any.
    pub template: Option<ComponentId>,
    pub parent: Option<ComponentId>,
}

/// A coordinate system placed in a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystemInfo {
    pub id: CoordinateSystemId,
    pub name: String,
    pub frame: Frame,
}

// ---------------------------------------------------------------------------
// Selections
// ---------------------------------------------------------------------------

/// The members of a named selection, grouped by entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionMembers {
    pub bodies: Vec<BodyId>,
    pub faces: Vec<FaceId>,
    pub edges: Vec<EdgeId>,
    pub beams: Vec<BeamId>,
    pub design_points: Vec<DesignPointId>,
}

impl SelectionMembers {
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
            && self.faces.is_empty()
            && self.edges.is_empty()
            && self.beams.is_empty()
            && self.design_points.is_empty()
    }

    /// Total number of members of every kind.
    pub fn len(&self) -> usize {
        self.bodies.len()
            + self.faces.len()
            + self.edges.len()
            + self.beams.len()
            + self.design_points.len()
    }
}

/// A named selection as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSelectionInfo {
    pub id: NamedSelectionId,
    pub name: String,
    pub members: SelectionMembers,
}
