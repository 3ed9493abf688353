//! Plain value types carried across the service contracts.
//!
//! All lengths are in meters and all angles in radians at this layer. The
//! version adapters convert to whatever unit envelope their wire format uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Measures
// ---------------------------------------------------------------------------

/// A finite length in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance(f64);

impl Distance {
    /// Creates a [`Distance`] in meters. Returns `None` if not finite.
    #[must_use]
    pub fn from_meters(meters: f64) -> Option<Self> {
        meters.is_finite().then_some(Self(meters))
    }

    /// Creates a [`Distance`] in millimeters. Returns `None` if not finite.
    #[must_use]
    pub fn from_millimeters(mm: f64) -> Option<Self> {
        Self::from_meters(mm / 1000.0)
    }

    /// A zero length.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the length in meters.
    pub fn as_meters(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m", self.0)
    }
}

/// A finite angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    /// Creates an [`Angle`] in radians. Returns `None` if not finite.
    #[must_use]
    pub fn from_radians(radians: f64) -> Option<Self> {
        radians.is_finite().then_some(Self(radians))
    }

    /// Creates an [`Angle`] in degrees. Returns `None` if not finite.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        Self::from_radians(degrees.to_radians())
    }

    /// Returns the angle in radians.
    pub fn as_radians(self) -> f64 {
        self.0
    }

    /// Returns the angle in degrees.
    pub fn as_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

/// A UTC wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

// ---------------------------------------------------------------------------
// Points, directions, frames
// ---------------------------------------------------------------------------

/// A point in model space, coordinates in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A direction of unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitVector {
    x: f64,
    y: f64,
    z: f64,
}

impl UnitVector {
    pub const X: UnitVector = UnitVector {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const Y: UnitVector = UnitVector {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const Z: UnitVector = UnitVector {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Normalizes `(x, y, z)`. Returns `None` for a zero or non-finite vector.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Option<Self> {
        let norm = (x * x + y * y + z * z).sqrt();
        if norm.is_finite() && norm > f64::EPSILON {
            Some(Self {
                x: x / norm,
                y: y / norm,
                z: z / norm,
            })
        } else {
            None
        }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn z(self) -> f64 {
        self.z
    }
}

/// A right-handed placement: origin plus two orthogonal axis directions.
///
/// Also used as a sketch plane (the plane spanned by `dir_x`, `dir_y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point3D,
    pub dir_x: UnitVector,
    pub dir_y: UnitVector,
}

impl Frame {
    /// The world XY frame at the origin.
    pub fn world() -> Self {
        Self {
            origin: Point3D::ORIGIN,
            dir_x: UnitVector::X,
            dir_y: UnitVector::Y,
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::world()
    }
}

/// An infinite line used as a rotation or revolution axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub origin: Point3D,
    pub direction: UnitVector,
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Formats as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, any case).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Some(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a,
        })
    }
}

// ---------------------------------------------------------------------------
// Bounds, parameter ranges, meshes
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3D,
    pub max: Point3D,
}

impl BoundingBox {
    pub fn center(&self) -> Point3D {
        Point3D::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }
}

/// A closed parameter interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

/// The parameter-space bounds of a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvBox {
    pub u: Interval,
    pub v: Interval,
}

/// A triangle mesh of a body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tessellation {
    /// Mesh vertices in meters.
    pub vertices: Vec<Point3D>,
    /// Triangles as indices into `vertices`.
    pub triangles: Vec<[u32; 3]>,
}

// ---------------------------------------------------------------------------
// Sketch profiles
// ---------------------------------------------------------------------------

/// One segment of a planar profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SketchSegment {
    Line {
        start: Point3D,
        end: Point3D,
    },
    Arc {
        center: Point3D,
        start: Point3D,
        end: Point3D,
        axis: UnitVector,
    },
    Circle {
        center: Point3D,
        radius: Distance,
    },
}

/// A closed planar profile used for extrusion, planar bodies and lofts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchProfile {
    pub plane: Frame,
    pub segments: Vec<SketchSegment>,
}

impl SketchProfile {
    pub fn new(plane: Frame) -> Self {
        Self {
            plane,
            segments: Vec::new(),
        }
    }

    pub fn with_segment(mut self, segment: SketchSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_round_trip() {
        let c = Color {
            r: 0x12,
            g: 0xAB,
            b: 0x00,
            a: 0x80,
        };
        assert_eq!(c.to_hex(), "#12AB0080");
        assert_eq!(Color::from_hex("#12ab0080"), Some(c));
        assert_eq!(Color::from_hex("ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("#ff00"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn unit_vector_normalizes() {
        let v = UnitVector::new(0.0, 3.0, 4.0).unwrap();
        assert!((v.y() - 0.6).abs() < 1e-12);
        assert!((v.z() - 0.8).abs() < 1e-12);
        assert!(UnitVector::new(0.0, 0.0, 0.0).is_none());
        assert!(UnitVector::new(f64::NAN, 1.0, 0.0).is_none());
    }

    #[test]
    fn measures_reject_non_finite() {
        assert!(Distance::from_meters(f64::INFINITY).is_none());
        assert_eq!(
            Distance::from_millimeters(25.0).map(Distance::as_meters),
            Some(0.025)
        );
        assert!(Angle::from_degrees(f64::NAN).is_none());
        let right = Angle::from_degrees(90.0).unwrap();
        assert!((right.as_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn bounding_box_center() {
        let b = BoundingBox {
            min: Point3D::new(0.0, 0.0, 0.0),
            max: Point3D::new(2.0, 4.0, 6.0),
        };
        assert_eq!(b.center(), Point3D::new(1.0, 2.0, 3.0));
    }
}
