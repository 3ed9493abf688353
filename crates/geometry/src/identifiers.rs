//! Newtype identifiers for server-side entities.
//!
//! Every entity the geometry service hands back (body, face, edge, …) is
//! referenced by an opaque server-assigned string. Each kind gets its own
//! newtype so a [`FaceId`] can never be passed where a [`BodyId`] is expected,
//! even though both are strings on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier and returns the inner string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Server-assigned entity identifiers
// ---------------------------------------------------------------------------

string_id! {
    /// Identifies an open design (document) on the server.
    DesignId
}

string_id! {
    /// Identifies a component within a design's assembly tree.
    ComponentId
}

string_id! {
    /// Identifies a solid or surface body.
    BodyId
}

string_id! {
    /// Identifies a face of a body.
    FaceId
}

string_id! {
    /// Identifies an edge of a body.
    EdgeId
}

string_id! {
    /// Identifies a design curve (a free-standing curve, not a body edge).
    CurveId
}

string_id! {
    /// Identifies a coordinate system placed in a component.
    CoordinateSystemId
}

string_id! {
    /// Identifies a named selection.
    NamedSelectionId
}

string_id! {
    /// Identifies a beam entity.
    BeamId
}

string_id! {
    /// Identifies a design point.
    DesignPointId
}

string_id! {
    /// Identifies a driving-dimension parameter.
    ParameterId
}

string_id! {
    /// Name of a material registered in a design.
    ///
    /// Materials are keyed by name on both protocol generations.
    MaterialName
}

/// Any selectable entity, for operations that accept mixed selections
/// (patterns, moves, measurements).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    Body(BodyId),
    Face(FaceId),
    Edge(EdgeId),
    Component(ComponentId),
    DesignPoint(DesignPointId),
}

impl EntityRef {
    /// Returns the raw server identifier, regardless of entity kind.
    pub fn as_str(&self) -> &str {
        match self {
            EntityRef::Body(id) => id.as_str(),
            EntityRef::Face(id) => id.as_str(),
            EntityRef::Edge(id) => id.as_str(),
            EntityRef::Component(id) => id.as_str(),
            EntityRef::DesignPoint(id) => id.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Client-generated identifiers
// ---------------------------------------------------------------------------

/// Identifies one client session: one connection, one negotiated version.
///
/// Generated fresh for every session and attached to tracing spans so all
/// activity on one connection can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a new random session identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a [`SessionId`] from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
