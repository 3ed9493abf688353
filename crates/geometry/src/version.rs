//! Wire protocol generations understood by this client.
//!
//! [`ProtocolVersion`] is a closed, totally ordered enumeration. Higher
//! ordinals are newer. [`VersionRequest`] is what a caller hands to the
//! resolver: either "pick the newest the server speaks" or one exact version.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::VersionError;

// ---------------------------------------------------------------------------
// ProtocolVersion
// ---------------------------------------------------------------------------

/// A generation of the geometry service's request/response message formats.
///
/// Generations may use different field names, unit envelopes, or RPC method
/// names for logically equivalent operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVersion {
    /// The original wire protocol (`geometry.v0` package).
    V0,
    /// The second-generation wire protocol (`geometry.v1` package).
    V1,
}

impl ProtocolVersion {
    /// Every member, in ascending ordinal order.
    pub const ALL: &'static [ProtocolVersion] = &[ProtocolVersion::V0, ProtocolVersion::V1];

    /// Returns the integer ordinal used for recency comparisons.
    pub fn ordinal(self) -> u32 {
        match self {
            ProtocolVersion::V0 => 0,
            ProtocolVersion::V1 => 1,
        }
    }

    /// Returns the canonical lowercase name (`"v0"`, `"v1"`).
    pub fn name(self) -> &'static str {
        match self {
            ProtocolVersion::V0 => "v0",
            ProtocolVersion::V1 => "v1",
        }
    }

    /// Returns the member with the maximum ordinal.
    pub fn latest() -> Self {
        Self::ALL
            .iter()
            .copied()
            .max_by_key(|v| v.ordinal())
            .unwrap_or(ProtocolVersion::V0)
    }

    /// Returns the member with the minimum ordinal.
    pub fn oldest() -> Self {
        Self::ALL
            .iter()
            .copied()
            .min_by_key(|v| v.ordinal())
            .unwrap_or(ProtocolVersion::V0)
    }

    /// Returns the member whose ordinal is one below `self`.
    ///
    /// # Errors
    ///
    /// [`VersionError::UnsupportedVersion`] when `self` is already the oldest.
    pub fn previous(self) -> Result<Self, VersionError> {
        self.ordinal()
            .checked_sub(1)
            .and_then(|n| Self::from_ordinal(n).ok())
            .ok_or(VersionError::UnsupportedVersion { version: self })
    }

    /// Looks up a member by ordinal.
    ///
    /// # Errors
    ///
    /// [`VersionError::InvalidVersion`] when no member has ordinal `n`.
    pub fn from_ordinal(n: u32) -> Result<Self, VersionError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.ordinal() == n)
            .ok_or_else(|| VersionError::InvalidVersion {
                input: n.to_string(),
            })
    }

    /// Looks up a member by name, ignoring ASCII case and surrounding
    /// whitespace (`"v1"`, `"V1"`).
    ///
    /// # Errors
    ///
    /// [`VersionError::InvalidVersion`] when no member has that name.
    pub fn from_name(name: &str) -> Result<Self, VersionError> {
        let trimmed = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| VersionError::InvalidVersion {
                input: name.to_string(),
            })
    }

    /// Returns `true` if `self` is strictly newer than `other`.
    pub fn is_newer_than(self, other: ProtocolVersion) -> bool {
        self.ordinal() > other.ordinal()
    }
}

impl FromStr for ProtocolVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// VersionRequest
// ---------------------------------------------------------------------------

/// The caller's instruction to the version resolver.
///
/// Parsed from `"auto"` (or an empty string), a version name such as `"v0"`,
/// or a decimal ordinal such as `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VersionRequest {
    /// Select the newest version the server answers on.
    #[default]
    Auto,
    /// Require exactly this version; never fall back.
    Exact(ProtocolVersion),
}

impl VersionRequest {
    /// Returns the explicitly requested version, if any.
    pub fn exact(self) -> Option<ProtocolVersion> {
        match self {
            VersionRequest::Auto => None,
            VersionRequest::Exact(v) => Some(v),
        }
    }
}

impl From<ProtocolVersion> for VersionRequest {
    fn from(version: ProtocolVersion) -> Self {
        VersionRequest::Exact(version)
    }
}

impl From<Option<ProtocolVersion>> for VersionRequest {
    fn from(version: Option<ProtocolVersion>) -> Self {
        version.map_or(VersionRequest::Auto, VersionRequest::Exact)
    }
}

impl FromStr for VersionRequest {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(VersionRequest::Auto);
        }
        if let Ok(ordinal) = trimmed.parse::<u32>() {
            return ProtocolVersion::from_ordinal(ordinal).map(VersionRequest::Exact);
        }
        ProtocolVersion::from_name(trimmed).map(VersionRequest::Exact)
    }
}

impl TryFrom<String> for VersionRequest {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VersionRequest> for String {
    fn from(value: VersionRequest) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for VersionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionRequest::Auto => f.write_str("auto"),
            VersionRequest::Exact(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_unique_and_ordered() {
        for pair in ProtocolVersion::ALL.windows(2) {
            assert!(pair[0].ordinal() < pair[1].ordinal());
            assert!(pair[0] < pair[1]);
            assert!(pair[1].is_newer_than(pair[0]));
        }
    }

    #[test]
    fn latest_is_the_unique_maximum() {
        let latest = ProtocolVersion::latest();
        assert_eq!(latest, ProtocolVersion::V1);
        let at_max = ProtocolVersion::ALL
            .iter()
            .filter(|v| v.ordinal() == latest.ordinal())
            .count();
        assert_eq!(at_max, 1);
        assert!(ProtocolVersion::ALL.iter().all(|v| *v <= latest));
    }

    #[test]
    fn previous_walks_every_version_then_fails() {
        let mut visited = vec![ProtocolVersion::latest()];
        let mut current = ProtocolVersion::latest();
        let err = loop {
            match current.previous() {
                Ok(prev) => {
                    assert!(prev.ordinal() < current.ordinal());
                    visited.push(prev);
                    current = prev;
                }
                Err(e) => break e,
            }
        };
        assert_eq!(visited, vec![ProtocolVersion::V1, ProtocolVersion::V0]);
        assert_eq!(
            err,
            VersionError::UnsupportedVersion {
                version: ProtocolVersion::oldest()
            }
        );
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(ProtocolVersion::from_name("V1"), Ok(ProtocolVersion::V1));
        assert_eq!(ProtocolVersion::from_name(" v0 "), Ok(ProtocolVersion::V0));
        assert!(matches!(
            ProtocolVersion::from_name("v7"),
            Err(VersionError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn from_ordinal_rejects_unknown() {
        assert_eq!(ProtocolVersion::from_ordinal(0), Ok(ProtocolVersion::V0));
        assert_eq!(
            ProtocolVersion::from_ordinal(9),
            Err(VersionError::InvalidVersion {
                input: "9".to_string()
            })
        );
    }

    #[test]
    fn version_request_parses_auto_names_and_ordinals() {
        assert_eq!("auto".parse::<VersionRequest>(), Ok(VersionRequest::Auto));
        assert_eq!("".parse::<VersionRequest>(), Ok(VersionRequest::Auto));
        assert_eq!("AUTO".parse::<VersionRequest>(), Ok(VersionRequest::Auto));
        assert_eq!(
            "V0".parse::<VersionRequest>(),
            Ok(VersionRequest::Exact(ProtocolVersion::V0))
        );
        assert_eq!(
            "1".parse::<VersionRequest>(),
            Ok(VersionRequest::Exact(ProtocolVersion::V1))
        );
        assert!("v2".parse::<VersionRequest>().is_err());
        assert!("12".parse::<VersionRequest>().is_err());
    }

    #[test]
    fn version_request_serde_uses_string_form() {
        let json = serde_json::to_string(&VersionRequest::Exact(ProtocolVersion::V1)).unwrap();
        assert_eq!(json, "\"v1\"");
        let back: VersionRequest = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(back, VersionRequest::Auto);
        assert!(serde_json::from_str::<VersionRequest>("\"v9\"").is_err());
    }
}
