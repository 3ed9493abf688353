//! Error taxonomy for version negotiation, service lookup and service calls.
//!
//! Each family is a separate enum so that callers can match precisely on the
//! stage that failed:
//!
//! | Stage | Type |
//! |-------|------|
//! | Parsing / walking versions | [`VersionError`] |
//! | Negotiating with a live server | [`NegotiationError`] |
//! | Obtaining a service adapter | [`RegistryError`] |
//! | Invoking an operation | [`ServiceError`] (wrapping [`RemoteOperationError`]) |
//!
//! [`GeometryError`] aggregates all of them for callers that do not care.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::ServiceKind;
use crate::ProtocolVersion;

// ---------------------------------------------------------------------------
// Version errors
// ---------------------------------------------------------------------------

/// Failures while parsing or walking [`ProtocolVersion`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum VersionError {
    /// The identifier parses to no known protocol version.
    #[error("'{input}' does not name a known protocol version")]
    InvalidVersion {
        /// The identifier exactly as supplied.
        input: String,
    },

    /// There is no version older than `version`.
    #[error("no protocol version precedes {version}")]
    UnsupportedVersion {
        /// The oldest version, from which `previous()` was requested.
        version: ProtocolVersion,
    },
}

// ---------------------------------------------------------------------------
// Negotiation errors
// ---------------------------------------------------------------------------

/// Failures while deciding which protocol version a session uses.
///
/// All of these are fatal for the session; none is retried internally.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum NegotiationError {
    /// The caller explicitly requested `version` and the server did not answer
    /// the probe for it. There is no fallback.
    #[error("server does not support the requested protocol version {version}")]
    UnsupportedRequestedVersion {
        /// The version the caller demanded.
        version: ProtocolVersion,
    },

    /// Auto-negotiation probed every known version without success.
    #[error("server supports none of the protocol versions this client understands (tried {})", format_versions(.attempted))]
    NoSupportedVersion {
        /// Versions probed, in the order they were attempted.
        attempted: Vec<ProtocolVersion>,
    },

    /// The probe timeout is zero, negative or not finite.
    #[error("probe timeout must be a positive, finite number of seconds (got {seconds})")]
    InvalidProbeTimeout {
        /// The rejected value in seconds.
        seconds: f64,
    },
}

fn format_versions(versions: &[ProtocolVersion]) -> String {
    versions
        .iter()
        .map(|v| v.name())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Registry errors
// ---------------------------------------------------------------------------

/// Failures while obtaining a service adapter from a
/// [`ServiceRegistry`](crate::ServiceRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RegistryError {
    /// No service with this name exists under any protocol version.
    #[error("unknown service '{name}'")]
    UnknownService {
        /// The name as requested.
        name: String,
    },

    /// The service exists, but not for the negotiated protocol version.
    #[error("service '{service}' is not available for protocol version {version}")]
    UnsupportedServiceForVersion {
        /// The requested service.
        service: ServiceKind,
        /// The protocol version the registry is bound to.
        version: ProtocolVersion,
    },

    /// A registered constructor produced an adapter for a different service.
    #[error("constructor registered for '{expected}' produced a '{actual}' adapter")]
    ConstructorMismatch {
        /// The service the constructor was registered under.
        expected: ServiceKind,
        /// The service of the adapter it actually built.
        actual: ServiceKind,
    },
}

// ---------------------------------------------------------------------------
// Remote operation errors
// ---------------------------------------------------------------------------

/// Transport-neutral status code of a failed remote call.
///
/// Mirrors the gRPC status code set so callers can branch on it without
/// depending on any transport crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteStatus {
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
    /// The channel itself failed (connection refused, reset, TLS failure).
    TransportFailure,
}

impl RemoteStatus {
    /// Returns `true` for conditions that may clear up on their own.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            RemoteStatus::Unavailable
                | RemoteStatus::DeadlineExceeded
                | RemoteStatus::ResourceExhausted
                | RemoteStatus::Aborted
                | RemoteStatus::TransportFailure
        )
    }
}

impl std::fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RemoteStatus::Cancelled => "cancelled",
            RemoteStatus::Unknown => "unknown",
            RemoteStatus::InvalidArgument => "invalid argument",
            RemoteStatus::DeadlineExceeded => "deadline exceeded",
            RemoteStatus::NotFound => "not found",
            RemoteStatus::AlreadyExists => "already exists",
            RemoteStatus::PermissionDenied => "permission denied",
            RemoteStatus::ResourceExhausted => "resource exhausted",
            RemoteStatus::FailedPrecondition => "failed precondition",
            RemoteStatus::Aborted => "aborted",
            RemoteStatus::OutOfRange => "out of range",
            RemoteStatus::Unimplemented => "unimplemented",
            RemoteStatus::Internal => "internal",
            RemoteStatus::Unavailable => "unavailable",
            RemoteStatus::DataLoss => "data loss",
            RemoteStatus::Unauthenticated => "unauthenticated",
            RemoteStatus::TransportFailure => "transport failure",
        };
        f.write_str(s)
    }
}

/// A transport-level failure during a real (non-probe) remote call.
///
/// The original transport error is kept as the [`std::error::Error::source`]
/// for diagnostics; its concrete type is never part of the public contract.
#[derive(Debug, Error)]
#[error("remote operation '{operation}' failed ({status}): {message}")]
pub struct RemoteOperationError {
    /// Fully qualified operation that failed (e.g. `"bodies.create_sphere_body"`).
    pub operation: String,
    /// Classified status of the failure.
    pub status: RemoteStatus,
    /// Server- or transport-supplied description.
    pub message: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl RemoteOperationError {
    /// Wraps a transport-level `cause`.
    pub fn new(
        operation: impl Into<String>,
        status: RemoteStatus,
        message: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            operation: operation.into(),
            status,
            message: message.into(),
            source: cause.into(),
        }
    }

    /// Returns the underlying transport error.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Service errors
// ---------------------------------------------------------------------------

/// Errors returned by every abstract service contract operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The operation exists in the contract but not in this protocol version.
    ///
    /// Returned without any network I/O.
    #[error("{service}.{operation} is not implemented for protocol version {version}")]
    NotImplementedInThisVersion {
        /// The logical service.
        service: ServiceKind,
        /// The operation name.
        operation: &'static str,
        /// The protocol version the adapter speaks.
        version: ProtocolVersion,
    },

    /// The remote call failed at the transport level.
    #[error(transparent)]
    Remote(#[from] RemoteOperationError),

    /// A response arrived but could not be decoded or lacked a required field.
    #[error("malformed response to '{operation}': {reason}")]
    MalformedResponse {
        /// The operation whose response was malformed.
        operation: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The server executed the command and reported that it failed.
    #[error("'{operation}' was rejected by the server: {message}")]
    OperationFailed {
        /// The operation the server rejected.
        operation: String,
        /// Server-supplied reason. Empty when none was given.
        message: String,
    },

    /// An argument cannot be represented in this version's wire format.
    #[error("invalid argument to '{operation}': {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: String,
        /// Why the argument was rejected.
        reason: String,
    },
}

impl ServiceError {
    /// Builds a [`ServiceError::NotImplementedInThisVersion`].
    pub fn not_implemented(
        service: ServiceKind,
        operation: &'static str,
        version: ProtocolVersion,
    ) -> Self {
        ServiceError::NotImplementedInThisVersion {
            service,
            operation,
            version,
        }
    }

    /// Builds a [`ServiceError::MalformedResponse`].
    pub fn malformed(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        ServiceError::MalformedResponse {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Builds a [`ServiceError::OperationFailed`].
    pub fn operation_failed(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ServiceError::OperationFailed {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Builds a [`ServiceError::InvalidArgument`].
    pub fn invalid_argument(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        ServiceError::InvalidArgument {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the operation is absent in this server generation.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ServiceError::NotImplementedInThisVersion { .. })
    }

    /// Returns the remote status when the failure came from the transport.
    pub fn remote_status(&self) -> Option<RemoteStatus> {
        match self {
            ServiceError::Remote(e) => Some(e.status),
            _ => None,
        }
    }
}

/// Result alias used by every service contract operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Negotiation(#[from] NegotiationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn remote_error_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err = RemoteOperationError::new(
            "bodies.delete",
            RemoteStatus::TransportFailure,
            "reset by peer",
            cause,
        );
        assert_eq!(
            err.to_string(),
            "remote operation 'bodies.delete' failed (transport failure): reset by peer"
        );
        assert_eq!(
            err.source().map(|s| s.to_string()).as_deref(),
            Some("reset by peer")
        );
    }

    #[test]
    fn service_error_classifies() {
        let err =
            ServiceError::not_implemented(ServiceKind::Bodies, "shell_body", ProtocolVersion::V0);
        assert!(err.is_not_implemented());
        assert_eq!(err.remote_status(), None);
        assert_eq!(
            err.to_string(),
            "bodies.shell_body is not implemented for protocol version v0"
        );

        let remote: ServiceError = RemoteOperationError::new(
            "admin.get_backend",
            RemoteStatus::Unavailable,
            "down",
            "down",
        )
        .into();
        assert!(!remote.is_not_implemented());
        assert_eq!(remote.remote_status(), Some(RemoteStatus::Unavailable));
    }

    #[test]
    fn no_supported_version_lists_attempts() {
        let err = NegotiationError::NoSupportedVersion {
            attempted: vec![ProtocolVersion::V1, ProtocolVersion::V0],
        };
        assert!(err.to_string().ends_with("(tried v1, v0)"));
    }

    #[test]
    fn retryable_statuses() {
        assert!(RemoteStatus::Unavailable.is_retryable());
        assert!(!RemoteStatus::InvalidArgument.is_retryable());
        assert!(!RemoteStatus::Unimplemented.is_retryable());
    }
}
