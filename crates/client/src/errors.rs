//! Errors raised while establishing or using a session.

use geometry::{NegotiationError, RegistryError, ServiceError};
use grpc::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A configuration value is out of range.
    #[error("invalid client configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("could not connect to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: Box<TransportError>,
    },

    /// The server was reachable but never reported `SERVING`.
    #[error("geometry server at {endpoint} did not become healthy")]
    Unhealthy {
        endpoint: String,
        #[source]
        source: Box<TransportError>,
    },

    #[error(transparent)]
    Negotiation(#[from] NegotiationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ClientError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ClientError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::time::Duration;

    #[test]
    fn transport_failures_stay_boxed_and_chained() {
        assert!(std::mem::size_of::<ClientError>() < 128);

        let err = ClientError::Unhealthy {
            endpoint: "http://cad01:50051".to_string(),
            source: Box::new(TransportError::Timeout(Duration::from_secs(3))),
        };
        assert_eq!(
            err.to_string(),
            "geometry server at http://cad01:50051 did not become healthy"
        );
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<TransportError>().is_some());
    }
}
