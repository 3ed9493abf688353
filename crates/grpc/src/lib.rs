//! gRPC infrastructure for the geometry kernel client.
//!
//! Implements the ports of the [`geometry`] crate against a live server:
//!
//! - [`Connection`] / [`GrpcConnection`]: unary calls over a tonic channel,
//!   carrying already-encoded protobuf bytes.
//! - [`HealthProbe`]: the [`geometry::CapabilityProbe`] for every protocol
//!   version.
//! - [`v0`] and [`v1`]: one adapter per logical service and wire generation,
//!   with the wire messages and conversions they need.
//! - [`service_table`]: the `(service, version) → adapter` table the registry
//!   is built from.
//! - [`health`]: standard `grpc.health.v1` checking, used before negotiation.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Wire formats, unit envelopes and transport errors stay
//! here. The [`geometry`] crate sees only its own contract traits.

/// Declares a service adapter struct bound to a shared connection.
macro_rules! adapter {
    (
        $(#[$attr:meta])*
        $name:ident, $version:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        pub struct $name {
            connection: std::sync::Arc<dyn crate::Connection>,
        }

        impl $name {
            pub fn new(connection: std::sync::Arc<dyn crate::Connection>) -> Self {
                Self { connection }
            }
        }

        impl geometry::ServiceAdapter for $name {
            fn protocol_version(&self) -> geometry::ProtocolVersion {
                geometry::ProtocolVersion::$version
            }
        }
    };
}

/// Registers `Kind => Adapter` pairs in a service table under one protocol
/// version.
macro_rules! register_adapters {
    ($table:ident, $version:ident; $($kind:ident => $adapter:ident),* $(,)?) => {
        $(
            $table.register(
                geometry::ServiceKind::$kind,
                geometry::ProtocolVersion::$version,
                |connection| {
                    let adapter = $adapter::new(std::sync::Arc::clone(connection));
                    geometry::ServiceHandle::$kind(std::sync::Arc::new(adapter))
                },
            );
        )*
    };
}

pub mod call;
pub mod codec;
pub mod connection;
pub mod health;
pub mod probe;
pub mod table;
pub mod v0;
pub mod v1;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use call::Rpc;
pub use codec::RawCodec;
pub use connection::{
    Connection, ConnectionConfig, GrpcConnection, TransportError, DEFAULT_CONNECT_TIMEOUT,
    DEFAULT_MAX_MESSAGE_SIZE,
};
pub use health::{check_health, wait_until_healthy, ServingStatus};
pub use probe::HealthProbe;
pub use table::service_table;
