//! Session client for the geometry kernel.
//!
//! [`GeometryClient::connect`] opens a channel, waits for the server to report
//! healthy, negotiates a protocol version and binds a
//! [`geometry::ServiceRegistry`] to the result. Callers then ask the client
//! for services by contract and never see which wire generation answers.
//!
//! ## Architectural Layer
//!
//! **Orchestration.** Composes the domain rules in [`geometry`] with the
//! transport and adapters in [`grpc`]. Holds no wire knowledge of its own.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `ClientConfig`: endpoint, negotiation and timeouts |
//! | [`errors`] | `ClientError` |
//! | [`session`] | `GeometryClient` |

pub mod config;
pub mod errors;
pub mod session;

pub use config::{ClientConfig, DEFAULT_HEALTH_TIMEOUT};
pub use errors::ClientError;
pub use session::GeometryClient;
