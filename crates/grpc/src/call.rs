//! One request/response exchange with the geometry server.

use bytes::Bytes;
use geometry::{RemoteOperationError, ServiceError, ServiceResult};
use prost::Message;
use tracing::debug;

use crate::connection::{Connection, TransportError};

/// A remote method: the logical operation it serves and its gRPC path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rpc {
    /// `service.operation`, as reported in errors.
    pub operation: &'static str,
    /// `/package.Service/Method`.
    pub path: &'static str,
}

impl Rpc {
    pub const fn new(operation: &'static str, path: &'static str) -> Self {
        Self { operation, path }
    }
}

/// Encodes `request`, performs the call and decodes the response.
///
/// Transport failures become [`ServiceError::Remote`]; a response prost cannot
/// decode becomes [`ServiceError::MalformedResponse`].
pub(crate) async fn call<Req, Resp>(
    connection: &dyn Connection,
    rpc: Rpc,
    request: &Req,
) -> ServiceResult<Resp>
where
    Req: Message,
    Resp: Message + Default,
{
    debug!(operation = rpc.operation, path = rpc.path, "unary call");
    let payload = Bytes::from(request.encode_to_vec());
    let response = connection
        .unary(rpc.path, payload, None)
        .await
        .map_err(|err| remote_error(rpc.operation, err))?;
    Resp::decode(response).map_err(|err| ServiceError::malformed(rpc.operation, err.to_string()))
}

/// Wraps a transport failure, keeping it as the error source.
pub(crate) fn remote_error(operation: &str, err: TransportError) -> RemoteOperationError {
    debug!(operation, error = %err, "remote call failed");
    RemoteOperationError::new(operation, err.status(), err.detail(), err)
}

/// Unwraps a message field the server must always populate.
pub(crate) fn required<T>(value: Option<T>, rpc: Rpc, field: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::malformed(rpc.operation, format!("missing field '{field}'")))
}
