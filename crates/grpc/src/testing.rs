//! In-memory [`Connection`] for tests.
//!
//! Answers method paths with canned responses, records every call and can
//! simulate a server that never answers.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use prost::Message;

use crate::connection::{Connection, TransportError};

#[derive(Debug, Clone)]
enum Reply {
    Message(Bytes),
    Status(tonic::Code, String),
    Hang,
}

/// One call observed by a [`ScriptedConnection`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub request: Bytes,
    pub timeout: Option<Duration>,
}

/// A scripted stand-in for a geometry server.
///
/// Methods without a script answer `UNIMPLEMENTED`, like a real server that
/// does not know the path.
#[derive(Debug)]
pub struct ScriptedConnection {
    endpoint: String,
    script: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedConnection {
    pub fn new() -> Self {
        Self {
            endpoint: "scripted://geometry".to_string(),
            script: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers `method` with `response`.
    pub fn respond<M: Message>(&self, method: &str, response: &M) -> &Self {
        self.set(
            method,
            Reply::Message(Bytes::from(response.encode_to_vec())),
        );
        self
    }

    /// Answers `method` with raw bytes, for malformed-response tests.
    pub fn respond_raw(&self, method: &str, bytes: &'static [u8]) -> &Self {
        self.set(method, Reply::Message(Bytes::from_static(bytes)));
        self
    }

    /// Fails `method` with the given gRPC status.
    pub fn fail(&self, method: &str, code: tonic::Code, message: &str) -> &Self {
        self.set(method, Reply::Status(code, message.to_string()));
        self
    }

    /// Makes `method` never answer.
    pub fn hang(&self, method: &str) -> &Self {
        self.set(method, Reply::Hang);
        self
    }

    fn set(&self, method: &str, reply: Reply) {
        self.script.lock().insert(method.to_string(), reply);
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Paths of every call so far, in order.
    pub fn methods(&self) -> Vec<&'static str> {
        self.calls.lock().iter().map(|c| c.method).collect()
    }

    /// Decodes the most recent request sent to `method`.
    pub fn last_request<M: Message + Default>(&self, method: &str) -> Option<M> {
        let calls = self.calls.lock();
        let call = calls.iter().rev().find(|c| c.method == method)?;
        M::decode(call.request.clone()).ok()
    }
}

impl Default for ScriptedConnection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn unary(
        &self,
        method: &'static str,
        request: Bytes,
        timeout: Option<Duration>,
    ) -> Result<Bytes, TransportError> {
        self.calls.lock().push(RecordedCall {
            method,
            request,
            timeout,
        });
        let reply = self.script.lock().get(method).cloned();
        match reply {
            Some(Reply::Message(bytes)) => Ok(bytes),
            Some(Reply::Status(code, message)) => {
                Err(TransportError::Status(tonic::Status::new(code, message)))
            }
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(TransportError::Status(tonic::Status::unimplemented(format!(
                "no script for {method}"
            )))),
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
