//! Real HTTP execution for requests built by the core.

use std::fmt;

use directory_core::{HttpMethod, HttpRequest, HttpResponse};

/// Executes an `HttpRequest` against the network.
///
/// A trait seam so the command handlers can be exercised in tests with a
/// scripted transport that records what would have gone on the wire.
pub trait Transport {
    fn execute(&mut self, req: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// A network-level failure: connect, DNS, or body read. Status codes are
/// not errors at this layer — they come back as data in `HttpResponse` for
/// the core to classify.
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// `Transport` implementation over a ureq agent.
///
/// The agent disables ureq's status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (&req.method, &req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => {
                self.agent.post(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                self.agent.put(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
