//! HTTP execution for the reader, backed by ureq.

use blog_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Blocking transport. Status codes are handed back as data so the core
/// decides what counts as a failure; only requests that got no response at
/// all become `TransportError::Network`.
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
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut call = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = call.status().as_u16();
        let headers = call
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = call
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
