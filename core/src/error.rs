//! Error types for the blog API client.
//!
//! # Design
//! Every failed request surfaces as a `TransportError`. The views collapse
//! all variants into one generic message; the variants are kept apart for
//! logging and tests.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("network failure: {0}")]
    Network(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
