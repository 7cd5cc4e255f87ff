//! Error types for the feed client.
//!
//! All conditions are reported synchronously to the caller of the
//! operation that detected them; none are fatal to the process, only to
//! the specific operation or connection.

use feed_protocol::ProtocolError;
use thiserror::Error;

use crate::transport::TransportError;

/// Failures surfaced by [`FeedClient`](crate::FeedClient) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Operation attempted before the connection reached `Open`.
    #[error("operation requires an open connection")]
    NotConnected,

    /// The peer sent a non-binary payload or otherwise broke framing.
    /// The connection is considered unusable afterwards.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    /// Wire-level encode/decode failure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Opaque failure surfaced from the transport collaborator.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
