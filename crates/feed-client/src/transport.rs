//! The transport collaborator seam.
//!
//! The feed protocol is transport-agnostic: this crate consumes an
//! abstract duplex connection and leaves open/send/receive mechanics
//! (TLS, reconnection, framing below the message level) to the
//! implementation behind this trait.

use async_trait::async_trait;
use thiserror::Error;

/// Opaque failure surfaced from the transport.
///
/// The client does not interpret these; it forwards them to the caller,
/// who decides whether to retry, reconnect or abort.
#[derive(Debug, Clone, Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        TransportError(message.into())
    }
}

/// One inbound payload as delivered by the transport.
///
/// The feed only ever speaks binary; a `Text` payload is a protocol
/// violation the client treats as fatal to the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Binary(Vec<u8>),
    Text(String),
}

/// A persistent duplex connection to the feed.
#[async_trait]
pub trait Transport: Send {
    /// Establish the connection; resolves once the peer is ready.
    async fn open(&mut self, url: &str) -> Result<(), TransportError>;

    /// Send one outbound message; resolves on flush acknowledgment.
    async fn send(&mut self, message: &[u8]) -> Result<(), TransportError>;

    /// Receive the next inbound payload.
    ///
    /// Returns `Ok(None)` once the peer closes the connection.
    async fn recv(&mut self) -> Result<Option<Payload>, TransportError>;
}
