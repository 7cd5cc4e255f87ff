//! feed-client
//!
//! Async orchestration for the auction feed:
//! - connection lifecycle (`Unopened → Open → Closed`)
//! - outbound subscription updates (encoded by `feed-protocol`)
//! - inbound update decoding and typed per-kind dispatch
//!
//! The transport itself (WebSocket, TCP, in-memory for tests) is a
//! collaborator implementing the [`transport::Transport`] trait; this
//! crate never opens sockets on its own.

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod transport;

pub use client::FeedClient;
pub use config::Config;
pub use error::ClientError;
pub use transport::{Payload, Transport, TransportError};
