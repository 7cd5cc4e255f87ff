//! The feed client state machine.
//!
//! `FeedClient` owns one transport connection and one typed event
//! registry. All methods take `&mut self`, so concurrent use of a single
//! client is serialized by construction and partial writes cannot
//! interleave on the transport.

use feed_core::{Auction, SubscriptionFrame, SubscriptionKind};
use feed_protocol::binary_codec;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::ClientError;
use crate::events::EventBus;
use crate::transport::{Payload, Transport};

/// Connection lifecycle: one-way `Unopened → Open → Closed`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ConnState {
    Unopened,
    Open,
    Closed,
}

/// Client for the real-time auction feed.
///
/// Outbound subscription updates and inbound record batches both go
/// through `feed-protocol`; the transport collaborator only ever sees
/// whole messages.
pub struct FeedClient<T: Transport> {
    url: String,
    transport: T,
    state: ConnState,
    events: EventBus,
}

impl<T: Transport> FeedClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        FeedClient {
            url: config.url,
            transport,
            state: ConnState::Unopened,
            events: EventBus::new(),
        }
    }

    /// Whether the connection is currently `Open`.
    pub fn is_open(&self) -> bool {
        self.state == ConnState::Open
    }

    /// Register a handler for decoded update batches of `kind`.
    ///
    /// Handlers may be registered in any connection state; dropping the
    /// returned receiver unregisters the handler.
    pub fn subscribe_events(
        &mut self,
        kind: SubscriptionKind,
    ) -> UnboundedReceiver<Vec<Auction>> {
        self.events.subscribe(kind)
    }

    /// Open the connection.
    ///
    /// Transitions to `Open` only once the transport confirms
    /// establishment; until then every other operation fails with
    /// [`ClientError::NotConnected`].
    pub async fn open_connection(&mut self) -> Result<(), ClientError> {
        self.transport.open(&self.url).await?;
        self.state = ConnState::Open;
        info!(url = %self.url, "feed connection open");
        Ok(())
    }

    /// Replace the active subscription set.
    ///
    /// Encodes the batch (rejecting duplicate kinds before any bytes are
    /// sent) and hands it to the transport. The call mutates no
    /// client-side subscription state: on a send failure the server-side
    /// set is simply whatever it was before.
    pub async fn update_subscriptions(
        &mut self,
        frames: &[SubscriptionFrame],
    ) -> Result<(), ClientError> {
        if self.state != ConnState::Open {
            return Err(ClientError::NotConnected);
        }

        let message = binary_codec::encode_subscription_batch(frames)?;
        self.transport.send(&message).await?;

        debug!(
            frames = frames.len(),
            bytes = message.len(),
            "subscription update sent"
        );
        Ok(())
    }

    /// Receive and dispatch one inbound message.
    ///
    /// Decode-and-dispatch completes before the next message is looked
    /// at, so decoding is never reentrant on one connection. Returns
    /// `Ok(false)` once the peer closes. A non-binary payload is a fatal
    /// protocol violation: the error is surfaced and the connection is
    /// marked `Closed`. Decode failures on a binary payload fail only
    /// the operation and leave the connection usable.
    pub async fn process_next(&mut self) -> Result<bool, ClientError> {
        if self.state != ConnState::Open {
            return Err(ClientError::NotConnected);
        }

        match self.transport.recv().await {
            Ok(Some(Payload::Binary(bytes))) => {
                let (kind, batch) = binary_codec::decode_update(&bytes)?;
                debug!(kind = kind.as_str(), records = batch.len(), "update received");
                self.events.publish(kind, &batch);
                Ok(true)
            }
            Ok(Some(Payload::Text(text))) => {
                warn!(payload = %text, "non-binary payload on feed connection");
                self.state = ConnState::Closed;
                Err(ClientError::ProtocolViolation(text))
            }
            Ok(None) => {
                info!("feed connection closed by peer");
                self.state = ConnState::Closed;
                Ok(false)
            }
            Err(e) => {
                self.state = ConnState::Closed;
                Err(ClientError::Transport(e))
            }
        }
    }

    /// Drive [`process_next`](Self::process_next) until the connection
    /// closes or an error surfaces.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        while self.process_next().await? {}
        Ok(())
    }
}
