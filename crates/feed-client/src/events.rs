//! Typed per-kind dispatch of decoded update batches.
//!
//! The two subscription kinds are the only event identifiers, so instead
//! of a string-keyed emitter the registry is a pair of sender lists: the
//! payload shape is fixed at compile time and a typo'd event name cannot
//! exist.

use feed_core::{Auction, SubscriptionKind};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Registry of update-batch subscribers, keyed by subscription kind.
///
/// Every [`subscribe`](EventBus::subscribe) call registers an independent
/// handler; dropping the returned receiver unregisters it. Publishing to
/// a kind with no live subscribers is a no-op.
#[derive(Debug, Default)]
pub struct EventBus {
    new_auctions: Vec<UnboundedSender<Vec<Auction>>>,
    auctions_updates: Vec<UnboundedSender<Vec<Auction>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `kind` and return its receiving end.
    pub fn subscribe(&mut self, kind: SubscriptionKind) -> UnboundedReceiver<Vec<Auction>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders_mut(kind).push(tx);
        rx
    }

    /// Deliver one decoded batch to every live subscriber of `kind`.
    ///
    /// Subscribers whose receiving end has been dropped are pruned here.
    pub fn publish(&mut self, kind: SubscriptionKind, batch: &[Auction]) {
        self.senders_mut(kind)
            .retain(|tx| tx.send(batch.to_vec()).is_ok());
    }

    fn senders_mut(
        &mut self,
        kind: SubscriptionKind,
    ) -> &mut Vec<UnboundedSender<Vec<Auction>>> {
        match kind {
            SubscriptionKind::NewAuctions => &mut self.new_auctions,
            SubscriptionKind::AuctionsUpdates => &mut self.auctions_updates,
        }
    }
}
