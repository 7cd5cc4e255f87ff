//! Subscription kinds and frames.

use crate::filter::FilterNode;

/// The two subscription categories the feed multiplexes over one
/// connection.
///
/// The discriminants are wire ordinals: they tag outbound subscription
/// frames, index the outbound bitmask, and identify inbound update
/// messages. They must never change.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SubscriptionKind {
    /// Auctions newly listed since the last update.
    NewAuctions = 0,

    /// Changes to auctions already seen (new bids, expiry, ...).
    AuctionsUpdates = 1,
}

impl SubscriptionKind {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(SubscriptionKind::NewAuctions),
            1 => Some(SubscriptionKind::AuctionsUpdates),
            _ => None,
        }
    }

    /// The kind's event name, matching the wire-level enumeration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionKind::NewAuctions => "NewAuctions",
            SubscriptionKind::AuctionsUpdates => "AuctionsUpdates",
        }
    }
}

/// One subscription: a kind plus the filter describing which auctions
/// the caller wants under that kind.
///
/// Frames are immutable after construction; the filter tree is owned
/// exclusively by its frame and encoded on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionFrame {
    kind: SubscriptionKind,
    filter: FilterNode,
}

impl SubscriptionFrame {
    pub fn new(kind: SubscriptionKind, filter: FilterNode) -> Self {
        SubscriptionFrame { kind, filter }
    }

    pub fn kind(&self) -> SubscriptionKind {
        self.kind
    }

    pub fn filter(&self) -> &FilterNode {
        &self.filter
    }
}
