//! Demo session against a loopback transport.
//!
//! Builds the usual "interesting items, cheap enough" filter, subscribes
//! to both feed kinds and prints whatever comes back. The loopback
//! transport stands in for a real connection (answering every
//! subscription update with one canned batch) since transports are
//! supplied by the embedding application, not this crate.
//!
//! Run with:
//!   cargo run -p feed-client --example subscribe

use std::collections::VecDeque;

use async_trait::async_trait;
use feed_client::{Config, FeedClient, Payload, Transport, TransportError};
use feed_core::{Auction, FilterNode, SubscriptionFrame, SubscriptionKind};

struct LoopbackTransport {
    inbound: VecDeque<Payload>,
}

#[async_trait]
impl Transport for LoopbackTransport {
    async fn open(&mut self, url: &str) -> Result<(), TransportError> {
        println!("(loopback) pretending to connect to {}", url);
        Ok(())
    }

    async fn send(&mut self, message: &[u8]) -> Result<(), TransportError> {
        println!("(loopback) server received {} bytes", message.len());
        self.inbound
            .push_back(Payload::Binary(canned_new_auctions()));
        Ok(())
    }

    async fn recv(&mut self) -> Result<Option<Payload>, TransportError> {
        // None once the canned traffic is drained => clean close.
        Ok(self.inbound.pop_front())
    }
}

/// One NewAuctions update with two records, encoded by hand.
fn canned_new_auctions() -> Vec<u8> {
    let auctions = [
        ("auc-1001", Some(120), None, 3, "LONG", 147),
        ("auc-1002", None, Some(45), 1, "SHORT", 148),
    ];

    let mut out = vec![SubscriptionKind::NewAuctions as u8];
    out.extend_from_slice(&(auctions.len() as u64).to_be_bytes());
    for (id, buyout, bid, quantity, time_left, item_id) in auctions {
        out.push(id.len() as u8);
        out.extend_from_slice(id.as_bytes());
        out.extend_from_slice(&buyout.unwrap_or(-1i32).to_be_bytes());
        out.extend_from_slice(&bid.unwrap_or(-1i32).to_be_bytes());
        out.extend_from_slice(&(quantity as i32).to_be_bytes());
        out.push(time_left.len() as u8);
        out.extend_from_slice(time_left.as_bytes());
        out.extend_from_slice(&(item_id as i32).to_be_bytes());
    }
    out
}

fn print_batch(label: &str, batch: &[Auction]) {
    for auction in batch {
        println!(
            "{}: {} item={} qty={} bid={:?} buyout={:?} time_left={}",
            label,
            auction.id,
            auction.item_id,
            auction.quantity,
            auction.current_bid_price,
            auction.buyout_price,
            auction.time_left,
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let transport = LoopbackTransport {
        inbound: VecDeque::new(),
    };
    let mut client = FeedClient::new(Config::from_env(), transport);

    let mut new_auctions = client.subscribe_events(SubscriptionKind::NewAuctions);
    let mut auction_updates = client.subscribe_events(SubscriptionKind::AuctionsUpdates);

    client.open_connection().await?;

    // Watch a handful of items; multi-value EQ acts as an OR over the set.
    let filter = FilterNode::and(vec![
        FilterNode::eq(
            FilterNode::field("item_id"),
            FilterNode::strings(["147", "148", "149", "146", "150", "162", "276"]),
        ),
        FilterNode::or(vec![
            FilterNode::less(FilterNode::field("current_bid_price"), FilterNode::i32(50)),
            FilterNode::less(FilterNode::field("buyout_price"), FilterNode::i32(100)),
        ]),
    ]);

    client
        .update_subscriptions(&[SubscriptionFrame::new(
            SubscriptionKind::NewAuctions,
            filter,
        )])
        .await?;

    client.run().await?;

    while let Ok(batch) = new_auctions.try_recv() {
        print_batch("NewAuctions", &batch);
    }
    while let Ok(batch) = auction_updates.try_recv() {
        print_batch("AuctionsUpdates", &batch);
    }

    Ok(())
}
