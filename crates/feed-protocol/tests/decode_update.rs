// crates/feed-protocol/tests/decode_update.rs
//
// Inbound-side tests. The protocol has no auction/update encoder (the
// client only ever decodes them), so these tests carry their own
// harness-side encoder implementing the inverse of the record layout.

use feed_core::{Auction, SubscriptionKind};
use feed_protocol::{decode_auction, decode_update, ProtocolError};

fn encode_auction_for_test(auction: &Auction, out: &mut Vec<u8>) {
    out.push(auction.id.len() as u8);
    out.extend_from_slice(auction.id.as_bytes());
    out.extend_from_slice(&auction.buyout_price.unwrap_or(-1).to_be_bytes());
    out.extend_from_slice(&auction.current_bid_price.unwrap_or(-1).to_be_bytes());
    out.extend_from_slice(&auction.quantity.to_be_bytes());
    out.push(auction.time_left.len() as u8);
    out.extend_from_slice(auction.time_left.as_bytes());
    out.extend_from_slice(&auction.item_id.to_be_bytes());
}

fn encode_update_for_test(kind: SubscriptionKind, auctions: &[Auction]) -> Vec<u8> {
    let mut out = vec![kind as u8];
    out.extend_from_slice(&(auctions.len() as u64).to_be_bytes());
    for auction in auctions {
        encode_auction_for_test(auction, &mut out);
    }
    out
}

fn sample_auction() -> Auction {
    Auction {
        id: "auc-19".to_string(),
        buyout_price: Some(1500),
        current_bid_price: None,
        quantity: 20,
        time_left: "VERY_LONG".to_string(),
        item_id: 147,
    }
}

#[test]
fn auction_round_trips() {
    let original = sample_auction();

    let mut buf = Vec::new();
    encode_auction_for_test(&original, &mut buf);

    let (decoded, consumed) = decode_auction(&buf).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(consumed, buf.len());
}

#[test]
fn price_sentinel_maps_to_absent() {
    let mut buf = Vec::new();
    encode_auction_for_test(
        &Auction {
            buyout_price: None,
            current_bid_price: Some(-2),
            ..sample_auction()
        },
        &mut buf,
    );

    let (decoded, _) = decode_auction(&buf).unwrap();
    assert_eq!(decoded.buyout_price, None);
    // Any non-sentinel pattern is a present value, negative or not.
    assert_eq!(decoded.current_bid_price, Some(-2));
}

#[test]
fn explicit_minus_one_is_indistinguishable_from_absent() {
    // The sentinel swallows a genuine price of -1. Wire-format behavior,
    // preserved as-is.
    let mut buf = Vec::new();
    encode_auction_for_test(
        &Auction {
            buyout_price: Some(-1),
            ..sample_auction()
        },
        &mut buf,
    );

    let (decoded, _) = decode_auction(&buf).unwrap();
    assert_eq!(decoded.buyout_price, None);
}

#[test]
fn update_with_zero_records_is_empty() {
    let message = encode_update_for_test(SubscriptionKind::NewAuctions, &[]);
    assert_eq!(message.len(), 9);

    let (kind, records) = decode_update(&message).unwrap();
    assert_eq!(kind, SubscriptionKind::NewAuctions);
    assert!(records.is_empty());
}

#[test]
fn update_preserves_wire_order() {
    let auctions: Vec<Auction> = (0..4)
        .map(|i| Auction {
            id: format!("auc-{}", i),
            item_id: 100 + i,
            ..sample_auction()
        })
        .collect();

    let message = encode_update_for_test(SubscriptionKind::AuctionsUpdates, &auctions);
    let (kind, records) = decode_update(&message).unwrap();

    assert_eq!(kind, SubscriptionKind::AuctionsUpdates);
    assert_eq!(records, auctions);
}

#[test]
fn update_truncated_mid_record_fails() {
    let message = encode_update_for_test(
        SubscriptionKind::NewAuctions,
        &[sample_auction(), sample_auction()],
    );

    // Cut into the middle of the second record.
    let cut = message.len() - 5;
    let err = decode_update(&message[..cut]).unwrap_err();
    assert!(matches!(err, ProtocolError::TruncatedBuffer { .. }));
}

#[test]
fn update_shorter_than_header_fails() {
    let err = decode_update(&[0, 0, 0]).unwrap_err();
    assert!(matches!(err, ProtocolError::TruncatedBuffer { .. }));
}

#[test]
fn update_with_unknown_kind_fails() {
    let mut message = encode_update_for_test(SubscriptionKind::NewAuctions, &[]);
    message[0] = 7;

    let err = decode_update(&message).unwrap_err();
    assert_eq!(err, ProtocolError::UnknownSubscriptionKind(7));
}
