//! feed-protocol
//!
//! Wire-level encoding/decoding for the auction feed.
//!
//! This crate turns logical `feed_core` values into bytes and back:
//!
//! - [`binary_codec`] : filter/subscription encoders (outbound) and
//!   auction/update decoders (inbound)
//! - [`wire_types`]   : tag ordinals, sentinels and capacity limits
//!
//! The protocol is deliberately asymmetric: subscriptions are only ever
//! encoded and updates only ever decoded, so no inverse operations exist.

pub mod binary_codec;
pub mod wire_types;

pub use binary_codec::{
    decode_auction,
    decode_update,
    encode_filter,
    encode_subscription,
    encode_subscription_batch,
    ProtocolError,
};
