//! The auction record delivered by the feed.
//!
//! This is a **transport-agnostic** logical record: the binary layout
//! lives in the `feed-protocol` crate. Records are created fresh per
//! decoded message, never mutated, and discarded after delivery.

/// One auction as carried by an inbound update batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    /// Auction identifier (ASCII, at most 255 bytes on the wire).
    pub id: String,

    /// Buyout price; `None` when the auction has no buyout.
    ///
    /// The wire encodes "no buyout" as the value `-1`, so a legitimate
    /// price of exactly `-1` cannot be represented. This ambiguity is
    /// part of the wire format and is preserved here.
    pub buyout_price: Option<i32>,

    /// Current highest bid; `None` when nobody has bid yet.
    /// Same `-1` sentinel rule as `buyout_price`.
    pub current_bid_price: Option<i32>,

    /// Number of items in the lot. Always present.
    pub quantity: i32,

    /// Remaining duration as the server renders it (e.g. `"SHORT"`).
    pub time_left: String,

    /// Identifier of the item being auctioned.
    pub item_id: i32,
}
