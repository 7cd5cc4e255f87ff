//! Binary encoding/decoding for the auction feed.
//!
//! This module converts between:
//! - raw binary frames (`&[u8]` / `Vec<u8>`)
//! - high-level `feed_core` values (`FilterNode`, `SubscriptionFrame`, `Auction`)
//!
//! Framing model (single-message buffer):
//!
//! ```text
//! Outbound (client → server): subscription update
//! ------------------------------------------------
//! [0]   : bitmask (bit n set ⇔ a frame with kind ordinal n is present)
//! [1..] : frames, sorted ascending by kind ordinal, concatenated
//!
//! frame:
//!   [0]   : subscription kind (SubscriptionKind as u8)
//!   [1..] : filter bytes
//!
//! filter (recursive, depth-first):
//!   [0]   : tag (FilterTag as u8)
//!   data section:
//!     [0]   : string count (u8); 0 when the node carries no data
//!     then per string: raw ASCII bytes + one 0x00 terminator
//!   children section:
//!     [0]   : child count (u8); 0 when the node has no children
//!     then each child's full filter bytes, concatenated
//!
//! Inbound (server → client): update
//! ----------------------------------
//! [0]    : subscription kind (u8)
//! [1..9] : record count (u64 BE)
//! [9..]  : records, concatenated
//!
//! record (auction):
//!   [0]      id_len (u8)
//!   [1..]    id bytes (ASCII)
//!   [..+4]   buyout_price (i32 BE, -1 = absent)
//!   [..+4]   current_bid_price (i32 BE, -1 = absent)
//!   [..+4]   quantity (i32 BE)
//!   [..+1]   time_left_len (u8)
//!   [..]     time_left bytes (ASCII)
//!   [..+4]   item_id (i32 BE)
//! ```
//!
//! The receiver relies on the bitmask and the ascending sort agreeing, so
//! input order of frames never affects the encoded bytes. The per-frame
//! kind byte is retained regardless as self-description.
//!
//! NOTE: filters have no decoder here on purpose — the client only ever
//! sends them.

use feed_core::{Auction, FilterNode, SubscriptionFrame, SubscriptionKind};
use thiserror::Error;

use crate::wire_types::{fits_in_section, FilterTag, PRICE_ABSENT, UPDATE_HEADER_LEN};

/// Errors that can arise when encoding/decoding a wire frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Buffer ended before a header or record could be fully read.
    #[error("buffer truncated: need {need} bytes at offset {at}, have {have}")]
    TruncatedBuffer { at: usize, need: usize, have: usize },

    /// A filter node carries more data strings or children than a
    /// single count byte can express.
    #[error("filter section exceeds single-byte capacity: {len} entries")]
    EncodingOverflow { len: usize },

    /// Two frames in one batch share a subscription kind.
    #[error("duplicate subscription kind: {}", .kind.as_str())]
    DuplicateSubscriptionKind { kind: SubscriptionKind },

    /// Inbound kind byte is not in the enumeration.
    #[error("unknown subscription kind: {0}")]
    UnknownSubscriptionKind(u8),
}

// ============================================================================
// OUTBOUND: subscriptions (client → server)
// ============================================================================

/// Encode one filter tree, depth-first, appending to `out`.
pub fn encode_filter(node: &FilterNode, out: &mut Vec<u8>) -> Result<(), ProtocolError> {
    out.push(filter_tag(node) as u8);

    match node {
        FilterNode::Field(name) => {
            encode_data_section(std::slice::from_ref(name), out)?;
            out.push(0); // no children
        }
        FilterNode::Strings(values) => {
            encode_data_section(values, out)?;
            out.push(0);
        }
        FilterNode::I32(values) => {
            // Integer literals travel as decimal ASCII strings.
            let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            encode_data_section(&rendered, out)?;
            out.push(0);
        }
        FilterNode::Not(child) => {
            out.push(0); // no data
            encode_children_section(std::slice::from_ref(child.as_ref()), out)?;
        }
        FilterNode::And(children) | FilterNode::Or(children) | FilterNode::Xor(children) => {
            out.push(0);
            encode_children_section(children, out)?;
        }
        FilterNode::Eq(lhs, rhs) | FilterNode::Less(lhs, rhs) | FilterNode::More(lhs, rhs) => {
            out.push(0);
            out.push(2); // field reference + literal
            encode_filter(lhs, out)?;
            encode_filter(rhs, out)?;
        }
    }

    Ok(())
}

/// Encode one subscription frame: kind byte, then the filter bytes.
pub fn encode_subscription(
    frame: &SubscriptionFrame,
    out: &mut Vec<u8>,
) -> Result<(), ProtocolError> {
    out.push(frame.kind() as u8);
    encode_filter(frame.filter(), out)
}

/// Encode a whole subscription update message.
///
/// Rejects the batch before emitting any bytes when two frames share a
/// kind. Frames are sorted ascending by kind ordinal so the receiver can
/// match bitmask bits to frame positions.
pub fn encode_subscription_batch(
    frames: &[SubscriptionFrame],
) -> Result<Vec<u8>, ProtocolError> {
    let mut mask: u8 = 0;
    for frame in frames {
        let bit = 1u8 << frame.kind() as u8;
        if mask & bit != 0 {
            return Err(ProtocolError::DuplicateSubscriptionKind { kind: frame.kind() });
        }
        mask |= bit;
    }

    let mut ordered: Vec<&SubscriptionFrame> = frames.iter().collect();
    ordered.sort_by_key(|frame| frame.kind() as u8);

    let mut out = vec![mask];
    for frame in ordered {
        encode_subscription(frame, &mut out)?;
    }

    Ok(out)
}

fn encode_data_section(strings: &[String], out: &mut Vec<u8>) -> Result<(), ProtocolError> {
    if !fits_in_section(strings.len()) {
        return Err(ProtocolError::EncodingOverflow { len: strings.len() });
    }

    out.push(strings.len() as u8);
    for s in strings {
        out.extend_from_slice(s.as_bytes());
        out.push(0); // strings are null-terminated, not length-prefixed
    }

    Ok(())
}

fn encode_children_section(
    children: &[FilterNode],
    out: &mut Vec<u8>,
) -> Result<(), ProtocolError> {
    if !fits_in_section(children.len()) {
        return Err(ProtocolError::EncodingOverflow { len: children.len() });
    }

    out.push(children.len() as u8);
    for child in children {
        encode_filter(child, out)?;
    }

    Ok(())
}

fn filter_tag(node: &FilterNode) -> FilterTag {
    match node {
        FilterNode::Not(_) => FilterTag::Not,
        FilterNode::And(_) => FilterTag::And,
        FilterNode::Or(_) => FilterTag::Or,
        FilterNode::Xor(_) => FilterTag::Xor,
        FilterNode::Eq(_, _) => FilterTag::Eq,
        FilterNode::Less(_, _) => FilterTag::Less,
        FilterNode::More(_, _) => FilterTag::More,
        FilterNode::Field(_) => FilterTag::Field,
        FilterNode::Strings(_) => FilterTag::String,
        FilterNode::I32(_) => FilterTag::I32,
    }
}

// ============================================================================
// INBOUND: updates (server → client)
// ============================================================================

/// Decode a single auction record from the front of `buf`.
///
/// Returns the record and the number of bytes consumed so the caller can
/// advance a shared cursor across repeated records.
pub fn decode_auction(buf: &[u8]) -> Result<(Auction, usize), ProtocolError> {
    let mut cursor = 0usize;

    let id = read_short_str(buf, &mut cursor)?;
    let buyout_price = read_price(buf, &mut cursor)?;
    let current_bid_price = read_price(buf, &mut cursor)?;
    let quantity = read_i32_be(buf, &mut cursor)?;
    let time_left = read_short_str(buf, &mut cursor)?;
    let item_id = read_i32_be(buf, &mut cursor)?;

    let auction = Auction {
        id,
        buyout_price,
        current_bid_price,
        quantity,
        time_left,
        item_id,
    };

    Ok((auction, cursor))
}

/// Decode a whole inbound update message.
///
/// Returns the resolved subscription kind and the records in wire order.
/// Fails without returning any partially decoded record when the buffer
/// ends early.
pub fn decode_update(buf: &[u8]) -> Result<(SubscriptionKind, Vec<Auction>), ProtocolError> {
    if buf.len() < UPDATE_HEADER_LEN {
        return Err(ProtocolError::TruncatedBuffer {
            at: 0,
            need: UPDATE_HEADER_LEN,
            have: buf.len(),
        });
    }

    let kind = SubscriptionKind::from_u8(buf[0])
        .ok_or(ProtocolError::UnknownSubscriptionKind(buf[0]))?;

    let count = u64::from_be_bytes(
        buf[1..UPDATE_HEADER_LEN]
            .try_into()
            .expect("slice with incorrect length"),
    );

    let mut records = Vec::new();
    let mut cursor = UPDATE_HEADER_LEN;
    for _ in 0..count {
        let (auction, consumed) =
            decode_auction(&buf[cursor..]).map_err(|e| rebase_truncation(e, cursor))?;
        cursor += consumed;
        records.push(auction);
    }

    Ok((kind, records))
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Report truncation offsets relative to the whole message rather than
/// the record that was being decoded.
fn rebase_truncation(err: ProtocolError, base: usize) -> ProtocolError {
    match err {
        ProtocolError::TruncatedBuffer { at, need, have } => ProtocolError::TruncatedBuffer {
            at: base + at,
            need,
            have,
        },
        other => other,
    }
}

fn take<'a>(buf: &'a [u8], cursor: &mut usize, n: usize) -> Result<&'a [u8], ProtocolError> {
    let end = *cursor + n;
    if end > buf.len() {
        return Err(ProtocolError::TruncatedBuffer {
            at: *cursor,
            need: n,
            have: buf.len().saturating_sub(*cursor),
        });
    }

    let slice = &buf[*cursor..end];
    *cursor = end;
    Ok(slice)
}

/// Read a `[len: u8][bytes]` ASCII string.
fn read_short_str(buf: &[u8], cursor: &mut usize) -> Result<String, ProtocolError> {
    let len = take(buf, cursor, 1)?[0] as usize;
    let bytes = take(buf, cursor, len)?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

fn read_i32_be(buf: &[u8], cursor: &mut usize) -> Result<i32, ProtocolError> {
    let bytes = take(buf, cursor, 4)?;
    let arr: [u8; 4] = bytes.try_into().expect("slice with incorrect length");
    Ok(i32::from_be_bytes(arr))
}

/// Read a price field, mapping the `-1` sentinel to `None`.
fn read_price(buf: &[u8], cursor: &mut usize) -> Result<Option<i32>, ProtocolError> {
    let value = read_i32_be(buf, cursor)?;
    Ok(if value == PRICE_ABSENT { None } else { Some(value) })
}
