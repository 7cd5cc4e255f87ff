//! Low-level wire constants.
//!
//! This module defines:
//! - Tag ordinals for filter tree nodes.
//! - The absent-price sentinel.
//! - Fixed header and capacity limits.
//!
//! The actual encode/decode logic lives in `binary_codec`.

/// Filter node tags as they appear on the wire.
///
/// These ordinals are the first byte of each encoded filter node. The
/// enumeration order is fixed by the protocol and must never change.
///
/// Filters are outbound-only: the client encodes them but never decodes
/// one, so no `from_u8` mapping is needed (or provided).
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterTag {
    Not = 0,
    And = 1,
    Or = 2,
    Xor = 3,

    Eq = 4,
    Less = 5,
    More = 6,

    Field = 7,
    String = 8,
    I32 = 9,
}

/// Length of an inbound update header:
/// 1 byte subscription kind + 8 bytes big-endian record count.
pub const UPDATE_HEADER_LEN: usize = 9;

/// Wire value meaning "this price field is absent".
///
/// A legitimate price of exactly `-1` is indistinguishable from the
/// sentinel; the format offers no separate presence flag.
pub const PRICE_ABSENT: i32 = -1;

/// Maximum number of data strings or children a single filter node can
/// carry on the wire.
///
/// Both section counts are single unsigned bytes, so this is a hard
/// protocol limit, not a tunable.
pub const MAX_SECTION_LEN: usize = u8::MAX as usize;

/// A tiny helper for validating section counts at encode time.
pub fn fits_in_section(len: usize) -> bool {
    len <= MAX_SECTION_LEN
}
