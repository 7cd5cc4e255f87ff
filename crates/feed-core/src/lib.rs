//! feed-core
//!
//! Pure logical model for the auction feed client:
//! - auction records (what the feed delivers)
//! - filter trees (what a subscription asks for)
//! - subscription kinds and frames

pub mod auction;
pub mod filter;
pub mod subscription;

pub use auction::Auction;
pub use filter::FilterNode;
pub use subscription::{SubscriptionFrame, SubscriptionKind};
