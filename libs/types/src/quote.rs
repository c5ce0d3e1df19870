//! Oracle price quote

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::FeedId;

/// Latest observation of a price feed as seen at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub feed_id: FeedId,
    pub price: Decimal,
    /// Seconds elapsed since the price was published
    pub age_seconds: u64,
}

impl PriceQuote {
    pub fn new(feed_id: FeedId, price: Decimal, age_seconds: u64) -> Self {
        Self {
            feed_id,
            price,
            age_seconds,
        }
    }
}
