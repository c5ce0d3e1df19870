//! Price oracle seam
//!
//! The executor asks a [`PriceOracle`] for the latest quote of a feed. A
//! missing quote is not an error here; the price gate turns it into a
//! condition-not-met verdict.

use multisig_types::ids::FeedId;
use multisig_types::quote::PriceQuote;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Source of price quotes.
pub trait PriceOracle {
    /// Latest quote for `feed`, or `None` if the feed has nothing to offer.
    fn latest_quote(&self, feed: &FeedId) -> Option<PriceQuote>;
}

/// A single published observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Publication {
    price: Decimal,
    published_at: i64,
}

/// Oracle driven by explicit publications and a manually advanced clock.
///
/// Quote age is `now - published_at`, clamped at zero for publications
/// stamped in the future.
#[derive(Debug, Clone, Default)]
pub struct ManualOracle {
    /// Current time in Unix seconds
    now: i64,
    feeds: HashMap<FeedId, Publication>,
}

impl ManualOracle {
    pub fn new(now: i64) -> Self {
        Self {
            now,
            feeds: HashMap::new(),
        }
    }

    /// Publish a price, replacing any earlier publication for the feed.
    pub fn publish(&mut self, feed: FeedId, price: Decimal, published_at: i64) {
        self.feeds.insert(
            feed,
            Publication {
                price,
                published_at,
            },
        );
    }

    /// Publish a price stamped at the current time.
    pub fn publish_now(&mut self, feed: FeedId, price: Decimal) {
        let now = self.now;
        self.publish(feed, price, now);
    }

    pub fn withdraw(&mut self, feed: &FeedId) {
        self.feeds.remove(feed);
    }

    pub fn set_now(&mut self, now: i64) {
        self.now = now;
    }

    pub fn advance(&mut self, seconds: i64) {
        self.now = self.now.saturating_add(seconds);
    }

    pub fn now(&self) -> i64 {
        self.now
    }
}

impl PriceOracle for ManualOracle {
    fn latest_quote(&self, feed: &FeedId) -> Option<PriceQuote> {
        self.feeds.get(feed).map(|publication| {
            let age = self.now.saturating_sub(publication.published_at).max(0) as u64;
            PriceQuote::new(feed.clone(), publication.price, age)
        })
    }
}
