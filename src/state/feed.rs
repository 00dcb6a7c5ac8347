//! Feed-list state shared between the home view and future list views.
//!
//! DESIGN
//! ======
//! The feed is an ordered projection of what the server returned. Views
//! render it in place without sorting or filtering, so item order here is
//! exactly item order on screen.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::FeedItem;

/// Shared feed state: the ordered item list plus fetch status.
#[derive(Clone, Debug, Default)]
pub struct FeedState {
    /// Feed entries in server order.
    pub items: Vec<FeedItem>,
    /// True while the initial feed fetch is in flight.
    pub loading: bool,
    /// Message from the most recent failed fetch, if any.
    pub error: Option<String>,
}

impl FeedState {
    /// Swap in a freshly fetched item list, keeping its order untouched,
    /// and clear the fetch status flags.
    pub fn replace(&mut self, items: Vec<FeedItem>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }
}
