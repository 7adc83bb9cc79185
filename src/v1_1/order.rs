/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::errors::TwitterSearchError;
use crate::v1_1::tweet::Tweet;
use serde::de::DeserializeOwned;

/// Describes a paged request for tweets.
///
/// Implemented by [`SearchOrder`](crate::v1_1::SearchOrder) and
/// [`UserTimelineOrder`](crate::v1_1::UserTimelineOrder) so both can be driven by
/// [`Client::search_tweets_iterable`](crate::v1_1::Client::search_tweets_iterable).
pub trait Order: Clone {
    /// Body returned by the endpoint
    type Response: DeserializeOwned;

    /// Path of the endpoint relative to the API root
    const ENDPOINT: &'static str;

    /// Query parameters for the next request, fails if the order is incomplete
    fn params(&self) -> Result<Vec<(String, String)>, TwitterSearchError>;

    /// Number of tweets requested per page
    fn page_size(&self) -> u32;

    /// Current max-id cursor, 0 when unset
    fn cursor(&self) -> u64;

    fn set_cursor(&mut self, max_id: u64);

    /// Tweets contained in a decoded page
    fn into_tweets(response: Self::Response) -> Vec<Tweet>;
}

/// Returns the max-id to request the next (older) page with.
///
/// The cursor only ever moves down: the result is one below the smallest id in `tweets`,
/// unless `current` is already lower. A `current` of 0 means no cursor was set yet, so a
/// set cursor never falls back to 0.
pub fn next_max_id(current: u64, tweets: &[Tweet]) -> u64 {
    let Some(min_id) = tweets.iter().map(|t| t.id).min() else {
        return current;
    };
    let next = min_id.saturating_sub(1);
    if current == 0 || (next != 0 && next < current) {
        next
    } else {
        current
    }
}
