/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Snapshot of the usage of a session
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Search/timeline requests sent
    pub queries: u64,

    /// Tweets handed out by [`Client::search_tweets_iterable`](crate::v1_1::Client::search_tweets_iterable)
    pub tweets: u64,
}

// State shared by all clones of a Client
#[derive(Debug, Default)]
pub(crate) struct Session {
    authenticated: AtomicBool,
    queries: AtomicU64,
    tweets: AtomicU64,
}

impl Session {
    pub(crate) fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::Relaxed);
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Relaxed)
    }

    pub(crate) fn query_sent(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn tweet_yielded(&self) {
        self.tweets.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn statistics(&self) -> Statistics {
        Statistics {
            queries: self.queries.load(Ordering::Relaxed),
            tweets: self.tweets.load(Ordering::Relaxed),
        }
    }
}
