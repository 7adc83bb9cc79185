/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # TwitterSearch
//!
//! This library was created for searching tweets through the Twitter REST API v1.1.
//!
//! For further details on the Rest API refer to the [Twitter API Docs](https://developer.twitter.com/en/docs/twitter-api/v1)
//!
//! ## Features
//!
//! - Credential verification
//! - Search for tweets
//!     - Keywords, language, locale, geocode, date and attitude filters
//!     - Single pages or a stream over all pages
//! - User timelines, paged the same way as searches
//! - Statistics about the queries sent and tweets received
//! - Lower level interface for handling the raw communication
//!
//! *The Twitter API uses OAuth1. This library handles the request signing.
//! Getting the Access Token/Secret is left up to the consumer of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! twittersearch = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire a consumer key/secret from Twitter prior to using the API**
//!
//! ```rust,no_run
//! use twittersearch::v1_1::{Client, Creds, SearchOrder};
//! use futures::{pin_mut, StreamExt};
//!
//! async fn print_tweets(
//!     consumer_key: &str,
//!     consumer_secret: &str,
//!     access_token: &str,
//!     access_token_secret: &str,
//! ) -> anyhow::Result<()> {
//!     let client = Client::new(Creds::from_tokens(
//!         consumer_key,
//!         Some(consumer_secret),
//!         Some(access_token),
//!         Some(access_token_secret),
//!     ));
//!     client.authenticate(true).await?;
//!
//!     let mut order = SearchOrder::new();
//!     order.set_keywords(["rustlang", "async"]);
//!     order.set_language("en")?;
//!
//!     // Pages are only requested as the stream is consumed
//!     let tweets = client.search_tweets_iterable(&order);
//!     pin_mut!(tweets);
//!     while let Some(tweet) = tweets.next().await {
//!         println!("{}", tweet?);
//!     }
//!
//!     let stats = client.get_statistics();
//!     println!("{} tweets in {} queries", stats.tweets, stats.queries);
//!     Ok(())
//! }
//! ```
//!
pub mod v1_1;
