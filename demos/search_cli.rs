/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate twittersearch;

use anyhow::Result;
use dotenvy::dotenv;
use futures::{StreamExt, pin_mut};
use twittersearch::v1_1::{Client, Creds, ResultType, SearchOrder};

// Prints up to `limit` tweets for the keywords given on the command line.
// Credentials are read from the TWITTER_* environment variables (or a .env file).
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let keywords: Vec<String> = std::env::args().skip(1).collect();
    if keywords.is_empty() {
        anyhow::bail!("Usage: search_cli <keyword>...");
    }
    let limit: usize = std::env::var("SEARCH_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(50);

    let client = Client::new(Creds::from_env()?);
    client.authenticate(true).await?;

    let mut order = SearchOrder::new();
    order
        .set_keywords(keywords)
        .set_result_type(ResultType::Recent)
        .set_include_entities(false);
    client.set_supported_languages(&mut order).await?;
    if let Ok(lang) = std::env::var("SEARCH_LANG") {
        order.set_language(&lang)?;
    }

    let tweets = client.search_tweets_iterable(&order).take(limit);
    pin_mut!(tweets);
    while let Some(tweet) = tweets.next().await {
        println!("{}", tweet?);
    }

    let stats = client.get_statistics();
    println!("Found {} tweets in {} queries", stats.tweets, stats.queries);
    Ok(())
}
