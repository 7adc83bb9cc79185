/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::parsers::{from_empty_str_to_none, from_twitter_date, to_twitter_date};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A single status as returned by the search and timeline APIs.
///
/// Only the commonly used fields are typed, everything else the API sends is kept untouched
/// in [`Tweet::extra`].
///
/// See [Twitter API Docs](https://developer.twitter.com/en/docs/twitter-api/v1/data-dictionary/object-model/tweet)
/// for more details on the individual fields.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Tweet {
    pub id: u64,

    #[serde(default)]
    pub id_str: String,

    #[serde(default, alias = "full_text")]
    pub text: String,

    #[serde(
        default,
        deserialize_with = "from_twitter_date",
        serialize_with = "to_twitter_date"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub lang: Option<String>,

    #[serde(default)]
    pub user: Option<TweetUser>,

    #[serde(default)]
    pub retweet_count: u64,

    #[serde(default)]
    pub favorite_count: u64,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The author of a [`Tweet`]
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TweetUser {
    pub id: u64,

    #[serde(default)]
    pub screen_name: String,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PartialEq for Tweet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Tweet {}

impl Hash for Tweet {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.id.hash(state);
    }
}

impl PartialOrd for Tweet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tweet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for Tweet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.user {
            Some(user) => write!(f, "@{}: {} (id: {})", user.screen_name, self.text, self.id),
            None => write!(f, "{} (id: {})", self.text, self.id),
        }
    }
}
