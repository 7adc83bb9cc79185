/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serializer};

// Format of `created_at`, e.g. "Thu Jul 11 14:32:32 +0000 2013"
const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

// Parses Twitter's `created_at` date format
pub fn from_twitter_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) => DateTime::parse_from_str(&s, TWITTER_DATE_FORMAT)
            .map(|d| Some(d.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}

// Writes dates back out the way Twitter sends them
pub fn to_twitter_date<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format(TWITTER_DATE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

// Parses strings that may be "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}
