/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::errors::TwitterSearchError;
use crate::v1_1::order::Order;
use crate::v1_1::properties::{Attitude, DistanceUnit, ISO_639_1, ResultType};
use crate::v1_1::tweet::Tweet;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;

/// Parameters of a `search/tweets.json` query.
///
/// See [Twitter API Docs](https://developer.twitter.com/en/docs/twitter-api/v1/tweets/search/api-reference/get-search-tweets)
/// for more details on the individual parameters.
#[derive(Debug, Clone)]
pub struct SearchOrder {
    keywords: Vec<String>,
    or_operator: bool,
    language: Option<String>,
    locale: Option<String>,
    result_type: Option<ResultType>,
    count: u32,
    max_id: u64,
    since_id: Option<u64>,
    until: Option<NaiveDate>,
    geocode: Option<Geocode>,
    include_entities: Option<bool>,
    callback: Option<String>,
    attitude: Option<Attitude>,
    question_filter: bool,
    link_filter: bool,
    source_filter: Option<String>,

    /// Language codes accepted by [`SearchOrder::set_language`]
    pub iso_6391: HashSet<String>,
}

impl Default for SearchOrder {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            or_operator: false,
            language: None,
            locale: None,
            result_type: None,
            count: Self::MAX_COUNT,
            max_id: 0,
            since_id: None,
            until: None,
            geocode: None,
            include_entities: None,
            callback: None,
            attitude: None,
            question_filter: false,
            link_filter: false,
            source_filter: None,
            iso_6391: ISO_639_1.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl SearchOrder {
    pub const MAX_COUNT: u32 = 100;

    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the keywords to search for
    pub fn set_keywords<I, S>(&mut self, keywords: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Combine the keywords with `OR` instead of requiring all of them
    pub fn set_or_operator(&mut self, or_operator: bool) -> &mut Self {
        self.or_operator = or_operator;
        self
    }

    /// Restricts results to a language, which must be one of [`SearchOrder::iso_6391`]
    pub fn set_language(&mut self, code: &str) -> Result<&mut Self, TwitterSearchError> {
        if !self.iso_6391.contains(code) {
            return Err(TwitterSearchError::InvalidLanguage(code.to_string()));
        }
        self.language = Some(code.to_string());
        Ok(self)
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Language of the query itself, only `ja` has an effect on the API side
    pub fn set_locale(&mut self, code: &str) -> Result<&mut Self, TwitterSearchError> {
        if !self.iso_6391.contains(code) {
            return Err(TwitterSearchError::InvalidLanguage(code.to_string()));
        }
        self.locale = Some(code.to_string());
        Ok(self)
    }

    pub fn set_result_type(&mut self, result_type: ResultType) -> &mut Self {
        self.result_type = Some(result_type);
        self
    }

    /// Number of tweets per page, 1 to 100
    pub fn set_count(&mut self, count: u32) -> Result<&mut Self, TwitterSearchError> {
        if !(1..=Self::MAX_COUNT).contains(&count) {
            return Err(TwitterSearchError::InvalidCount(count, Self::MAX_COUNT));
        }
        self.count = count;
        Ok(self)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Only return tweets with an id lower than or equal to `max_id`. 0 removes the bound.
    pub fn set_max_id(&mut self, max_id: u64) -> &mut Self {
        self.max_id = max_id;
        self
    }

    pub fn max_id(&self) -> u64 {
        self.max_id
    }

    /// Only return tweets with an id greater than `since_id`
    pub fn set_since_id(&mut self, since_id: u64) -> &mut Self {
        self.since_id = Some(since_id);
        self
    }

    /// Only return tweets created before the given date
    pub fn set_until(&mut self, date: NaiveDate) -> &mut Self {
        self.until = Some(date);
        self
    }

    /// Only return tweets of users located within `radius` of the given point
    pub fn set_geocode(
        &mut self,
        latitude: f64,
        longitude: f64,
        radius: u32,
        unit: DistanceUnit,
    ) -> Result<&mut Self, TwitterSearchError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(TwitterSearchError::InvalidGeocode(format!(
                "{latitude},{longitude} is not a valid position"
            )));
        }
        if radius == 0 {
            return Err(TwitterSearchError::InvalidGeocode(
                "radius must be positive".to_string(),
            ));
        }
        self.geocode = Some(Geocode {
            latitude,
            longitude,
            radius,
            unit,
        });
        Ok(self)
    }

    pub fn set_include_entities(&mut self, include: bool) -> &mut Self {
        self.include_entities = Some(include);
        self
    }

    /// Wraps the response in a JSONP callback
    pub fn set_callback(&mut self, callback: &str) -> &mut Self {
        self.callback = Some(callback.to_string());
        self
    }

    pub fn set_positive_attitude_filter(&mut self) -> &mut Self {
        self.attitude = Some(Attitude::Positive);
        self
    }

    pub fn set_negative_attitude_filter(&mut self) -> &mut Self {
        self.attitude = Some(Attitude::Negative);
        self
    }

    /// Only return tweets asking a question
    pub fn set_question_filter(&mut self) -> &mut Self {
        self.question_filter = true;
        self
    }

    /// Only return tweets containing links
    pub fn set_link_filter(&mut self) -> &mut Self {
        self.link_filter = true;
        self
    }

    /// Only return tweets posted with the given application
    pub fn set_source_filter(&mut self, source: &str) -> &mut Self {
        self.source_filter = Some(source.to_string());
        self
    }

    /// Removes the attitude, question, link and source filters
    pub fn remove_all_filters(&mut self) -> &mut Self {
        self.attitude = None;
        self.question_filter = false;
        self.link_filter = false;
        self.source_filter = None;
        self
    }

    /// Builds the value of the `q` parameter
    pub fn query(&self) -> Result<String, TwitterSearchError> {
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(TwitterSearchError::NoKeywords());
        }
        let separator = if self.or_operator { " OR " } else { " " };
        let mut query = self
            .keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .map(|k| {
                if k.contains(char::is_whitespace) {
                    format!("\"{k}\"")
                } else {
                    k.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(separator);

        if let Some(attitude) = self.attitude {
            let attitude: &str = attitude.into();
            query.push(' ');
            query.push_str(attitude);
        }
        if self.question_filter {
            query.push_str(" ?");
        }
        if self.link_filter {
            query.push_str(" filter:links");
        }
        if let Some(source) = &self.source_filter {
            query.push_str(" source:");
            query.push_str(source);
        }
        Ok(query)
    }
}

impl Order for SearchOrder {
    type Response = SearchResponse;
    const ENDPOINT: &'static str = "search/tweets.json";

    fn params(&self) -> Result<Vec<(String, String)>, TwitterSearchError> {
        let mut params = vec![
            ("q".to_string(), self.query()?),
            ("count".to_string(), self.count.to_string()),
        ];
        if self.max_id != 0 {
            params.push(("max_id".into(), self.max_id.to_string()));
        }
        if let Some(since_id) = self.since_id {
            params.push(("since_id".into(), since_id.to_string()));
        }
        if let Some(lang) = &self.language {
            params.push(("lang".into(), lang.clone()));
        }
        if let Some(locale) = &self.locale {
            params.push(("locale".into(), locale.clone()));
        }
        if let Some(result_type) = self.result_type {
            let result_type: &str = result_type.into();
            params.push(("result_type".into(), result_type.to_string()));
        }
        if let Some(until) = self.until {
            params.push(("until".into(), until.format("%Y-%m-%d").to_string()));
        }
        if let Some(geocode) = &self.geocode {
            params.push(("geocode".into(), geocode.to_string()));
        }
        if let Some(include) = self.include_entities {
            params.push(("include_entities".into(), include.to_string()));
        }
        if let Some(callback) = &self.callback {
            params.push(("callback".into(), callback.clone()));
        }
        Ok(params)
    }

    fn page_size(&self) -> u32 {
        self.count
    }

    fn cursor(&self) -> u64 {
        self.max_id
    }

    fn set_cursor(&mut self, max_id: u64) {
        self.max_id = max_id;
    }

    fn into_tweets(response: SearchResponse) -> Vec<Tweet> {
        response.statuses
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Geocode {
    latitude: f64,
    longitude: f64,
    radius: u32,
    unit: DistanceUnit,
}

impl std::fmt::Display for Geocode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let unit: &str = self.unit.into();
        write!(f, "{},{},{}{}", self.latitude, self.longitude, self.radius, unit)
    }
}

/// Body of a `search/tweets.json` reply
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse {
    pub statuses: Vec<Tweet>,

    pub search_metadata: Option<SearchMetadata>,
}

/// Information about the search that was performed
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchMetadata {
    pub max_id: u64,
    pub since_id: u64,
    pub count: u32,
    pub query: String,
    pub completed_in: f64,
    pub next_results: Option<String>,
    pub refresh_url: Option<String>,
}
