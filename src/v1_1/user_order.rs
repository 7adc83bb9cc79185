/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::errors::TwitterSearchError;
use crate::v1_1::order::Order;
use crate::v1_1::tweet::Tweet;

/// Identifies the owner of a timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    ScreenName(String),
    Id(u64),
}

/// Parameters of a `statuses/user_timeline.json` query.
///
/// See [Twitter API Docs](https://developer.twitter.com/en/docs/twitter-api/v1/tweets/timelines/api-reference/get-statuses-user_timeline)
/// for more details on the individual parameters.
#[derive(Debug, Clone)]
pub struct UserTimelineOrder {
    user: UserRef,
    count: u32,
    max_id: u64,
    since_id: Option<u64>,
    include_rts: Option<bool>,
    exclude_replies: Option<bool>,
    contributor_details: Option<bool>,
    trim_user: Option<bool>,
}

impl UserTimelineOrder {
    pub const MAX_COUNT: u32 = 200;

    /// Timeline of the user with the given screen name
    pub fn from_screen_name(screen_name: &str) -> Result<Self, TwitterSearchError> {
        let screen_name = screen_name.trim_start_matches('@');
        if screen_name.is_empty() {
            return Err(TwitterSearchError::InvalidUser());
        }
        Ok(Self::new(UserRef::ScreenName(screen_name.to_string())))
    }

    /// Timeline of the user with the given numeric id
    pub fn from_user_id(user_id: u64) -> Self {
        Self::new(UserRef::Id(user_id))
    }

    fn new(user: UserRef) -> Self {
        Self {
            user,
            count: Self::MAX_COUNT,
            max_id: 0,
            since_id: None,
            include_rts: None,
            exclude_replies: None,
            contributor_details: None,
            trim_user: None,
        }
    }

    pub fn user(&self) -> &UserRef {
        &self.user
    }

    /// Number of tweets per page, 1 to 200
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

    pub fn set_max_id(&mut self, max_id: u64) -> &mut Self {
        self.max_id = max_id;
        self
    }

    pub fn max_id(&self) -> u64 {
        self.max_id
    }

    pub fn set_since_id(&mut self, since_id: u64) -> &mut Self {
        self.since_id = Some(since_id);
        self
    }

    pub fn set_include_rts(&mut self, include: bool) -> &mut Self {
        self.include_rts = Some(include);
        self
    }

    pub fn set_exclude_replies(&mut self, exclude: bool) -> &mut Self {
        self.exclude_replies = Some(exclude);
        self
    }

    pub fn set_contributor_details(&mut self, include: bool) -> &mut Self {
        self.contributor_details = Some(include);
        self
    }

    /// Only return the author's id instead of the full user object
    pub fn set_trim_user(&mut self, trim: bool) -> &mut Self {
        self.trim_user = Some(trim);
        self
    }
}

impl Order for UserTimelineOrder {
    type Response = Vec<Tweet>;
    const ENDPOINT: &'static str = "statuses/user_timeline.json";

    fn params(&self) -> Result<Vec<(String, String)>, TwitterSearchError> {
        let mut params = vec![match &self.user {
            UserRef::ScreenName(name) => ("screen_name".to_string(), name.clone()),
            UserRef::Id(id) => ("user_id".to_string(), id.to_string()),
        }];
        params.push(("count".into(), self.count.to_string()));
        if self.max_id != 0 {
            params.push(("max_id".into(), self.max_id.to_string()));
        }
        if let Some(since_id) = self.since_id {
            params.push(("since_id".into(), since_id.to_string()));
        }
        let flags = [
            ("include_rts", self.include_rts),
            ("exclude_replies", self.exclude_replies),
            ("contributor_details", self.contributor_details),
            ("trim_user", self.trim_user),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                params.push((name.into(), value.to_string()));
            }
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

    fn into_tweets(response: Vec<Tweet>) -> Vec<Tweet> {
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_name_must_not_be_empty() {
        assert!(matches!(
            UserTimelineOrder::from_screen_name("@"),
            Err(TwitterSearchError::InvalidUser())
        ));
        let order = UserTimelineOrder::from_screen_name("@foo").unwrap();
        assert_eq!(order.user(), &UserRef::ScreenName("foo".into()));
    }

    #[test]
    fn params_identify_the_user() {
        let mut order = UserTimelineOrder::from_user_id(42);
        order.set_count(200).unwrap();
        order.set_exclude_replies(true).set_max_id(99);
        assert_eq!(
            order.params().unwrap(),
            vec![
                ("user_id".to_string(), "42".to_string()),
                ("count".to_string(), "200".to_string()),
                ("max_id".to_string(), "99".to_string()),
                ("exclude_replies".to_string(), "true".to_string()),
            ]
        );
        assert!(order.set_count(201).is_err());
    }
}
