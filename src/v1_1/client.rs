/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1_1::errors::TwitterSearchError;
use crate::v1_1::order::{Order, next_max_id};
use crate::v1_1::properties::Language;
use crate::v1_1::search_order::{SearchOrder, SearchResponse};
use crate::v1_1::session::{Session, Statistics};
use crate::v1_1::tweet::Tweet;
use crate::v1_1::user_order::UserTimelineOrder;
use crate::v1_1::{API_ORIGIN, ApiClient, Creds, Page};
use async_stream::try_stream;
use futures::Stream;
use std::sync::Arc;
use std::time::Duration;

const VERIFY_ENDPOINT: &str = "account/verify_credentials.json";
const LANGUAGES_ENDPOINT: &str = "help/languages.json";

/// A session with the Twitter API.
///
/// Clones share the same session, including its [`Statistics`].
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
    session: Arc<Session>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self::from_api_client(ApiClient::new(
            creds,
            reqwest::Client::new(),
            API_ORIGIN.to_string(),
        ))
    }

    /// Configures a client with non default transport settings
    pub fn builder(creds: Creds) -> ClientBuilder {
        ClientBuilder::new(creds)
    }

    fn from_api_client(api_client: ApiClient) -> Self {
        Self {
            api_client: Arc::new(api_client),
            session: Arc::new(Session::default()),
        }
    }

    /// Lower level access to the API
    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// Verifies the credentials.
    ///
    /// Returns `Ok(true)` if the credentials were accepted. A rejection is returned as
    /// [`TwitterSearchError::Authentication`] when `raise_on_error` is set, as `Ok(false)`
    /// otherwise.
    pub async fn authenticate(&self, raise_on_error: bool) -> Result<bool, TwitterSearchError> {
        let resp = self.api_client.send(VERIFY_ENDPOINT, &[]).await?;
        match resp.error() {
            None => {
                self.session.set_authenticated(true);
                Ok(true)
            }
            Some((code, message)) => {
                log::warn!("Credentials rejected: {code} {message}");
                self.session.set_authenticated(false);
                if raise_on_error {
                    Err(TwitterSearchError::Authentication { code, message })
                } else {
                    Ok(false)
                }
            }
        }
    }

    /// True once [`Client::authenticate`] succeeded
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Retrieves a single page of search results.
    ///
    /// The order is sent as is, advancing its max-id between calls is left to the caller.
    pub async fn search_tweets(
        &self,
        order: &SearchOrder,
    ) -> Result<Page<SearchResponse>, TwitterSearchError> {
        self.query(order).await
    }

    /// Retrieves a single page of a user's timeline
    pub async fn user_timeline(
        &self,
        order: &UserTimelineOrder,
    ) -> Result<Page<Vec<Tweet>>, TwitterSearchError> {
        self.query(order).await
    }

    /// Sends one request for the given order
    pub async fn query<O: Order>(&self, order: &O) -> Result<Page<O::Response>, TwitterSearchError> {
        let params = order.params()?;
        self.session.query_sent();
        self.api_client.get::<O::Response>(O::ENDPOINT, &params).await
    }

    /// Retrieves all tweets matching the order as a stream.
    ///
    /// Pages are requested on demand, going back in time by lowering the max-id below the
    /// oldest tweet seen so far. The stream ends after an empty page, a page with fewer
    /// tweets than requested, or a page reaching id 1. The stream works on its own copy of
    /// the order, starting from its max-id.
    pub fn search_tweets_iterable<O: Order>(
        &self,
        order: &O,
    ) -> impl Stream<Item = Result<Tweet, TwitterSearchError>> {
        let mut order = order.clone();

        try_stream! {
            loop {
                let tweets = O::into_tweets(self.query(&order).await?.content);
                if tweets.is_empty() {
                    break;
                }

                // No tweet is older than id 1
                let is_done = tweets.len() != order.page_size() as usize
                    || tweets.iter().any(|t| t.id <= 1);
                let max_id = next_max_id(order.cursor(), &tweets);
                if max_id == order.cursor() && !is_done {
                    log::warn!("max_id {max_id} did not move, next page may repeat tweets");
                }
                order.set_cursor(max_id);

                for tweet in tweets {
                    self.session.tweet_yielded();
                    yield tweet
                }

                if is_done {
                    break;
                }
            }
        }
    }

    /// Returns the number of queries sent and tweets streamed in this session
    pub fn get_statistics(&self) -> Statistics {
        self.session.statistics()
    }

    /// Replaces the languages accepted by the order with the ones the API supports
    pub async fn set_supported_languages(
        &self,
        order: &mut SearchOrder,
    ) -> Result<(), TwitterSearchError> {
        let languages = self
            .api_client
            .get::<Vec<Language>>(LANGUAGES_ENDPOINT, &[])
            .await?
            .content;
        log::debug!("API supports {} languages", languages.len());
        order.iso_6391 = languages.into_iter().map(|l| l.code).collect();
        Ok(())
    }
}

/// Builds a [`Client`] with custom transport settings
#[derive(Debug)]
pub struct ClientBuilder {
    creds: Creds,
    base_url: String,
    timeout: Option<Duration>,
    proxy: Option<String>,
    verify: bool,
    user_agent: String,
}

impl ClientBuilder {
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            base_url: API_ORIGIN.to_string(),
            timeout: None,
            proxy: None,
            verify: true,
            user_agent: format!("twittersearch/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Root of the API, e.g. for a local mock server
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sends all requests through the given proxy
    pub fn proxy(mut self, proxy: &str) -> Self {
        self.proxy = Some(proxy.to_string());
        self
    }

    /// Disabling verification accepts any TLS certificate
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> Result<Client, TwitterSearchError> {
        // Endpoints are joined relative to the root
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        url::Url::parse(&base_url)?;

        let mut https_client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .danger_accept_invalid_certs(!self.verify);
        if let Some(timeout) = self.timeout {
            https_client = https_client.timeout(timeout);
        }
        if let Some(proxy) = self.proxy {
            https_client = https_client.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Client::from_api_client(ApiClient::new(
            self.creds,
            https_client.build()?,
            base_url,
        )))
    }
}
