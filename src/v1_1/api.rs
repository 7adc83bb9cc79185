/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::errors::TwitterSearchError;
use crate::v1_1::oauth::Creds;
use bytes::Bytes;
use num_enum::TryFromPrimitive;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

// Root Twitter REST API
pub const API_ORIGIN: &str = "https://api.twitter.com/1.1/";

/// Query parameters sent along with a request
pub type ApiParams = [(String, String)];

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    creds: Creds,
    https_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(creds: Creds, https_client: reqwest::Client, base_url: String) -> Self {
        Self {
            creds,
            https_client,
            base_url,
        }
    }

    /// Performs a signed GET request and decodes the body.
    ///
    /// Any status other than 200 as well as an `errors` array in the body is reported as
    /// [`TwitterSearchError::Search`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &ApiParams,
    ) -> Result<Page<T>, TwitterSearchError> {
        let resp = self.send(endpoint, params).await?;
        if let Some((code, message)) = resp.error() {
            log::debug!("{endpoint} failed with {code}: {message}");
            return Err(TwitterSearchError::Search { code, message });
        }
        resp.decode()
    }

    /// Performs a signed GET request without interpreting the status.
    pub async fn send(
        &self,
        endpoint: &str,
        params: &ApiParams,
    ) -> Result<RawResponse, TwitterSearchError> {
        let url = url::Url::parse(&self.base_url)?.join(endpoint)?;
        let auth_header = self.creds.authorization_header("GET", url.as_str(), params)?;
        let req_url = if params.is_empty() {
            url
        } else {
            url::Url::parse_with_params(url.as_str(), params)?
        };
        log::trace!("GET {req_url}");

        let resp = self
            .https_client
            .get(req_url)
            .header("Authorization", auth_header)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status().as_u16();
        let rate_limit = RateLimit::from_headers(resp.headers());
        let body = resp.bytes().await?;
        log::debug!("{endpoint} answered {status} ({} bytes)", body.len());
        Ok(RawResponse {
            status,
            rate_limit,
            body,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// A response that has been received but not yet decoded
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub rate_limit: RateLimit,
    pub body: Bytes,
}

impl RawResponse {
    /// Code and message when the response signals an error
    pub fn error(&self) -> Option<(u32, String)> {
        let body = serde_json::from_slice::<ErrorBody>(&self.body).ok();
        if self.status != 200 {
            let message = body
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| describe_status(self.status));
            return Some((self.status as u32, message));
        }
        let first = body?.errors?.into_iter().next()?;
        Some((first.code, first.message))
    }

    /// Decodes the body into the expected type
    pub fn decode<T: DeserializeOwned>(self) -> Result<Page<T>, TwitterSearchError> {
        Ok(Page {
            status: self.status,
            rate_limit: self.rate_limit,
            content: serde_json::from_slice(&self.body)?,
        })
    }
}

/// One decoded reply from the API
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub status: u16,
    pub rate_limit: RateLimit,
    pub content: T,
}

/// Rate limit information sent back in the `x-rate-limit-*` headers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: Option<u32>,
    pub remaining: Option<u32>,
    /// Unix time at which the window resets
    pub reset: Option<i64>,
}

impl RateLimit {
    fn from_headers(headers: &HeaderMap) -> Self {
        fn parse<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
            headers.get(name)?.to_str().ok()?.parse().ok()
        }
        Self {
            limit: parse(headers, "x-rate-limit-limit"),
            remaining: parse(headers, "x-rate-limit-remaining"),
            reset: parse(headers, "x-rate-limit-reset"),
        }
    }
}

/// HTTP status codes per the Twitter API docs
#[derive(Debug, TryFromPrimitive)]
#[repr(u16)]
pub enum ApiErrorCodes {
    Ok = 200,
    NotModified = 304,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    NotAcceptable = 406,
    Gone = 410,
    EnhanceYourCalm = 420,
    UnprocessableEntity = 422,
    TooManyRequests = 429,
    InternalServerError = 500,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
}

impl ApiErrorCodes {
    pub fn description(&self) -> &'static str {
        use ApiErrorCodes as E;
        match self {
            E::Ok => "Success",
            E::NotModified => "Not Modified: There was no new data to return",
            E::BadRequest => "Bad Request: The request was invalid",
            E::Unauthorized => "Unauthorized: Authentication credentials were missing or incorrect",
            E::Forbidden => "Forbidden: The request is understood, but it has been refused or access is not allowed",
            E::NotFound => "Not Found: The URI requested is invalid or the resource requested does not exists",
            E::NotAcceptable => "Not Acceptable: Invalid format is specified in the request",
            E::Gone => "Gone: This resource is gone",
            E::EnhanceYourCalm => "Enhance Your Calm: You are being rate limited",
            E::UnprocessableEntity => "Unprocessable Entity: Image unable to be processed",
            E::TooManyRequests => "Too Many Requests: Request cannot be served due to the application's rate limit having been exhausted for the resource",
            E::InternalServerError => "Internal Server Error: Something is broken",
            E::BadGateway => "Bad Gateway: Twitter is down or being upgraded",
            E::ServiceUnavailable => "Service Unavailable: The Twitter servers are up, but overloaded with requests",
            E::GatewayTimeout => "Gateway timeout: The request couldn't be serviced due to some failure within our stack",
        }
    }
}

fn describe_status(status: u16) -> String {
    ApiErrorCodes::try_from(status)
        .map(|c| c.description().to_string())
        .unwrap_or_else(|_| format!("HTTP status {status}"))
}

// Error body returned by the API
#[derive(Deserialize, Debug)]
struct ErrorBody {
    errors: Option<Vec<ApiError>>,

    // Some endpoints still answer with a single string
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.errors
            .and_then(|e| e.into_iter().next())
            .map(|e| e.message)
            .or(self.error)
    }
}

#[derive(Deserialize, Debug)]
struct ApiError {
    code: u32,
    message: String,
}
