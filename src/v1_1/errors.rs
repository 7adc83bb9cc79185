/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum TwitterSearchError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Request signing error. {0}")]
    Auth(String),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Authentication failed: {code}, msg: {message}")]
    Authentication { code: u32, message: String },

    #[error("Search failed: {code}, msg: {message}")]
    Search { code: u32, message: String },

    #[error("No keywords given")]
    NoKeywords(),

    #[error("Invalid count {0}, expected 1..={1}")]
    InvalidCount(u32, u32),

    #[error("No ISO 639-1 language code: {0}")]
    InvalidLanguage(String),

    #[error("Invalid geocode: {0}")]
    InvalidGeocode(String),

    #[error("Invalid user id or screen name")]
    InvalidUser(),

    #[error("Missing environment variable {0}")]
    MissingConfig(&'static str),
}

impl TwitterSearchError {
    /// Numeric code of this error.
    ///
    /// Errors reported by the service carry the HTTP status (or the API error code found in
    /// the response body) verbatim. Errors raised locally use codes from the 1000 range.
    pub fn code(&self) -> u32 {
        match self {
            Self::Authentication { code, .. } | Self::Search { code, .. } => *code,
            Self::Request(err) => err.status().map_or(0, |s| s.as_u16() as u32),
            Self::InvalidLanguage(_) => 1002,
            Self::InvalidCount(..) => 1004,
            Self::InvalidGeocode(_) => 1005,
            Self::NoKeywords() => 1014,
            Self::InvalidUser() => 1015,
            _ => 0,
        }
    }
}
