/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::errors::TwitterSearchError;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Credentials used for signing requests with OAuth1.
///
/// The consumer key/secret come from the Twitter developer portal. The access token/secret
/// are obtained through the OAuth1 flow, which is left to the consumer of this library.
#[derive(Default, Clone)]
pub struct Creds {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
}

impl Creds {
    pub fn from_tokens(
        consumer_key: &str,
        consumer_secret: Option<&str>,
        access_token: Option<&str>,
        access_token_secret: Option<&str>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.unwrap_or_default().into(),
            access_token: access_token.unwrap_or_default().into(),
            access_token_secret: access_token_secret.unwrap_or_default().into(),
        }
    }

    /// Reads the credentials from `TWITTER_CONSUMER_KEY`, `TWITTER_CONSUMER_SECRET`,
    /// `TWITTER_ACCESS_TOKEN` and `TWITTER_ACCESS_TOKEN_SECRET`.
    ///
    /// Only the consumer key is mandatory.
    pub fn from_env() -> Result<Self, TwitterSearchError> {
        let consumer_key = std::env::var("TWITTER_CONSUMER_KEY")
            .map_err(|_| TwitterSearchError::MissingConfig("TWITTER_CONSUMER_KEY"))?;
        let consumer_secret = std::env::var("TWITTER_CONSUMER_SECRET").ok();
        let access_token = std::env::var("TWITTER_ACCESS_TOKEN").ok();
        let access_token_secret = std::env::var("TWITTER_ACCESS_TOKEN_SECRET").ok();
        Ok(Self::from_tokens(
            &consumer_key,
            consumer_secret.as_deref(),
            access_token.as_deref(),
            access_token_secret.as_deref(),
        ))
    }

    /// Builds the `Authorization` header value for a request.
    ///
    /// `url` must not contain the query string, the query parameters are passed in `params`
    /// so they are part of the signature.
    pub(crate) fn authorization_header(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, TwitterSearchError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_header_with(method, url, params, &generate_nonce(), &timestamp)
    }

    fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        nonce: &str,
        timestamp: &str,
    ) -> Result<String, TwitterSearchError> {
        let mut oauth_params: Vec<(String, String)> = vec![
            ("oauth_consumer_key".into(), self.consumer_key.clone()),
            ("oauth_nonce".into(), nonce.into()),
            ("oauth_signature_method".into(), "HMAC-SHA1".into()),
            ("oauth_timestamp".into(), timestamp.into()),
        ];
        if !self.access_token.is_empty() {
            oauth_params.push(("oauth_token".into(), self.access_token.clone()));
        }
        oauth_params.push(("oauth_version".into(), "1.0".into()));

        let mut encoded: Vec<(String, String)> = oauth_params
            .iter()
            .chain(params.iter())
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();
        encoded.sort();

        let param_string = encoded
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(url),
            percent_encode(&param_string)
        );
        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(&self.access_token_secret)
        );

        oauth_params.push(("oauth_signature".into(), hmac_sha1(&signing_key, &base_string)?));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {header}"))
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("consumer_key", &"xxx")
            .field("consumer_secret", &"xxx")
            .field("access_token", &"xxx")
            .field("access_token_secret", &"xxx")
            .finish()
    }
}

// RFC 3986, only ALPHA / DIGIT / "-" / "." / "_" / "~" are left as is
fn percent_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

fn generate_nonce() -> String {
    format!("{:032x}", rand::random::<u128>())
}

fn hmac_sha1(key: &str, data: &str) -> Result<String, TwitterSearchError> {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| TwitterSearchError::Auth(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_encoding_is_rfc3986() {
        assert_eq!(percent_encode("hello world"), "hello%20world");
        assert_eq!(percent_encode("foo=bar&baz"), "foo%3Dbar%26baz");
        assert_eq!(percent_encode("test-value_123.txt~"), "test-value_123.txt~");
        assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
    }

    #[test]
    fn nonces_are_random_hex() {
        let a = generate_nonce();
        let b = generate_nonce();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    // Worked example from Twitter's "Creating a signature" documentation
    #[test]
    fn signature_matches_documented_example() {
        let creds = Creds::from_tokens(
            "xvz1evFS4wEEPTGEFPHBog",
            Some("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw"),
            Some("370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb"),
            Some("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE"),
        );
        let params = vec![
            ("status".to_string(), "Hello Ladies + Gentlemen, a signed OAuth request!".to_string()),
            ("include_entities".to_string(), "true".to_string()),
        ];
        let header = creds
            .authorization_header_with(
                "post",
                "https://api.twitter.com/1.1/statuses/update.json",
                &params,
                "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
                "1318622958",
            )
            .unwrap();

        assert!(header.starts_with("OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\""));
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
        assert!(!header.contains("status="));
    }

    #[test]
    fn token_is_omitted_for_app_only_creds() {
        let creds = Creds::from_tokens("key", Some("secret"), None, None);
        let header = creds
            .authorization_header("GET", "https://api.twitter.com/1.1/help/languages.json", &[])
            .unwrap();
        assert!(!header.contains("oauth_token="));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
    }

    #[test]
    fn debug_hides_secrets() {
        let creds = Creds::from_tokens("ckey", Some("csecret"), Some("atoken"), Some("asecret"));
        let dbg = format!("{creds:?}");
        for value in ["ckey", "csecret", "atoken", "asecret"] {
            assert!(!dbg.contains(value));
        }
    }
}
