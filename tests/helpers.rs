/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use mockito::{Matcher, Mock, ServerGuard};
use twittersearch::v1_1::{Client, Creds, SearchOrder};

/// Path of a file under tests/mock-data
#[allow(dead_code)]
pub(crate) fn mock_data(name: &str) -> String {
    format!("{}/tests/mock-data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// A client talking to the mock server
#[allow(dead_code)]
pub(crate) fn mock_client(server: &ServerGuard) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();
    let creds = Creds::from_tokens("aaabbb", Some("cccddd"), Some("111222"), Some("333444"));
    Client::builder(creds)
        .base_url(&server.url())
        .build()
        .unwrap()
}

/// Default search order used by the tests
#[allow(dead_code)]
pub(crate) fn search_order() -> SearchOrder {
    let mut order = SearchOrder::new();
    order.set_keywords(["foo"]);
    order
}

/// Answers one signed GET on `path` with the given status and fixture
#[allow(dead_code)]
pub(crate) async fn mock_get(
    server: &mut ServerGuard,
    path: &str,
    query: Matcher,
    status: usize,
    fixture: &str,
) -> Mock {
    server
        .mock("GET", path)
        .match_query(query)
        .match_header("authorization", Matcher::Regex("^OAuth ".to_string()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_header("x-rate-limit-limit", "180")
        .with_header("x-rate-limit-remaining", "179")
        .with_body_from_file(mock_data(fixture))
        .expect(1)
        .create_async()
        .await
}

#[allow(dead_code)]
pub(crate) fn max_id(id: u64) -> Matcher {
    Matcher::UrlEncoded("max_id".to_string(), id.to_string())
}

#[allow(dead_code)]
pub(crate) fn get_live_creds() -> anyhow::Result<Creds> {
    dotenvy::dotenv().ok();
    Ok(Creds::from_env()?)
}
