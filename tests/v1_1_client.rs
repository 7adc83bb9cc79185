/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, max_id, mock_client, mock_get, search_order};
    use futures::{StreamExt, TryStreamExt};
    use mockito::Matcher;
    use std::collections::HashSet;
    use twittersearch::v1_1::{Client, TwitterSearchError, UserTimelineOrder};

    #[tokio::test]
    async fn authenticate() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/account/verify_credentials.json")
            .match_header("authorization", Matcher::Regex("oauth_token=\"111222\"".into()))
            .with_status(200)
            .with_body_from_file(helpers::mock_data("verify.json"))
            .expect(2)
            .create_async()
            .await;

        let client = mock_client(&server);
        assert!(!client.is_authenticated());
        assert!(client.authenticate(true).await.unwrap());
        assert!(client.is_authenticated());

        // Verifying again changes nothing
        assert!(client.authenticate(true).await.unwrap());
        assert!(client.is_authenticated());
        assert_eq!(client.get_statistics().queries, 0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn authenticate_fail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_get(
            &mut server,
            "/account/verify_credentials.json",
            Matcher::Any,
            401,
            "verify-error.json",
        )
        .await;

        let client = mock_client(&server);
        match client.authenticate(true).await {
            Err(TwitterSearchError::Authentication { code, message }) => {
                assert_eq!(code, 401);
                assert_eq!(message, "Could not authenticate you");
            }
            other => panic!("Expected an authentication error, got {:?}", other),
        }
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn authenticate_fail_without_raising() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_get(
            &mut server,
            "/account/verify_credentials.json",
            Matcher::Any,
            401,
            "verify-error.json",
        )
        .await;

        let client = mock_client(&server);
        assert!(!client.authenticate(false).await.unwrap());
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn set_supported_languages() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_get(&mut server, "/help/languages.json", Matcher::Any, 200, "lang.json").await;

        let client = mock_client(&server);
        let mut order = search_order();
        assert!(order.set_language("en").is_ok());

        client.set_supported_languages(&mut order).await.unwrap();

        let expected: HashSet<String> = ["fi", "da", "pl", "hu", "fa", "he"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(order.iso_6391, expected);
        assert!(order.set_language("en").is_err());
        assert!(order.set_language("fi").is_ok());
        assert_eq!(client.get_statistics().queries, 0);
    }

    #[tokio::test]
    async fn set_supported_languages_fails_like_other_calls() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_get(
            &mut server,
            "/help/languages.json",
            Matcher::Any,
            401,
            "verify-error.json",
        )
        .await;

        let client = mock_client(&server);
        let mut order = search_order();
        let err = client.set_supported_languages(&mut order).await.unwrap_err();
        assert_eq!(err.code(), 401);
        assert!(order.iso_6391.contains("en"));
    }

    #[tokio::test]
    async fn user_timeline_is_paged() {
        let mut server = mockito::Server::new_async().await;
        let screen_name = Matcher::UrlEncoded("screen_name".into(), "foo".into());
        let first = mock_get(
            &mut server,
            "/statuses/user_timeline.json",
            screen_name.clone(),
            200,
            "timeline/0.json",
        )
        .await;
        let second = mock_get(
            &mut server,
            "/statuses/user_timeline.json",
            Matcher::AllOf(vec![screen_name, max_id(399)]),
            200,
            "timeline/1.json",
        )
        .await;

        let client = mock_client(&server);
        let mut order = UserTimelineOrder::from_screen_name("foo").unwrap();
        order.set_count(2).unwrap();

        let ids: Vec<u64> = client
            .search_tweets_iterable(&order)
            .map_ok(|t| t.id)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(ids, vec![500, 400, 300]);
        assert_eq!(client.get_statistics().queries, 2);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn user_timeline_single_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_get(
            &mut server,
            "/statuses/user_timeline.json",
            Matcher::UrlEncoded("user_id".into(), "42".into()),
            200,
            "timeline/1.json",
        )
        .await;

        let client = mock_client(&server);
        let page = client
            .user_timeline(&UserTimelineOrder::from_user_id(42))
            .await
            .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].user.as_ref().unwrap().screen_name, "foo_fan");
    }

    #[tokio::test]
    async fn timeline_ends_at_the_oldest_tweet() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_get(
            &mut server,
            "/statuses/user_timeline.json",
            Matcher::Any,
            200,
            "timeline/oldest.json",
        )
        .await;

        let client = mock_client(&server);
        let mut order = UserTimelineOrder::from_user_id(42);
        order.set_count(2).unwrap();

        // A full page reaching id 1 has nothing older to page back to
        let ids: Vec<u64> = client
            .search_tweets_iterable(&order)
            .take(10)
            .map_ok(|t| t.id)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(client.get_statistics().queries, 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn clones_share_the_session() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_get(&mut server, "/search/tweets.json", Matcher::Any, 200, "search/empty.json").await;

        let client = mock_client(&server);
        let clone = client.clone();
        assert_eq!(clone.search_tweets_iterable(&search_order()).count().await, 0);
        assert_eq!(client.get_statistics().queries, 1);
    }

    #[tokio::test]
    async fn invalid_base_url_is_rejected() {
        let creds = twittersearch::v1_1::Creds::from_tokens("key", None, None, None);
        let err = Client::builder(creds).base_url("not a url").build().unwrap_err();
        assert!(matches!(err, TwitterSearchError::UrlParsing(_)));
    }

    // Disabling for ci/cd builds since I would need to get an access token/secret
    #[ignore]
    #[tokio::test]
    async fn live_search() {
        let client = Client::new(helpers::get_live_creds().unwrap());
        client.authenticate(true).await.unwrap();

        let mut order = search_order();
        order.set_count(10).unwrap();
        let tweets: Vec<_> = client
            .search_tweets_iterable(&order)
            .take(25)
            .try_collect()
            .await
            .unwrap();
        println!("Got {} tweets: {:?}", tweets.len(), client.get_statistics());
    }
}
