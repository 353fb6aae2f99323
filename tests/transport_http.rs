mod common;

use common::MockYourls;
use kurl::domain::entities::ApiRequest;
use kurl::domain::errors::TransportError;
use kurl::domain::ports::Transport;
use serde_json::json;

fn stats_request() -> ApiRequest {
    ApiRequest::new("stats", common::SIGNATURE)
}

#[tokio::test]
async fn test_post_is_form_encoded() {
    let mock = MockYourls::fixed(200, json!({"total_links": "12"})).await;

    let response = common::transport()
        .send(&mock.base_url, &stats_request())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.json, Some(json!({"total_links": "12"})));

    let hits = mock.hits();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].is_post());
    assert!(
        hits[0]
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
    );
    assert_eq!(hits[0].param("action"), Some("stats"));
    assert_eq!(hits[0].param("format"), Some("json"));
    assert_eq!(hits[0].param("signature"), Some(common::SIGNATURE));
}

#[tokio::test]
async fn test_post_403_retries_once_as_get_with_same_params() {
    let mock = MockYourls::start(|hit| {
        if hit.is_post() {
            (403, "Forbidden".to_string())
        } else {
            (200, json!({"shorturl": "https://sho.rt/abc"}).to_string())
        }
    })
    .await;

    let request = ApiRequest::new("shorturl", common::SIGNATURE)
        .param("url", "https://example.com/?a=1&b=two words")
        .param("keyword", "abc");

    let response = common::transport()
        .send(&mock.base_url, &request)
        .await
        .unwrap();

    assert_eq!(response.status, 200);

    let hits = mock.hits();
    assert_eq!(hits.len(), 2);
    assert!(hits[0].is_post());
    assert_eq!(hits[1].method, "GET");
    assert_eq!(hits[0].params, hits[1].params);
    assert_eq!(hits[1].param("url"), Some("https://example.com/?a=1&b=two words"));
}

#[tokio::test]
async fn test_every_fallback_status_triggers_get() {
    for status in [400u16, 403, 405, 415] {
        let mock = MockYourls::start(move |hit| {
            if hit.is_post() {
                (status, String::new())
            } else {
                (200, "{}".to_string())
            }
        })
        .await;

        let response = common::transport()
            .send(&mock.base_url, &stats_request())
            .await
            .unwrap();

        assert_eq!(response.status, 200, "POST status {}", status);
        assert_eq!(mock.hits().len(), 2, "POST status {}", status);
    }
}

#[tokio::test]
async fn test_post_500_is_not_retried() {
    let mock = MockYourls::start(|_| (500, "Internal Server Error".to_string())).await;

    let response = common::transport()
        .send(&mock.base_url, &stats_request())
        .await
        .unwrap();

    assert_eq!(response.status, 500);
    assert_eq!(response.body, "Internal Server Error");
    assert_eq!(mock.hits().len(), 1);
}

#[tokio::test]
async fn test_failed_fallback_returns_second_response() {
    let mock = MockYourls::start(|hit| {
        if hit.is_post() {
            (405, "no POST".to_string())
        } else {
            (403, "no GET either".to_string())
        }
    })
    .await;

    let response = common::transport()
        .send(&mock.base_url, &stats_request())
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert_eq!(response.body, "no GET either");
    assert_eq!(mock.hits().len(), 2);
}

#[tokio::test]
async fn test_non_json_body_is_data() {
    let mock = MockYourls::start(|_| (200, "<html>maintenance</html>".to_string())).await;

    let response = common::transport()
        .send(&mock.base_url, &stats_request())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.json.is_none());
    assert_eq!(response.body, "<html>maintenance</html>");
}

#[tokio::test]
async fn test_subdirectory_install() {
    let mock = MockYourls::fixed(200, json!({})).await;
    let base_url = format!("{}/yourls", mock.base_url);

    let response = common::transport()
        .send(&base_url, &stats_request())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(mock.hits().len(), 1);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = common::transport()
        .send(&format!("http://{}", addr), &stats_request())
        .await;

    assert!(matches!(result, Err(TransportError::Network(_))));
}

#[tokio::test]
async fn test_truncated_body_is_network_error() {
    let base_url = common::start_truncating_server().await;

    let result = common::transport().send(&base_url, &stats_request()).await;

    assert!(
        matches!(result, Err(TransportError::Network(_))),
        "unexpected result: {:?}",
        result
    );
}
