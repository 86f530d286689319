use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDateTime;
use http_body_util::BodyExt;
use storefront_api::transport::greeting::{
    create_greeting_router, greeting_for, Greeting, TIME_FORMAT,
};
use tower::ServiceExt;

async fn fetch(uri: &str) -> (StatusCode, Greeting) {
    let response = create_greeting_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn known_paths_greet_with_time_and_url() {
    for path in ["/", "/2", "/3", "/4", "/5"] {
        let (status, greeting) = fetch(path).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(greeting.url, path);
        assert_eq!(Some(greeting.message.as_str()), greeting_for(path));
        let time = greeting.time.expect("time is present");
        assert!(NaiveDateTime::parse_from_str(&time, TIME_FORMAT).is_ok(), "{time}");
    }
}

#[tokio::test]
async fn other_paths_are_404() {
    let (status, greeting) = fetch("/6").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(greeting.url, "/6");
    assert!(greeting.time.is_none());
    assert!(greeting.message.contains("not found"));
}
