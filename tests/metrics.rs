// tests/metrics.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

// Build full in-process app (config defaults + /metrics).
async fn build_app() -> Router {
    text_sentiment_analyzer::app()
        .await
        .expect("app() should build Router in tests")
}

#[tokio::test]
async fn metrics_endpoint_reports_analysis_series() {
    let app = build_app().await;

    let r = app
        .clone()
        .oneshot(
            Request::post("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"text":"What a great day"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(r.status(), StatusCode::OK);

    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap(); // 1 MiB
    let text = String::from_utf8(body.to_vec()).unwrap();

    for needle in ["analyze_requests_total", "analyze_tokens", "analyze_duration_ms"] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
}

#[tokio::test]
async fn app_can_be_built_twice_in_one_process() {
    let _a = build_app().await;
    let _b = build_app().await;
}
