mod common;

use common::{get_json, rate_source, sheet_url, test_app, test_config};
use axum::body::Body;
use http::Request;
use serde_json::{Value, json};
use tower::util::ServiceExt;

#[tokio::test]
async fn unmatched_routes_return_endpoint_not_found() {
    let server = rate_source(0).await;
    let app = test_app(test_config(sheet_url(&server)));

    for uri in ["/", "/rates", "/currencies/EUR/USD/extra"] {
        let (status, body) = get_json(app.clone(), uri, None).await;
        assert_eq!(status, http::StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"detail": "Endpoint not found"}));
    }
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_endpoint_not_found() {
    let server = rate_source(0).await;
    let app = test_app(test_config(sheet_url(&server)));

    let (status, body) = get_json(app.clone(), "/token", None).await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Endpoint not found"}));

    let request = Request::builder()
        .method("DELETE")
        .uri("/currencies")
        .body(Body::empty())
        .expect("build request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn docs_describe_routes_and_bearer_scheme() {
    let server = rate_source(0).await;
    let app = test_app(test_config(sheet_url(&server)));

    let (status, body) = get_json(app, "/docs", None).await;

    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["openapi"], "3.1.0");
    assert_eq!(body["info"]["title"], "Currency Conversion Rates");
    assert!(body["paths"]["/token"]["post"].is_object());
    assert_eq!(
        body["paths"]["/currencies"]["get"]["security"],
        json!([{"bearerAuth": []}])
    );
    assert_eq!(
        body["components"]["securitySchemes"]["bearerAuth"]["bearerFormat"],
        Value::from("JWT")
    );
}
