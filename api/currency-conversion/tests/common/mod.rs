#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use currency_conversion::app::{AppState, build_router};
use currency_conversion::config::environment::AppConfig;
use currency_conversion::module::error::DetailResponse;
use currency_conversion::service::auth_service::AuthPolicy;
use http::Request;
use serde_json::Value;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SECRET: &str = "integration-test-secret";
pub const SHEET_PATH: &str = "/stats/eurofxref/eurofxref-daily.xml";

pub const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gesmes:Envelope xmlns:gesmes="http://www.gesmes.org/xml/2002-08-01" xmlns="http://www.ecb.int/vocabulary/2002-08-01/eurofxref">
	<gesmes:subject>Reference rates</gesmes:subject>
	<gesmes:Sender>
		<gesmes:name>European Central Bank</gesmes:name>
	</gesmes:Sender>
	<Cube>
		<Cube time='2024-06-14'>
			<Cube currency='USD' rate='1.08'/>
			<Cube currency='JPY' rate='160.0'/>
		</Cube>
	</Cube>
</gesmes:Envelope>"#;

pub fn test_config(rates_source_url: String) -> AppConfig {
    AppConfig {
        rust_env: "test".to_string(),
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        jwt_secret: SECRET.to_string(),
        rates_source_url,
        rates_timeout_seconds: 5,
        auth_policy: AuthPolicy::default(),
    }
}

pub fn test_app(config: AppConfig) -> axum::Router {
    build_router(AppState::new(config).expect("app state"))
}

/// Serves `SHEET` and asserts on drop that it was fetched exactly `fetches` times.
pub async fn rate_source(fetches: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SHEET_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(SHEET))
        .expect(fetches)
        .mount(&server)
        .await;
    server
}

pub fn sheet_url(server: &MockServer) -> String {
    format!("{}{SHEET_PATH}", server.uri())
}

pub async fn get_json(
    app: axum::Router,
    uri: &str,
    authorization: Option<&str>,
) -> (http::StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    let request = builder.body(Body::empty()).expect("build request");
    send(app, request).await
}

pub async fn post_token(app: axum::Router, body: &str) -> (http::StatusCode, DetailResponse) {
    let request = Request::builder()
        .method("POST")
        .uri("/token")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    let (status, payload) = send(app, request).await;
    let detail: DetailResponse = serde_json::from_value(payload).expect("detail body");
    (status, detail)
}

pub async fn issue_token(app: axum::Router) -> String {
    let (status, body) = post_token(app, r#"{"name":"John","surname":"Doe"}"#).await;
    assert_eq!(status, http::StatusCode::OK);
    body.detail
}

async fn send(app: axum::Router, request: Request<Body>) -> (http::StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("parse body");
    (status, payload)
}
