// tests/support/helpers.rs
use super::mocks::{InMemoryArticleStore, SequentialIds, StaticAdminGate};
use axum::body::{self, Body};
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use gamenews::application::{dto::CallerOrigin, services::ApplicationServices};
use gamenews::domain::article::PageSize;
use gamenews::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

pub const ADMIN_IP: &str = "10.0.0.7";
pub const VISITOR_IP: &str = "203.0.113.9";

/// Everything a test needs: the services plus handles on the mocks behind them.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryArticleStore>,
    pub gate: Arc<StaticAdminGate>,
}

impl TestApp {
    pub fn new(store: InMemoryArticleStore) -> Self {
        Self::with_page_size(store, 3)
    }

    pub fn with_page_size(store: InMemoryArticleStore, page_size: u32) -> Self {
        let store = Arc::new(store);
        let gate = Arc::new(StaticAdminGate::new([ADMIN_IP]));
        let services = Arc::new(ApplicationServices::new(
            store.clone(),
            store.clone(),
            gate.clone(),
            Arc::new(SequentialIds::default()),
            PageSize::new(page_size).unwrap(),
        ));
        Self {
            services,
            store,
            gate,
        }
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }
}

pub fn admin() -> CallerOrigin {
    CallerOrigin::new(ADMIN_IP)
}

pub fn visitor() -> CallerOrigin {
    CallerOrigin::new(VISITOR_IP)
}

/// Request arriving from `ip`, the way `into_make_service_with_connect_info`
/// would hand it to the router.
pub fn request_from(ip: &str, method: Method, uri: &str, body: Body) -> Request<Body> {
    let mut req = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    let addr = SocketAddr::new(ip.parse::<IpAddr>().unwrap(), 49152);
    req.extensions_mut().insert(ConnectInfo(addr));
    req
}

pub fn get_from(ip: &str, uri: &str) -> Request<Body> {
    request_from(ip, Method::GET, uri, Body::empty())
}

pub fn delete_from(ip: &str, uri: &str) -> Request<Body> {
    request_from(ip, Method::DELETE, uri, Body::empty())
}

pub fn form_from(ip: &str, uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let encoded = serde_urlencoded::to_string(fields).unwrap();
    let mut req = request_from(ip, Method::POST, uri, Body::from(encoded));
    req.headers_mut().insert(
        CONTENT_TYPE,
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get(axum::http::header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
}

/// Assert an `ErrorResponse` body with the given status and message.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let v = json_body(resp).await;
    assert_eq!(v.get("message").and_then(Value::as_str), Some(expected_message));
    assert!(v.get("error").and_then(Value::as_str).is_some());
}
