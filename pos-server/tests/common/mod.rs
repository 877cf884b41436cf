//! Shared integration-test fixtures
//!
//! Builds the full application router over an in-memory database and a
//! static identity provider with two known store sessions.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pos_server::auth::StaticIdentityProvider;
use pos_server::core::{Config, ServerState};
use pos_server::db::DbService;
use pos_server::db::models::{EmployeeCreate, Role};
use pos_server::db::repository::EmployeeRepository;
use pos_server::routes;

pub const TOKEN_A: &str = "token-a";
pub const TOKEN_B: &str = "token-b";
pub const STORE_A: &str = "store_alpha";
pub const STORE_B: &str = "store_beta";
pub const SESSION_COOKIE: &str = "kams_pos_session";
pub const EMPLOYEE_COOKIE: &str = "kams_pos_employee_id";

pub async fn test_state() -> ServerState {
    let db = DbService::memory().await.expect("in-memory database");
    let identity = StaticIdentityProvider::new()
        .with_session(TOKEN_A, STORE_A)
        .with_session(TOKEN_B, STORE_B);
    let config = Config {
        work_dir: std::env::temp_dir().to_string_lossy().into_owned(),
        http_port: 0,
        identity_url: None,
        store_session_cookie: SESSION_COOKIE.to_string(),
        environment: "development".to_string(),
    };
    ServerState::new(config, db.db, Arc::new(identity))
}

pub fn test_app(state: &ServerState) -> Router {
    routes::build_app(state).with_state(state.clone())
}

/// Build a request with optional cookies and JSON body
pub fn request(
    method: &str,
    uri: &str,
    cookies: &[(&str, &str)],
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if !cookies.is_empty() {
        let cookie_header = cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        builder = builder.header(header::COOKIE, cookie_header);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

/// Seed an employee directly through the repository, returning its record id
pub async fn seed_employee(state: &ServerState, store: &str, name: &str, role: Role, pin: &str) -> String {
    let repo = EmployeeRepository::new(state.get_db());
    let created = repo
        .create(
            store,
            EmployeeCreate {
                name: name.to_string(),
                role,
                pin: pin.to_string(),
                email: None,
                metadata: None,
            },
        )
        .await
        .expect("seed employee");
    created.id_string()
}

/// First `Set-Cookie` value for the given cookie name, if any
pub fn set_cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{name}=")))
        .map(|v| {
            v.split(';')
                .next()
                .unwrap_or_default()
                .trim_start_matches(&format!("{name}="))
                .to_string()
        })
}
