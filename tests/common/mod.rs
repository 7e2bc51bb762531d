#![allow(dead_code)] // each test binary uses a different subset of helpers

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use certdesk::db::{DeskStorage, connect};
use certdesk::router::{DeskState, desk_router};
use certdesk::session::SessionStore;

pub const TEST_USERNAME: &str = "asha";
pub const TEST_PASSWORD: &str = "open sesame";
pub const TEST_SECRET: &str = "an integration test session secret";

pub struct TestApp {
    pub router: Router,
    pub storage: DeskStorage,
    pub db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Fresh router over a throwaway file-backed SQLite database with one
/// pre-provisioned user.
pub async fn setup(tag: &str) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!("certdesk-{tag}-{}-{nanos}.sqlite", std::process::id()));

    let pool = connect(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to open test database");
    let storage = DeskStorage::new(pool.clone());
    storage.init_schema().await.expect("schema init failed");

    let hash = Argon2::default()
        .hash_password(TEST_PASSWORD.as_bytes(), &SaltString::generate(&mut OsRng))
        .expect("hashing failed")
        .to_string();
    storage
        .upsert_user(TEST_USERNAME, &hash)
        .await
        .expect("failed to seed user");

    let sessions = SessionStore::new(pool, 24);
    let state = DeskState::new(storage.clone(), sessions, TEST_SECRET);
    TestApp {
        router: desk_router(state),
        storage,
        db_path,
    }
}

/// Log in with the seeded user and return the session cookie pair
/// (`name=value`) to send on subsequent requests.
pub async fn login(app: &TestApp) -> String {
    let body = form_body(&[("username", TEST_USERNAME), ("password", TEST_PASSWORD)]);
    let resp = post_form(app, "/login", None, body).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    session_cookie(&resp).expect("login response set no session cookie")
}

pub fn form_body(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

pub async fn get(app: &TestApp, uri: &str, cookie: Option<&str>) -> Response<Body> {
    send(app, "GET", uri, cookie, None).await
}

pub async fn post_form(
    app: &TestApp,
    uri: &str,
    cookie: Option<&str>,
    body: String,
) -> Response<Body> {
    send(app, "POST", uri, cookie, Some(body)).await
}

pub async fn delete(app: &TestApp, uri: &str, cookie: Option<&str>) -> Response<Body> {
    send(app, "DELETE", uri, cookie, None).await
}

async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .expect("failed to build request");

    app.router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed")
}

/// Extract the `name=value` part of the session Set-Cookie header, if any.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("certdesk_session="))
        .and_then(|v| v.split(';').next())
        .map(|v| v.to_string())
}

pub fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
