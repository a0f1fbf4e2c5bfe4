use crate::config::AppConfig;
use crate::domain::Catalog;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Fresh app state with no simulated auth delay.
pub fn test_state() -> AppState {
    let cfg = AppConfig {
        auth_delay_ms: 0,
        ..AppConfig::default()
    };
    AppState::new(&cfg, Catalog::seeded())
}

pub fn get(state: &AppState, uri: &str, session: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    let req = builder.body(Body::empty()).unwrap();
    handle(req, state).expect("handler failed")
}

pub fn post_form(state: &AppState, uri: &str, form: &str, session: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    let req = builder
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();
    handle(req, state).expect("handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Signs in through the login form and returns the session token.
pub fn sign_in(state: &AppState) -> String {
    let resp = post_form(
        state,
        "/auth/login",
        "email=tenant%40example.com&password=pw",
        None,
    );
    assert_eq!(resp.status(), 303);

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("session cookie set")
        .to_string();
    let token = cookie
        .strip_prefix("session=")
        .and_then(|rest| rest.split(';').next())
        .expect("cookie has a value");
    token.to_string()
}
