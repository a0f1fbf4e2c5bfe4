use crate::auth::sessions::token_from_cookie_header;
use crate::auth::{SessionUser, Toast};
use crate::errors::ServerError;
use crate::responses::{see_other, text_response, ResultResp};
use crate::routes;
use crate::state::{now_unix, AppState};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;
use url::form_urlencoded;

/// Form posts here are a handful of short fields.
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => match current_user(&req, state)? {
            Some(_) => see_other("/listings"),
            None => see_other("/login"),
        },
        ("GET", "/health") => text_response("ok"),

        ("GET", "/login") => routes::auth::login_page(&req, state),
        ("GET", "/signup") => routes::auth::signup_page(&req, state),
        ("GET", "/forgot-password") => routes::auth::forgot_password_page(),
        ("POST", "/auth/login") => routes::auth::login(req, state),
        ("POST", "/auth/signup") => routes::auth::signup(req, state),
        ("POST", "/auth/forgot-password") => routes::auth::forgot_password(req, state),
        ("POST", "/auth/logout") => routes::auth::logout(&req, state),

        ("GET", "/listings") => routes::listings::listings(&req, state),
        ("GET", "/api/properties") => routes::listings::api_properties(&req, state),

        ("GET", p) if p.starts_with("/properties/") => {
            let rest = &p["/properties/".len()..];
            match rest.split('/').collect::<Vec<_>>().as_slice() {
                [id] if !id.is_empty() => routes::properties::detail(&req, state, id),
                [id, "call"] => routes::properties::call(&req, state, id),
                [id, "whatsapp"] => routes::properties::whatsapp(&req, state, id),
                _ => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Decoded query string, in order. Repeated keys are kept.
pub fn query_pairs(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

pub fn query_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Reads an `application/x-www-form-urlencoded` body. Later duplicates win.
pub fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut bytes = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    if bytes.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    Ok(form_urlencoded::parse(&bytes).into_owned().collect())
}

pub fn session_token(req: &Request) -> Option<&str> {
    req.headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header)
}

/// The signed-in user plus any toast waiting for them.
pub fn current_session(
    req: &Request,
    state: &AppState,
) -> Result<Option<(SessionUser, Option<Toast>)>, ServerError> {
    match session_token(req) {
        Some(token) => state.sessions.load(token, now_unix()),
        None => Ok(None),
    }
}

/// The signed-in user, leaving any pending toast for the next rendered page.
pub fn current_user(req: &Request, state: &AppState) -> Result<Option<SessionUser>, ServerError> {
    match session_token(req) {
        Some(token) => state.sessions.user(token, now_unix()),
        None => Ok(None),
    }
}
