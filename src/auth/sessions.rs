// src/auth/sessions.rs
use crate::auth::token::{hash_token, new_session_token, TokenHash};
use crate::errors::ServerError;
use std::collections::HashMap;
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "session";

/// One-shot notification shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Toast {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            destructive: false,
        }
    }

    pub fn error(description: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.to_string(),
            destructive: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub display_name: String,
    pub email: String,
    pub expires_at: i64,
    flash: Option<Toast>,
}

/// What a handler gets back for a live session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub display_name: String,
    pub email: String,
}

/// In-memory sessions keyed by token hash. Nothing survives a restart.
pub struct SessionStore {
    ttl_secs: i64,
    sessions: Mutex<HashMap<TokenHash, Session>>,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn with_sessions<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut HashMap<TokenHash, Session>) -> T,
    {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| ServerError::InternalError("session store poisoned".into()))?;
        Ok(f(&mut guard))
    }

    /// Creates a session and returns the raw token for the cookie.
    pub fn create(
        &self,
        display_name: &str,
        email: &str,
        flash: Option<Toast>,
        now: i64,
    ) -> Result<String, ServerError> {
        let raw_token = new_session_token();
        let session = Session {
            display_name: display_name.to_string(),
            email: email.to_string(),
            expires_at: now.saturating_add(self.ttl_secs),
            flash,
        };

        self.with_sessions(|map| {
            map.retain(|_, s| s.expires_at > now);
            map.insert(hash_token(&raw_token), session);
        })?;

        Ok(raw_token)
    }

    /// Looks up a live session and takes its pending toast, if any.
    /// Only handlers that render a page should call this.
    pub fn load(
        &self,
        raw_token: &str,
        now: i64,
    ) -> Result<Option<(SessionUser, Option<Toast>)>, ServerError> {
        self.lookup(raw_token, now, |s| s.flash.take())
    }

    /// Like [`SessionStore::load`] but leaves the pending toast in place.
    pub fn user(&self, raw_token: &str, now: i64) -> Result<Option<SessionUser>, ServerError> {
        Ok(self.lookup(raw_token, now, |_| ())?.map(|(user, ())| user))
    }

    fn lookup<F, T>(
        &self,
        raw_token: &str,
        now: i64,
        extra: F,
    ) -> Result<Option<(SessionUser, T)>, ServerError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let key = hash_token(raw_token);
        self.with_sessions(|map| {
            let expired = map.get(&key).is_some_and(|s| s.expires_at <= now);
            if expired {
                map.remove(&key);
                return None;
            }
            map.get_mut(&key).map(|s| {
                let user = SessionUser {
                    display_name: s.display_name.clone(),
                    email: s.email.clone(),
                };
                (user, extra(s))
            })
        })
    }

    pub fn revoke(&self, raw_token: &str) -> Result<bool, ServerError> {
        let key = hash_token(raw_token);
        self.with_sessions(|map| map.remove(&key).is_some())
    }

    #[cfg(test)]
    pub fn len(&self) -> Result<usize, ServerError> {
        self.with_sessions(|map| map.len())
    }
}

/// `Set-Cookie` value for a fresh session.
pub fn session_cookie(token: &str, ttl_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_secs}")
}

/// `Set-Cookie` value that drops the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Pulls the session token out of a `Cookie` header value.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
