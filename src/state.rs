// src/state.rs
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::{AuthService, SessionStore};
use crate::config::AppConfig;
use crate::domain::Catalog;

/// Everything a request handler can reach. Shared by all worker threads.
pub struct AppState {
    pub catalog: Catalog,
    pub auth: AuthService,
    pub sessions: SessionStore,
    pub session_ttl_secs: i64,
}

impl AppState {
    pub fn new(cfg: &AppConfig, catalog: Catalog) -> Self {
        Self {
            catalog,
            auth: AuthService::new(cfg.auth()),
            sessions: SessionStore::new(cfg.session_ttl_secs),
            session_ttl_secs: cfg.session_ttl_secs,
        }
    }
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
