// src/config.rs
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

use crate::auth::AuthConfig;

pub const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// Runtime settings. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "ekasi", version, about = "Township rental listings server")]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "EKASI_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Worker threads serving requests.
    #[arg(long, env = "EKASI_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Simulated auth round trip, in milliseconds.
    #[arg(long, env = "EKASI_AUTH_DELAY_MS", default_value_t = 1000)]
    pub auth_delay_ms: u64,

    /// How long a sign-in lasts, in seconds.
    #[arg(
        long,
        env = "EKASI_SESSION_TTL_SECS",
        default_value_t = DEFAULT_SESSION_TTL_SECS,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub session_ttl_secs: i64,
}

impl AppConfig {
    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            delay: Duration::from_millis(self.auth_delay_ms),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            auth_delay_ms: 1000,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}
