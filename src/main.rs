use crate::config::AppConfig;
use crate::domain::Catalog;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod routes;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ekasi=info")),
        )
        .init();
}

fn main() {
    let cfg = AppConfig::parse();
    init_tracing();

    let state = AppState::new(&cfg, Catalog::seeded());
    info!(
        addr = %cfg.bind,
        workers = cfg.workers,
        listings = state.catalog.all().len(),
        "starting server"
    );

    let server = Server::bind(&cfg.bind).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
