use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod store;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // One store per process, seeded from the database before serving.
    let state = match AppState::from_config(&cfg) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "database initialization failed");
            std::process::exit(1);
        }
    };

    info!(addr = %cfg.bind_addr, "starting server");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
