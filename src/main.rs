use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod config;
mod dataset;
mod domain;
mod errors;
mod geos;
mod map;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    // 1️⃣ Load the listings once; nothing works without them
    let dataset = match dataset::load(&config.csv_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("❌ Failed to load listings: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(dataset);

    // 2️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 3️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req: astra::Request, _info| {
        let path = req.uri().path().to_string();
        match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%path, "request failed: {err}");
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
