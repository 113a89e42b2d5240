use crate::app::App;
use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::router::handle;
use astra::Server;
use tracing::{error, info, warn};

mod app;
mod config;
mod domain;
mod errors;
mod feedback;
mod forms;
mod logging;
mod model;
mod prediction;
mod responses;
mod router;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load config (optional file, defaults otherwise)
    let (cfg, found) = match AppConfig::load(DEFAULT_CONFIG_PATH) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&cfg.logging);
    if !found {
        warn!(path = DEFAULT_CONFIG_PATH, "No config file, using defaults");
    }

    // 2️⃣ Load the model once; a missing model only disables predictions
    let app = App::from_config(&cfg);

    // 3️⃣ Start the server
    let addr = cfg.server.bind;
    info!(%addr, workers = cfg.server.max_workers, "Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(cfg.server.max_workers);

    // 4️⃣ Serve requests, passing the app into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(error = %err, "Request failed");
            } else {
                warn!(error = %err, "Request rejected");
            }
            templates::html_error_response(&err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "Server ended with error");
    }

    info!("Server shut down cleanly.");
}
