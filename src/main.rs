use crate::app::App;
use crate::config::Config;
use crate::router::handle;
use astra::Server;

mod app;
mod catalog;
mod config;
mod errors;
mod fragments;
mod logging;
mod modal;
mod nav;
mod query;
mod responses;
mod router;
mod templates;
mod tracking;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read configuration before anything can log
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    logging::init(config.log_format);

    // 2️⃣ Load the catalog and fragment source once
    let app = match App::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "catalog initialization failed");
            std::process::exit(1);
        }
    };

    let tracking_ids: Vec<&str> = app.catalog().tracking_ids().collect();
    tracing::info!(?tracking_ids, "available tracking ids for demo");

    // 3️⃣ Start the server
    let addr = app.config().addr;
    let workers = app.config().workers;
    tracing::info!(%addr, workers, "FarmLink platform initialized, listening on http://{addr}");

    let server = Server::bind(addr).max_workers(workers);

    // 4️⃣ Serve requests, passing the app into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
