use astra::Server;
use suburb_insights::config::AppConfig;
use suburb_insights::domain::MockListings;
use suburb_insights::logging::init_tracing;
use suburb_insights::market::MarketClient;
use suburb_insights::responses::html_error_response;
use suburb_insights::router::{handle, App};
use tracing::{error, info};

fn main() {
    init_tracing();

    // 1️⃣ Load configuration
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the data sources
    let market = match MarketClient::new(&config.market) {
        Ok(client) => client,
        Err(e) => {
            error!("Market client init failed: {e}");
            std::process::exit(1);
        }
    };
    let app = App::new(config.default_suburb.clone(), MockListings, market);

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
