use std::{env, net::SocketAddr, path::Path, sync::Arc};

use axum::http::HeaderValue;
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

use crate::routes;
use service::{highscore::HighScoreService, store::json_file::JsonFileStore};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// CORS: exact-match origin allow-list with credentials; methods and headers
/// are echoed back from the preflight request. Origins that fail header-value
/// parsing are skipped.
pub fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Load config from config.toml, falling back to env vars over the defaults
fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            if let Ok(path) = env::var("SCORE_FILE") {
                cfg.storage.path = path;
            }
            cfg
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();

    // Data directory for the score file
    let score_file = cfg.storage.path.clone();
    let data_dir = Path::new(&score_file)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    common::env::ensure_env(&score_file, &data_dir).await?;

    // Store and compare-and-persist service
    let store = JsonFileStore::new(&score_file).await?;
    let svc = Arc::new(HighScoreService::new(store));

    // Build router
    let cors = build_cors(&cfg.cors.allowed_origins);
    let app: Router = routes::build_router(Arc::clone(&svc), cors);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, score_file = %cfg.storage.path, "starting high score server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
