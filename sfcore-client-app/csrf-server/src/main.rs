use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{error, info};

use csrf_api::{handlers::health, routes, AppState};
use csrf_shared::{
    config::AppConfig,
    constants::{CSRF_RAW_HEADER, CSRF_TOKEN_HEADER},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize telemetry
    csrf_shared::telemetry::init_telemetry("info,csrf_api=debug,csrf_security=debug");

    info!("CSRF Server starting...");

    // Load configuration (also loads .env)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Configuration loaded (env: {}, excluded paths: {})",
        config.app.env,
        config.csrf.excluded_paths.len()
    );

    // Key is derived here, before the listener accepts anything
    let state = AppState::from_config(&config);

    let app = build_router(state, &config)?;

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, config: &AppConfig) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(config.app.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(CSRF_TOKEN_HEADER),
            HeaderName::from_static(CSRF_RAW_HEADER),
        ])
        .allow_credentials(true);

    Ok(Router::new()
        // Health check (never gated)
        .route("/health", get(health::health_check))
        // Token issuance behind the issuer secret
        .merge(routes::issuance_routes(state.clone()))
        // Probe behind the CSRF gate
        .merge(routes::verify_routes(state))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        ))
}
