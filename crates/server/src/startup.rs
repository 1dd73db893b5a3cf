use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the application around a fresh in-memory store.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = ServerState::in_memory(cfg.store.default_name.clone());
    routes::build_router(state, build_cors())
}

/// Serve `app` on an already-bound listener until the server stops.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind the configured address and run. Logging must already be initialized.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg);
    let addr: SocketAddr = cfg.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        default_name = %cfg.store.default_name,
        "record store listening"
    );
    serve(listener, app).await
}
