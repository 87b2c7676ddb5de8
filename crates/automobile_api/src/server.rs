//! Router composition and the HTTP serve loop.

use crate::docs;
use crate::graphql::{self, build_schema};
use crate::rest;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;

/// Builds the full application router: REST, GraphQL, docs and health.
pub fn create_router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health_check))
        .merge(rest::router().with_state(state))
        .merge(graphql::router(schema))
        .merge(docs::router())
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        "event=server_start module=api status=ok addr={}",
        listener.local_addr()?
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=api status=ok");
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=api status=error error={err}");
        std::future::pending::<()>().await;
    }
}
