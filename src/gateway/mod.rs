pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the complete router over `state`.
///
/// Known paths answer unsupported verbs with 405; unknown paths with 404.
pub fn router(state: Arc<AppState>) -> Router {
    let dish_routes = Router::new()
        .route(
            "/dishes",
            get(handlers::list_dishes)
                .post(handlers::create_dish)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}",
            get(handlers::read_dish)
                .put(handlers::update_dish)
                .fallback(handlers::method_not_allowed),
        );

    let order_routes = Router::new()
        .route(
            "/orders",
            get(handlers::list_orders)
                .post(handlers::create_order)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(handlers::read_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order)
                .fallback(handlers::method_not_allowed),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .merge(dish_routes)
        .merge(order_routes)
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Start HTTP Gateway server and serve until Ctrl-C
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let app = router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
        tracing::error!(
            "[GATEWAY] Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            config.port
        );
    })?;

    tracing::info!("[GATEWAY] Listening on http://{}", listener.local_addr()?);
    tracing::info!("[GATEWAY] API Docs: http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("[GATEWAY] Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[GATEWAY] Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
