//! HTTP transport for the record stores.

mod docs;
mod error;
mod handlers;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::application::ManageRecordsUseCase;
use crate::connector::api::Container;
use crate::domain::Record;

pub use docs::{OPENAPI_PATH, OPENAPI_SPEC, SWAGGER_PATH};
pub use error::ApiError;

/// Build the full API router over the container's stores.
pub fn create_router(container: &Container) -> Router {
    Router::new()
        .merge(record_routes(container.employee_use_case()))
        .merge(record_routes(container.department_use_case()))
        .merge(docs::routes())
        .layer(TraceLayer::new_for_http())
}

/// CRUD routes for one record kind, mounted under `/{collection}`.
pub fn record_routes<R: Record>(use_case: ManageRecordsUseCase<R>) -> Router {
    let collection = format!("/{}", R::COLLECTION);
    let item = format!("/{}/{{id}}", R::COLLECTION);

    Router::new()
        .route(
            &collection,
            get(handlers::list_records::<R>).post(handlers::create_record::<R>),
        )
        .route(
            &item,
            get(handlers::get_record::<R>)
                .put(handlers::update_record::<R>)
                .delete(handlers::delete_record::<R>),
        )
        .with_state(use_case)
}

/// Serve the API on `addr` until Ctrl-C is received.
pub async fn serve(addr: &str, container: &Container) -> anyhow::Result<()> {
    let app = create_router(container);
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    info!("Server listening on http://{}", local);
    info!("Swagger UI available at http://{}{}", local, SWAGGER_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C: {}. Serving until killed.", e);
            std::future::pending::<()>().await;
        }
    }
}
