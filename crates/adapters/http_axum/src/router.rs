//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use covid19_app::ports::{DistrictRepository, StateRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes at the root next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, DR>(state: AppState<SR, DR>) -> Router
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
