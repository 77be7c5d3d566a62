//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod districts;
#[allow(clippy::missing_errors_doc)]
pub mod states;

use axum::Router;
use axum::routing::{MethodRouter, get, post};

use covid19_app::ports::{DistrictRepository, StateRepository};

use crate::state::AppState;

/// Build the API sub-router.
///
/// Every path answers both with and without a trailing slash.
pub fn routes<SR, DR>() -> Router<AppState<SR, DR>>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    let table: [(&str, MethodRouter<AppState<SR, DR>>); 6] = [
        // States
        ("/states", get(states::list::<SR, DR>)),
        ("/states/{state_id}", get(states::get::<SR, DR>)),
        ("/states/{state_id}/stats", get(states::stats::<SR, DR>)),
        // Districts
        ("/districts", post(districts::create::<SR, DR>)),
        (
            "/districts/{district_id}",
            get(districts::get::<SR, DR>)
                .put(districts::update::<SR, DR>)
                .delete(districts::delete::<SR, DR>),
        ),
        (
            "/districts/{district_id}/details",
            get(districts::state_name::<SR, DR>),
        ),
    ];

    table
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            router
                .route(path, handler.clone())
                .route(&format!("{path}/"), handler)
        })
}
