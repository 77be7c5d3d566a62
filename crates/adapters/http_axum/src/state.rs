//! Shared application state for axum handlers.

use std::sync::Arc;

use covid19_app::ports::{DistrictRepository, StateRepository};
use covid19_app::services::district_service::DistrictService;
use covid19_app::services::state_service::StateService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SR, DR> {
    /// State lookups and aggregates.
    pub state_service: Arc<StateService<SR>>,
    /// District CRUD service.
    pub district_service: Arc<DistrictService<DR>>,
}

impl<SR, DR> Clone for AppState<SR, DR> {
    fn clone(&self) -> Self {
        Self {
            state_service: Arc::clone(&self.state_service),
            district_service: Arc::clone(&self.district_service),
        }
    }
}

impl<SR, DR> AppState<SR, DR>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(state_service: StateService<SR>, district_service: DistrictService<DR>) -> Self {
        Self {
            state_service: Arc::new(state_service),
            district_service: Arc::new(district_service),
        }
    }
}
