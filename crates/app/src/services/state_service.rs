//! State service — read-only use-cases over states.

use covid19_domain::error::CovidError;
use covid19_domain::id::StateId;
use covid19_domain::state::{State, StateStats};

use crate::ports::StateRepository;

/// Application service for state lookups and aggregates.
pub struct StateService<R> {
    repo: R,
}

impl<R: StateRepository> StateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_states(&self) -> Result<Vec<State>, CovidError> {
        self.repo.get_all().await
    }

    /// Look up a state by id. A missing state is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_state(&self, id: StateId) -> Result<Option<State>, CovidError> {
        self.repo.get_by_id(id).await
    }

    /// Case totals over every district of the state.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_state_stats(&self, id: StateId) -> Result<StateStats, CovidError> {
        self.repo.get_stats(id).await
    }
}
