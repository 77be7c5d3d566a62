//! Storage port — repository traits for persistence.
//!
//! Every method maps to exactly one statement against the storage engine.
//! Absence of a row is `Ok(None)`, never an error.

use std::future::Future;

use covid19_domain::district::{District, DistrictDetails};
use covid19_domain::error::CovidError;
use covid19_domain::id::{DistrictId, StateId};
use covid19_domain::state::{State, StateName, StateStats};

/// Read access to the pre-seeded [`State`] table.
pub trait StateRepository {
    /// Get every state, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, CovidError>> + Send;

    /// Get a state by its primary key.
    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, CovidError>> + Send;

    /// Sum the case counters of every district belonging to `id`.
    ///
    /// Totals are `None` when no district matches.
    fn get_stats(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<StateStats, CovidError>> + Send;
}

/// Repository for persisting and querying [`District`]s.
pub trait DistrictRepository {
    /// Insert a new district and return the key assigned by storage.
    fn create(
        &self,
        details: DistrictDetails,
    ) -> impl Future<Output = Result<DistrictId, CovidError>> + Send;

    /// Get a district by its primary key.
    fn get_by_id(
        &self,
        id: DistrictId,
    ) -> impl Future<Output = Result<Option<District>, CovidError>> + Send;

    /// Replace every writable field of the district `id`.
    ///
    /// Returns the number of rows affected.
    fn update(
        &self,
        id: DistrictId,
        details: DistrictDetails,
    ) -> impl Future<Output = Result<u64, CovidError>> + Send;

    /// Delete a district by its primary key.
    ///
    /// Returns the number of rows affected.
    fn delete(&self, id: DistrictId) -> impl Future<Output = Result<u64, CovidError>> + Send;

    /// Name of the state owning the district `id`.
    fn get_state_name(
        &self,
        id: DistrictId,
    ) -> impl Future<Output = Result<Option<StateName>, CovidError>> + Send;
}
