//! District service — use-cases for managing districts.

use covid19_domain::district::{District, DistrictDetails};
use covid19_domain::error::CovidError;
use covid19_domain::id::DistrictId;
use covid19_domain::state::StateName;

use crate::ports::DistrictRepository;

/// Application service for district CRUD operations.
///
/// Inputs are handed to storage as-is; the schema is the only validator.
pub struct DistrictService<R> {
    repo: R,
}

impl<R: DistrictRepository> DistrictService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new district.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the row is rejected (missing column,
    /// unknown state) or the statement fails.
    #[tracing::instrument(skip(self, details), fields(district_name = ?details.district_name))]
    pub async fn create_district(
        &self,
        details: DistrictDetails,
    ) -> Result<DistrictId, CovidError> {
        let id = self.repo.create(details).await?;
        tracing::info!(district_id = %id, "district created");
        Ok(id)
    }

    /// Look up a district by id. A missing district is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_district(&self, id: DistrictId) -> Result<Option<District>, CovidError> {
        self.repo.get_by_id(id).await
    }

    /// Replace every writable field of a district.
    ///
    /// Succeeds whether or not a district with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, details))]
    pub async fn update_district(
        &self,
        id: DistrictId,
        details: DistrictDetails,
    ) -> Result<(), CovidError> {
        let affected = self.repo.update(id, details).await?;
        if affected == 0 {
            tracing::debug!("no district matched update");
        }
        Ok(())
    }

    /// Delete a district by id.
    ///
    /// Succeeds whether or not a district with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_district(&self, id: DistrictId) -> Result<(), CovidError> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            tracing::debug!("no district matched delete");
        }
        Ok(())
    }

    /// Name of the state a district belongs to.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_district_state_name(
        &self,
        id: DistrictId,
    ) -> Result<Option<StateName>, CovidError> {
        self.repo.get_state_name(id).await
    }
}
