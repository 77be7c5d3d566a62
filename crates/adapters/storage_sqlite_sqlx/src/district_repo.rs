//! `SQLite` implementation of [`DistrictRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use covid19_app::ports::DistrictRepository;
use covid19_domain::district::{District, DistrictDetails};
use covid19_domain::error::CovidError;
use covid19_domain::id::{DistrictId, StateId};
use covid19_domain::state::StateName;

use crate::error::StorageError;
use crate::scalar::{BindScalar, try_get_scalar};

/// Wrapper for converting database rows into domain [`District`].
struct Wrapper(District);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<District> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(District {
            district_id: DistrictId::new(row.try_get("districtId")?),
            district_name: row.try_get("districtName")?,
            state_id: StateId::new(row.try_get("stateId")?),
            cases: try_get_scalar(row, "cases")?,
            cured: try_get_scalar(row, "cured")?,
            active: try_get_scalar(row, "active")?,
            deaths: try_get_scalar(row, "deaths")?,
        }))
    }
}

struct StateNameWrapper(StateName);

impl<'r> FromRow<'r, SqliteRow> for StateNameWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(StateName {
            state_name: row.try_get("stateName")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = r"
    SELECT district_id AS districtId, district_name AS districtName, state_id AS stateId,
           cases, cured, active, deaths
    FROM district
    WHERE district_id = ?
";

const UPDATE: &str = r"
    UPDATE district
    SET district_name = ?, state_id = ?, cases = ?, cured = ?, active = ?, deaths = ?
    WHERE district_id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM district WHERE district_id = ?";

const SELECT_STATE_NAME: &str = r"
    SELECT state.state_name AS stateName
    FROM district
    INNER JOIN state ON district.state_id = state.state_id
    WHERE district.district_id = ?
";

/// `SQLite`-backed district repository.
pub struct SqliteDistrictRepository {
    pool: SqlitePool,
}

impl SqliteDistrictRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DistrictRepository for SqliteDistrictRepository {
    fn create(
        &self,
        details: DistrictDetails,
    ) -> impl Future<Output = Result<DistrictId, CovidError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind_scalar(details.district_name)
                .bind_scalar(details.state_id)
                .bind_scalar(details.cases)
                .bind_scalar(details.cured)
                .bind_scalar(details.active)
                .bind_scalar(details.deaths)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(DistrictId::new(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: DistrictId,
    ) -> impl Future<Output = Result<Option<District>, CovidError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(
        &self,
        id: DistrictId,
        details: DistrictDetails,
    ) -> impl Future<Output = Result<u64, CovidError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind_scalar(details.district_name)
                .bind_scalar(details.state_id)
                .bind_scalar(details.cases)
                .bind_scalar(details.cured)
                .bind_scalar(details.active)
                .bind_scalar(details.deaths)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: DistrictId) -> impl Future<Output = Result<u64, CovidError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn get_state_name(
        &self,
        id: DistrictId,
    ) -> impl Future<Output = Result<Option<StateName>, CovidError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<StateNameWrapper> = sqlx::query_as(SELECT_STATE_NAME)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }
}
