//! `SQLite` implementation of [`StateRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use covid19_app::ports::StateRepository;
use covid19_domain::error::CovidError;
use covid19_domain::id::StateId;
use covid19_domain::state::{State, StateStats};

use crate::error::StorageError;
use crate::scalar::try_get_scalar;

/// Wrapper for converting database rows into domain [`State`].
struct Wrapper(State);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<State> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(State {
            state_id: StateId::new(row.try_get("stateId")?),
            state_name: row.try_get("stateName")?,
            population: row.try_get("population")?,
        }))
    }
}

struct StatsWrapper(StateStats);

impl<'r> FromRow<'r, SqliteRow> for StatsWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(StateStats {
            total_cases: try_get_scalar(row, "totalCases")?,
            total_cured: try_get_scalar(row, "totalCured")?,
            total_active: try_get_scalar(row, "totalActive")?,
            total_deaths: try_get_scalar(row, "totalDeaths")?,
        }))
    }
}

const SELECT_ALL: &str = r"
    SELECT state_id AS stateId, state_name AS stateName, population
    FROM state
";

const SELECT_BY_ID: &str = r"
    SELECT state_id AS stateId, state_name AS stateName, population
    FROM state
    WHERE state_id = ?
";

const SELECT_STATS: &str = r"
    SELECT SUM(cases) AS totalCases, SUM(cured) AS totalCured,
           SUM(active) AS totalActive, SUM(deaths) AS totalDeaths
    FROM district
    WHERE state_id = ?
";

/// `SQLite`-backed state repository.
pub struct SqliteStateRepository {
    pool: SqlitePool,
}

impl SqliteStateRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StateRepository for SqliteStateRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, CovidError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, CovidError>> + Send {
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

    fn get_stats(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<StateStats, CovidError>> + Send {
        let pool = self.pool.clone();
        async move {
            // an aggregate without GROUP BY always yields exactly one row
            let row: StatsWrapper = sqlx::query_as(SELECT_STATS)
                .bind(id.as_i64())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }
}
