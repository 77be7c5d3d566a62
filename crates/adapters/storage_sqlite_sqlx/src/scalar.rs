//! Binding and reading [`Scalar`] cells.
//!
//! Values are handed to `SQLite` with their JSON type intact so the column's
//! affinity applies, and read back by the storage class of the stored value.

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite, TypeInfo, ValueRef};

use covid19_domain::scalar::Scalar;

/// Bind a [`Scalar`] as the next positional parameter.
pub(crate) trait BindScalar {
    fn bind_scalar(self, value: Scalar) -> Self;
}

impl<'q> BindScalar for Query<'q, Sqlite, SqliteArguments<'q>> {
    fn bind_scalar(self, value: Scalar) -> Self {
        match value {
            Scalar::Null => self.bind(None::<i64>),
            Scalar::Bool(value) => self.bind(value),
            Scalar::Integer(value) => self.bind(value),
            Scalar::Real(value) => self.bind(value),
            Scalar::Text(value) => self.bind(value),
        }
    }
}

/// Read a column as whatever storage class the cell holds.
pub(crate) fn try_get_scalar(row: &SqliteRow, column: &str) -> Result<Scalar, sqlx::Error> {
    let value = row.try_get_raw(column)?;
    if value.is_null() {
        return Ok(Scalar::Null);
    }
    match value.type_info().name() {
        "INTEGER" => row.try_get(column).map(Scalar::Integer),
        "REAL" => row.try_get(column).map(Scalar::Real),
        _ => row.try_get(column).map(Scalar::Text),
    }
}
