//! Data access over the SQLite pool.
//!
//! Every write runs inside its own transaction and is rolled back before an
//! error is returned, so a failed call never leaves partial state behind.

pub mod attendance;
pub mod employee;

use crate::error::DataError;
use sqlx::{Sqlite, SqliteConnection, Transaction};
use tracing::warn;

/// Rolls back `tx` and hands back `err`. A failing rollback is logged and
/// never replaces the error that caused it.
pub(crate) async fn abort<E>(tx: Transaction<'_, Sqlite>, err: E) -> E {
    settle_rollback(tx.rollback().await, err)
}

fn settle_rollback<E>(rollback: Result<(), sqlx::Error>, err: E) -> E {
    if let Err(e) = rollback {
        warn!(error = %e, "Transaction rollback failed");
    }
    err
}

/// Resolves an internal employee id, failing with `EmployeeNotFound`.
pub(crate) async fn ensure_employee_exists(
    conn: &mut SqliteConnection,
    employee_pk: i64,
) -> Result<(), DataError> {
    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE id = ?")
        .bind(employee_pk)
        .fetch_optional(conn)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(DataError::EmployeeNotFound),
    }
}
