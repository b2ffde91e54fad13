use crate::error::DataError;
use crate::model::attendance::Attendance;
use crate::models::AttendanceCreate;
use crate::repo::{abort, ensure_employee_exists};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

/// Records the status for (employee, date), overwriting an existing record
/// for the same pair instead of adding a second one.
pub async fn upsert_attendance(
    pool: &SqlitePool,
    employee_pk: i64,
    mark: &AttendanceCreate,
) -> Result<Attendance, DataError> {
    let mut tx = pool.begin().await?;

    match write_attendance(&mut *tx, employee_pk, mark).await {
        Ok(record) => {
            tx.commit().await?;
            info!(
                employee_pk,
                date = %record.date,
                status = %record.status,
                "Attendance marked"
            );
            Ok(record)
        }
        Err(e) => Err(abort(tx, e).await),
    }
}

async fn write_attendance(
    conn: &mut SqliteConnection,
    employee_pk: i64,
    mark: &AttendanceCreate,
) -> Result<Attendance, DataError> {
    ensure_employee_exists(&mut *conn, employee_pk).await?;

    let existing = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM attendance WHERE employee_id_fk = ? AND date = ?",
    )
    .bind(employee_pk)
    .bind(mark.date)
    .fetch_optional(&mut *conn)
    .await?;

    let id = match existing {
        Some(id) => {
            sqlx::query("UPDATE attendance SET status = ? WHERE id = ?")
                .bind(mark.status.as_str())
                .bind(id)
                .execute(&mut *conn)
                .await?;
            id
        }
        None => sqlx::query(
            "INSERT INTO attendance (employee_id_fk, date, status) VALUES (?, ?, ?)",
        )
        .bind(employee_pk)
        .bind(mark.date)
        .bind(mark.status.as_str())
        .execute(&mut *conn)
        .await?
        .last_insert_rowid(),
    };

    Ok(Attendance {
        id,
        employee_pk,
        date: mark.date,
        status: mark.status,
    })
}

/// All attendance records of one employee, latest date first.
pub async fn list_attendance(
    pool: &SqlitePool,
    employee_pk: i64,
) -> Result<Vec<Attendance>, DataError> {
    let mut conn = pool.acquire().await?;

    ensure_employee_exists(&mut *conn, employee_pk).await?;

    let records = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id_fk, date, status
        FROM attendance
        WHERE employee_id_fk = ?
        ORDER BY date DESC
        "#,
    )
    .bind(employee_pk)
    .fetch_all(&mut *conn)
    .await?;

    Ok(records)
}
