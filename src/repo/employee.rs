use crate::error::{DataError, is_unique_violation};
use crate::model::employee::Employee;
use crate::models::NewEmployee;
use crate::repo::{abort, ensure_employee_exists};
use sqlx::SqlitePool;
use tracing::{info, warn};

/// All employees, most recently created first.
pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>, DataError> {
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, employee_id, full_name, email, department
        FROM employees
        ORDER BY id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

/// Inserts a new employee. A taken employee code or email yields
/// `DuplicateEmployee` without saying which.
pub async fn create_employee(pool: &SqlitePool, new: &NewEmployee) -> Result<Employee, DataError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&new.employee_id)
    .bind(&new.full_name)
    .bind(&new.email)
    .bind(&new.department)
    .execute(&mut *tx)
    .await;

    match result {
        Ok(res) => {
            tx.commit().await?;

            let employee = Employee {
                id: res.last_insert_rowid(),
                employee_id: new.employee_id.clone(),
                full_name: new.full_name.clone(),
                email: new.email.clone(),
                department: new.department.clone(),
            };
            info!(id = employee.id, employee_id = %employee.employee_id, "Employee created");
            Ok(employee)
        }
        Err(e) => {
            let err = if is_unique_violation(&e) {
                warn!(employee_id = %new.employee_id, "Duplicate employee_id or email");
                DataError::DuplicateEmployee
            } else {
                e.into()
            };
            Err(abort(tx, err).await)
        }
    }
}

/// Removes an employee together with all of its attendance records.
pub async fn delete_employee(pool: &SqlitePool, id: i64) -> Result<(), DataError> {
    let mut tx = pool.begin().await?;

    if let Err(e) = ensure_employee_exists(&mut *tx, id).await {
        return Err(abort(tx, e).await);
    }

    let removed = delete_employee_rows(&mut *tx, id).await;
    match removed {
        Ok(attendance_rows) => {
            tx.commit().await?;
            info!(id, attendance_rows, "Employee deleted");
            Ok(())
        }
        Err(e) => Err(abort(tx, DataError::from(e)).await),
    }
}

// Dependents first so the delete holds even on a connection without
// foreign-key enforcement.
async fn delete_employee_rows(
    conn: &mut sqlx::SqliteConnection,
    id: i64,
) -> Result<u64, sqlx::Error> {
    let attendance = sqlx::query("DELETE FROM attendance WHERE employee_id_fk = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(attendance.rows_affected())
}
