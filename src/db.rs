use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id VARCHAR(50)  NOT NULL UNIQUE,
        full_name   VARCHAR(200) NOT NULL,
        email       VARCHAR(200) NOT NULL UNIQUE,
        department  VARCHAR(100) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id_fk INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
        date           DATE    NOT NULL,
        status         TEXT    NOT NULL CHECK (status IN ('Present', 'Absent')),
        CONSTRAINT uq_employee_date UNIQUE (employee_id_fk, date)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_attendance_employee_id_fk ON attendance (employee_id_fk)",
    "CREATE INDEX IF NOT EXISTS ix_attendance_date ON attendance (date)",
];

pub async fn init_db(db_path: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    info!(db_path, "Database ready");
    Ok(pool)
}

/// Single-connection pool over a private in-memory database.
///
/// The connection never idles out, so the database lives as long as the pool.
pub async fn init_db_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    Ok(pool)
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
