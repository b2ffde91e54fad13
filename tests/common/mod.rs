#![allow(dead_code)]

use hrms_lite::db::init_db_in_memory;
use hrms_lite::model::employee::Employee;
use hrms_lite::models::{EmployeeCreate, NewEmployee};
use hrms_lite::repo;
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    init_db_in_memory().await.expect("in-memory database")
}

pub fn new_employee(employee_id: &str, email: &str) -> NewEmployee {
    NewEmployee::from(EmployeeCreate {
        employee_id: employee_id.to_string(),
        full_name: format!("Employee {employee_id}"),
        email: email.to_string(),
        department: "Eng".to_string(),
    })
}

pub async fn seed_employee(pool: &SqlitePool, employee_id: &str, email: &str) -> Employee {
    repo::employee::create_employee(pool, &new_employee(employee_id, email))
        .await
        .expect("seed employee")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count rows")
}
