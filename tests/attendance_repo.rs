mod common;

use chrono::NaiveDate;
use common::{count_rows, seed_employee, test_pool};
use hrms_lite::error::DataError;
use hrms_lite::model::attendance::AttendanceStatus;
use hrms_lite::models::AttendanceCreate;
use hrms_lite::repo;

fn mark(date: &str, status: AttendanceStatus) -> AttendanceCreate {
    AttendanceCreate {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        status,
    }
}

#[actix_web::test]
async fn second_mark_for_same_day_overwrites() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool, "E1", "ann@x.com").await;

    let first = repo::attendance::upsert_attendance(
        &pool,
        employee.id,
        &mark("2024-01-01", AttendanceStatus::Present),
    )
    .await
    .unwrap();
    let second = repo::attendance::upsert_attendance(
        &pool,
        employee.id,
        &mark("2024-01-01", AttendanceStatus::Absent),
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.status, AttendanceStatus::Absent);
    assert_eq!(count_rows(&pool, "attendance").await, 1);

    let records = repo::attendance::list_attendance(&pool, employee.id)
        .await
        .unwrap();
    assert_eq!(records, vec![second]);
}

#[actix_web::test]
async fn repeating_the_same_mark_converges() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool, "E1", "ann@x.com").await;
    let present = mark("2024-03-05", AttendanceStatus::Present);

    let a = repo::attendance::upsert_attendance(&pool, employee.id, &present)
        .await
        .unwrap();
    let b = repo::attendance::upsert_attendance(&pool, employee.id, &present)
        .await
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(count_rows(&pool, "attendance").await, 1);
}

#[actix_web::test]
async fn same_day_for_different_employees_is_separate() {
    let pool = test_pool().await;
    let ann = seed_employee(&pool, "E1", "ann@x.com").await;
    let bob = seed_employee(&pool, "E2", "bob@x.com").await;

    repo::attendance::upsert_attendance(&pool, ann.id, &mark("2024-01-01", AttendanceStatus::Present))
        .await
        .unwrap();
    repo::attendance::upsert_attendance(&pool, bob.id, &mark("2024-01-01", AttendanceStatus::Absent))
        .await
        .unwrap();

    assert_eq!(count_rows(&pool, "attendance").await, 2);
    let bob_records = repo::attendance::list_attendance(&pool, bob.id).await.unwrap();
    assert_eq!(bob_records.len(), 1);
    assert_eq!(bob_records[0].status, AttendanceStatus::Absent);
    assert_eq!(bob_records[0].employee_pk, bob.id);
}

#[actix_web::test]
async fn list_is_ordered_by_date_descending() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool, "E1", "ann@x.com").await;

    for date in ["2024-01-15", "2023-12-31", "2024-02-01", "2024-01-02"] {
        repo::attendance::upsert_attendance(&pool, employee.id, &mark(date, AttendanceStatus::Present))
            .await
            .unwrap();
    }

    let dates: Vec<String> = repo::attendance::list_attendance(&pool, employee.id)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-02-01", "2024-01-15", "2024-01-02", "2023-12-31"]);
}

#[actix_web::test]
async fn unknown_employee_is_not_found() {
    let pool = test_pool().await;

    let marked = repo::attendance::upsert_attendance(
        &pool,
        42,
        &mark("2024-01-01", AttendanceStatus::Present),
    )
    .await;
    assert!(matches!(marked, Err(DataError::EmployeeNotFound)));
    assert_eq!(count_rows(&pool, "attendance").await, 0);

    let listed = repo::attendance::list_attendance(&pool, 42).await;
    assert!(matches!(listed, Err(DataError::EmployeeNotFound)));
}

#[actix_web::test]
async fn employee_without_records_lists_empty() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool, "E1", "ann@x.com").await;

    let records = repo::attendance::list_attendance(&pool, employee.id)
        .await
        .unwrap();
    assert!(records.is_empty());
}
