use crate::{error::ApiError, models::AttendanceCreate, repo};
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use validator::Validate;

/// Mark attendance for a day; a second mark for the same day replaces the status
#[utoipa::path(
    post,
    path = "/employees/{id}/attendance",
    params(
        ("id" = i64, Path, description = "Internal employee id")
    ),
    request_body = AttendanceCreate,
    responses(
        (status = 201, description = "Attendance recorded", body = crate::model::attendance::Attendance),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 422, description = "Invalid date or status", body = Object, example = json!({
            "detail": [{ "loc": ["body", "date"], "msg": "date year must be between 1 and 9999", "type": "value_error.date_range" }]
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<AttendanceCreate>,
) -> Result<HttpResponse, ApiError> {
    let employee_pk = path.into_inner();
    payload.validate()?;

    let record = repo::attendance::upsert_attendance(pool.get_ref(), employee_pk, &payload).await?;
    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    get,
    path = "/employees/{id}/attendance",
    params(
        ("id" = i64, Path, description = "Internal employee id")
    ),
    responses(
        (status = 200, description = "Attendance records, latest date first", body = [crate::model::attendance::Attendance]),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let records = repo::attendance::list_attendance(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}
