use crate::{
    error::ApiError,
    models::{EmployeeCreate, NewEmployee},
    repo,
};
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use validator::Validate;

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, most recently created first", body = [crate::model::employee::Employee]),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "detail": "Internal Server Error"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = repo::employee::list_employees(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeCreate,
    responses(
        (status = 201, description = "Employee created", body = crate::model::employee::Employee),
        (status = 409, description = "Employee code or email already exists", body = Object, example = json!({
            "detail": "Duplicate employee_id or email already exists"
        })),
        (status = 422, description = "Invalid field values", body = Object, example = json!({
            "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error.email" }]
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EmployeeCreate>,
) -> Result<HttpResponse, ApiError> {
    let new = NewEmployee::from(payload.into_inner());
    new.validate()?;

    let employee = repo::employee::create_employee(pool.get_ref(), &new).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ("id" = i64, Path, description = "Internal employee id")
    ),
    responses(
        (status = 204, description = "Employee and its attendance records deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    repo::employee::delete_employee(pool.get_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}
