use crate::error::FieldViolation;
use crate::model::attendance::{Attendance, AttendanceStatus};
use crate::model::employee::Employee;
use crate::models::{AttendanceCreate, EmployeeCreate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small HR records service: an employee directory plus daily attendance.

- **Employees**: list, create and delete. Employee code and email are unique;
  deleting an employee removes its attendance records.
- **Attendance**: one record per employee and date, status `Present` or
  `Absent`. Marking the same day again replaces the status.

Errors are returned as `{"detail": ...}`. Validation failures (422) carry a
list of `{loc, msg, type}` entries.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance
    ),
    components(
        schemas(
            Employee,
            EmployeeCreate,
            Attendance,
            AttendanceCreate,
            AttendanceStatus,
            FieldViolation
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance tracking APIs"),
    )
)]
pub struct ApiDoc;
