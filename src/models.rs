use crate::model::attendance::AttendanceStatus;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EmployeeCreate {
    #[schema(example = "E1", max_length = 50)]
    pub employee_id: String,
    #[schema(example = "Ann Lee", max_length = 200)]
    pub full_name: String,
    #[schema(example = "Ann@X.com", format = "email")]
    pub email: String,
    #[schema(example = "Eng", max_length = 100)]
    pub department: String,
}

/// An employee ready for insertion: surrounding whitespace trimmed from every
/// field and the email lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 50, message = "employee_id must be between 1 and 50 characters"))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 200, message = "full_name must be between 1 and 200 characters"))]
    pub full_name: String,
    #[validate(
        email(message = "value is not a valid email address"),
        length(max = 200, message = "email must be at most 200 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "department must be between 1 and 100 characters"))]
    pub department: String,
}

impl From<EmployeeCreate> for NewEmployee {
    fn from(payload: EmployeeCreate) -> Self {
        Self {
            employee_id: payload.employee_id.trim().to_string(),
            full_name: payload.full_name.trim().to_string(),
            email: payload.email.trim().to_lowercase(),
            department: payload.department.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AttendanceCreate {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    #[validate(custom(function = validate_calendar_year))]
    pub date: NaiveDate,
    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

// Dates are stored as ISO text; only four-digit years sort correctly.
fn validate_calendar_year(date: &NaiveDate) -> Result<(), ValidationError> {
    if (1..=9999).contains(&date.year()) {
        Ok(())
    } else {
        Err(ValidationError::new("date_range")
            .with_message("date year must be between 1 and 9999".into()))
    }
}
