use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Failures raised by the data-access layer.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Employee not found")]
    EmployeeNotFound,

    /// Either the employee code or the email is already taken.
    #[error("Duplicate employee_id or email already exists")]
    DuplicateEmployee,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// One violated input constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    #[schema(example = json!(["body", "email"]))]
    pub loc: Vec<String>,
    #[schema(example = "value is not a valid email address")]
    pub msg: String,
    #[serde(rename = "type")]
    #[schema(example = "value_error.email")]
    pub kind: String,
}

impl FieldViolation {
    fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Request validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Internal Server Error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(violations) => json!({ "detail": violations }),
            other => json!({ "detail": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::EmployeeNotFound => ApiError::NotFound(err.to_string()),
            DataError::DuplicateEmployee => ApiError::Conflict(err.to_string()),
            DataError::Database(e) => {
                error!(error = %e, "Database operation failed");
                ApiError::Internal
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid {field}"));
                    FieldViolation::new(&["body", field.as_str()], msg, format!("value_error.{}", e.code))
                })
            })
            .collect();

        // HashMap order is not stable
        violations.sort_by(|a, b| a.loc.cmp(&b.loc).then_with(|| a.kind.cmp(&b.kind)));
        ApiError::Validation(violations)
    }
}

/// Turns malformed bodies into 422 responses; oversized bodies stay 413.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let kind = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            return ApiError::PayloadTooLarge(err.to_string()).into();
        }
        JsonPayloadError::Deserialize(_) => "value_error.json",
        JsonPayloadError::ContentType => "type_error.content_type",
        _ => "value_error.body",
    };
    ApiError::Validation(vec![FieldViolation::new(&["body"], err.to_string(), kind)]).into()
}

/// Turns unparseable path segments (e.g. a non-integer id) into 422 responses.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(vec![FieldViolation::new(
        &["path"],
        err.to_string(),
        "type_error.integer",
    )])
    .into()
}

/// SQLite reports UNIQUE and PRIMARY KEY collisions as unique violations.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
