use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "E1",
        "full_name": "Ann Lee",
        "email": "ann@x.com",
        "department": "Eng"
    })
)]
pub struct Employee {
    /// Internal identifier, assigned on insert
    #[schema(example = 1)]
    pub id: i64,

    /// External employee code, unique
    #[schema(example = "E1")]
    pub employee_id: String,

    #[schema(example = "Ann Lee")]
    pub full_name: String,

    /// Stored lower-cased, unique
    #[schema(example = "ann@x.com", format = "email")]
    pub email: String,

    #[schema(example = "Eng")]
    pub department: String,
}
