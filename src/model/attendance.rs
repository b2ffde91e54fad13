use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(example = json!({ "id": 1, "date": "2024-01-01", "status": "Present" }))]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    /// Owning employee's internal id; not part of the wire shape
    #[serde(skip)]
    pub employee_pk: i64,

    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,

    pub status: AttendanceStatus,
}

impl<'r> FromRow<'r, SqliteRow> for Attendance {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<AttendanceStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            employee_pk: row.try_get("employee_id_fk")?,
            date: row.try_get("date")?,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_matches_wire_names() {
        assert_eq!(AttendanceStatus::Present.as_str(), "Present");
        assert_eq!(AttendanceStatus::Absent.to_string(), "Absent");
        assert_eq!("Absent".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Absent);
    }

    #[test]
    fn status_is_case_sensitive() {
        assert!("present".parse::<AttendanceStatus>().is_err());
        assert!(serde_json::from_str::<AttendanceStatus>("\"absent\"").is_err());
    }

    #[test]
    fn serializes_without_owner() {
        let record = Attendance {
            id: 7,
            employee_pk: 3,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: AttendanceStatus::Present,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 7, "date": "2024-01-01", "status": "Present" })
        );
    }
}
