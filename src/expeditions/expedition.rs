use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A dated trip to a location. Leaders, members, curators and equipment all
/// hang off an expedition.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Expedition {
    pub id: i32,
    pub location_id: i32,
    #[schema(example = "2024-06-01")]
    pub start_date: NaiveDate,
    #[schema(example = "2024-08-15")]
    pub end_date: NaiveDate,
}

/// Start/end pair as it arrives on the wire. Dates come in as `YYYY-MM-DD`
/// strings and an inverted range is rejected before any query runs.
#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct DateRange {
    #[schema(example = "2024-06-01")]
    pub start_date: String,
    #[schema(example = "2024-08-15")]
    pub end_date: String,
}

impl DateRange {
    pub fn parse(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").ok()?;

        if end < start {
            return None;
        }

        Some((start, end))
    }
}
