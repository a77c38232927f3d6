use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A find recovered at a location. Artifacts are archive records: they can be
/// catalogued but never deleted through the API.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Artifact {
    pub id: i32,
    pub location_id: i32,
    #[schema(example = "Bronze fibula")]
    pub name: String,
    #[schema(example = 2300)]
    pub age_years: i32,
}
