use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Museum-side supervisor of an expedition. Curators do not log in, so there
/// is no credential on this row.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Curator {
    pub id: i32,
    pub expedition_id: Option<i32>,
    #[schema(example = "Hanna")]
    pub name: String,
    #[schema(example = "Resvoll-Holmsen")]
    pub surname: String,
}
