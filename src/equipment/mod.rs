pub mod routes;

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A line of gear issued to an expedition.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub expedition_id: i32,
    #[schema(example = "Sledge")]
    pub name: String,
    #[schema(example = 4)]
    pub amount: i32,
}
