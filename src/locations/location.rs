use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A dig site or base of operations that expeditions are sent to and
/// artifacts are recovered from.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Location {
    pub id: i32,
    #[schema(example = "Allan Hills")]
    pub name: String,
    #[schema(example = "Antarctica")]
    pub country: String,
    #[schema(example = "glacier")]
    pub terrain: String,
}
