use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// password hash is intentionally absent, this goes straight to clients
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Leader {
    pub id: i32,
    pub expedition_id: Option<i32>,
    #[schema(example = "Roald")]
    pub name: String,
    #[schema(example = "Amundsen")]
    pub surname: String,
    #[schema(example = "amundsen")]
    pub login: String,
}
