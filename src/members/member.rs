use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// password hash is intentionally absent, this goes straight to clients
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i32,
    pub expedition_id: Option<i32>,
    #[schema(example = "Olav")]
    pub name: String,
    #[schema(example = "Bjaaland")]
    pub surname: String,
    #[schema(example = "bjaaland")]
    pub login: String,
}
