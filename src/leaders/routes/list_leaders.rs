use actix_web::{get, web::Json};

use crate::{auth::IdentityEx, db::DB, error::HResult, leaders::leader::Leader};

/// List Leaders
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = Vec<Leader>)
    ),
    tag = "leaders",
    security(("token" = []))
)]
#[get("/leaders")]
pub async fn list_leaders(db: DB, _identity: IdentityEx) -> HResult<Json<Vec<Leader>>> {
    let leaders = db.list_leaders().await?;

    Ok(Json(leaders))
}
