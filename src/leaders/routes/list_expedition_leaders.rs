use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::HResult,
    expeditions::routes::{ExpeditionIdParams, ExpeditionPath},
    leaders::leader::Leader,
};

/// List Expedition Leaders
#[utoipa::path(
    params(ExpeditionIdParams),
    responses(
        (status = OK, description = "Success", body = Vec<Leader>)
    ),
    tag = "leaders",
    security(("token" = []))
)]
#[get("/expeditions/{expedition_id}/leaders")]
pub async fn list_expedition_leaders(
    db: DB,
    _identity: IdentityEx,
    path: ExpeditionPath,
) -> HResult<Json<Vec<Leader>>> {
    let leaders = db.list_expedition_leaders(path.expedition_id).await?;

    Ok(Json(leaders))
}
