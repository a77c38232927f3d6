use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    curators::curator::Curator,
    db::DB,
    error::HResult,
    expeditions::routes::{ExpeditionIdParams, ExpeditionPath},
};

/// List Expedition Curators
#[utoipa::path(
    params(ExpeditionIdParams),
    responses(
        (status = OK, description = "Success", body = Vec<Curator>)
    ),
    tag = "curators",
    security(("token" = []))
)]
#[get("/expeditions/{expedition_id}/curators")]
pub async fn list_expedition_curators(
    db: DB,
    _identity: IdentityEx,
    path: ExpeditionPath,
) -> HResult<Json<Vec<Curator>>> {
    let curators = db.list_expedition_curators(path.expedition_id).await?;

    Ok(Json(curators))
}
