use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    db::DB,
    equipment::Equipment,
    error::HResult,
    expeditions::routes::{ExpeditionIdParams, ExpeditionPath},
};

/// List Expedition Equipment
#[utoipa::path(
    params(ExpeditionIdParams),
    responses(
        (status = OK, description = "Success", body = Vec<Equipment>)
    ),
    tag = "equipment",
    security(("token" = []))
)]
#[get("/expeditions/{expedition_id}/equipment")]
pub async fn list_expedition_equipment(
    db: DB,
    _identity: IdentityEx,
    path: ExpeditionPath,
) -> HResult<Json<Vec<Equipment>>> {
    let equipment = db.list_expedition_equipment(path.expedition_id).await?;

    Ok(Json(equipment))
}
