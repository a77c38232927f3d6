use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::HResult,
    expeditions::routes::{ExpeditionIdParams, ExpeditionPath},
    members::member::Member,
};

/// List Expedition Members
#[utoipa::path(
    params(ExpeditionIdParams),
    responses(
        (status = OK, description = "Success", body = Vec<Member>)
    ),
    tag = "members",
    security(("token" = []))
)]
#[get("/expeditions/{expedition_id}/members")]
pub async fn list_expedition_members(
    db: DB,
    _identity: IdentityEx,
    path: ExpeditionPath,
) -> HResult<Json<Vec<Member>>> {
    let members = db.list_expedition_members(path.expedition_id).await?;

    Ok(Json(members))
}
