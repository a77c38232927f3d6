use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    expeditions::expedition::Expedition,
    expeditions::routes::{ExpeditionIdParams, ExpeditionPath},
};

/// Get Expedition
#[utoipa::path(
    params(ExpeditionIdParams),
    responses(
        (status = NOT_FOUND, description = "No such expedition"),
        (status = OK, description = "Success", body = Expedition)
    ),
    tag = "expeditions",
    security(("token" = []))
)]
#[get("/expeditions/{expedition_id}")]
pub async fn get_expedition(
    db: DB,
    _identity: IdentityEx,
    path: ExpeditionPath,
) -> HResult<Json<Expedition>> {
    let Some(expedition) = db.get_expedition(path.expedition_id).await? else {
        return err!(404, "expedition_not_found");
    };

    Ok(Json(expedition))
}
