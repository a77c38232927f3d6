use actix_web::{delete, HttpResponse};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    expeditions::routes::{ExpeditionIdParams, ExpeditionPath},
};

/// Delete Expedition
#[utoipa::path(
    params(ExpeditionIdParams),
    responses(
        (status = NOT_FOUND, description = "No such expedition"),
        (status = OK, description = "Expedition deleted", example = "success")
    ),
    tag = "expeditions",
    security(("token" = []))
)]
#[delete("/expeditions/{expedition_id}")]
pub async fn delete_expedition(
    db: DB,
    _identity: IdentityEx,
    path: ExpeditionPath,
) -> HResult<HttpResponse> {
    let rows_affected = db.delete_expedition(path.expedition_id).await?;

    if rows_affected == 0 {
        return err!(404, "expedition_not_found");
    }

    Ok(HttpResponse::Ok().body("success"))
}
