use actix_web::{get, web::Json};

use crate::{auth::IdentityEx, db::DB, error::HResult, expeditions::expedition::Expedition};

/// List Expeditions
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = Vec<Expedition>)
    ),
    tag = "expeditions",
    security(("token" = []))
)]
#[get("/expeditions")]
pub async fn list_expeditions(db: DB, _identity: IdentityEx) -> HResult<Json<Vec<Expedition>>> {
    let expeditions = db.list_expeditions().await?;

    Ok(Json(expeditions))
}
