use actix_web::{get, web::Json};

use crate::{auth::IdentityEx, db::DB, equipment::Equipment, error::HResult};

/// List Equipment
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = Vec<Equipment>)
    ),
    tag = "equipment",
    security(("token" = []))
)]
#[get("/equipment")]
pub async fn list_equipment(db: DB, _identity: IdentityEx) -> HResult<Json<Vec<Equipment>>> {
    let equipment = db.list_equipment().await?;

    Ok(Json(equipment))
}
