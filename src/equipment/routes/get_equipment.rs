use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    db::DB,
    equipment::routes::{EquipmentIdParams, EquipmentPath},
    equipment::Equipment,
    error::{macros::err, HResult},
};

/// Get Equipment
#[utoipa::path(
    params(EquipmentIdParams),
    responses(
        (status = NOT_FOUND, description = "No such equipment"),
        (status = OK, description = "Success", body = Equipment)
    ),
    tag = "equipment",
    security(("token" = []))
)]
#[get("/equipment/{equipment_id}")]
pub async fn get_equipment(db: DB, _identity: IdentityEx, path: EquipmentPath) -> HResult<Json<Equipment>> {
    let Some(equipment) = db.get_equipment(path.equipment_id).await? else {
        return err!(404, "equipment_not_found");
    };

    Ok(Json(equipment))
}
