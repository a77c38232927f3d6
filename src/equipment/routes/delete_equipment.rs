use actix_web::{delete, HttpResponse};

use crate::{
    auth::IdentityEx,
    db::DB,
    equipment::routes::{EquipmentIdParams, EquipmentPath},
    error::{macros::err, HResult},
};

/// Delete Equipment
#[utoipa::path(
    params(EquipmentIdParams),
    responses(
        (status = NOT_FOUND, description = "No such equipment"),
        (status = OK, description = "Equipment deleted", example = "success")
    ),
    tag = "equipment",
    security(("token" = []))
)]
#[delete("/equipment/{equipment_id}")]
pub async fn delete_equipment(
    db: DB,
    _identity: IdentityEx,
    path: EquipmentPath,
) -> HResult<HttpResponse> {
    let rows_affected = db.delete_equipment(path.equipment_id).await?;

    if rows_affected == 0 {
        return err!(404, "equipment_not_found");
    }

    Ok(HttpResponse::Ok().body("success"))
}
