use actix_web::{post, web::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
};

#[derive(Deserialize, ToSchema)]
pub struct CreateEquipmentRequest {
    pub expedition_id: i32,
    #[schema(example = "Sledge")]
    pub name: String,
    #[schema(example = 4)]
    pub amount: i32,
}

#[derive(Serialize, ToSchema)]
pub struct CreateEquipmentResponse {
    equipment_id: i32,
}

/// Issue Equipment
#[utoipa::path(
    responses(
        (status = BAD_REQUEST, description = "Unknown expedition", example = "expedition_not_found"),
        (status = BAD_REQUEST, description = "Non-positive amount", example = "invalid_amount"),
        (status = OK, description = "Equipment issued", body = CreateEquipmentResponse)
    ),
    tag = "equipment",
    security(("token" = []))
)]
#[post("/equipment")]
pub async fn create_equipment(
    db: DB,
    _identity: IdentityEx,
    req: Json<CreateEquipmentRequest>,
) -> HResult<Json<CreateEquipmentResponse>> {
    if req.amount <= 0 {
        return err!(400, "invalid_amount");
    }

    if db.get_expedition(req.expedition_id).await?.is_none() {
        return err!(400, "expedition_not_found");
    }

    let equipment_id = db
        .create_equipment(req.expedition_id, &req.name, req.amount)
        .await?;

    Ok(Json(CreateEquipmentResponse { equipment_id }))
}
