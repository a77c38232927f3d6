use actix_web::{post, web::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
};

#[derive(Deserialize, ToSchema)]
pub struct CreateLocationRequest {
    #[schema(example = "Allan Hills")]
    name: String,
    #[schema(example = "Antarctica")]
    country: String,
    #[schema(example = "glacier")]
    terrain: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreateLocationResponse {
    location_id: i32,
}

/// Create Location
#[utoipa::path(
    responses(
        (status = BAD_REQUEST, description = "Empty location name", example = "invalid_name"),
        (status = OK, description = "Location created", body = CreateLocationResponse)
    ),
    tag = "locations",
    security(("token" = []))
)]
#[post("/locations")]
pub async fn create_location(
    db: DB,
    _identity: IdentityEx,
    req: Json<CreateLocationRequest>,
) -> HResult<Json<CreateLocationResponse>> {
    if req.name.trim().is_empty() {
        return err!(400, "invalid_name");
    }

    let location_id = db
        .create_location(&req.name, &req.country, &req.terrain)
        .await?;

    Ok(Json(CreateLocationResponse { location_id }))
}
