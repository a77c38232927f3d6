use actix_web::{delete, HttpResponse};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    locations::routes::{LocationIdParams, LocationPath},
};

/// Delete Location
///
/// Expeditions and artifacts tied to the location go with it.
#[utoipa::path(
    params(LocationIdParams),
    responses(
        (status = NOT_FOUND, description = "No such location"),
        (status = OK, description = "Location deleted", example = "success")
    ),
    tag = "locations",
    security(("token" = []))
)]
#[delete("/locations/{location_id}")]
pub async fn delete_location(db: DB, _identity: IdentityEx, path: LocationPath) -> HResult<HttpResponse> {
    let rows_affected = db.delete_location(path.location_id).await?;

    if rows_affected == 0 {
        return err!(404, "location_not_found");
    }

    Ok(HttpResponse::Ok().body("success"))
}
