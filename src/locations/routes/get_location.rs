use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    locations::location::Location,
    locations::routes::{LocationIdParams, LocationPath},
};

/// Get Location
#[utoipa::path(
    params(LocationIdParams),
    responses(
        (status = NOT_FOUND, description = "No such location"),
        (status = OK, description = "Success", body = Location)
    ),
    tag = "locations",
    security(("token" = []))
)]
#[get("/locations/{location_id}")]
pub async fn get_location(db: DB, _identity: IdentityEx, path: LocationPath) -> HResult<Json<Location>> {
    let Some(location) = db.get_location(path.location_id).await? else {
        return err!(404, "location_not_found");
    };

    Ok(Json(location))
}
