use actix_web::{get, web::Json};

use crate::{auth::IdentityEx, db::DB, error::HResult, locations::location::Location};

/// List Locations
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = Vec<Location>)
    ),
    tag = "locations",
    security(("token" = []))
)]
#[get("/locations")]
pub async fn list_locations(db: DB, _identity: IdentityEx) -> HResult<Json<Vec<Location>>> {
    let locations = db.list_locations().await?;

    Ok(Json(locations))
}
