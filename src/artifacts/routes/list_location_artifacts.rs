use actix_web::{get, web::Json};

use crate::{
    artifacts::artifact::Artifact,
    auth::IdentityEx,
    db::DB,
    error::HResult,
    locations::routes::{LocationIdParams, LocationPath},
};

/// List Location Artifacts
#[utoipa::path(
    params(LocationIdParams),
    responses(
        (status = OK, description = "Success", body = Vec<Artifact>)
    ),
    tag = "artifacts",
    security(("token" = []))
)]
#[get("/locations/{location_id}/artifacts")]
pub async fn list_location_artifacts(
    db: DB,
    _identity: IdentityEx,
    path: LocationPath,
) -> HResult<Json<Vec<Artifact>>> {
    let artifacts = db.list_location_artifacts(path.location_id).await?;

    Ok(Json(artifacts))
}
