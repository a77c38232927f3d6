use actix_web::{post, web::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
};

#[derive(Deserialize, ToSchema)]
pub struct CreateArtifactRequest {
    pub location_id: i32,
    #[schema(example = "Bronze fibula")]
    pub name: String,
    #[schema(example = 2300)]
    pub age_years: i32,
}

#[derive(Serialize, ToSchema)]
pub struct CreateArtifactResponse {
    artifact_id: i32,
}

/// Catalogue Artifact
///
/// Records a new find against a location. There is no delete counterpart;
/// the catalogue only grows.
#[utoipa::path(
    responses(
        (status = BAD_REQUEST, description = "Unknown location", example = "location_not_found"),
        (status = BAD_REQUEST, description = "Negative age", example = "invalid_age"),
        (status = OK, description = "Artifact catalogued", body = CreateArtifactResponse)
    ),
    tag = "artifacts",
    security(("token" = []))
)]
#[post("/artifacts")]
pub async fn create_artifact(
    db: DB,
    _identity: IdentityEx,
    req: Json<CreateArtifactRequest>,
) -> HResult<Json<CreateArtifactResponse>> {
    if req.age_years < 0 {
        return err!(400, "invalid_age");
    }

    if db.get_location(req.location_id).await?.is_none() {
        return err!(400, "location_not_found");
    }

    let artifact_id = db
        .create_artifact(req.location_id, &req.name, req.age_years)
        .await?;

    Ok(Json(CreateArtifactResponse { artifact_id }))
}
