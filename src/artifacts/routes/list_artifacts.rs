use actix_web::{get, web::Json};

use crate::{artifacts::artifact::Artifact, auth::IdentityEx, db::DB, error::HResult};

/// List Artifacts
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = Vec<Artifact>)
    ),
    tag = "artifacts",
    security(("token" = []))
)]
#[get("/artifacts")]
pub async fn list_artifacts(db: DB, _identity: IdentityEx) -> HResult<Json<Vec<Artifact>>> {
    let artifacts = db.list_artifacts().await?;

    Ok(Json(artifacts))
}
