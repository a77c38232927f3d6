use actix_web::{get, web::Json};

use crate::{
    artifacts::artifact::Artifact,
    artifacts::routes::{ArtifactIdParams, ArtifactPath},
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
};

/// Get Artifact
#[utoipa::path(
    params(ArtifactIdParams),
    responses(
        (status = NOT_FOUND, description = "No such artifact"),
        (status = OK, description = "Success", body = Artifact)
    ),
    tag = "artifacts",
    security(("token" = []))
)]
#[get("/artifacts/{artifact_id}")]
pub async fn get_artifact(db: DB, _identity: IdentityEx, path: ArtifactPath) -> HResult<Json<Artifact>> {
    let Some(artifact) = db.get_artifact(path.artifact_id).await? else {
        return err!(404, "artifact_not_found");
    };

    Ok(Json(artifact))
}
