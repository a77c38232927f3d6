use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_artifact;
pub mod get_artifact;
pub mod list_artifacts;
pub mod list_location_artifacts;

#[derive(Deserialize, IntoParams)]
pub struct ArtifactIdParams {
    pub artifact_id: i32,
}

pub type ArtifactPath = Path<ArtifactIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(get_artifact::get_artifact)
        .service(list_location_artifacts::list_location_artifacts)
        .service(list_artifacts::list_artifacts)
        .service(create_artifact::create_artifact);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "artifacts")
    ),
    paths(
        get_artifact::get_artifact,
        list_location_artifacts::list_location_artifacts,
        list_artifacts::list_artifacts,
        create_artifact::create_artifact
    ),
    components(schemas(
        crate::artifacts::artifact::Artifact,
        create_artifact::CreateArtifactRequest,
        create_artifact::CreateArtifactResponse,
    ))
)]
pub struct ArtifactsApiDocs;
