use actix_web::{post, web::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
};

#[derive(Deserialize, ToSchema)]
pub struct CreateCuratorRequest {
    pub expedition_id: Option<i32>,
    #[schema(example = "Hanna")]
    pub name: String,
    #[schema(example = "Resvoll-Holmsen")]
    pub surname: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreateCuratorResponse {
    curator_id: i32,
}

/// Create Curator
#[utoipa::path(
    responses(
        (status = BAD_REQUEST, description = "Empty name", example = "invalid_name"),
        (status = OK, description = "Curator created", body = CreateCuratorResponse)
    ),
    tag = "curators",
    security(("token" = []))
)]
#[post("/curators")]
pub async fn create_curator(
    db: DB,
    _identity: IdentityEx,
    req: Json<CreateCuratorRequest>,
) -> HResult<Json<CreateCuratorResponse>> {
    if req.name.trim().is_empty() || req.surname.trim().is_empty() {
        return err!(400, "invalid_name");
    }

    let curator_id = db
        .create_curator(req.expedition_id, &req.name, &req.surname)
        .await?;

    Ok(Json(CreateCuratorResponse { curator_id }))
}
