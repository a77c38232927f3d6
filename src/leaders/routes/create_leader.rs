use actix_web::{post, web::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::IdentityEx,
    crypto,
    db::DB,
    error::{macros::err, HResult},
};

#[derive(Deserialize, ToSchema)]
pub struct CreateLeaderRequest {
    pub expedition_id: Option<i32>,
    #[schema(example = "Roald")]
    pub name: String,
    #[schema(example = "Amundsen")]
    pub surname: String,
    #[schema(example = "amundsen")]
    pub login: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreateLeaderResponse {
    leader_id: i32,
}

/// Create Leader
///
/// The login doubles as the leader's credential for `/auth/login`; the
/// password is stored hashed.
#[utoipa::path(
    responses(
        (status = BAD_REQUEST, description = "Empty login or password", example = "invalid_credentials"),
        (status = OK, description = "Leader created", body = CreateLeaderResponse)
    ),
    tag = "leaders",
    security(("token" = []))
)]
#[post("/leaders")]
pub async fn create_leader(
    db: DB,
    _identity: IdentityEx,
    req: Json<CreateLeaderRequest>,
) -> HResult<Json<CreateLeaderResponse>> {
    if req.login.trim().is_empty() || req.password.is_empty() {
        return err!(400, "invalid_credentials");
    }

    let leader_id = db
        .create_leader(
            req.expedition_id,
            &req.name,
            &req.surname,
            &req.login,
            &crypto::hash(&req.password),
        )
        .await?;

    Ok(Json(CreateLeaderResponse { leader_id }))
}
