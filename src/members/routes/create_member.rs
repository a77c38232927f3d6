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
pub struct CreateMemberRequest {
    pub expedition_id: Option<i32>,
    #[schema(example = "Olav")]
    pub name: String,
    #[schema(example = "Bjaaland")]
    pub surname: String,
    #[schema(example = "bjaaland")]
    pub login: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreateMemberResponse {
    member_id: i32,
}

/// Create Member
///
/// The login doubles as the member's credential for `/auth/login`; the
/// password is stored hashed.
#[utoipa::path(
    responses(
        (status = BAD_REQUEST, description = "Empty login or password", example = "invalid_credentials"),
        (status = OK, description = "Member created", body = CreateMemberResponse)
    ),
    tag = "members",
    security(("token" = []))
)]
#[post("/members")]
pub async fn create_member(
    db: DB,
    _identity: IdentityEx,
    req: Json<CreateMemberRequest>,
) -> HResult<Json<CreateMemberResponse>> {
    if req.login.trim().is_empty() || req.password.is_empty() {
        return err!(400, "invalid_credentials");
    }

    let member_id = db
        .create_member(
            req.expedition_id,
            &req.name,
            &req.surname,
            &req.login,
            &crypto::hash(&req.password),
        )
        .await?;

    Ok(Json(CreateMemberResponse { member_id }))
}
