use actix_web::{
    post,
    web::{Data, Json},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::{Identity, Role, SessionRegistry},
    crypto,
    db::DB,
    error::{macros::err, HResult},
};

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "leader")]
    role: String,
    #[schema(example = "amundsen")]
    login: String,
    password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "3f1c8dd2-7a40-4f0f-9c5e-2a90cbb1a8b1")]
    token: String,
}

/// Log In
///
/// Checks the supplied credential against the given role's account table and
/// starts a session. The returned token must accompany every protected call
/// as a `token` query parameter.
#[utoipa::path(
    responses(
        (status = BAD_REQUEST, description = "Unrecognized role tag", example = "unknown_role"),
        (status = UNAUTHORIZED, description = "Bad login or password", example = "access_denied"),
        (status = OK, description = "Session started", body = LoginResponse)
    ),
    tag = "auth"
)]
#[post("/auth/login")]
pub async fn login(
    db: DB,
    sessions: Data<SessionRegistry>,
    req: Json<LoginRequest>,
) -> HResult<Json<LoginResponse>> {
    let role: Role = req.role.parse()?;

    let Some(account) = db.get_account(role, &req.login).await? else {
        // same answer as a wrong password, the login probed stays unconfirmed
        return err!(401, "access_denied");
    };

    if !crypto::verify(&req.password, &account.password) {
        return err!(401, "access_denied");
    }

    let token = sessions.start_session(Identity {
        user_id: account.id,
        role,
    });

    Ok(Json(LoginResponse { token }))
}
