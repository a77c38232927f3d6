use actix_web::{get, web::Json};

use crate::{
    auth::{Identity, IdentityEx},
    error::HResult,
};

/// Who Am I
///
/// Lets a client see which principal their token resolves to.
#[utoipa::path(
    responses(
        (status = UNAUTHORIZED, description = "No live session for this token"),
        (status = OK, description = "Success", body = Identity)
    ),
    tag = "auth",
    security(("token" = []))
)]
#[get("/auth/whoami")]
pub async fn whoami(identity: IdentityEx) -> HResult<Json<Identity>> {
    Ok(Json(identity.as_ref().clone()))
}
