use actix_web::{get, web::Data, HttpResponse};
use serde_json::json;

use crate::{
    auth::{SessionEx, SessionRegistry},
    error::{macros::err, HResult},
};

/// Check Session
///
/// Cheap liveness probe for a session token, the same check the auth gate
/// applies before every protected handler.
#[utoipa::path(
    responses(
        (status = UNAUTHORIZED, description = "No live session for this token"),
        (status = OK, description = "Session is live")
    ),
    tag = "auth",
    security(("token" = []))
)]
#[get("/auth/check")]
pub async fn check(sessions: Data<SessionRegistry>, session: SessionEx) -> HResult<HttpResponse> {
    if !sessions.has(&session) {
        err!(401)?;
    }

    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
