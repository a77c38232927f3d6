use actix_web::{delete, HttpResponse};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    leaders::routes::{LeaderIdParams, LeaderPath},
};

/// Delete Leader
#[utoipa::path(
    params(LeaderIdParams),
    responses(
        (status = NOT_FOUND, description = "No such leader"),
        (status = OK, description = "Leader deleted", example = "success")
    ),
    tag = "leaders",
    security(("token" = []))
)]
#[delete("/leaders/{leader_id}")]
pub async fn delete_leader(db: DB, _identity: IdentityEx, path: LeaderPath) -> HResult<HttpResponse> {
    let rows_affected = db.delete_leader(path.leader_id).await?;

    if rows_affected == 0 {
        return err!(404, "leader_not_found");
    }

    Ok(HttpResponse::Ok().body("success"))
}
