use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    leaders::leader::Leader,
    leaders::routes::{LeaderIdParams, LeaderPath},
};

/// Get Leader
#[utoipa::path(
    params(LeaderIdParams),
    responses(
        (status = NOT_FOUND, description = "No such leader"),
        (status = OK, description = "Success", body = Leader)
    ),
    tag = "leaders",
    security(("token" = []))
)]
#[get("/leaders/{leader_id}")]
pub async fn get_leader(db: DB, _identity: IdentityEx, path: LeaderPath) -> HResult<Json<Leader>> {
    let Some(leader) = db.get_leader(path.leader_id).await? else {
        return err!(404, "leader_not_found");
    };

    Ok(Json(leader))
}
