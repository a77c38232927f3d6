use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    members::member::Member,
    members::routes::{MemberIdParams, MemberPath},
};

/// Get Member
#[utoipa::path(
    params(MemberIdParams),
    responses(
        (status = NOT_FOUND, description = "No such member"),
        (status = OK, description = "Success", body = Member)
    ),
    tag = "members",
    security(("token" = []))
)]
#[get("/members/{member_id}")]
pub async fn get_member(db: DB, _identity: IdentityEx, path: MemberPath) -> HResult<Json<Member>> {
    let Some(member) = db.get_member(path.member_id).await? else {
        return err!(404, "member_not_found");
    };

    Ok(Json(member))
}
