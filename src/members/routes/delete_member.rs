use actix_web::{delete, HttpResponse};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    members::routes::{MemberIdParams, MemberPath},
};

/// Delete Member
#[utoipa::path(
    params(MemberIdParams),
    responses(
        (status = NOT_FOUND, description = "No such member"),
        (status = OK, description = "Member deleted", example = "success")
    ),
    tag = "members",
    security(("token" = []))
)]
#[delete("/members/{member_id}")]
pub async fn delete_member(db: DB, _identity: IdentityEx, path: MemberPath) -> HResult<HttpResponse> {
    let rows_affected = db.delete_member(path.member_id).await?;

    if rows_affected == 0 {
        return err!(404, "member_not_found");
    }

    Ok(HttpResponse::Ok().body("success"))
}
