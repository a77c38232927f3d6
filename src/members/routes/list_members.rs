use actix_web::{get, web::Json};

use crate::{auth::IdentityEx, db::DB, error::HResult, members::member::Member};

/// List Members
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = Vec<Member>)
    ),
    tag = "members",
    security(("token" = []))
)]
#[get("/members")]
pub async fn list_members(db: DB, _identity: IdentityEx) -> HResult<Json<Vec<Member>>> {
    let members = db.list_members().await?;

    Ok(Json(members))
}
