use actix_web::{delete, HttpResponse};

use crate::{
    auth::IdentityEx,
    curators::routes::{CuratorIdParams, CuratorPath},
    db::DB,
    error::{macros::err, HResult},
};

/// Delete Curator
#[utoipa::path(
    params(CuratorIdParams),
    responses(
        (status = NOT_FOUND, description = "No such curator"),
        (status = OK, description = "Curator deleted", example = "success")
    ),
    tag = "curators",
    security(("token" = []))
)]
#[delete("/curators/{curator_id}")]
pub async fn delete_curator(db: DB, _identity: IdentityEx, path: CuratorPath) -> HResult<HttpResponse> {
    let rows_affected = db.delete_curator(path.curator_id).await?;

    if rows_affected == 0 {
        return err!(404, "curator_not_found");
    }

    Ok(HttpResponse::Ok().body("success"))
}
