use actix_web::{get, web::Json};

use crate::{
    auth::IdentityEx,
    curators::curator::Curator,
    curators::routes::{CuratorIdParams, CuratorPath},
    db::DB,
    error::{macros::err, HResult},
};

/// Get Curator
#[utoipa::path(
    params(CuratorIdParams),
    responses(
        (status = NOT_FOUND, description = "No such curator"),
        (status = OK, description = "Success", body = Curator)
    ),
    tag = "curators",
    security(("token" = []))
)]
#[get("/curators/{curator_id}")]
pub async fn get_curator(db: DB, _identity: IdentityEx, path: CuratorPath) -> HResult<Json<Curator>> {
    let Some(curator) = db.get_curator(path.curator_id).await? else {
        return err!(404, "curator_not_found");
    };

    Ok(Json(curator))
}
