use actix_web::{get, web::Json};

use crate::{auth::IdentityEx, curators::curator::Curator, db::DB, error::HResult};

/// List Curators
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = Vec<Curator>)
    ),
    tag = "curators",
    security(("token" = []))
)]
#[get("/curators")]
pub async fn list_curators(db: DB, _identity: IdentityEx) -> HResult<Json<Vec<Curator>>> {
    let curators = db.list_curators().await?;

    Ok(Json(curators))
}
