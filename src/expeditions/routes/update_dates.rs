use actix_web::{put, web::Json, HttpResponse};

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    expeditions::expedition::DateRange,
    expeditions::routes::{ExpeditionIdParams, ExpeditionPath},
};

/// Update Expedition Dates
///
/// Replaces both dates at once; there is no way to move only one end of the
/// range.
#[utoipa::path(
    params(ExpeditionIdParams),
    responses(
        (status = BAD_REQUEST, description = "Malformed or inverted date range", example = "invalid_dates"),
        (status = NOT_FOUND, description = "No such expedition"),
        (status = OK, description = "Dates updated", example = "success")
    ),
    tag = "expeditions",
    security(("token" = []))
)]
#[put("/expeditions/{expedition_id}/dates")]
pub async fn update_dates(
    db: DB,
    _identity: IdentityEx,
    path: ExpeditionPath,
    req: Json<DateRange>,
) -> HResult<HttpResponse> {
    let Some((start_date, end_date)) = req.parse() else {
        return err!(400, "invalid_dates");
    };

    let rows_affected = db
        .update_expedition_dates(path.expedition_id, start_date, end_date)
        .await?;

    if rows_affected == 0 {
        return err!(404, "expedition_not_found");
    }

    Ok(HttpResponse::Ok().body("success"))
}
