use actix_web::{post, web::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::IdentityEx,
    db::DB,
    error::{macros::err, HResult},
    expeditions::expedition::DateRange,
};

#[derive(Deserialize, ToSchema)]
pub struct CreateExpeditionRequest {
    location_id: i32,
    #[schema(example = "2024-06-01")]
    start_date: String,
    #[schema(example = "2024-08-15")]
    end_date: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreateExpeditionResponse {
    expedition_id: i32,
}

/// Create Expedition
#[utoipa::path(
    responses(
        (status = BAD_REQUEST, description = "Malformed or inverted date range", example = "invalid_dates"),
        (status = BAD_REQUEST, description = "Unknown location", example = "location_not_found"),
        (status = OK, description = "Expedition created", body = CreateExpeditionResponse)
    ),
    tag = "expeditions",
    security(("token" = []))
)]
#[post("/expeditions")]
pub async fn create_expedition(
    db: DB,
    _identity: IdentityEx,
    req: Json<CreateExpeditionRequest>,
) -> HResult<Json<CreateExpeditionResponse>> {
    let dates = DateRange {
        start_date: req.start_date.clone(),
        end_date: req.end_date.clone(),
    };
    let Some((start_date, end_date)) = dates.parse() else {
        return err!(400, "invalid_dates");
    };

    if db.get_location(req.location_id).await?.is_none() {
        return err!(400, "location_not_found");
    }

    let expedition_id = db
        .create_expedition(req.location_id, start_date, end_date)
        .await?;

    Ok(Json(CreateExpeditionResponse { expedition_id }))
}
