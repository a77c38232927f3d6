use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_expedition;
pub mod delete_expedition;
pub mod get_expedition;
pub mod list_expeditions;
pub mod update_dates;

#[derive(Deserialize, IntoParams)]
pub struct ExpeditionIdParams {
    pub expedition_id: i32,
}

pub type ExpeditionPath = Path<ExpeditionIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(get_expedition::get_expedition)
        .service(list_expeditions::list_expeditions)
        .service(create_expedition::create_expedition)
        .service(update_dates::update_dates)
        .service(delete_expedition::delete_expedition);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "expeditions")
    ),
    paths(
        get_expedition::get_expedition,
        list_expeditions::list_expeditions,
        create_expedition::create_expedition,
        update_dates::update_dates,
        delete_expedition::delete_expedition
    ),
    components(schemas(
        crate::expeditions::expedition::Expedition,
        crate::expeditions::expedition::DateRange,
        create_expedition::CreateExpeditionRequest,
        create_expedition::CreateExpeditionResponse,
    ))
)]
pub struct ExpeditionsApiDocs;
