use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_curator;
pub mod delete_curator;
pub mod get_curator;
pub mod list_curators;
pub mod list_expedition_curators;

#[derive(Deserialize, IntoParams)]
pub struct CuratorIdParams {
    pub curator_id: i32,
}

pub type CuratorPath = Path<CuratorIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(get_curator::get_curator)
        .service(list_expedition_curators::list_expedition_curators)
        .service(list_curators::list_curators)
        .service(create_curator::create_curator)
        .service(delete_curator::delete_curator);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "curators")
    ),
    paths(
        get_curator::get_curator,
        list_expedition_curators::list_expedition_curators,
        list_curators::list_curators,
        create_curator::create_curator,
        delete_curator::delete_curator
    ),
    components(schemas(
        crate::curators::curator::Curator,
        create_curator::CreateCuratorRequest,
        create_curator::CreateCuratorResponse,
    ))
)]
pub struct CuratorsApiDocs;
