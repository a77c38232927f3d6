use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_leader;
pub mod delete_leader;
pub mod get_leader;
pub mod list_expedition_leaders;
pub mod list_leaders;

#[derive(Deserialize, IntoParams)]
pub struct LeaderIdParams {
    pub leader_id: i32,
}

pub type LeaderPath = Path<LeaderIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(get_leader::get_leader)
        .service(list_expedition_leaders::list_expedition_leaders)
        .service(list_leaders::list_leaders)
        .service(create_leader::create_leader)
        .service(delete_leader::delete_leader);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "leaders")
    ),
    paths(
        get_leader::get_leader,
        list_expedition_leaders::list_expedition_leaders,
        list_leaders::list_leaders,
        create_leader::create_leader,
        delete_leader::delete_leader
    ),
    components(schemas(
        crate::leaders::leader::Leader,
        create_leader::CreateLeaderRequest,
        create_leader::CreateLeaderResponse,
    ))
)]
pub struct LeadersApiDocs;
