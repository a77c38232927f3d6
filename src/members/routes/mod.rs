use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_member;
pub mod delete_member;
pub mod get_member;
pub mod list_expedition_members;
pub mod list_members;

#[derive(Deserialize, IntoParams)]
pub struct MemberIdParams {
    pub member_id: i32,
}

pub type MemberPath = Path<MemberIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(get_member::get_member)
        .service(list_expedition_members::list_expedition_members)
        .service(list_members::list_members)
        .service(create_member::create_member)
        .service(delete_member::delete_member);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "members")
    ),
    paths(
        get_member::get_member,
        list_expedition_members::list_expedition_members,
        list_members::list_members,
        create_member::create_member,
        delete_member::delete_member
    ),
    components(schemas(
        crate::members::member::Member,
        create_member::CreateMemberRequest,
        create_member::CreateMemberResponse,
    ))
)]
pub struct MembersApiDocs;
