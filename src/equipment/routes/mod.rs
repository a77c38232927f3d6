use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_equipment;
pub mod delete_equipment;
pub mod get_equipment;
pub mod list_equipment;
pub mod list_expedition_equipment;

#[derive(Deserialize, IntoParams)]
pub struct EquipmentIdParams {
    pub equipment_id: i32,
}

pub type EquipmentPath = Path<EquipmentIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(get_equipment::get_equipment)
        .service(list_expedition_equipment::list_expedition_equipment)
        .service(list_equipment::list_equipment)
        .service(create_equipment::create_equipment)
        .service(delete_equipment::delete_equipment);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "equipment")
    ),
    paths(
        get_equipment::get_equipment,
        list_expedition_equipment::list_expedition_equipment,
        list_equipment::list_equipment,
        create_equipment::create_equipment,
        delete_equipment::delete_equipment
    ),
    components(schemas(
        crate::equipment::Equipment,
        create_equipment::CreateEquipmentRequest,
        create_equipment::CreateEquipmentResponse,
    ))
)]
pub struct EquipmentApiDocs;
