use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_location;
pub mod delete_location;
pub mod get_location;
pub mod list_locations;

#[derive(Deserialize, IntoParams)]
pub struct LocationIdParams {
    pub location_id: i32,
}

pub type LocationPath = Path<LocationIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(get_location::get_location)
        .service(list_locations::list_locations)
        .service(create_location::create_location)
        .service(delete_location::delete_location);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "locations")
    ),
    paths(
        get_location::get_location,
        list_locations::list_locations,
        create_location::create_location,
        delete_location::delete_location
    ),
    components(schemas(
        crate::locations::location::Location,
        create_location::CreateLocationRequest,
        create_location::CreateLocationResponse,
    ))
)]
pub struct LocationsApiDocs;
