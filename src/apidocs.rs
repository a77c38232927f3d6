use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    OpenApi,
};

use crate::{
    artifacts::routes::ArtifactsApiDocs, auth::routes::AuthApiDocs,
    curators::routes::CuratorsApiDocs, equipment::routes::EquipmentApiDocs,
    expeditions::routes::ExpeditionsApiDocs, leaders::routes::LeadersApiDocs,
    locations::routes::LocationsApiDocs, members::routes::MembersApiDocs,
};

#[derive(OpenApi)]
#[openapi(
    modifiers(&TokenSecurityAddon)
)]
pub struct ApiDocs;

pub fn setup_oapi() -> utoipa::openapi::OpenApi {
    let mut oapi = ApiDocs::openapi();

    oapi.merge(AuthApiDocs::openapi());
    oapi.merge(LocationsApiDocs::openapi());
    oapi.merge(ExpeditionsApiDocs::openapi());
    oapi.merge(LeadersApiDocs::openapi());
    oapi.merge(MembersApiDocs::openapi());
    oapi.merge(CuratorsApiDocs::openapi());
    oapi.merge(ArtifactsApiDocs::openapi());
    oapi.merge(EquipmentApiDocs::openapi());

    oapi
}

struct TokenSecurityAddon;

impl utoipa::Modify for TokenSecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.components = Some(
            utoipa::openapi::ComponentsBuilder::new()
                .security_scheme(
                    // session tokens ride in the `token` query parameter
                    "token",
                    SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::new("token"))),
                )
                .build(),
        )
    }
}
