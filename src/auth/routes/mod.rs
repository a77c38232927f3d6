use utoipa::OpenApi;

pub mod check;
pub mod login;
pub mod whoami;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(login::login)
        .service(check::check)
        .service(whoami::whoami);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "auth")
    ),
    paths(login::login, check::check, whoami::whoami),
    components(schemas(
        login::LoginRequest,
        login::LoginResponse,
        crate::auth::session::Identity,
        crate::auth::session::Role,
    ))
)]
pub struct AuthApiDocs;
