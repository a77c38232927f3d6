pub mod member;
pub mod routes;
