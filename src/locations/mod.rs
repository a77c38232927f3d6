pub mod location;
pub mod routes;
