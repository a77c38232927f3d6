pub mod artifact;
pub mod routes;
