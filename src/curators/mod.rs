pub mod curator;
pub mod routes;
