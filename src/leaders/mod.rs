pub mod leader;
pub mod routes;
