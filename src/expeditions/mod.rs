pub mod expedition;
pub mod routes;
