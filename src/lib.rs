// Re-export internals for use under the expedition_server crate namespace
// Mainly for use in tests
pub mod apidocs;
pub mod artifacts;
pub mod auth;
pub mod crypto;
pub mod curators;
pub mod db;
pub mod equipment;
pub mod error;
pub mod expeditions;
pub mod leaders;
pub mod locations;
pub mod members;
pub mod options;
