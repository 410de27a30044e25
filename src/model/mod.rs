//! Data transfer objects shared by the HTTP layer and the OpenAPI document.

pub mod api;
pub mod auth;
pub mod import;
pub mod user;
