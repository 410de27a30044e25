//! HTTP request handlers.
//!
//! Handlers check access with `AuthGuard`, call a service and convert the domain
//! result into a DTO. Every handler is annotated for the OpenAPI document.

pub mod auth;
pub mod extract;
pub mod health;
pub mod import;
pub mod oauth;
pub mod param;
pub mod password;
pub mod resource;
pub mod user;

#[cfg(test)]
mod test;
