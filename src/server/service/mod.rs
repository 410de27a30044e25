//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They implement the
//! business rules (credential checks, token lifecycles, import policies), coordinate
//! repositories and external clients, and work with domain models rather than DTOs.

pub mod auth;
pub mod import;
pub mod mail;
pub mod oauth;
pub mod password_reset;
pub mod resource;
pub mod user;
