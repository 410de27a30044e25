//! Domain models and parameter types.
//!
//! Domain models sit between the data layer (SeaORM entities) and the HTTP layer (DTOs).
//! Repositories convert entities with `from_entity`, controllers convert to DTOs with
//! `into_dto`.

pub mod import;
pub mod resource;
pub mod user;
