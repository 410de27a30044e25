//! Database repository layer.
//!
//! Repositories wrap SeaORM queries and convert entity models at the boundary. The
//! generic resource repository serves every provider-sourced table; `upsert` and
//! `lookup` are the building blocks of the importers and accept any `ConnectionTrait`
//! so they can run inside a transaction.

pub mod lookup;
pub mod password_reset;
pub mod resource;
pub mod scope;
pub mod upsert;
pub mod user;

#[cfg(test)]
mod test;
