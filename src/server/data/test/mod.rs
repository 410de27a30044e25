mod lookup;
mod password_reset;
mod resource;
mod scope;
mod upsert;
mod user;
