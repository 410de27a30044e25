use crate::server::{data::upsert::upsert_by_key, model::import::UpsertOutcome};
use sea_orm::{ActiveValue, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod upsert_by_key;
