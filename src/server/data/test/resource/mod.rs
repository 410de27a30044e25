use crate::server::data::resource::ResourceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find;
mod insert;
mod update;
