use crate::server::data::lookup::ReferenceLookup;
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod resolve;
