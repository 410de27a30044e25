use crate::server::data::password_reset::PasswordResetRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_stale;
mod find_valid;
mod mark_used;
