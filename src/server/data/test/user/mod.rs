use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod update;
