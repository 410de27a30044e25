use crate::server::data::scope::ImportScopeRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, fixture::FixtureFactory, team::TeamFactory},
};

mod finished_fixture_api_ids;
mod team_countries;
mod upcoming_fixture_pairs;
