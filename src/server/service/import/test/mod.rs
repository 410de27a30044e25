use crate::server::{
    error::{import::ImportError, AppError},
    model::import::ImportKind,
    service::import::import_records,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    factory::{self, league::LeagueFactory},
};

mod odds;
mod service;

/// A fixture record as delivered by `/fixtures`.
fn fixture_record(api_fixture_id: i64, league: i64, home: i64, away: i64, status: &str) -> Value {
    json!({
        "fixture": {
            "id": api_fixture_id,
            "referee": "M. Oliver",
            "timezone": "UTC",
            "date": "2023-08-12T14:00:00+00:00",
            "venue": {"id": null, "name": null},
            "status": {"long": "Match Finished", "short": status, "elapsed": 90}
        },
        "league": {"id": league, "season": 2023, "round": "Regular Season - 1"},
        "teams": {
            "home": {"id": home, "name": "Home"},
            "away": {"id": away, "name": "Away"}
        },
        "goals": {"home": 2, "away": 1},
        "score": {
            "halftime": {"home": 1, "away": 0},
            "fulltime": {"home": 2, "away": 1}
        }
    })
}
