//! Decides which upstream requests or files feed each importer.

use serde_json::{json, Map, Value};

use crate::server::{
    data::scope::ImportScopeRepository,
    error::{import::ImportError, AppError},
    model::import::{ImportKind, ImportRequest, ImportSource},
    service::import::{players::TOP_STAT_CATEGORIES, source, source::ApiFootballClient, ImportContext},
};

/// Loads the records `kind` imports for `request`.
///
/// # Returns
/// - `Ok(Vec<Value>)` - Records in the shape the importer decodes
/// - `Err(ImportError::FileSourceUnsupported)` - File source for an importer without a file area
/// - `Err(ImportError::MissingApiKey)` - API source without a configured key
/// - `Err(ImportError::MissingScope)` - League/season needed but neither given nor configured
/// - `Err(AppError)` - Upstream, file or database error
pub async fn fetch_records(
    ctx: &ImportContext,
    kind: ImportKind,
    request: ImportRequest,
) -> Result<Vec<Value>, AppError> {
    match request.source {
        ImportSource::File => {
            let area = kind
                .file_area()
                .ok_or(ImportError::FileSourceUnsupported(kind))?;

            Ok(source::load_area(&ctx.settings.files_dir, area).await?)
        }
        ImportSource::Api => fetch_from_api(ctx, kind, request).await,
    }
}

type Query = Vec<(&'static str, String)>;

async fn fetch_from_api(
    ctx: &ImportContext,
    kind: ImportKind,
    request: ImportRequest,
) -> Result<Vec<Value>, AppError> {
    let settings = &ctx.settings;
    let api_key = settings
        .api_key
        .as_deref()
        .ok_or(ImportError::MissingApiKey)?;
    let client = ApiFootballClient::new(&ctx.http, &settings.api_url, api_key);
    let scope = ImportScopeRepository::new(&ctx.db);

    let leagues = request
        .league
        .map(|league| vec![league])
        .unwrap_or_else(|| settings.leagues.clone());
    let season = request.season.or(settings.season);

    // League and season of the importers that only make sense for one competition.
    let league_scope = || -> Result<Vec<Query>, ImportError> {
        match season {
            Some(season) if !leagues.is_empty() => Ok(leagues
                .iter()
                .map(|league| vec![("league", league.to_string()), ("season", season.to_string())])
                .collect()),
            _ => Err(ImportError::MissingScope(kind)),
        }
    };

    match kind {
        ImportKind::Countries => client.get_all("/countries", &[]).await,
        ImportKind::Leagues => {
            let season_param: Query = season
                .map(|season| vec![("season", season.to_string())])
                .unwrap_or_default();

            if leagues.is_empty() {
                return client.get_all("/leagues", &season_param).await;
            }

            let queries = leagues.iter().copied().map(|league| {
                let mut query = vec![("id", league.to_string())];
                query.extend(season_param.iter().cloned());
                query
            });
            fetch_each(&client, "/leagues", queries).await
        }
        ImportKind::Teams => fetch_each(&client, "/teams", league_scope()?).await,
        ImportKind::Venues => {
            let countries = scope.team_countries().await?;
            let queries = countries.into_iter().map(|country| vec![("country", country)]);
            fetch_each(&client, "/venues", queries).await
        }
        ImportKind::Coaches => {
            let teams = scope.team_api_ids().await?;
            let queries = teams.into_iter().map(|team| vec![("team", team.to_string())]);
            fetch_each(&client, "/coachs", queries).await
        }
        ImportKind::Players => fetch_each(&client, "/players", league_scope()?).await,
        ImportKind::TopStats => {
            let mut records = Vec::new();
            for query in league_scope()? {
                for category in TOP_STAT_CATEGORIES {
                    let endpoint = format!("/players/{}", category);
                    let items = client.get_all(&endpoint, &query).await?;
                    records.extend(rank_items(category, &query, items));
                }
            }
            Ok(records)
        }
        ImportKind::Fixtures => fetch_each(&client, "/fixtures", league_scope()?).await,
        ImportKind::HeadToHead => {
            let pairs = scope.upcoming_fixture_pairs().await?;
            let queries = pairs
                .into_iter()
                .map(|(first, second)| vec![("h2h", format!("{}-{}", first, second))]);
            fetch_each(&client, "/fixtures/headtohead", queries).await
        }
        ImportKind::Events | ImportKind::Lineups | ImportKind::PlayerFixtureStats => {
            let (endpoint, child) = match kind {
                ImportKind::Events => ("/fixtures/events", "events"),
                ImportKind::Lineups => ("/fixtures/lineups", "lineups"),
                _ => ("/fixtures/players", "players"),
            };
            let fixtures = scope.finished_fixture_api_ids(season).await?;
            fetch_wrapped(&client, endpoint, "fixture", child, &fixtures).await
        }
        ImportKind::Bookmakers => client.get_all("/odds/bookmakers", &[]).await,
        ImportKind::Bets => client.get_all("/odds/bets", &[]).await,
        ImportKind::Odds => fetch_each(&client, "/odds", league_scope()?).await,
        ImportKind::Injuries => fetch_each(&client, "/injuries", league_scope()?).await,
        ImportKind::Transfers => {
            let teams = scope.team_api_ids().await?;
            let queries = teams.into_iter().map(|team| vec![("team", team.to_string())]);
            fetch_each(&client, "/transfers", queries).await
        }
        ImportKind::Trophies | ImportKind::Sidelined => {
            let (endpoint, child) = match kind {
                ImportKind::Trophies => ("/trophies", "trophies"),
                _ => ("/sidelined", "sidelined"),
            };
            let players = scope.player_api_ids().await?;
            let coaches = scope.coach_api_ids().await?;

            let mut records = fetch_wrapped(&client, endpoint, "player", child, &players).await?;
            records.extend(fetch_wrapped(&client, endpoint, "coach", child, &coaches).await?);
            Ok(records)
        }
    }
}

/// Fetches `endpoint` once per query and concatenates the records.
async fn fetch_each(
    client: &ApiFootballClient<'_>,
    endpoint: &str,
    queries: impl IntoIterator<Item = Query>,
) -> Result<Vec<Value>, AppError> {
    let mut records = Vec::new();
    for query in queries {
        records.extend(client.get_all(endpoint, &query).await?);
    }
    Ok(records)
}

/// Fetches a per-parent endpoint for every id and wraps the results with their parent.
///
/// `parent` is both the query parameter and the key of the parent object, e.g.
/// `{"fixture": {"id": 1}, "events": [...]}`. Parents without results are left out.
async fn fetch_wrapped(
    client: &ApiFootballClient<'_>,
    endpoint: &str,
    parent: &'static str,
    child: &'static str,
    ids: &[i64],
) -> Result<Vec<Value>, AppError> {
    let mut records = Vec::new();
    for id in ids {
        let items = client.get_all(endpoint, &[(parent, id.to_string())]).await?;
        if items.is_empty() {
            continue;
        }
        records.push(wrap(parent, *id, child, items));
    }
    Ok(records)
}

fn wrap(parent: &str, id: i64, child: &str, items: Vec<Value>) -> Value {
    let mut record = Map::new();
    record.insert(parent.to_string(), json!({ "id": id }));
    record.insert(child.to_string(), Value::Array(items));
    Value::Object(record)
}

/// Tags leaderboard entries with their category, league, season and 1-based rank.
fn rank_items(category: &str, query: &Query, items: Vec<Value>) -> Vec<Value> {
    let param = |name: &str| -> Value {
        query
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value.parse::<i64>().ok())
            .map(Value::from)
            .unwrap_or(Value::Null)
    };
    let league = param("league");
    let season = param("season");

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(mut fields) => {
                fields.insert("category".to_string(), json!(category));
                fields.insert("league_id".to_string(), league.clone());
                fields.insert("season".to_string(), season.clone());
                fields.insert("rank".to_string(), json!(index + 1));
                Some(Value::Object(fields))
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_items_with_their_parent() {
        let record = wrap("fixture", 10, "events", vec![json!({"type": "Goal"})]);

        assert_eq!(record["fixture"]["id"], 10);
        assert_eq!(record["events"][0]["type"], "Goal");
    }

    /// Tests that leaderboard entries are ranked in response order.
    ///
    /// Expected: ranks 1 and 2 with league and season copied from the query
    #[test]
    fn ranks_leaderboard_entries() {
        let query = vec![("league", "39".to_string()), ("season", "2023".to_string())];

        let ranked = rank_items(
            "topscorers",
            &query,
            vec![json!({"player": {"id": 1}}), json!({"player": {"id": 2}})],
        );

        assert_eq!(ranked[0]["rank"], 1);
        assert_eq!(ranked[1]["rank"], 2);
        assert_eq!(ranked[1]["category"], "topscorers");
        assert_eq!(ranked[0]["league_id"], 39);
        assert_eq!(ranked[0]["season"], 2023);
    }
}
