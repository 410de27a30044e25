//! Generic resource descriptor for the provider-sourced tables.
//!
//! Every table exposed under `/api/v1/{resource}` implements [`Resource`] on its SeaORM
//! entity. The generic repository, service, controller and OpenAPI fragments are all
//! parameterized over it, so adding a table means adding one `resource!` line here.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait,
    TryIntoModel,
};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

use crate::server::model::import::ImportKind;

pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: ModelTrait
        + FromQueryResult
        + Serialize
        + DeserializeOwned
        + IntoActiveModel<Self::ActiveModel>
        + ToSchema
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + TryIntoModel<Self::Model>
        + Send
        + Sync
        + 'static;

    /// URL segment under `/api/v1`, also used as the OpenAPI tag.
    const PATH: &'static str;
    /// Singular display name used in error messages.
    const NAME: &'static str;
    /// Importer that refreshes this table.
    const IMPORT: ImportKind;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;
}

macro_rules! resource {
    ($module:ident, $path:literal, $name:literal, $import:ident) => {
        impl Resource for entity::$module::Entity {
            type Entity = Self;
            type Model = entity::$module::Model;
            type ActiveModel = entity::$module::ActiveModel;

            const PATH: &'static str = $path;
            const NAME: &'static str = $name;
            const IMPORT: ImportKind = ImportKind::$import;

            fn id_column() -> entity::$module::Column {
                entity::$module::Column::Id
            }
        }
    };
}

resource!(country, "countries", "Country", Countries);
resource!(league, "leagues", "League", Leagues);
resource!(season, "seasons", "Season", Leagues);
resource!(venue, "venues", "Venue", Venues);
resource!(team, "teams", "Team", Teams);
resource!(coach, "coaches", "Coach", Coaches);
resource!(player, "players", "Player", Players);
resource!(player_season_stat, "player-season-stats", "Player season stat", Players);
resource!(player_top_stat, "player-top-stats", "Player top stat", TopStats);
resource!(fixture, "fixtures", "Fixture", Fixtures);
resource!(fixture_h2h, "fixtures-h2h", "Head-to-head fixture", HeadToHead);
resource!(fixture_event, "events", "Event", Events);
resource!(lineup, "lineups", "Lineup", Lineups);
resource!(lineup_player, "lineup-players", "Lineup player", Lineups);
resource!(player_fixture_stat, "player-fixture-stats", "Player fixture stat", PlayerFixtureStats);
resource!(bookmaker, "bookmakers", "Bookmaker", Bookmakers);
resource!(bet, "bets", "Bet", Bets);
resource!(odd, "odds", "Odd", Odds);
resource!(injury, "injuries", "Injury", Injuries);
resource!(transfer, "transfers", "Transfer", Transfers);
resource!(trophy, "trophies", "Trophy", Trophies);
resource!(sidelined, "sidelined", "Sidelined entry", Sidelined);

/// Callback over every registered resource type.
///
/// Used by the router and the OpenAPI assembly, which both need one generic
/// instantiation per resource.
pub trait ResourceVisitor {
    fn visit<R: Resource>(&mut self);
}

/// Calls `visitor` once per resource, in the order the routes are documented.
pub fn visit_resources<V: ResourceVisitor>(visitor: &mut V) {
    visitor.visit::<entity::country::Entity>();
    visitor.visit::<entity::league::Entity>();
    visitor.visit::<entity::season::Entity>();
    visitor.visit::<entity::venue::Entity>();
    visitor.visit::<entity::team::Entity>();
    visitor.visit::<entity::coach::Entity>();
    visitor.visit::<entity::player::Entity>();
    visitor.visit::<entity::player_season_stat::Entity>();
    visitor.visit::<entity::player_top_stat::Entity>();
    visitor.visit::<entity::fixture::Entity>();
    visitor.visit::<entity::fixture_h2h::Entity>();
    visitor.visit::<entity::fixture_event::Entity>();
    visitor.visit::<entity::lineup::Entity>();
    visitor.visit::<entity::lineup_player::Entity>();
    visitor.visit::<entity::player_fixture_stat::Entity>();
    visitor.visit::<entity::bookmaker::Entity>();
    visitor.visit::<entity::bet::Entity>();
    visitor.visit::<entity::odd::Entity>();
    visitor.visit::<entity::injury::Entity>();
    visitor.visit::<entity::transfer::Entity>();
    visitor.visit::<entity::trophy::Entity>();
    visitor.visit::<entity::sidelined::Entity>();
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    struct Paths(Vec<&'static str>);

    impl ResourceVisitor for Paths {
        fn visit<R: Resource>(&mut self) {
            self.0.push(R::PATH);
        }
    }

    /// Tests that every resource is visited once with a distinct path.
    ///
    /// Expected: 22 unique paths
    #[test]
    fn visits_every_resource_once() {
        let mut paths = Paths(Vec::new());
        visit_resources(&mut paths);

        let unique: HashSet<_> = paths.0.iter().collect();
        assert_eq!(paths.0.len(), 22);
        assert_eq!(unique.len(), 22);
        assert!(paths.0.contains(&"fixtures-h2h"));
    }
}
