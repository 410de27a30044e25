pub use super::bet::Entity as Bet;
pub use super::bookmaker::Entity as Bookmaker;
pub use super::coach::Entity as Coach;
pub use super::country::Entity as Country;
pub use super::fixture::Entity as Fixture;
pub use super::fixture_event::Entity as FixtureEvent;
pub use super::fixture_h2h::Entity as FixtureH2h;
pub use super::injury::Entity as Injury;
pub use super::league::Entity as League;
pub use super::lineup::Entity as Lineup;
pub use super::lineup_player::Entity as LineupPlayer;
pub use super::odd::Entity as Odd;
pub use super::password_reset::Entity as PasswordReset;
pub use super::player::Entity as Player;
pub use super::player_fixture_stat::Entity as PlayerFixtureStat;
pub use super::player_season_stat::Entity as PlayerSeasonStat;
pub use super::player_top_stat::Entity as PlayerTopStat;
pub use super::season::Entity as Season;
pub use super::sidelined::Entity as Sidelined;
pub use super::team::Entity as Team;
pub use super::transfer::Entity as Transfer;
pub use super::trophy::Entity as Trophy;
pub use super::user::Entity as User;
pub use super::venue::Entity as Venue;
