//! Typed shapes of API-Football v3 records.
//!
//! Only the fields the importers store are modelled; unknown fields are ignored. Records
//! from per-fixture, per-player and per-coach endpoints arrive wrapped with their parent
//! id (see `fetch`), so file exports and API responses decode the same way.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

/// Reference whose id is always present.
#[derive(Debug, Clone, Deserialize)]
pub struct IdRef {
    pub id: i64,
}

/// Reference whose id may be `null` upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionalRef {
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Birth {
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub code: Option<String>,
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueRecord {
    pub league: LeagueInfo,
    pub country: Option<LeagueCountry>,
    #[serde(default)]
    pub seasons: Vec<SeasonInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueInfo {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub league_type: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueCountry {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonInfo {
    pub year: i32,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub coverage: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    pub team: TeamInfo,
    pub venue: Option<VenueInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfo {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub country: Option<String>,
    pub founded: Option<i32>,
    #[serde(default)]
    pub national: bool,
    pub logo: Option<String>,
}

/// Venue as embedded in a team record; the id may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueInfo {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<i32>,
    pub surface: Option<String>,
    pub image: Option<String>,
}

/// Record of the `/venues` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueRecord {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<i32>,
    pub surface: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoachRecord {
    pub id: i64,
    pub name: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i32>,
    #[serde(default)]
    pub birth: Birth,
    pub nationality: Option<String>,
    pub photo: Option<String>,
    pub team: Option<OptionalRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub player: PlayerInfo,
    /// Kept raw: each entry is stored as-is next to the extracted columns.
    #[serde(default)]
    pub statistics: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInfo {
    pub id: i64,
    pub name: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i32>,
    #[serde(default)]
    pub birth: Birth,
    pub nationality: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    #[serde(default)]
    pub injured: bool,
    pub photo: Option<String>,
}

/// One entry of a player's `statistics` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerStatistics {
    #[serde(default)]
    pub team: OptionalRef,
    #[serde(default)]
    pub league: StatisticsLeague,
    #[serde(default)]
    pub games: Games,
    #[serde(default)]
    pub goals: Goals,
    #[serde(default)]
    pub cards: Cards,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatisticsLeague {
    pub id: Option<i64>,
    pub season: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Games {
    /// Spelled this way upstream.
    pub appearences: Option<i32>,
    pub lineups: Option<i32>,
    pub minutes: Option<i32>,
    pub position: Option<String>,
    pub rating: Option<String>,
    pub captain: Option<bool>,
    pub substitute: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Goals {
    pub total: Option<i32>,
    pub assists: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cards {
    pub yellow: Option<i32>,
    pub red: Option<i32>,
}

/// Leaderboard entry, wrapped with the leaderboard it came from.
#[derive(Debug, Clone, Deserialize)]
pub struct TopStatRecord {
    pub category: String,
    pub league_id: i64,
    pub season: i32,
    pub rank: i32,
    pub player: PlayerInfo,
    #[serde(default)]
    pub statistics: Vec<PlayerStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRecord {
    pub fixture: FixtureInfo,
    pub league: FixtureLeague,
    pub teams: FixtureTeams,
    #[serde(default)]
    pub goals: Score,
    #[serde(default)]
    pub score: Scores,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureInfo {
    pub id: i64,
    pub referee: Option<String>,
    pub timezone: Option<String>,
    pub date: DateTime<FixedOffset>,
    pub venue: Option<OptionalRef>,
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureStatus {
    pub long: Option<String>,
    pub short: String,
    pub elapsed: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureLeague {
    pub id: i64,
    pub season: i32,
    pub round: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureTeams {
    pub home: IdRef,
    pub away: IdRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Score {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scores {
    #[serde(default)]
    pub halftime: Score,
    #[serde(default)]
    pub fulltime: Score,
}

/// Head-to-head fixture; the league may be unknown locally.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadToHeadRecord {
    pub fixture: FixtureInfo,
    pub league: Option<HeadToHeadLeague>,
    pub teams: FixtureTeams,
    #[serde(default)]
    pub goals: Score,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadToHeadLeague {
    pub id: Option<i64>,
    pub season: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureEventsRecord {
    pub fixture: IdRef,
    #[serde(default)]
    pub events: Vec<EventInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventInfo {
    pub time: EventTime,
    pub team: Option<OptionalRef>,
    pub player: Option<OptionalRef>,
    pub assist: Option<OptionalRef>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub detail: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventTime {
    pub elapsed: i32,
    pub extra: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureLineupsRecord {
    pub fixture: IdRef,
    #[serde(default)]
    pub lineups: Vec<LineupInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineupInfo {
    pub team: IdRef,
    pub formation: Option<String>,
    #[serde(default, rename = "startXI")]
    pub start_xi: Vec<LineupEntry>,
    #[serde(default)]
    pub substitutes: Vec<LineupEntry>,
    pub coach: Option<OptionalRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineupEntry {
    pub player: LineupPlayerInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineupPlayerInfo {
    pub id: Option<i64>,
    pub number: Option<i32>,
    pub pos: Option<String>,
    pub grid: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixturePlayersRecord {
    pub fixture: IdRef,
    #[serde(default)]
    pub players: Vec<TeamPlayers>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamPlayers {
    pub team: IdRef,
    #[serde(default)]
    pub players: Vec<FixturePlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixturePlayer {
    pub player: OptionalRef,
    /// Kept raw; the first entry is stored and its headline numbers extracted.
    #[serde(default)]
    pub statistics: Vec<Value>,
}

/// Record of `/odds/bookmakers` and `/odds/bets`.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsRecord {
    pub fixture: IdRef,
    pub update: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub bookmakers: Vec<OddsBookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsBookmaker {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bets: Vec<OddsBet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsBet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub values: Vec<OddsValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsValue {
    /// A label such as `Home` or `Over 2.5`, occasionally a bare number.
    pub value: Value,
    pub odd: String,
}

impl OddsValue {
    pub fn label(&self) -> String {
        match &self.value {
            Value::String(label) => label.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InjuryRecord {
    pub player: InjuryPlayer,
    pub team: IdRef,
    pub fixture: Option<OptionalRef>,
    pub league: Option<HeadToHeadLeague>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InjuryPlayer {
    pub id: i64,
    #[serde(rename = "type")]
    pub injury_type: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferRecord {
    pub player: IdRef,
    #[serde(default)]
    pub transfers: Vec<TransferInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferInfo {
    /// Usually `YYYY-MM-DD`; malformed dates are stored as null.
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub transfer_type: Option<String>,
    pub teams: TransferTeams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferTeams {
    #[serde(rename = "in", default)]
    pub team_in: OptionalRef,
    #[serde(default)]
    pub out: OptionalRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrophiesRecord {
    pub player: Option<IdRef>,
    pub coach: Option<IdRef>,
    #[serde(default)]
    pub trophies: Vec<TrophyInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrophyInfo {
    pub league: String,
    pub country: Option<String>,
    pub season: Option<String>,
    pub place: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SidelinedRecord {
    pub player: Option<IdRef>,
    pub coach: Option<IdRef>,
    #[serde(default)]
    pub sidelined: Vec<SidelinedInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SidelinedInfo {
    #[serde(rename = "type")]
    pub sidelined_type: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Parses a `YYYY-MM-DD` date, returning `None` for anything else.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
}
