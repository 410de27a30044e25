//! Import domain models: importer identities, run parameters, reports and job status.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::import::{ImportJobDto, ImportReportDto, ImportStateDto};

/// Maximum number of per-record error messages kept in a report.
pub const MAX_SAMPLE_ERRORS: usize = 10;

/// One importer per entity family.
///
/// `ALL` lists them in dependency order: parents are imported before the rows that
/// reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    Countries,
    Leagues,
    Teams,
    Venues,
    Coaches,
    Players,
    TopStats,
    Fixtures,
    HeadToHead,
    Events,
    Lineups,
    PlayerFixtureStats,
    Bookmakers,
    Bets,
    Odds,
    Injuries,
    Transfers,
    Trophies,
    Sidelined,
}

impl ImportKind {
    pub const ALL: [ImportKind; 19] = [
        ImportKind::Countries,
        ImportKind::Leagues,
        ImportKind::Teams,
        ImportKind::Venues,
        ImportKind::Coaches,
        ImportKind::Players,
        ImportKind::TopStats,
        ImportKind::Fixtures,
        ImportKind::HeadToHead,
        ImportKind::Events,
        ImportKind::Lineups,
        ImportKind::PlayerFixtureStats,
        ImportKind::Bookmakers,
        ImportKind::Bets,
        ImportKind::Odds,
        ImportKind::Injuries,
        ImportKind::Transfers,
        ImportKind::Trophies,
        ImportKind::Sidelined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportKind::Countries => "countries",
            ImportKind::Leagues => "leagues",
            ImportKind::Teams => "teams",
            ImportKind::Venues => "venues",
            ImportKind::Coaches => "coaches",
            ImportKind::Players => "players",
            ImportKind::TopStats => "top-stats",
            ImportKind::Fixtures => "fixtures",
            ImportKind::HeadToHead => "head-to-head",
            ImportKind::Events => "events",
            ImportKind::Lineups => "lineups",
            ImportKind::PlayerFixtureStats => "player-fixture-stats",
            ImportKind::Bookmakers => "bookmakers",
            ImportKind::Bets => "bets",
            ImportKind::Odds => "odds",
            ImportKind::Injuries => "injuries",
            ImportKind::Transfers => "transfers",
            ImportKind::Trophies => "trophies",
            ImportKind::Sidelined => "sidelined",
        }
    }

    /// Directory under `FILES_DIR` holding exports for this importer, if any.
    pub fn file_area(&self) -> Option<&'static str> {
        match self {
            ImportKind::Fixtures => Some("fixtures"),
            ImportKind::Players => Some("players"),
            ImportKind::Teams => Some("teams"),
            ImportKind::Events => Some("events"),
            ImportKind::Odds => Some("odds"),
            ImportKind::Transfers => Some("transfers"),
            _ => None,
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an importer reads its records from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImportSource {
    #[default]
    Api,
    File,
}

impl ImportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportSource::Api => "api",
            ImportSource::File => "file",
        }
    }
}

/// Parameters of a single import run.
///
/// `league` is the provider league id; `None` falls back to the configured
/// `IMPORT_LEAGUES`, as does `season` to `IMPORT_SEASON`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportRequest {
    pub source: ImportSource,
    pub league: Option<i64>,
    pub season: Option<i32>,
}

/// What to do when a record fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The first error aborts the run and propagates.
    Abort,
    /// The error is counted and sampled; the run continues.
    Collect,
}

/// What to do when a record references a row that does not exist locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FkMissPolicy {
    /// Count the record as skipped and move on.
    Skip,
    /// Treat the miss as a record error, handled by the failure policy.
    Error,
}

/// Result of a single upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Counters of one importer run.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub kind: ImportKind,
    pub fetched: u64,
    pub created: u64,
    pub updated: u64,
    pub skipped: u64,
    pub missed_fk: u64,
    pub failed: u64,
    pub sample_errors: Vec<String>,
}

impl ImportReport {
    pub fn new(kind: ImportKind) -> Self {
        Self {
            kind,
            fetched: 0,
            created: 0,
            updated: 0,
            skipped: 0,
            missed_fk: 0,
            failed: 0,
            sample_errors: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created => self.created += 1,
            UpsertOutcome::Updated => self.updated += 1,
        }
    }

    /// Counts a record skipped because of an unresolved reference.
    pub fn record_missing_reference(&mut self) {
        self.skipped += 1;
        self.missed_fk += 1;
    }

    /// Counts a failed record and keeps its message if the sample is not full.
    pub fn record_failure(&mut self, message: String) {
        self.failed += 1;
        if self.sample_errors.len() < MAX_SAMPLE_ERRORS {
            self.sample_errors.push(message);
        }
    }

    /// Adds the created/updated counters of `other`, used to commit the tally of a
    /// transactional record.
    pub fn absorb(&mut self, other: &ImportReport) {
        self.created += other.created;
        self.updated += other.updated;
        self.skipped += other.skipped;
        self.missed_fk += other.missed_fk;
    }

    pub fn into_dto(self) -> ImportReportDto {
        ImportReportDto {
            resource: self.kind.to_string(),
            fetched: self.fetched,
            created: self.created,
            updated: self.updated,
            skipped: self.skipped,
            missed_fk: self.missed_fk,
            failed: self.failed,
            sample_errors: self.sample_errors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Last known status of an importer.
#[derive(Debug, Clone)]
pub struct ImportJobStatus {
    pub kind: ImportKind,
    pub state: JobState,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub last_report: Option<ImportReport>,
    pub last_error: Option<String>,
}

impl ImportJobStatus {
    pub fn idle(kind: ImportKind) -> Self {
        Self {
            kind,
            state: JobState::Idle,
            started_at: None,
            finished_at: None,
            last_report: None,
            last_error: None,
        }
    }

    pub fn into_dto(self) -> ImportJobDto {
        ImportJobDto {
            importer: self.kind.to_string(),
            state: match self.state {
                JobState::Idle => ImportStateDto::Idle,
                JobState::Running => ImportStateDto::Running,
                JobState::Succeeded => ImportStateDto::Succeeded,
                JobState::Failed => ImportStateDto::Failed,
            },
            started_at: self.started_at,
            finished_at: self.finished_at,
            last_report: self.last_report.map(ImportReport::into_dto),
            last_error: self.last_error,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests that the error sample stops growing at its bound while the counter keeps
    /// counting.
    ///
    /// Expected: failed = 15, sample_errors.len() = 10
    #[test]
    fn bounds_sample_errors() {
        let mut report = ImportReport::new(ImportKind::Fixtures);

        for i in 0..15 {
            report.record_failure(format!("error {}", i));
        }

        assert_eq!(report.failed, 15);
        assert_eq!(report.sample_errors.len(), MAX_SAMPLE_ERRORS);
        assert_eq!(report.sample_errors[0], "error 0");
    }

    /// Tests that a missing reference counts as both skipped and missed_fk.
    ///
    /// Expected: skipped = 1, missed_fk = 1, nothing created
    #[test]
    fn missing_reference_counts_once() {
        let mut report = ImportReport::new(ImportKind::Events);

        report.record_missing_reference();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.missed_fk, 1);
        assert_eq!(report.created, 0);
    }
}
