//! Import pipeline: sources, importers and observable jobs.
//!
//! An import run fetches records for one importer (`fetch`), pushes them through the
//! importer's record loop (`runner`) and returns an `ImportReport`. `ImportService`
//! wraps runs into jobs tracked by `ImportJobs`, which rejects starting an importer
//! that is still running. All dependencies travel in an `ImportContext`.

pub mod fetch;
pub mod jobs;
pub mod records;
pub mod runner;
pub mod source;

mod fixtures;
mod odds;
mod people;
mod players;
mod reference;

#[cfg(test)]
mod test;

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    config::Config,
    error::AppError,
    model::import::{ImportJobStatus, ImportKind, ImportReport, ImportRequest, ImportSource},
    service::import::{
        fixtures::{
            EventImporter, FixtureImporter, HeadToHeadImporter, LineupImporter,
            PlayerFixtureStatImporter,
        },
        jobs::ImportJobs,
        odds::{BetImporter, BookmakerImporter, OddsImporter},
        people::{InjuryImporter, SidelinedImporter, TransferImporter, TrophyImporter},
        players::{PlayerImporter, TopStatImporter},
        reference::{CoachImporter, CountryImporter, LeagueImporter, TeamImporter, VenueImporter},
        runner::run,
    },
};

/// Provider and scope settings of the importers.
#[derive(Debug, Clone)]
pub struct ImportSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub files_dir: PathBuf,
    /// Provider league ids imported when a run names none.
    pub leagues: Vec<i64>,
    pub season: Option<i32>,
    /// Source of runs that do not name one.
    pub source: ImportSource,
}

impl ImportSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_url: config.api_football_url.clone(),
            api_key: config.api_football_key.clone(),
            files_dir: config.files_dir.clone(),
            leagues: config.import_leagues.clone(),
            season: config.import_season,
            source: config.import_source,
        }
    }
}

/// Everything an import run needs.
#[derive(Clone)]
pub struct ImportContext {
    pub db: DatabaseConnection,
    pub http: reqwest::Client,
    pub settings: Arc<ImportSettings>,
}

impl ImportContext {
    pub fn new(db: DatabaseConnection, http: reqwest::Client, settings: ImportSettings) -> Self {
        Self {
            db,
            http,
            settings: Arc::new(settings),
        }
    }
}

/// Fetches and imports the records of `kind`.
pub async fn run_importer(
    ctx: &ImportContext,
    kind: ImportKind,
    request: ImportRequest,
) -> Result<ImportReport, AppError> {
    let records = fetch::fetch_records(ctx, kind, request).await?;

    import_records(&ctx.db, kind, records).await
}

/// Imports already fetched `records` with the importer of `kind`.
pub async fn import_records(
    db: &DatabaseConnection,
    kind: ImportKind,
    records: Vec<Value>,
) -> Result<ImportReport, AppError> {
    match kind {
        ImportKind::Countries => run(&CountryImporter::new(db), records).await,
        ImportKind::Leagues => run(&LeagueImporter::new(db), records).await,
        ImportKind::Teams => run(&TeamImporter::new(db), records).await,
        ImportKind::Venues => run(&VenueImporter::new(db), records).await,
        ImportKind::Coaches => run(&CoachImporter::new(db), records).await,
        ImportKind::Players => run(&PlayerImporter::new(db), records).await,
        ImportKind::TopStats => run(&TopStatImporter::new(db), records).await,
        ImportKind::Fixtures => run(&FixtureImporter::new(db), records).await,
        ImportKind::HeadToHead => run(&HeadToHeadImporter::new(db), records).await,
        ImportKind::Events => run(&EventImporter::new(db), records).await,
        ImportKind::Lineups => run(&LineupImporter::new(db), records).await,
        ImportKind::PlayerFixtureStats => run(&PlayerFixtureStatImporter::new(db), records).await,
        ImportKind::Bookmakers => run(&BookmakerImporter::new(db), records).await,
        ImportKind::Bets => run(&BetImporter::new(db), records).await,
        ImportKind::Odds => run(&OddsImporter::new(db), records).await,
        ImportKind::Injuries => run(&InjuryImporter::new(db), records).await,
        ImportKind::Transfers => run(&TransferImporter::new(db), records).await,
        ImportKind::Trophies => run(&TrophyImporter::new(db), records).await,
        ImportKind::Sidelined => run(&SidelinedImporter::new(db), records).await,
    }
}

/// Starts import runs as jobs.
///
/// Cheap to clone; clones share the job registry.
#[derive(Clone)]
pub struct ImportService {
    ctx: ImportContext,
    jobs: ImportJobs,
}

impl ImportService {
    pub fn new(ctx: ImportContext, jobs: ImportJobs) -> Self {
        Self { ctx, jobs }
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.ctx.settings
    }

    /// Starts a background job for `kind`.
    ///
    /// # Returns
    /// - `Ok(ImportJobStatus)` - Status of the started job
    /// - `Err(ImportError::AlreadyRunning)` - A job for `kind` is still running
    pub async fn start(
        &self,
        kind: ImportKind,
        request: ImportRequest,
    ) -> Result<ImportJobStatus, AppError> {
        self.jobs.begin(kind).await?;

        let service = self.clone();
        tokio::spawn(async move { service.execute_supervised(kind, request).await });

        Ok(self.jobs.status(kind).await)
    }

    /// Starts one background job running every importer in dependency order.
    ///
    /// With the file source only importers that have a file area take part. Either all
    /// of them start or, when one is still running, none.
    ///
    /// # Returns
    /// - `Ok(Vec<ImportJobStatus>)` - Status of every importer
    /// - `Err(ImportError::AlreadyRunning)` - One of the importers is still running
    pub async fn start_all(
        &self,
        request: ImportRequest,
    ) -> Result<Vec<ImportJobStatus>, AppError> {
        let kinds = kinds_for(request.source);
        self.jobs.begin_all(&kinds).await?;

        let service = self.clone();
        tokio::spawn(async move {
            for kind in kinds {
                service.execute_supervised(kind, request).await;
            }
        });

        Ok(self.jobs.snapshot().await)
    }

    /// Runs `kind` to completion under the same guard as `start`.
    #[cfg(test)]
    pub async fn run_now(
        &self,
        kind: ImportKind,
        request: ImportRequest,
    ) -> Result<ImportReport, AppError> {
        self.jobs.begin(kind).await?;

        self.execute(kind, request).await
    }

    pub async fn status(&self) -> Vec<ImportJobStatus> {
        self.jobs.snapshot().await
    }

    /// Runs `execute` in its own task; a panic marks the job failed instead of leaving
    /// it running.
    async fn execute_supervised(&self, kind: ImportKind, request: ImportRequest) {
        let service = self.clone();
        let run = async move { service.execute(kind, request).await };

        self.jobs.supervise(kind, run).await;
    }

    async fn execute(
        &self,
        kind: ImportKind,
        request: ImportRequest,
    ) -> Result<ImportReport, AppError> {
        let result = run_importer(&self.ctx, kind, request).await;

        if let Err(err) = &result {
            tracing::error!("Import '{}' failed: {}", kind, err);
        }
        self.jobs.finish(kind, &result).await;

        result
    }
}

/// Importers taking part in a full run from `source`.
pub fn kinds_for(source: ImportSource) -> Vec<ImportKind> {
    ImportKind::ALL
        .into_iter()
        .filter(|kind| source == ImportSource::Api || kind.file_area().is_some())
        .collect()
}
