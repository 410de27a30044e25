//! Registry of import job status.

use std::{collections::HashMap, future::Future, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::server::{
    error::{import::ImportError, internal::InternalError, AppError},
    model::import::{ImportJobStatus, ImportKind, ImportReport, JobState},
};

/// Per-importer job status shared between the HTTP handlers, the scheduler and the
/// spawned jobs.
///
/// `begin` is the only way to move an importer into `Running` and refuses to do so
/// while it already is, which serializes runs of the same importer.
#[derive(Clone, Default)]
pub struct ImportJobs {
    jobs: Arc<RwLock<HashMap<ImportKind, ImportJobStatus>>>,
}

impl ImportJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `kind` as running.
    ///
    /// # Returns
    /// - `Ok(())` - The job may start
    /// - `Err(ImportError::AlreadyRunning)` - A job for `kind` is still running
    pub async fn begin(&self, kind: ImportKind) -> Result<(), ImportError> {
        self.begin_all(&[kind]).await
    }

    /// Marks all of `kinds` as running, or none of them.
    ///
    /// # Returns
    /// - `Ok(())` - All jobs may start
    /// - `Err(ImportError::AlreadyRunning)` - The first of `kinds` that is still running
    pub async fn begin_all(&self, kinds: &[ImportKind]) -> Result<(), ImportError> {
        let mut jobs = self.jobs.write().await;

        if let Some(running) = kinds.iter().find(|kind| {
            jobs.get(kind)
                .is_some_and(|status| status.state == JobState::Running)
        }) {
            return Err(ImportError::AlreadyRunning(*running));
        }

        let now = Utc::now();
        for kind in kinds {
            let status = jobs
                .entry(*kind)
                .or_insert_with(|| ImportJobStatus::idle(*kind));
            status.state = JobState::Running;
            status.started_at = Some(now);
            status.finished_at = None;
        }

        Ok(())
    }

    /// Records the outcome of a job started with `begin`.
    ///
    /// A failure keeps the report of the last successful run.
    pub async fn finish(&self, kind: ImportKind, result: &Result<ImportReport, AppError>) {
        let mut jobs = self.jobs.write().await;
        let status = jobs
            .entry(kind)
            .or_insert_with(|| ImportJobStatus::idle(kind));

        status.finished_at = Some(Utc::now());
        match result {
            Ok(report) => {
                status.state = JobState::Succeeded;
                status.last_report = Some(report.clone());
                status.last_error = None;
            }
            Err(err) => {
                status.state = JobState::Failed;
                status.last_error = Some(err.to_string());
            }
        }
    }

    /// Awaits `run` in a separate task and records a failure for `kind` if it panics.
    ///
    /// `run` is expected to call `finish` itself on completion.
    pub async fn supervise<F>(&self, kind: ImportKind, run: F)
    where
        F: Future<Output = Result<ImportReport, AppError>> + Send + 'static,
    {
        if let Err(err) = tokio::spawn(run).await {
            tracing::error!("Import '{}' panicked: {}", kind, err);
            self.finish(kind, &Err(InternalError::TaskJoin(err).into()))
                .await;
        }
    }

    pub async fn status(&self, kind: ImportKind) -> ImportJobStatus {
        self.jobs
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| ImportJobStatus::idle(kind))
    }

    /// Status of every importer in dependency order.
    pub async fn snapshot(&self) -> Vec<ImportJobStatus> {
        let jobs = self.jobs.read().await;

        ImportKind::ALL
            .iter()
            .map(|kind| {
                jobs.get(kind)
                    .cloned()
                    .unwrap_or_else(|| ImportJobStatus::idle(*kind))
            })
            .collect()
    }
}
