use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::password_reset::PasswordResetRepository,
    error::{import::ImportError, AppError},
    model::import::ImportRequest,
    service::import::ImportService,
};

/// Hourly schedule of the reset token cleanup.
const RESET_CLEANUP_SCHEDULE: &str = "0 0 * * * *";

/// Starts the scheduler.
///
/// Always removes expired and redeemed password reset tokens every hour. When
/// `import_schedule` is set, a full import from the configured source also runs on
/// that cron expression; a run that finds an importer still busy is skipped.
///
/// # Arguments
/// - `db` - Database connection
/// - `imports` - Import service shared with the HTTP handlers
/// - `import_schedule` - Six-field cron expression of the scheduled import, if any
pub async fn start_scheduler(
    db: DatabaseConnection,
    imports: ImportService,
    import_schedule: Option<String>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cleanup_db = db.clone();
    let cleanup = Job::new_async(RESET_CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let db = cleanup_db.clone();

        Box::pin(async move {
            match PasswordResetRepository::new(&db).delete_stale(Utc::now()).await {
                Ok(0) => {}
                Ok(deleted) => tracing::debug!("Removed {} stale password reset tokens", deleted),
                Err(e) => tracing::error!("Error removing stale password reset tokens: {}", e),
            }
        })
    })?;
    scheduler.add(cleanup).await?;

    if let Some(schedule) = import_schedule {
        let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
            let imports = imports.clone();

            Box::pin(async move {
                run_scheduled_import(&imports).await;
            })
        })?;
        scheduler.add(job).await?;

        tracing::info!("Scheduled imports on '{}'", schedule);
    }

    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(())
}

/// Starts a full import from the configured source.
async fn run_scheduled_import(imports: &ImportService) {
    let request = ImportRequest {
        source: imports.settings().source,
        ..Default::default()
    };

    match imports.start_all(request).await {
        Ok(_) => tracing::info!("Scheduled import started"),
        Err(AppError::ImportErr(ImportError::AlreadyRunning(kind))) => {
            tracing::warn!("Skipping scheduled import: '{}' is still running", kind)
        }
        Err(e) => tracing::error!("Error starting scheduled import: {}", e),
    }
}
