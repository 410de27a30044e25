use super::*;
use crate::server::{
    model::import::{ImportRequest, ImportSource, JobState},
    service::import::{jobs::ImportJobs, ImportContext, ImportService, ImportSettings},
};

fn settings(files_dir: &std::path::Path) -> ImportSettings {
    ImportSettings {
        api_url: "http://127.0.0.1:9".to_string(),
        api_key: None,
        files_dir: files_dir.to_path_buf(),
        leagues: vec![39],
        season: Some(2023),
        source: ImportSource::File,
    }
}

fn file_request() -> ImportRequest {
    ImportRequest {
        source: ImportSource::File,
        ..Default::default()
    }
}

/// Tests a full file-sourced run through the job registry.
///
/// Expected: the fixture export is imported and the job ends as succeeded with its report
#[tokio::test]
async fn runs_fixture_import_from_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    LeagueFactory::new(db).api_league_id(39).build().await?;
    factory::create_team_with_api_id(db, 33).await?;
    factory::create_team_with_api_id(db, 34).await?;

    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("fixtures")).unwrap();
    std::fs::write(
        dir.path().join("fixtures").join("2023.json"),
        json!({"response": [fixture_record(1001, 39, 33, 34, "FT")]}).to_string(),
    )
    .unwrap();

    let ctx = ImportContext::new(db.clone(), reqwest::Client::new(), settings(dir.path()));
    let jobs = ImportJobs::new();
    let service = ImportService::new(ctx, jobs.clone());

    let report = service
        .run_now(ImportKind::Fixtures, file_request())
        .await?;

    assert_eq!(report.created, 1);
    let status = jobs.status(ImportKind::Fixtures).await;
    assert_eq!(status.state, JobState::Succeeded);
    assert_eq!(status.last_report, Some(report));

    Ok(())
}

/// Tests that starting an importer that is still running is rejected.
///
/// Expected: Err(AlreadyRunning), which maps to 409
#[tokio::test]
async fn rejects_refresh_of_running_importer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let ctx = ImportContext::new(db.clone(), reqwest::Client::new(), settings(dir.path()));
    let jobs = ImportJobs::new();
    let service = ImportService::new(ctx, jobs.clone());

    jobs.begin(ImportKind::Fixtures).await?;
    let result = service.start(ImportKind::Fixtures, file_request()).await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::AlreadyRunning(
            ImportKind::Fixtures
        )))
    ));

    Ok(())
}

/// Tests that the file source is refused for importers without a file area.
///
/// Expected: job failed with the unsupported-source error
#[tokio::test]
async fn file_source_unsupported_for_countries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let ctx = ImportContext::new(db.clone(), reqwest::Client::new(), settings(dir.path()));
    let jobs = ImportJobs::new();
    let service = ImportService::new(ctx, jobs.clone());

    let result = service
        .run_now(ImportKind::Countries, file_request())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::FileSourceUnsupported(
            ImportKind::Countries
        )))
    ));
    assert_eq!(
        jobs.status(ImportKind::Countries).await.state,
        JobState::Failed
    );

    Ok(())
}

/// Tests that the API source without a key fails before any request.
///
/// Expected: Err(MissingApiKey)
#[tokio::test]
async fn api_source_requires_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let ctx = ImportContext::new(db.clone(), reqwest::Client::new(), settings(dir.path()));
    let service = ImportService::new(ctx, ImportJobs::new());

    let result = service
        .run_now(ImportKind::Countries, ImportRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::MissingApiKey))
    ));

    Ok(())
}
