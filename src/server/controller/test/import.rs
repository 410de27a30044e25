use super::*;

/// Tests that refreshing an importer that is still running is rejected.
///
/// Expected: 409 Conflict, job stays running
#[tokio::test]
async fn refresh_of_running_importer_conflicts() {
    let test = TestBuilder::new()
        .with_reference_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await.unwrap();
    let app = TestApp::new(db).await;
    let token = app.token_for(admin);

    app.jobs.begin(ImportKind::Countries).await.unwrap();

    let response = app
        .json(Method::POST, "/api/v1/countries/refresh", Some(&token), None)
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_of(response).await["error"],
        "Import 'countries' is already running"
    );
}

/// Tests that a full refresh conflicts when any importer is running.
///
/// Expected: 409 Conflict
#[tokio::test]
async fn refresh_all_conflicts_with_running_importer() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await.unwrap();
    let app = TestApp::new(db).await;
    let token = app.token_for(admin);

    app.jobs.begin(ImportKind::Odds).await.unwrap();

    let response = app
        .json(Method::POST, "/api/v1/imports/refresh", Some(&token), None)
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Tests that the import status lists every importer and needs an admin.
///
/// Expected: 403 for a user; 200 with 19 entries, the running one first
#[tokio::test]
async fn lists_import_status() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let admin = factory::create_admin(db).await.unwrap();
    let app = TestApp::new(db).await;
    let user_token = app.token_for(user);
    let admin_token = app.token_for(admin);

    app.jobs.begin(ImportKind::Countries).await.unwrap();

    let forbidden = app
        .json(Method::GET, "/api/v1/imports", Some(&user_token), None)
        .await;
    let listed = app
        .json(Method::GET, "/api/v1/imports", Some(&admin_token), None)
        .await;

    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    assert_eq!(listed.status(), StatusCode::OK);
    let body = body_of(listed).await;
    let jobs = body.as_array().unwrap();
    assert_eq!(jobs.len(), ImportKind::ALL.len());
    assert_eq!(jobs[0]["importer"], "countries");
    assert_eq!(jobs[0]["state"], "running");
    assert_eq!(jobs[1]["state"], "idle");
}
