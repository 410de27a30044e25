use super::*;

/// Tests that resource reads need a token but no role.
///
/// Expected: 401 without token, 200 with the rows for a user
#[tokio::test]
async fn reads_require_authentication() {
    let test = TestBuilder::new()
        .with_reference_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_country_named(db, "Portugal").await.unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = TestApp::new(db).await;
    let token = app.token_for(user);

    let anonymous = app.json(Method::GET, "/api/v1/countries", None, None).await;
    let listed = app
        .json(Method::GET, "/api/v1/countries", Some(&token), None)
        .await;

    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(listed.status(), StatusCode::OK);
    let body = body_of(listed).await;
    assert_eq!(body[0]["name"], "Portugal");
}

/// Tests that writes are reserved to admins and go through the generic service.
///
/// Expected: 403 for a user; 201, 200, 200 and then 404 for an admin
#[tokio::test]
async fn writes_require_admin() {
    let test = TestBuilder::new()
        .with_reference_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let admin = factory::create_admin(db).await.unwrap();
    let app = TestApp::new(db).await;
    let user_token = app.token_for(user);
    let admin_token = app.token_for(admin);

    let forbidden = app
        .json(
            Method::POST,
            "/api/v1/countries",
            Some(&user_token),
            Some(json!({ "name": "Spain" })),
        )
        .await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let created = app
        .json(
            Method::POST,
            "/api/v1/countries",
            Some(&admin_token),
            Some(json!({ "name": "Spain" })),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_of(created).await["id"].as_i64().unwrap();
    let item = format!("/api/v1/countries/{}", id);

    let patched = app
        .json(
            Method::PATCH,
            &item,
            Some(&admin_token),
            Some(json!({ "code": "ES" })),
        )
        .await;
    assert_eq!(patched.status(), StatusCode::OK);
    assert_eq!(body_of(patched).await["code"], "ES");

    let removed = app
        .json(Method::DELETE, &item, Some(&admin_token), None)
        .await;
    assert_eq!(removed.status(), StatusCode::OK);

    let missing = app.json(Method::GET, &item, Some(&admin_token), None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_of(missing).await["error"], "Country not found");
}

/// Tests the fallback for unknown routes.
///
/// Expected: 404 with a JSON error body
#[tokio::test]
async fn unknown_route_is_json_404() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db).await;

    let response = app.json(Method::GET, "/api/v1/nothing-here", None, None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_of(response).await["error"], "Not found");
}

/// Tests the health endpoint and the served OpenAPI document.
///
/// Expected: 200 for both, document lists the resource paths
#[tokio::test]
async fn serves_health_and_openapi() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db).await;

    let health = app.json(Method::GET, "/health", None, None).await;
    let docs = app.json(Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_of(health).await["status"], "ok");
    assert_eq!(docs.status(), StatusCode::OK);
    assert!(body_of(docs).await["paths"]["/api/v1/player-top-stats"].is_object());
}

/// Tests that a path segment that is not an id answers with the JSON error body.
///
/// Expected: 400 with an `error` message naming the bad segment
#[tokio::test]
async fn rejects_non_numeric_id_as_json() {
    let test = TestBuilder::new()
        .with_reference_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = TestApp::new(db).await;
    let token = app.token_for(user);

    let response = app
        .json(Method::GET, "/api/v1/countries/abc", Some(&token), None)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let body = body_of(response).await;
    assert!(body["error"].as_str().unwrap().contains("abc"));
}

/// Tests that malformed JSON bodies and query strings answer with the JSON error body.
///
/// Expected: 400 for broken JSON syntax, 400 for a non-numeric `limit`, both JSON
#[tokio::test]
async fn rejects_malformed_body_and_query_as_json() {
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

    let broken_body = app
        .send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/countries")
                .header(AUTHORIZATION, format!("Bearer {}", token))
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "Spain""#))
                .unwrap(),
        )
        .await;

    assert_eq!(broken_body.status(), StatusCode::BAD_REQUEST);
    assert!(body_of(broken_body).await["error"].is_string());

    let broken_query = app
        .json(Method::GET, "/api/v1/countries?limit=abc", Some(&token), None)
        .await;

    assert_eq!(broken_query.status(), StatusCode::BAD_REQUEST);
    assert!(body_of(broken_query).await["error"].is_string());
}
