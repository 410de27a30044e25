use super::*;

/// Tests that any authenticated user can read their own account.
///
/// Expected: 200 with the account, no password hash
#[tokio::test]
async fn me_returns_caller() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = TestApp::new(db).await;
    let token = app.token_for(user.clone());

    let response = app
        .json(Method::GET, "/api/v1/users/me", Some(&token), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_of(response).await;
    assert_eq!(body["email"], user.email.as_str());
    assert_eq!(body["role"], "user");
    assert!(body.get("password_hash").is_none());
}

/// Tests that the user list is restricted to admins.
///
/// Expected: 401 without token, 403 for a user, 200 for an admin
#[tokio::test]
async fn user_list_requires_admin() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let admin = factory::create_admin(db).await.unwrap();
    let app = TestApp::new(db).await;
    let user_token = app.token_for(user);
    let admin_token = app.token_for(admin);

    let anonymous = app.json(Method::GET, "/api/v1/users", None, None).await;
    let forbidden = app
        .json(Method::GET, "/api/v1/users", Some(&user_token), None)
        .await;
    let allowed = app
        .json(Method::GET, "/api/v1/users?limit=1", Some(&admin_token), None)
        .await;

    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    assert_eq!(allowed.status(), StatusCode::OK);
    assert_eq!(body_of(allowed).await.as_array().unwrap().len(), 1);
}

/// Tests admin user management: create, reject a short password, refuse self-delete.
///
/// Expected: 201, 400 and 400
#[tokio::test]
async fn admin_manages_users() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await.unwrap();
    let app = TestApp::new(db).await;
    let token = app.token_for(admin.clone());

    let created = app
        .json(
            Method::POST,
            "/api/v1/users",
            Some(&token),
            Some(json!({ "email": "analyst@example.com", "password": "long enough" })),
        )
        .await;
    let invalid = app
        .json(
            Method::POST,
            "/api/v1/users",
            Some(&token),
            Some(json!({ "email": "short@example.com", "password": "short" })),
        )
        .await;
    let self_delete = app
        .json(
            Method::DELETE,
            &format!("/api/v1/users/{}", admin.id),
            Some(&token),
            None,
        )
        .await;

    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(body_of(created).await["role"], "user");
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    assert_eq!(self_delete.status(), StatusCode::BAD_REQUEST);
}
