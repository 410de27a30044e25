use super::*;

fn login_form(username: &str, password: &str) -> Request<Body> {
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", username)
        .append_pair("password", password)
        .finish();

    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/login/access-token")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap()
}

/// Tests the form login with correct credentials.
///
/// Expected: 200 with a bearer token that is accepted by test-token
#[tokio::test]
async fn access_token_issues_bearer_token() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = TestApp::new(db).await;

    let response = app.send(login_form(&user.email, DEFAULT_PASSWORD)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_of(response).await;
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap();

    let response = app
        .json(Method::POST, "/api/v1/login/test-token", Some(token), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_of(response).await;
    assert_eq!(body["id"], user.id);
    assert!(body.get("password_hash").is_none());
}

/// Tests the form login with a wrong password.
///
/// Expected: 401 with the generic credentials message
#[tokio::test]
async fn access_token_rejects_wrong_password() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = TestApp::new(db).await;

    let response = app.send(login_form(&user.email, "wrong password")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_of(response).await["error"], "Incorrect email or password");
}

/// Tests the legacy authentication endpoint.
///
/// Expected: 201 with `accessToken` and the user, without the password hash
#[tokio::test]
async fn authentication_returns_token_and_user() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = TestApp::new(db).await;

    let response = app
        .json(
            Method::POST,
            "/authentication",
            None,
            Some(json!({
                "strategy": "local",
                "email": user.email,
                "password": DEFAULT_PASSWORD
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_of(response).await;
    assert!(body["accessToken"].is_string());
    assert_eq!(body["user"]["email"], user.email.as_str());
    assert!(!body.to_string().contains("password_hash"));
}

/// Tests that the legacy endpoint only accepts the local strategy.
///
/// Expected: 400
#[tokio::test]
async fn authentication_rejects_other_strategies() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db).await;

    let response = app
        .json(
            Method::POST,
            "/authentication",
            None,
            Some(json!({ "strategy": "jwt", "email": "a@example.com", "password": "x" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests that Google login answers 404 while it is not configured.
///
/// Expected: 404
#[tokio::test]
async fn google_login_is_disabled_without_config() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db).await;

    let response = app
        .json(Method::GET, "/api/v1/auth/google/login", None, None)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests a full recovery: request a link, then redeem a token twice.
///
/// Expected: recovery 200 for known and unknown emails, first reset 200, second 400
#[tokio::test]
async fn reset_token_is_redeemable_once() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = TestApp::new(db).await;

    for email in [user.email.as_str(), "nobody@example.com"] {
        let response = app
            .json(
                Method::POST,
                &format!("/api/v1/password-recovery/{}", email),
                None,
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let token = crate::server::util::token::generate_token(48);
    crate::server::data::password_reset::PasswordResetRepository::new(db)
        .create(
            user.id,
            crate::server::util::token::sha256_hex(&token),
            chrono::Utc::now() + chrono::Duration::minutes(5),
        )
        .await
        .unwrap();

    let reset = json!({ "token": token, "new_password": "a brand new password" });
    let first = app
        .json(Method::POST, "/api/v1/reset-password", None, Some(reset.clone()))
        .await;
    let second = app
        .json(Method::POST, "/api/v1/reset-password", None, Some(reset))
        .await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_of(second).await["error"],
        "Invalid token: expired or already used"
    );

    let response = app.send(login_form(&user.email, "a brand new password")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
